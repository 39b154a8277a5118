//! Application configuration management

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::EditorError;

/// Name of the history file inside the data directory
const HISTORY_FILE_NAME: &str = "history.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Font and color settings shared by both panes
    pub appearance: Appearance,
    /// Override for the history file location
    pub history_file: Option<PathBuf>,
}

/// Font and color settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size: u16,
    pub font_style: FontStyle,
    /// Pane background
    pub background: Rgb,
    /// Text color
    pub foreground: Rgb,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font_family: "Courier New".to_string(),
            font_size: 12,
            font_style: FontStyle::Normal,
            background: Rgb::new(0x28, 0x2a, 0x36),
            foreground: Rgb::new(0xf8, 0xf8, 0xf2),
        }
    }
}

/// Font weight/slant/decoration applied to the panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    Underline,
}

impl FromStr for FontStyle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "underline" => Ok(Self::Underline),
            _ => Err(EditorError::InvalidFont),
        }
    }
}

/// An opaque RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "notebook", "Notebook")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Location of the history file
    pub fn history_path(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join(HISTORY_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_parse() {
        assert_eq!("bold".parse::<FontStyle>().unwrap(), FontStyle::Bold);
        assert_eq!(" Italic ".parse::<FontStyle>().unwrap(), FontStyle::Italic);
        assert!(matches!(
            "heavy".parse::<FontStyle>(),
            Err(EditorError::InvalidFont)
        ));
    }

    #[test]
    fn test_rgb_hex() {
        let color: Rgb = "#282a36".parse().unwrap();
        assert_eq!(color, Rgb::new(0x28, 0x2a, 0x36));
        assert_eq!(color.to_string(), "#282a36");

        assert!("282a36".parse::<Rgb>().is_err());
        assert!("#28".parse::<Rgb>().is_err());
        assert!("#zz2a36".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = AppConfig::default();
        config.appearance.font_style = FontStyle::Underline;
        config.appearance.background = Rgb::new(1, 2, 3);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"#010203\""));
        assert!(json.contains("\"underline\""));

        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.appearance, config.appearance);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{ "appearance": { "font_size": 18 } }"#).unwrap();
        assert_eq!(parsed.appearance.font_size, 18);
        assert_eq!(parsed.appearance.font_family, "Courier New");
        assert!(parsed.history_file.is_none());
    }

    #[test]
    fn test_history_path_override() {
        let config = AppConfig {
            history_file: Some(PathBuf::from("/tmp/custom.json")),
            ..Default::default()
        };
        assert_eq!(config.history_path(), PathBuf::from("/tmp/custom.json"));
    }
}
