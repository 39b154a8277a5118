//! Editor session: the command interface the presentation layer drives
//!
//! All state lives in [`EditorSession`]. The presentation layer supplies
//! dialogs through [`FileDialogs`] and [`Prompts`] and renders the
//! [`DocumentView`] each command returns.

use std::path::{Path, PathBuf};

use crate::core::config::{Appearance, FontStyle, Rgb};
use crate::core::document::Document;
use crate::core::error::{EditorError, Result};
use crate::core::history::HistoryStore;

/// Name suggested when saving an untitled document
pub const DEFAULT_FILE_NAME: &str = "Untitled.txt";

const APP_TITLE: &str = "Notebook";

/// Prompt titles used by [`EditorSession::change_font`]
pub const FONT_TITLE: &str = "Font";
pub const SIZE_TITLE: &str = "Size";
pub const STYLE_TITLE: &str = "Style";

/// Largest accepted font size
const MAX_FONT_SIZE: i64 = 512;

/// File choosers and error reporting provided by the presentation layer
pub trait FileDialogs {
    /// Ask for an existing file to open
    fn choose_file_to_open(&mut self) -> Option<PathBuf>;

    /// Ask for a destination, suggesting `default_name`
    fn choose_file_to_save(&mut self, default_name: &str) -> Option<PathBuf>;

    /// Show an error to the user
    fn show_error(&mut self, message: &str);
}

/// Value prompts provided by the presentation layer
pub trait Prompts {
    fn prompt_string(&mut self, title: &str, prompt: &str) -> Option<String>;

    fn prompt_int(&mut self, title: &str, prompt: &str) -> Option<i64>;

    fn pick_color(&mut self) -> Option<Rgb>;
}

/// Snapshot of the document handed back for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub main_text: String,
    pub note_text: String,
    pub path: Option<PathBuf>,
}

impl From<&Document> for DocumentView {
    fn from(doc: &Document) -> Self {
        Self {
            main_text: doc.main_text.clone(),
            note_text: doc.note_text.clone(),
            path: doc.path.clone(),
        }
    }
}

/// Show `err` through `dialogs` unless the user cancelled
pub fn report_error(dialogs: &mut dyn FileDialogs, err: &EditorError) {
    if err.is_cancelled() {
        return;
    }
    tracing::error!("{}", err);
    dialogs.show_error(&err.to_string());
}

/// The open document, the file history, and the current appearance
#[derive(Debug)]
pub struct EditorSession {
    document: Document,
    history: HistoryStore,
    appearance: Appearance,
}

impl EditorSession {
    pub fn new(history: HistoryStore, appearance: Appearance) -> Self {
        Self {
            document: Document::new(),
            history,
            appearance,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn view(&self) -> DocumentView {
        DocumentView::from(&self.document)
    }

    /// Title for the main window
    pub fn window_title(&self) -> String {
        match &self.document.path {
            Some(path) => format!("{} - {}", APP_TITLE, path.display()),
            None => APP_TITLE.to_string(),
        }
    }

    /// Discard the current document and start an untitled one
    pub fn new_document(&mut self) -> DocumentView {
        self.document = Document::new();
        self.view()
    }

    /// Open `path`, replacing the current document
    ///
    /// On failure the current document is left untouched.
    pub fn open_document(&mut self, path: &Path) -> Result<DocumentView> {
        self.document = Document::open(path)?;
        self.record(path);
        Ok(self.view())
    }

    /// Ask for a file, then open it
    pub fn open_document_with(&mut self, dialogs: &mut dyn FileDialogs) -> Result<DocumentView> {
        let result = dialogs
            .choose_file_to_open()
            .ok_or(EditorError::Cancelled)
            .and_then(|path| self.open_document(&path));
        if let Err(ref e) = result {
            report_error(dialogs, e);
        }
        result
    }

    /// Save to the current path, asking for one if the document is untitled
    pub fn save_document(&mut self, dialogs: &mut dyn FileDialogs) -> Result<DocumentView> {
        let Some(path) = self.document.path.clone() else {
            return self.save_document_as_with(dialogs);
        };

        let result = self.save_document_as(&path);
        if let Err(ref e) = result {
            report_error(dialogs, e);
        }
        result
    }

    /// Save to `path` and adopt it as the document's path
    pub fn save_document_as(&mut self, path: &Path) -> Result<DocumentView> {
        self.document.save_as(path)?;
        self.record(path);
        Ok(self.view())
    }

    /// Ask for a destination, then save there
    pub fn save_document_as_with(
        &mut self,
        dialogs: &mut dyn FileDialogs,
    ) -> Result<DocumentView> {
        let result = dialogs
            .choose_file_to_save(DEFAULT_FILE_NAME)
            .ok_or(EditorError::Cancelled)
            .and_then(|path| self.save_document_as(&path));
        if let Err(ref e) = result {
            report_error(dialogs, e);
        }
        result
    }

    /// Validate and apply a font to both panes
    pub fn apply_font(&mut self, family: &str, size: i64, style: &str) -> Result<&Appearance> {
        let family = family.trim();
        if family.is_empty() || !(1..=MAX_FONT_SIZE).contains(&size) {
            return Err(EditorError::InvalidFont);
        }
        let style: FontStyle = style.parse()?;
        let size = u16::try_from(size).map_err(|_| EditorError::InvalidFont)?;

        self.appearance.font_family = family.to_string();
        self.appearance.font_size = size;
        self.appearance.font_style = style;
        tracing::info!("Font changed to {} {} {:?}", family, size, style);
        Ok(&self.appearance)
    }

    /// Prompt for family, size, and style, then apply them
    ///
    /// Dismissing any prompt cancels the whole change.
    pub fn change_font(&mut self, prompts: &mut dyn Prompts) -> Result<&Appearance> {
        let family = prompts.prompt_string(FONT_TITLE, "Enter Font Name");
        let size = prompts.prompt_int(SIZE_TITLE, "Enter Font Size");
        let style = prompts.prompt_string(
            STYLE_TITLE,
            "Enter Font Style (normal, bold, italic, underline)",
        );

        match (family, size, style) {
            (Some(family), Some(size), Some(style)) => self.apply_font(&family, size, &style),
            _ => Err(EditorError::Cancelled),
        }
    }

    pub fn set_background(&mut self, color: Rgb) -> &Appearance {
        self.appearance.background = color;
        tracing::info!("Background changed to {}", color);
        &self.appearance
    }

    /// Pick a background color; dismissing the picker keeps the current one
    pub fn change_background(&mut self, prompts: &mut dyn Prompts) -> Result<&Appearance> {
        let color = prompts.pick_color().ok_or(EditorError::Cancelled)?;
        Ok(self.set_background(color))
    }

    /// Add `path` to the history, logging rather than returning persist failures
    ///
    /// Paths that are not valid UTF-8 are skipped, since the JSON history
    /// could not reproduce them exactly.
    fn record(&mut self, path: &Path) {
        let Some(entry) = path.to_str() else {
            tracing::warn!("Not recording non UTF-8 path in history: {}", path.display());
            return;
        };
        if let Err(e) = self.history.add(entry) {
            tracing::warn!("Failed to update history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::fs;

    use super::*;
    use tempfile::{tempdir, TempDir};

    /// Dialogs answering from pre-scripted responses
    #[derive(Default)]
    struct ScriptedDialogs {
        open: Option<PathBuf>,
        save: Option<PathBuf>,
        save_prompts: Vec<String>,
        errors: Vec<String>,
        strings: VecDeque<Option<String>>,
        ints: VecDeque<Option<i64>>,
        color: Option<Rgb>,
    }

    impl FileDialogs for ScriptedDialogs {
        fn choose_file_to_open(&mut self) -> Option<PathBuf> {
            self.open.take()
        }

        fn choose_file_to_save(&mut self, default_name: &str) -> Option<PathBuf> {
            self.save_prompts.push(default_name.to_string());
            self.save.take()
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    impl Prompts for ScriptedDialogs {
        fn prompt_string(&mut self, _title: &str, _prompt: &str) -> Option<String> {
            self.strings.pop_front().flatten()
        }

        fn prompt_int(&mut self, _title: &str, _prompt: &str) -> Option<i64> {
            self.ints.pop_front().flatten()
        }

        fn pick_color(&mut self) -> Option<Rgb> {
            self.color.take()
        }
    }

    fn session() -> (TempDir, EditorSession) {
        let dir = tempdir().unwrap();
        let history = HistoryStore::new(dir.path().join("history.json"));
        (dir, EditorSession::new(history, Appearance::default()))
    }

    #[test]
    fn test_open_document_records_history() {
        let (dir, mut session) = session();
        let path = dir.path().join("a.txt");
        fs::write(&path, "Hello\n---NOTE---\na reminder").unwrap();

        let view = session.open_document(&path).unwrap();
        assert_eq!(view.main_text, "Hello");
        assert_eq!(view.note_text, "a reminder");
        assert_eq!(view.path.as_deref(), Some(path.as_path()));

        session.open_document(&path).unwrap();
        assert_eq!(session.history().entries(), [path.display().to_string()]);
        assert_eq!(
            session.window_title(),
            format!("Notebook - {}", path.display())
        );
    }

    #[test]
    fn test_failed_open_keeps_document() {
        let (dir, mut session) = session();
        session.document_mut().set_main_text("draft".to_string());

        let mut dialogs = ScriptedDialogs {
            open: Some(dir.path().join("missing.txt")),
            ..Default::default()
        };
        let err = session.open_document_with(&mut dialogs).unwrap_err();

        assert!(matches!(err, EditorError::Read { .. }));
        assert_eq!(dialogs.errors.len(), 1);
        assert_eq!(session.document().main_text, "draft");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_cancelled_open_is_silent() {
        let (_dir, mut session) = session();
        let mut dialogs = ScriptedDialogs::default();

        let err = session.open_document_with(&mut dialogs).unwrap_err();
        assert!(err.is_cancelled());
        assert!(dialogs.errors.is_empty());
    }

    #[test]
    fn test_save_untitled_prompts_for_path() {
        let (dir, mut session) = session();
        let path = dir.path().join("saved.txt");
        session.document_mut().set_main_text("Hello".to_string());
        session.document_mut().set_note_text("a reminder".to_string());

        let mut dialogs = ScriptedDialogs {
            save: Some(path.clone()),
            ..Default::default()
        };
        let view = session.save_document(&mut dialogs).unwrap();

        assert_eq!(dialogs.save_prompts, [DEFAULT_FILE_NAME.to_string()]);
        assert_eq!(view.path.as_deref(), Some(path.as_path()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Hello\n---NOTE---\na reminder"
        );
        assert!(session.history().contains(&path.display().to_string()));

        // Second save reuses the path without prompting
        session.document_mut().set_note_text(String::new());
        session.save_document(&mut dialogs).unwrap();
        assert_eq!(dialogs.save_prompts.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_cancelled_save_writes_nothing() {
        let (dir, mut session) = session();
        session.document_mut().set_main_text("unsaved".to_string());
        let mut dialogs = ScriptedDialogs::default();

        let err = session.save_document(&mut dialogs).unwrap_err();
        assert!(err.is_cancelled());
        assert!(dialogs.errors.is_empty());
        assert!(session.document().path.is_none());
        assert!(!dir.path().join("history.json").exists());
    }

    #[test]
    fn test_failed_save_as_keeps_previous_path() {
        let (dir, mut session) = session();
        let good = dir.path().join("good.txt");
        session.save_document_as(&good).unwrap();

        let mut dialogs = ScriptedDialogs {
            save: Some(dir.path().join("no-such-dir").join("bad.txt")),
            ..Default::default()
        };
        let err = session.save_document_as_with(&mut dialogs).unwrap_err();

        assert!(matches!(err, EditorError::Write { .. }));
        assert_eq!(dialogs.errors.len(), 1);
        assert_eq!(session.document().path.as_deref(), Some(good.as_path()));
    }

    #[test]
    fn test_new_document_clears_state() {
        let (dir, mut session) = session();
        session.save_document_as(&dir.path().join("x.txt")).unwrap();
        session.document_mut().set_note_text("note".to_string());

        let view = session.new_document();
        assert_eq!(
            view,
            DocumentView {
                main_text: String::new(),
                note_text: String::new(),
                path: None,
            }
        );
        assert_eq!(session.window_title(), "Notebook");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_change_font() {
        let (_dir, mut session) = session();
        let mut prompts = ScriptedDialogs {
            strings: VecDeque::from([Some("Fira Code".to_string()), Some("italic".to_string())]),
            ints: VecDeque::from([Some(16)]),
            ..Default::default()
        };

        let appearance = session.change_font(&mut prompts).unwrap();
        assert_eq!(appearance.font_family, "Fira Code");
        assert_eq!(appearance.font_size, 16);
        assert_eq!(appearance.font_style, FontStyle::Italic);
    }

    #[test]
    fn test_change_font_cancelled_or_invalid() {
        let (_dir, mut session) = session();
        let before = session.appearance().clone();

        let mut cancelled = ScriptedDialogs {
            strings: VecDeque::from([Some("Arial".to_string()), Some("bold".to_string())]),
            ints: VecDeque::from([None]),
            ..Default::default()
        };
        assert!(session.change_font(&mut cancelled).unwrap_err().is_cancelled());

        let mut invalid = ScriptedDialogs {
            strings: VecDeque::from([Some("Arial".to_string()), Some("wavy".to_string())]),
            ints: VecDeque::from([Some(12)]),
            ..Default::default()
        };
        let err = session.change_font(&mut invalid).unwrap_err();
        assert_eq!(err.to_string(), "Invalid font name, size, or style");

        assert!(matches!(
            session.apply_font("Arial", 0, "normal"),
            Err(EditorError::InvalidFont)
        ));
        assert!(matches!(
            session.apply_font("  ", 12, "normal"),
            Err(EditorError::InvalidFont)
        ));
        assert_eq!(session.appearance(), &before);
    }

    #[test]
    fn test_history_failure_does_not_fail_open_or_save() {
        let dir = tempdir().unwrap();
        let history_dir = dir.path().join("history");
        fs::create_dir(&history_dir).unwrap();
        // Backed by a directory, so every persist fails
        let history = HistoryStore::new(history_dir);
        let mut session = EditorSession::new(history, Appearance::default());

        let source = dir.path().join("a.txt");
        fs::write(&source, "Hello\n---NOTE---\na reminder").unwrap();
        let view = session.open_document(&source).unwrap();
        assert_eq!(view.main_text, "Hello");
        assert_eq!(view.path.as_deref(), Some(source.as_path()));

        let target = dir.path().join("b.txt");
        let view = session.save_document_as(&target).unwrap();
        assert_eq!(view.path.as_deref(), Some(target.as_path()));
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "Hello\n---NOTE---\na reminder"
        );

        assert!(session.history().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_not_recorded() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (dir, mut session) = session();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));

        let view = session.save_document_as(&path).unwrap();
        assert_eq!(view.path.as_deref(), Some(path.as_path()));
        assert!(session.history().is_empty());

        session.open_document(&path).unwrap();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_change_background() {
        let (_dir, mut session) = session();
        let mut prompts = ScriptedDialogs::default();
        assert!(session.change_background(&mut prompts).unwrap_err().is_cancelled());
        assert_eq!(session.appearance().background, Appearance::default().background);

        prompts.color = Some(Rgb::new(0, 0, 0));
        let appearance = session.change_background(&mut prompts).unwrap();
        assert_eq!(appearance.background, Rgb::new(0, 0, 0));
    }
}
