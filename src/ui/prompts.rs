//! In-window forms that answer the session's value prompts
//!
//! egui cannot block for input, so each form collects its values across
//! frames and is handed to the session as a [`Prompts`] source once the
//! user confirms.

use notebook::core::config::{Appearance, Rgb};
use notebook::session::{Prompts, FONT_TITLE, SIZE_TITLE, STYLE_TITLE};

/// Outcome of showing a form for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Pending,
    Submit,
    Cancel,
}

/// Font family, size, and style form
#[derive(Debug, Clone)]
pub struct FontForm {
    family: String,
    size: i64,
    style: String,
}

impl FontForm {
    /// Start from the current appearance
    pub fn new(appearance: &Appearance) -> Self {
        Self {
            family: appearance.font_family.clone(),
            size: i64::from(appearance.font_size),
            style: format!("{:?}", appearance.font_style).to_lowercase(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> FormAction {
        let mut action = FormAction::Pending;

        egui::Window::new("Change Font")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("font_form").num_columns(2).show(ui, |ui| {
                    ui.label("Enter Font Name");
                    ui.text_edit_singleline(&mut self.family);
                    ui.end_row();

                    ui.label("Enter Font Size");
                    ui.add(egui::DragValue::new(&mut self.size));
                    ui.end_row();

                    ui.label("Enter Font Style");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.style)
                            .hint_text("normal, bold, italic, underline"),
                    );
                    ui.end_row();
                });

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = FormAction::Submit;
                    }
                    if ui.button("Cancel").clicked() {
                        action = FormAction::Cancel;
                    }
                });
            });

        action
    }
}

impl Prompts for FontForm {
    fn prompt_string(&mut self, title: &str, _prompt: &str) -> Option<String> {
        match title {
            FONT_TITLE => Some(self.family.clone()),
            STYLE_TITLE => Some(self.style.clone()),
            _ => None,
        }
    }

    fn prompt_int(&mut self, title: &str, _prompt: &str) -> Option<i64> {
        (title == SIZE_TITLE).then_some(self.size)
    }

    fn pick_color(&mut self) -> Option<Rgb> {
        None
    }
}

/// Background color picker
#[derive(Debug, Clone)]
pub struct ColorForm {
    rgb: [u8; 3],
}

impl ColorForm {
    pub fn new(current: Rgb) -> Self {
        Self {
            rgb: [current.r, current.g, current.b],
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> FormAction {
        let mut action = FormAction::Pending;

        egui::Window::new("Choose color")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Background");
                    ui.color_edit_button_srgb(&mut self.rgb);
                });

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = FormAction::Submit;
                    }
                    if ui.button("Cancel").clicked() {
                        action = FormAction::Cancel;
                    }
                });
            });

        action
    }
}

impl Prompts for ColorForm {
    fn prompt_string(&mut self, _title: &str, _prompt: &str) -> Option<String> {
        None
    }

    fn prompt_int(&mut self, _title: &str, _prompt: &str) -> Option<i64> {
        None
    }

    fn pick_color(&mut self) -> Option<Rgb> {
        let [r, g, b] = self.rgb;
        Some(Rgb::new(r, g, b))
    }
}
