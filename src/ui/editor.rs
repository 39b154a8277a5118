//! Main text and note panes

use std::sync::Arc;

use egui::Color32;
use notebook::core::config::{Appearance, FontStyle, Rgb};
use notebook::core::document::Document;

/// Text editing panes for the open document
pub struct EditorPanel;

impl EditorPanel {
    /// Show the main text pane with its line-number gutter
    ///
    /// Returns the pane's id while it has keyboard focus.
    pub fn show_main(
        ui: &mut egui::Ui,
        doc: &mut Document,
        appearance: &Appearance,
    ) -> Option<egui::Id> {
        let format = text_format(ui, appearance);
        let mut gutter_format = format.clone();
        gutter_format.color = ui.visuals().weak_text_color();
        gutter_format.italics = false;
        gutter_format.underline = egui::Stroke::NONE;

        egui::ScrollArea::both()
            .id_salt("main_scroll")
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let lines = doc.main_text.split('\n').count();
                    let numbers = (1..=lines)
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join("\n");
                    ui.label(egui::text::LayoutJob::single_section(numbers, gutter_format));

                    // The main pane does not wrap
                    let mut layouter = layouter(format, false);
                    let response = egui::TextEdit::multiline(&mut doc.main_text)
                        .id_salt("main_text")
                        .background_color(color(appearance.background))
                        .desired_width(f32::INFINITY)
                        .desired_rows(30)
                        .layouter(&mut layouter)
                        .show(ui);

                    if response.response.changed() {
                        doc.modified = true;
                    }
                    focused_id(&response.response)
                })
                .inner
            })
            .inner
    }

    /// Show the note pane, returning its id while it has keyboard focus
    pub fn show_note(
        ui: &mut egui::Ui,
        doc: &mut Document,
        appearance: &Appearance,
    ) -> Option<egui::Id> {
        let format = text_format(ui, appearance);

        egui::ScrollArea::vertical()
            .id_salt("note_scroll")
            .show(ui, |ui| {
                let mut layouter = layouter(format, true);
                let response = egui::TextEdit::multiline(&mut doc.note_text)
                    .id_salt("note_text")
                    .hint_text("Note")
                    .background_color(color(appearance.background))
                    .desired_width(f32::INFINITY)
                    .desired_rows(5)
                    .layouter(&mut layouter)
                    .show(ui);

                if response.response.changed() {
                    doc.modified = true;
                }
                focused_id(&response.response)
            })
            .inner
    }
}

fn focused_id(response: &egui::Response) -> Option<egui::Id> {
    response.has_focus().then_some(response.id)
}

/// Convert a stored color to an egui color
pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Map a font family name onto the closest built-in egui family
fn font_family(name: &str) -> egui::FontFamily {
    let name = name.to_ascii_lowercase();
    if ["mono", "courier", "consol", "menlo", "code"]
        .iter()
        .any(|hint| name.contains(hint))
    {
        egui::FontFamily::Monospace
    } else {
        egui::FontFamily::Proportional
    }
}

/// Text format for both panes
///
/// egui ships without a bold face, so bold is drawn in the strong text color.
fn text_format(ui: &egui::Ui, appearance: &Appearance) -> egui::TextFormat {
    let font_id = egui::FontId::new(
        f32::from(appearance.font_size),
        font_family(&appearance.font_family),
    );
    let mut format = egui::TextFormat {
        font_id,
        color: color(appearance.foreground),
        ..Default::default()
    };
    match appearance.font_style {
        FontStyle::Normal => {}
        FontStyle::Bold => format.color = ui.visuals().strong_text_color(),
        FontStyle::Italic => format.italics = true,
        FontStyle::Underline => format.underline = egui::Stroke::new(1.0, format.color),
    }
    format
}

fn layouter(
    format: egui::TextFormat,
    wrap: bool,
) -> impl FnMut(&egui::Ui, &dyn egui::TextBuffer, f32) -> Arc<egui::Galley> {
    move |ui: &egui::Ui, buf: &dyn egui::TextBuffer, wrap_width: f32| {
        let mut job =
            egui::text::LayoutJob::single_section(buf.as_str().to_owned(), format.clone());
        job.wrap.max_width = if wrap { wrap_width } else { f32::INFINITY };
        ui.fonts(|f| f.layout_job(job))
    }
}
