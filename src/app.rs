//! Main application state and UI coordination

use std::path::Path;

use eframe::egui;
use notebook::core::config::AppConfig;
use notebook::core::error::EditorError;
use notebook::core::history::HistoryStore;
use notebook::session::{report_error, EditorSession};

use crate::ui::dialogs::NativeDialogs;
use crate::ui::editor::{self, EditorPanel};
use crate::ui::home::{HomeAction, HomePanel};
use crate::ui::prompts::{ColorForm, FontForm, FormAction};

/// Which screen fills the central area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Editor,
}

/// Clipboard commands offered by the Edit menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Cut,
    Copy,
    Paste,
}

impl EditCommand {
    pub const ALL: [Self; 3] = [Self::Cut, Self::Copy, Self::Paste];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
        }
    }

    /// Viewport request that makes the integration emit the clipboard event
    pub fn viewport_command(self) -> egui::ViewportCommand {
        match self {
            Self::Cut => egui::ViewportCommand::RequestCut,
            Self::Copy => egui::ViewportCommand::RequestCopy,
            Self::Paste => egui::ViewportCommand::RequestPaste,
        }
    }
}

/// Main application state
pub struct NotebookApp {
    /// Document, history, and appearance
    session: EditorSession,
    /// Persisted settings
    config: AppConfig,
    /// Current screen
    screen: Screen,
    /// Open "Change Font" form
    font_form: Option<FontForm>,
    /// Open background color form
    color_form: Option<ColorForm>,
    /// Title last sent to the viewport
    title: String,
    /// Text pane that last held keyboard focus
    focused_pane: Option<egui::Id>,
}

impl NotebookApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        });

        let history_path = config.history_path();
        let history = HistoryStore::load(&history_path).unwrap_or_else(|e| {
            tracing::error!("{}; starting with an empty history", e);
            HistoryStore::new(history_path.clone())
        });

        let session = EditorSession::new(history, config.appearance.clone());
        let title = session.window_title();

        Self {
            session,
            config,
            screen: Screen::Home,
            font_form: None,
            color_form: None,
            title,
            focused_pane: None,
        }
    }

    fn new_document(&mut self) {
        self.session.new_document();
        self.screen = Screen::Editor;
    }

    fn open_document(&mut self) {
        if self.session.open_document_with(&mut NativeDialogs).is_ok() {
            self.screen = Screen::Editor;
        }
    }

    fn open_recent(&mut self, entry: &str) {
        match self.session.open_document(Path::new(entry)) {
            Ok(_) => self.screen = Screen::Editor,
            Err(e) => report_error(&mut NativeDialogs, &e),
        }
    }

    fn save_document(&mut self) {
        let _ = self.session.save_document(&mut NativeDialogs);
    }

    fn save_document_as(&mut self) {
        let _ = self.session.save_document_as_with(&mut NativeDialogs);
    }

    /// Run a clipboard command against the last focused pane
    ///
    /// Clicking the menu takes focus away from the pane, so focus is handed
    /// back before the request.
    fn edit(&self, ctx: &egui::Context, command: EditCommand) {
        let Some(id) = self.focused_pane.filter(|_| self.screen == Screen::Editor) else {
            return;
        };
        ctx.memory_mut(|m| m.request_focus(id));
        ctx.send_viewport_cmd(command.viewport_command());
    }

    /// Persist the session's appearance to the config file
    fn store_appearance(&mut self) {
        self.config.appearance = self.session.appearance().clone();
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {:#}", e);
        }
    }

    /// Apply the outcome of a font or color change
    fn finish_appearance_change(&mut self, result: Result<(), EditorError>) {
        match result {
            Ok(()) => self.store_appearance(),
            Err(e) => report_error(&mut NativeDialogs, &e),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.new_document();
                        ui.close();
                    }
                    if ui.button("Open").clicked() {
                        self.open_document();
                        ui.close();
                    }
                    ui.menu_button("Open Recent", |ui| {
                        let entries = self.session.history().entries().to_vec();
                        if entries.is_empty() {
                            ui.label("No recent files");
                        }
                        for entry in entries.iter().rev() {
                            if ui.button(entry.as_str()).clicked() {
                                self.open_recent(entry);
                                ui.close();
                            }
                        }
                    });
                    if ui.button("Save").clicked() {
                        self.save_document();
                        ui.close();
                    }
                    if ui.button("Save As").clicked() {
                        self.save_document_as();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    for command in EditCommand::ALL {
                        if ui.button(command.label()).clicked() {
                            self.edit(ctx, command);
                            ui.close();
                        }
                    }
                });

                ui.menu_button("Font", |ui| {
                    if ui.button("Change Font").clicked() {
                        self.font_form = Some(FontForm::new(self.session.appearance()));
                        ui.close();
                    }
                });

                ui.menu_button("Background", |ui| {
                    if ui.button("Change Color").clicked() {
                        self.color_form = Some(ColorForm::new(self.session.appearance().background));
                        ui.close();
                    }
                });

                if ui.button("Homepage").clicked() {
                    self.screen = Screen::Home;
                }
            });
        });
    }

    /// Render the open appearance forms, applying them when confirmed
    fn render_forms(&mut self, ctx: &egui::Context) {
        if let Some(form) = self.font_form.as_mut() {
            match form.show(ctx) {
                FormAction::Pending => {}
                FormAction::Cancel => self.font_form = None,
                FormAction::Submit => {
                    if let Some(mut form) = self.font_form.take() {
                        let result = self.session.change_font(&mut form).map(|_| ());
                        self.finish_appearance_change(result);
                    }
                }
            }
        }

        if let Some(form) = self.color_form.as_mut() {
            match form.show(ctx) {
                FormAction::Pending => {}
                FormAction::Cancel => self.color_form = None,
                FormAction::Submit => {
                    if let Some(mut form) = self.color_form.take() {
                        let result = self.session.change_background(&mut form).map(|_| ());
                        self.finish_appearance_change(result);
                    }
                }
            }
        }
    }

    /// Keep the window title in sync with the document path
    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.session.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for NotebookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_forms(ctx);

        match self.screen {
            Screen::Home => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| HomePanel::show(ui, self.session.history()))
                    .inner;
                match action {
                    Some(HomeAction::NewNote) => self.new_document(),
                    Some(HomeAction::OpenRecent(entry)) => self.open_recent(&entry),
                    None => {}
                }
            }
            Screen::Editor => {
                let appearance = self.session.appearance().clone();
                let panel_frame = egui::Frame::central_panel(&ctx.style())
                    .fill(editor::color(appearance.background));

                egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                    let doc = self.session.document();
                    let marker = if doc.modified { " (modified)" } else { "" };
                    ui.label(format!("{}{}", doc.title(), marker));
                });

                let note_focus = egui::TopBottomPanel::bottom("note_panel")
                    .resizable(true)
                    .default_height(120.0)
                    .min_height(60.0)
                    .frame(panel_frame)
                    .show(ctx, |ui| {
                        EditorPanel::show_note(ui, self.session.document_mut(), &appearance)
                    })
                    .inner;

                let main_focus = egui::CentralPanel::default()
                    .frame(panel_frame)
                    .show(ctx, |ui| {
                        EditorPanel::show_main(ui, self.session.document_mut(), &appearance)
                    })
                    .inner;

                if let Some(id) = main_focus.or(note_focus) {
                    self.focused_pane = Some(id);
                }
            }
        }

        self.sync_title(ctx);
    }
}
