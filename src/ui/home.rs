//! Welcome screen shown at startup and from the Homepage menu

use notebook::core::history::HistoryStore;

/// Action requested from the welcome screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    NewNote,
    OpenRecent(String),
}

/// Welcome screen
pub struct HomePanel;

impl HomePanel {
    /// Show the welcome screen
    pub fn show(ui: &mut egui::Ui, history: &HistoryStore) -> Option<HomeAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading("Welcome to Notebook!");
            ui.add_space(20.0);

            if ui.button("New Note").clicked() {
                action = Some(HomeAction::NewNote);
            }

            if !history.is_empty() {
                ui.add_space(30.0);
                ui.label("Recent files");
                ui.add_space(10.0);

                // Newest first
                for entry in history.entries().iter().rev() {
                    if ui.link(entry.as_str()).clicked() {
                        action = Some(HomeAction::OpenRecent(entry.clone()));
                    }
                }
            }
        });

        action
    }
}
