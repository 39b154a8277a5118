//! Native file and message dialogs backed by rfd

use std::path::PathBuf;

use notebook::session::FileDialogs;

/// Blocking native dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn file_dialog() -> rfd::FileDialog {
        rfd::FileDialog::new()
            .add_filter("All Files", &["*"])
            .add_filter("Text Documents", &["txt"])
    }
}

impl FileDialogs for NativeDialogs {
    fn choose_file_to_open(&mut self) -> Option<PathBuf> {
        Self::file_dialog().pick_file()
    }

    fn choose_file_to_save(&mut self, default_name: &str) -> Option<PathBuf> {
        Self::file_dialog().set_file_name(default_name).save_file()
    }

    fn show_error(&mut self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
