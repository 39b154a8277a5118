//! UI components for Notebook

pub mod dialogs;
pub mod editor;
pub mod home;
pub mod prompts;
