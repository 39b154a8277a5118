//! Notebook - a two-pane text editor with an attached note
//!
//! The core persists a document's main text and note to a single file and
//! keeps a history of opened files. The desktop front end lives in the
//! binary and drives [`session::EditorSession`].

pub mod core;
pub mod session;
