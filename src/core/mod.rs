//! Core functionality for document encoding, file history, and configuration

pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod history;
