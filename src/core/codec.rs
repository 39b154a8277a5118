//! Flat-file encoding of a document's main text and its attached note
//!
//! A saved file is the trimmed main text, optionally followed by a line
//! holding [`NOTE_DELIMITER`] and then the trimmed note text. There is no
//! header and no escaping.

/// Marker line separating the main text from the note
pub const NOTE_DELIMITER: &str = "---NOTE---";

/// Whether `text` contains the note delimiter anywhere
pub fn contains_delimiter(text: &str) -> bool {
    text.contains(NOTE_DELIMITER)
}

/// Encode main text and note into file content
pub fn encode(main_text: &str, note_text: &str) -> String {
    let main = main_text.trim();
    let note = note_text.trim();

    // A main text carrying the marker is split early on the next decode.
    if contains_delimiter(main) {
        tracing::warn!(
            "Main text contains {:?}; the note boundary will move when reopened",
            NOTE_DELIMITER
        );
    }

    if note.is_empty() {
        return main.to_string();
    }

    let mut content = String::with_capacity(main.len() + NOTE_DELIMITER.len() + note.len() + 2);
    content.push_str(main);
    content.push('\n');
    content.push_str(NOTE_DELIMITER);
    content.push('\n');
    content.push_str(note);
    content
}

/// Decode file content into `(main_text, note_text)`
pub fn decode(content: &str) -> (String, String) {
    match content.split_once(NOTE_DELIMITER) {
        Some((main, note)) => (main.trim().to_string(), note.trim().to_string()),
        None => (content.to_string(), String::new()),
    }
}
