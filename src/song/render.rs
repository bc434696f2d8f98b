// Plain-text rendering

use super::Song;

pub const LINE_BREAK: &str = "\r\n";

/// Placeholder body for names in the order that have no verse.
pub const NOT_FOUND: &str = "Error: not found!";

impl Song {
    /// Render the verses in playback order as CRLF text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for name in &self.order {
            match self.verse(name) {
                Some(verse) => {
                    out.push_str(&verse.name);
                    out.push(':');
                    out.push_str(LINE_BREAK);
                    out.push_str(&verse.text);
                    if !out.ends_with(LINE_BREAK) {
                        out.push_str(LINE_BREAK);
                    }
                }
                None => {
                    out.push_str(name);
                    out.push(':');
                    out.push_str(LINE_BREAK);
                    out.push_str(NOT_FOUND);
                    out.push_str(LINE_BREAK);
                }
            }
            out.push_str(LINE_BREAK);
        }

        while out.ends_with(LINE_BREAK) {
            out.truncate(out.len() - LINE_BREAK.len());
        }
        out
    }
}
