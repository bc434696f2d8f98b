// Encoding utilities
//
// e7impress containers are ISO-8859-1: every byte is exactly one character,
// so byte offsets inside a container are also character offsets.

use encoding_rs::mem::decode_latin1;

/// Decode ISO-8859-1 bytes. Never fails, every byte maps to U+0000..U+00FF.
pub fn decode_text(data: &[u8]) -> String {
    decode_latin1(data).into_owned()
}

/// Whitespace as the container format sees it: Unicode whitespace plus the
/// ASCII information separators (FS, GS, RS, US).
pub fn is_format_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim leading and trailing format whitespace.
pub fn trim_format(text: &str) -> &str {
    text.trim_matches(is_format_whitespace)
}

/// Line terminators honoured when looking for the first line of a container.
///
/// GS (`\x1d`) is one of them and also sits inside the content marker
/// `type:e7impress.song\x1dDcontent`. The marker lives in the value region
/// after the header; were it in the header, the line would end there.
pub const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}',
];

/// Text before the first line terminator (the whole text if there is none).
pub fn first_line(text: &str) -> &str {
    match text.find(LINE_BREAKS) {
        Some(end) => &text[..end],
        None => text,
    }
}
