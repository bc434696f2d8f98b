// Field block decoding
//
// A field block is a run of tokens separated by two spaces. A key token
// followed by a 20-digit descriptor token names a value stored elsewhere
// in the raw buffer. Descriptor offsets always point into the top-level
// buffer, also when the block itself is a value cut out of that buffer.

use indexmap::IndexMap;
use tracing::debug;

use super::raw::RawBuffer;
use crate::utils::encoding::trim_format;

/// Token separator inside a field block.
pub const TOKEN_SEPARATOR: &str = "  ";

/// Decoded key/value table. Insertion ordered; a repeated key keeps its
/// first position and takes the latest value.
pub type FieldTable = IndexMap<String, String>;

/// Keys of the top-level field block.
pub struct FieldKeys;

impl FieldKeys {
    /// Playback order, names separated by `\x01`.
    pub const ORDER: &'static str = "Fablauf";
    /// Nested block mapping verse keys to display names.
    pub const NAMESPACE: &'static str = "Dnamespace";
    /// Nested block mapping verse keys to verse text.
    pub const CONTENT: &'static str = "Dcontent";
}

/// Fixed-width (start, length) pair addressing the raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDescriptor {
    pub start: usize,
    pub length: usize,
}

impl OffsetDescriptor {
    pub const WIDTH: usize = 20;
    const HALF: usize = Self::WIDTH / 2;

    /// Parse a token made of exactly 20 ASCII digits.
    pub fn parse(token: &str) -> Option<Self> {
        if token.len() != Self::WIDTH || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(OffsetDescriptor {
            start: parse_half(&token[..Self::HALF]),
            length: parse_half(&token[Self::HALF..]),
        })
    }
}

// Ten digits may exceed usize on 32-bit targets; such offsets are past any
// buffer anyway and get clamped by the cut.
fn parse_half(digits: &str) -> usize {
    digits
        .parse::<u64>()
        .ok()
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(usize::MAX)
}

/// Split a block into trimmed tokens. Empty fragments are dropped before
/// trimming, so whitespace-only fragments survive as empty tokens.
pub fn tokenize(blob: &str) -> Vec<&str> {
    blob.split(TOKEN_SEPARATOR)
        .filter(|fragment| !fragment.is_empty())
        .map(trim_format)
        .collect()
}

/// Decode a field block against the raw buffer its descriptors index.
pub fn decode_field_block(blob: &str, raw: &RawBuffer) -> FieldTable {
    let tokens = tokenize(blob);
    let mut table = FieldTable::new();

    let mut i = 0;
    while i + 1 < tokens.len() {
        match OffsetDescriptor::parse(tokens[i + 1]) {
            Some(desc) => {
                table.insert(tokens[i].to_string(), raw.cut_out(desc.start, desc.length));
                i += 2;
            }
            None => i += 1,
        }
    }

    debug!("decoded {} fields from {} tokens", table.len(), tokens.len());
    table
}
