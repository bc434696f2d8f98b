// Raw container buffer
//
// The container is read whole and kept as bytes. Descriptor offsets count
// ISO-8859-1 characters, which are single bytes, so slicing happens on the
// byte buffer and only the slice is decoded.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::encoding;
use crate::utils::io;

/// Marker every e7impress song container carries.
pub const SIGNATURE: &[u8] = b"type:e7impress.song";

/// Byte sequence the producing application writes without the padding its
/// own offsets account for.
pub const PATCH_NEEDLE: &[u8] = b"type:e7impress.song\x1dDcontent";

/// Replacement for [`PATCH_NEEDLE`] with the two missing spaces restored.
pub const PATCH_REPLACEMENT: &[u8] = b"type:e7impress.song\x1d  Dcontent";

/// Stored descriptor starts are one less than the zero-based index.
pub const OFFSET_BIAS: usize = 1;

/// Patched bytes of one container file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBuffer {
    bytes: Vec<u8>,
    patched: bool,
}

impl RawBuffer {
    /// Read a container from disk and apply the format patch.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = io::read_all(path)?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(bytes))
    }

    /// Wrap already loaded bytes, applying the format patch.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let (bytes, patched) = apply_patch(bytes);
        RawBuffer { bytes, patched }
    }

    /// Whether the content marker was found and padded.
    pub fn is_patched(&self) -> bool {
        self.patched
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the container signature appears anywhere in the buffer.
    pub fn has_signature(&self) -> bool {
        io::find_bytes(&self.bytes, SIGNATURE).is_some()
    }

    /// The whole buffer as text.
    pub fn text(&self) -> String {
        encoding::decode_text(&self.bytes)
    }

    /// The header line holding the top-level field block.
    pub fn first_line(&self) -> String {
        encoding::first_line(&self.text()).to_string()
    }

    /// Text addressed by a stored descriptor. Ranges past the end of the
    /// buffer are clamped.
    pub fn cut_out(&self, start: usize, length: usize) -> String {
        let begin = start.saturating_add(OFFSET_BIAS).min(self.bytes.len());
        let end = begin.saturating_add(length).min(self.bytes.len());
        encoding::decode_text(&self.bytes[begin..end])
    }
}

/// Replace the first [`PATCH_NEEDLE`] with [`PATCH_REPLACEMENT`]. Returns
/// the bytes and whether the needle was found.
pub fn apply_patch(mut bytes: Vec<u8>) -> (Vec<u8>, bool) {
    match io::find_bytes(&bytes, PATCH_NEEDLE) {
        Some(pos) => {
            bytes.splice(pos..pos + PATCH_NEEDLE.len(), PATCH_REPLACEMENT.iter().copied());
            debug!("patched content marker at byte {}", pos);
            (bytes, true)
        }
        None => {
            if !bytes.is_empty() {
                warn!("content marker not found, offsets are used unpatched");
            }
            (bytes, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_out_applies_bias() {
        let raw = RawBuffer::from_bytes(b"Xhello".to_vec());
        assert_eq!(raw.cut_out(0, 5), "hello");
    }

    #[test]
    fn test_cut_out_clamps() {
        let raw = RawBuffer::from_bytes(b"Xhello".to_vec());
        assert_eq!(raw.cut_out(2, 100), "llo");
        assert_eq!(raw.cut_out(50, 3), "");
        assert_eq!(raw.cut_out(usize::MAX, usize::MAX), "");
    }

    #[test]
    fn test_cut_out_latin1() {
        let raw = RawBuffer::from_bytes(b"-Gr\xfc\xdfe".to_vec());
        assert_eq!(raw.cut_out(0, 5), "Grüße");
    }

    #[test]
    fn test_patch_exact_match() {
        let (patched, found) = apply_patch(b"abc type:e7impress.song\x1dDcontent xyz".to_vec());
        assert!(found);
        assert_eq!(patched, b"abc type:e7impress.song\x1d  Dcontent xyz".to_vec());
    }

    #[test]
    fn test_patch_fires_once() {
        let input = b"type:e7impress.song\x1dDcontent|type:e7impress.song\x1dDcontent".to_vec();
        let (patched, found) = apply_patch(input);
        assert!(found);
        assert_eq!(
            patched,
            b"type:e7impress.song\x1d  Dcontent|type:e7impress.song\x1dDcontent".to_vec()
        );
    }

    #[test]
    fn test_patch_ignores_near_matches() {
        for input in [
            b"type:e7impress.song Dcontent".to_vec(),
            b"type:e7impress.song\x1d Dcontent".to_vec(),
            b"type:e7impress.song\x1dDcontenT".to_vec(),
            b"no marker at all".to_vec(),
        ] {
            assert_eq!(apply_patch(input.clone()), (input, false));
        }
    }

    #[test]
    fn test_patch_flag_on_buffer() {
        let raw = RawBuffer::from_bytes(b"Xtype:e7impress.song\x1dDcontent".to_vec());
        assert!(raw.is_patched());
        assert_eq!(raw.len(), 31);

        let raw = RawBuffer::from_bytes(b"Xtype:e7impress.song\x1d Dcontent".to_vec());
        assert!(!raw.is_patched());
        assert_eq!(raw.len(), 30);
        assert!(!RawBuffer::default().is_patched());
    }

    #[test]
    fn test_signature_and_first_line() {
        let raw = RawBuffer::from_bytes(b"  key  value\ntype:e7impress.song".to_vec());
        assert!(raw.has_signature());
        assert_eq!(raw.first_line(), "  key  value");

        let raw = RawBuffer::from_bytes(b"type:e7impress.son".to_vec());
        assert!(!raw.has_signature());
    }
}
