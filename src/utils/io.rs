// I/O utilities for reading container files

use std::path::Path;

/// Read a whole file into memory.
pub fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// File name without directory and without its last extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Find the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/songs/Amazing Grace.e7s")), "Amazing Grace");
        assert_eq!(file_stem(Path::new("archive.tar.gz")), "archive.tar");
        assert_eq!(file_stem(Path::new("noext")), "noext");
        assert_eq!(file_stem(Path::new("")), "");
    }

    #[test]
    fn test_find_bytes() {
        assert_eq!(find_bytes(b"abcabc", b"ca"), Some(2));
        assert_eq!(find_bytes(b"abc", b"abcd"), None);
        assert_eq!(find_bytes(b"abc", b""), None);
        assert_eq!(find_bytes(b"abc", b"x"), None);
    }
}
