// Synthetic container builder shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Marker the producing application writes in front of the content block.
pub const MARKER: &str = "type:e7impress.song\x1d  Dcontent";

/// Builds a container the way the producing application lays it out: a
/// header line of top-level `key  descriptor` pairs followed by the value
/// region. Descriptors are computed against the padded buffer; `finish`
/// then drops the two padding spaces after the marker, as the producer does.
pub struct Container {
    keys: Vec<&'static str>,
    data: Vec<u8>,
}

impl Container {
    /// `keys` are the top-level keys, in header order.
    pub fn new(keys: &[&'static str]) -> Self {
        Container {
            keys: keys.to_vec(),
            data: Vec::new(),
        }
    }

    fn header_len(&self) -> usize {
        self.keys.iter().map(|k| 2 + k.len() + 2 + 20).sum::<usize>() + 1
    }

    /// Append bytes to the value region without a descriptor.
    pub fn push_raw(&mut self, text: &str) {
        self.data.extend(latin1(text));
    }

    /// Append a value and return the descriptor addressing it.
    pub fn push(&mut self, text: &str) -> String {
        let bytes = latin1(text);
        let index = self.header_len() + self.data.len();
        let desc = format!("{:010}{:010}", index - 1, bytes.len());
        self.data.extend(bytes);
        desc
    }

    /// Append the values of a nested block and return the block text.
    pub fn block(&mut self, pairs: &[(&str, &str)]) -> String {
        let mut block = String::new();
        for (key, value) in pairs {
            let desc = self.push(value);
            block.push_str(&format!("  {}  {}", key, desc));
        }
        block
    }

    /// Append the top-level values and produce the file bytes.
    pub fn finish(mut self, values: &[(&str, &str)]) -> Vec<u8> {
        let mut header = String::new();
        for key in self.keys.clone() {
            let value = values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .unwrap_or_else(|| panic!("no value for {}", key));
            let desc = self.push(value);
            header.push_str(&format!("  {}  {}", key, desc));
        }
        header.push('\n');
        assert_eq!(header.len(), self.header_len());

        let mut bytes = header.into_bytes();
        bytes.extend(self.data);
        unpad(bytes)
    }
}

fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c as u32).expect("latin-1 text"))
        .collect()
}

fn unpad(bytes: Vec<u8>) -> Vec<u8> {
    let marker = MARKER.as_bytes();
    match bytes.windows(marker.len()).position(|w| w == marker) {
        Some(pos) => {
            let mut out = bytes[..pos].to_vec();
            out.extend_from_slice(b"type:e7impress.song\x1dDcontent");
            out.extend_from_slice(&bytes[pos + marker.len()..]);
            out
        }
        None => bytes,
    }
}

/// Write `bytes` as `name` inside `dir`.
pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// A small hymn: three named verses, one of them without content, and an
/// order that repeats the chorus and references the missing verse.
pub fn hymn() -> Vec<u8> {
    let mut c = Container::new(&["Fablauf", "Dnamespace", "Dcontent"]);
    c.push_raw(MARKER);
    c.push_raw("\x1d");

    let namespace = c.block(&[("v1", "Verse 1"), ("ch", "Chorus"), ("br", "Bridge")]);
    let content = c.block(&[
        ("v1", "\r\nAmazing grace, how sweet the sound\r\nThat saved a wretch like me\r\n"),
        ("ch", "  Gr\u{fc}\u{df} Gott  "),
    ]);

    c.finish(&[
        ("Fablauf", "Verse 1\x01Chorus\x01Verse 1\x01Bridge\x01Chorus"),
        ("Dnamespace", &namespace),
        ("Dcontent", &content),
    ])
}
