// Song model

pub mod render;
pub mod snapshot;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named block of lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub name: String,
    pub text: String,
}

impl Verse {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Verse {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A decoded song.
///
/// `order` lists verse names as they are played. It may repeat names and
/// may name verses that are missing from `verses`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Song {
    pub order: Vec<String>,
    pub verses: Vec<Verse>,
    pub title: String,
}

impl Song {
    pub fn new(title: impl Into<String>, order: Vec<String>, verses: Vec<Verse>) -> Self {
        Song {
            order,
            verses,
            title: title.into(),
        }
    }

    /// First verse with the given name.
    pub fn verse(&self, name: &str) -> Option<&Verse> {
        self.verses.iter().find(|verse| verse.name == name)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_lookup_first_match() {
        let song = Song::new(
            "Dup",
            vec![],
            vec![Verse::new("A", "first"), Verse::new("A", "second")],
        );
        assert_eq!(song.verse("A").map(|v| v.text.as_str()), Some("first"));
        assert!(song.verse("B").is_none());
    }

    #[test]
    fn test_display() {
        let song = Song::new("Amazing Grace", vec![], vec![Verse::new("Chorus", "")]);
        assert_eq!(song.to_string(), "Amazing Grace");
        assert_eq!(song.verses[0].to_string(), "Chorus");
    }
}
