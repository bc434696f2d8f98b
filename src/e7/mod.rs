// e7impress song container support
//
// Container layout:
// - First line: top-level field block ("key  descriptor" pairs)
// - Remainder: value region addressed by the descriptors
//
// Top-level fields of interest:
// - Fablauf:    playback order, verse names separated by \x01
// - Dnamespace: nested field block, verse key -> display name
// - Dcontent:   nested field block, verse key -> verse text

pub mod fields;
pub mod raw;
pub mod resolve;

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::error::{E7Error, Result};
use crate::song::{Song, Verse};
use crate::utils::io;

pub use fields::{decode_field_block, FieldKeys, FieldTable, OffsetDescriptor};
pub use raw::{RawBuffer, OFFSET_BIAS, PATCH_NEEDLE, PATCH_REPLACEMENT, SIGNATURE};

/// Decoder for one container file.
///
/// The raw buffer and the top-level field table are computed on first use
/// and cached. Empty results are not cached, the next access retries.
/// Not thread-safe; use one instance per file.
#[derive(Debug)]
pub struct E7File {
    path: PathBuf,
    title: String,
    raw: OnceCell<RawBuffer>,
    fields: OnceCell<FieldTable>,
}

impl E7File {
    /// Create a decoder and try to load the file right away. A failed load
    /// is retried, and reported, by the first accessor.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = E7File {
            title: io::file_stem(&path),
            path,
            raw: OnceCell::new(),
            fields: OnceCell::new(),
        };
        if let Err(e) = file.load() {
            debug!("deferred load of {} ({})", file.path.display(), e);
        }
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Title derived from the file name when the decoder was created.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn load(&self) -> Result<&RawBuffer> {
        if let Some(raw) = self.raw.get() {
            return Ok(raw);
        }
        let raw = RawBuffer::load(&self.path)?;
        if raw.is_empty() {
            return Err(E7Error::EmptyContent(self.path.clone()));
        }
        Ok(self.raw.get_or_init(|| raw))
    }

    /// Validate the container and return its buffer.
    fn check(&self) -> Result<&RawBuffer> {
        if !self.path.is_file() {
            return Err(E7Error::FileNotFound(self.path.clone()));
        }

        let raw = self.load()?;

        if !raw.has_signature() {
            return Err(E7Error::SignatureMismatch(self.path.clone()));
        }

        Ok(raw)
    }

    /// Validate the container and make sure the top-level fields are decoded.
    fn check_fields(&self) -> Result<(&RawBuffer, FieldRef<'_>)> {
        let raw = self.check()?;

        if let Some(fields) = self.fields.get() {
            return Ok((raw, FieldRef::Cached(fields)));
        }

        let fields = decode_field_block(&raw.first_line(), raw);
        if fields.is_empty() {
            error!("could not load fields ({})", self.path.display());
            return Ok((raw, FieldRef::Empty(fields)));
        }

        debug!("decoded {} top-level fields", fields.len());
        Ok((raw, FieldRef::Cached(self.fields.get_or_init(|| fields))))
    }

    /// Decoded text of the whole container.
    pub fn try_content(&self) -> Result<String> {
        Ok(self.load()?.text())
    }

    /// Top-level field table.
    pub fn try_fields(&self) -> Result<FieldTable> {
        let (_, fields) = self.check_fields()?;
        Ok(fields.get().clone())
    }

    /// Verse names in playback order.
    pub fn try_order(&self) -> Result<Vec<String>> {
        let (_, fields) = self.check_fields()?;
        resolve::order(fields.get())
    }

    /// Verse key to verse name.
    pub fn try_namespaces(&self) -> Result<FieldTable> {
        let (raw, fields) = self.check_fields()?;
        resolve::namespaces(fields.get(), raw)
    }

    /// Verses whose key appears in both the namespace and the content block,
    /// in namespace order.
    pub fn try_verses(&self) -> Result<Vec<Verse>> {
        let (raw, fields) = self.check_fields()?;
        let content = resolve::content(fields.get(), raw)?;
        let namespaces = resolve::namespaces(fields.get(), raw)?;

        let mut verses = Vec::with_capacity(namespaces.len());
        for (key, name) in namespaces {
            match content.get(&key) {
                Some(text) => verses.push(Verse::new(name, text.clone())),
                None => warn!("{}", E7Error::VerseUnresolved { key, name }),
            }
        }
        Ok(verses)
    }

    /// Assemble the song, failing on the first decode error.
    pub fn try_song(&self) -> Result<Song> {
        let verses = self.try_verses()?;
        let order = self.try_order()?;
        Ok(Song::new(self.title(), order, verses))
    }

    pub fn content(&self) -> String {
        or_empty(self.try_content())
    }

    pub fn fields(&self) -> FieldTable {
        or_empty(self.try_fields())
    }

    pub fn order(&self) -> Vec<String> {
        or_empty(self.try_order())
    }

    pub fn namespaces(&self) -> FieldTable {
        or_empty(self.try_namespaces())
    }

    pub fn verses(&self) -> Vec<Verse> {
        or_empty(self.try_verses())
    }

    /// Assemble the song. Parts that fail to decode are left empty.
    pub fn song(&self) -> Song {
        Song::new(self.title(), self.order(), self.verses())
    }
}

/// Top-level fields, either borrowed from the cache or a transient empty
/// table that was not cached.
enum FieldRef<'a> {
    Cached(&'a FieldTable),
    Empty(FieldTable),
}

impl FieldRef<'_> {
    fn get(&self) -> &FieldTable {
        match self {
            FieldRef::Cached(fields) => *fields,
            FieldRef::Empty(fields) => fields,
        }
    }
}

fn or_empty<T: Default>(result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        error!("{}", e);
        T::default()
    })
}
