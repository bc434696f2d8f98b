//! e7song - reader for e7impress song containers
//!
//! Decodes a container into a [`Song`] (title, playback order and named
//! verses), renders it as CRLF plain text and stores it as a JSON snapshot.
//!
//! ```no_run
//! use e7song::E7File;
//!
//! let file = E7File::new("Amazing Grace.e7s");
//! let song = file.song();
//! println!("{}", song.to_text());
//! song.save("Amazing Grace.json")?;
//! # Ok::<(), e7song::E7Error>(())
//! ```

pub mod e7;
pub mod error;
pub mod song;
mod utils;

pub use e7::{decode_field_block, E7File, FieldKeys, FieldTable, OffsetDescriptor, RawBuffer};
pub use error::{E7Error, Result};
pub use song::{Song, Verse};
