//! Read ID3v2 tags from audio files.
//!
//! ID3v2.2, ID3v2.3, and ID3v2.4 tags are supported, along with their unsynchronisation,
//! extended headers, and compressed frames. Every frame is decoded into a [`FrameValue`](id3::v2::FrameValue),
//! frames that can't be decoded are kept as [`FrameValue::Invalid`](id3::v2::FrameValue::Invalid)
//! rather than failing the whole tag (see [`ParsingMode`](config::ParsingMode)).
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ### Using a path
//!
//! ```rust,no_run
//! # fn main() -> music_metadata::error::Result<()> {
//! use music_metadata::probe::Probe;
//! use music_metadata::read_from_path;
//!
//! // This will guess the format from the content, falling back to the extension
//! let path = "test.mp3";
//! let tagged_file = read_from_path(path)?;
//!
//! // Or, using the extension alone
//! let tagged_file2 = Probe::open(path)?.read()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Using an existing reader
//!
//! ```rust,no_run
//! # fn main() -> music_metadata::error::Result<()> {
//! use music_metadata::read_from;
//! use std::fs::File;
//!
//! // Let's read from an open file
//! let path = "test.mp3";
//! let mut file = File::open(path)?;
//!
//! // Here, we have to guess the file type prior to reading
//! let tagged_file = read_from(&mut file)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Accessing the tag
//!
//! ```rust,no_run
//! # fn main() -> music_metadata::error::Result<()> {
//! use music_metadata::id3::v2::FrameValue;
//! use music_metadata::read_from_path;
//!
//! let tagged_file = read_from_path("test.mp3")?;
//!
//! if let Some(tag) = tagged_file.tag() {
//! 	println!("Title: {:?}", tag.title());
//!
//! 	for frame in tag {
//! 		if let FrameValue::Invalid(reason) = frame.value() {
//! 			println!("{}: unreadable ({reason})", frame.id_str());
//! 		}
//! 	}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading a tag from a buffer
//!
//! ```rust
//! # fn main() -> music_metadata::error::Result<()> {
//! use music_metadata::config::ParseOptions;
//! use music_metadata::id3::v2::read_id3v2;
//!
//! let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x0FTIT2\x00\x00\x00\x05\x00\x00\x03Home";
//!
//! let tag = read_id3v2(bytes, ParseOptions::new())?.expect("should find a tag");
//! assert_eq!(tag.title(), Some("Home"));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod file;
pub mod id3;
pub(crate) mod macros;
pub(crate) mod mpeg;
pub mod probe;
mod util;

pub use crate::probe::{read_from, read_from_path};

pub use util::text::TextEncoding;
