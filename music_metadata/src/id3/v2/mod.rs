//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! See:
//!
//! * [`read_id3v2`]
//! * [`Id3v2Tag`]
//! * [`FrameValue`]

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
pub(crate) mod tag;
pub mod util;

// Exports

pub use header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use read::read_id3v2;

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::header::{FrameHeader, FrameId};
pub use frame::{Frame, FrameFlags, FrameValue};
