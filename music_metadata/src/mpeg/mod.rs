//! MPEG audio stream helpers
//!
//! Only enough of the stream is understood to tell it apart from other formats.

pub(crate) mod header;
