//! ID3v1 items
//!
//! Only the genre list is provided, ID3v2 genre frames may reference it by index.

pub(crate) mod constants;

pub use constants::GENRES;
