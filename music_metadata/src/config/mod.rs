//! Various configuration options to control `music_metadata`

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
