//! Generic file handling utilities

mod file_type;
mod tagged_file;

pub use file_type::{EXTENSIONS, FileType};
pub use tagged_file::TaggedFile;

pub(crate) use file_type::{FileTypeGuessResult, MAX_JUNK_BYTES};
