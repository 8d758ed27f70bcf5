#![allow(missing_docs)]

mod frames;
mod mpeg;
mod parsing_mode;
pub(crate) mod util;
