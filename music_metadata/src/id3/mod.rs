//! ID3 specific items
//!
//! Only ID3v2 tags are read. The ID3v1 genre list is provided, since ID3v2 genre frames may
//! reference it.

pub mod v1;
pub mod v2;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::util::alloc::VecFallibleCapacity;
use v2::Id3v2Tag;
use v2::header::{ID3V2_HEADER_SIZE, Id3v2Header};
use v2::read::{parse_id3v2, restrict_to_tag};

use std::io::{Cursor, Read};

/// Read an ID3v2 tag from the current position of `reader`
///
/// Only the header and the tag itself are read, the reader is left at the end of the tag (or
/// wherever reading stopped).
pub(crate) fn find_id3v2<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v2Tag>>
where
	R: Read,
{
	log::debug!("Searching for an ID3v2 tag");

	let mut header_bytes = [0; ID3V2_HEADER_SIZE];
	let header_len = std::io::copy(
		&mut reader.by_ref().take(ID3V2_HEADER_SIZE as u64),
		&mut Cursor::new(&mut header_bytes[..]),
	)? as usize;

	let Some(header) = Id3v2Header::parse(&header_bytes[..header_len])? else {
		log::debug!("No ID3v2 tag found");
		return Ok(None);
	};

	log::debug!("Found an ID3v2 tag, parsing");

	let mut tag_bytes =
		Vec::try_with_capacity_stable(header.size as usize, parse_options.allocation_limit)?;
	reader
		.take(u64::from(header.size))
		.read_to_end(&mut tag_bytes)?;

	let body = restrict_to_tag(&tag_bytes, &header, parse_options.parsing_mode)?;
	parse_id3v2(body, header, parse_options).map(Some)
}
