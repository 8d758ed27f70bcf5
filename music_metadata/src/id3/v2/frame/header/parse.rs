use super::{FrameHeader, FrameId};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::{FrameFlags, Id3v2Version};
use crate::util::bytes::{read_synchsafe_u32_at, read_u16_at, read_u24_at, read_u32_at};

use byteorder::BigEndian;

/// Parse a frame header at the start of `bytes`
///
/// This returns `Ok(None)` when the header starts with a null byte, meaning we just started
/// reading padding.
///
/// # Errors
///
/// * `bytes` is shorter than [`Id3v2Version::frame_header_size`]
/// * The ID is not made up of `'A'..='Z'` and `'0'..='9'`
pub(crate) fn parse_header(bytes: &[u8], version: Id3v2Version) -> Result<Option<FrameHeader>> {
	match version {
		Id3v2Version::V2 => parse_v2_header(bytes),
		Id3v2Version::V3 => parse_v3_v4_header(bytes, false),
		Id3v2Version::V4 => parse_v3_v4_header(bytes, true),
	}
}

fn parse_v2_header(bytes: &[u8]) -> Result<Option<FrameHeader>> {
	let size = read_u24_at::<BigEndian>(bytes, 3)?;

	// Assume we just started reading padding
	if bytes[0] == 0 {
		return Ok(None);
	}

	let id = parse_id(&bytes[..3])?;

	// V2 doesn't store flags
	Ok(Some(FrameHeader::new(id, size, FrameFlags::default())))
}

fn parse_v3_v4_header(bytes: &[u8], synchsafe: bool) -> Result<Option<FrameHeader>> {
	let raw_flags = read_u16_at::<BigEndian>(bytes, 8)?;

	// Assume we just started reading padding
	if bytes[0] == 0 {
		return Ok(None);
	}

	let size = if synchsafe {
		read_synchsafe_u32_at(bytes, 4)?
	} else {
		read_u32_at::<BigEndian>(bytes, 4)?
	};

	// For some reason, some apps make v3 tags with v2 frame IDs.
	// The actual frame header is v3 though
	let mut id_end = 4;
	if bytes[3] == 0 && !synchsafe {
		log::warn!("Found a v2 frame ID in a v3 tag");
		id_end = 3;
	}

	let id = parse_id(&bytes[..id_end])?;

	let flags = if synchsafe {
		FrameFlags::parse_id3v24(raw_flags)
	} else {
		FrameFlags::parse_id3v23(raw_flags)
	};

	Ok(Some(FrameHeader::new(id, size, flags)))
}

fn parse_id(id_bytes: &[u8]) -> Result<FrameId> {
	let id_str = std::str::from_utf8(id_bytes)
		.map_err(|_| Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id_bytes.to_vec())))?;

	FrameId::new(id_str)
}
