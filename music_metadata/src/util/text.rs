use crate::error::{ErrorKind, MetadataError, Result};
use crate::macros::err;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark, little endian when the mark is missing
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// Resolve a frame's encoding marker
	///
	/// Unlike [`TextEncoding::from_u8`], this never fails. Unknown markers are treated as UTF-8.
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_marker(1), TextEncoding::UTF16);
	/// assert_eq!(TextEncoding::from_marker(0x42), TextEncoding::UTF8);
	/// ```
	pub fn from_marker(byte: u8) -> Self {
		Self::from_u8(byte).unwrap_or_else(|| {
			log::warn!("Unknown text encoding marker {byte:#04x}, assuming UTF-8");
			Self::UTF8
		})
	}

	/// The width of a null terminator in this encoding, either 1 or 2 bytes
	pub fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16 | Self::UTF16BE => 2,
		}
	}
}

/// Finds the start of the next null terminator
///
/// For UTF-16 the terminator must be an aligned `0x00 0x00` pair. If there is no terminator,
/// `bytes.len()` is returned.
pub(crate) fn find_terminator(bytes: &[u8], encoding: TextEncoding) -> usize {
	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => {
			bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len())
		},
		TextEncoding::UTF16 | TextEncoding::UTF16BE => bytes
			.chunks_exact(2)
			.position(|c| c == [0, 0])
			.map_or(bytes.len(), |pos| pos * 2),
	}
}

pub(crate) type Utf16Endianness = fn([u8; 2]) -> u16;

/// Decodes `bytes` entirely, failing on any byte sequence invalid for `encoding`
///
/// Trailing nulls are trimmed. UTF-16 without a byte order mark is read as little endian.
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
	decode_text_with_endianness(bytes, encoding, u16::from_le_bytes)
}

/// Same as [`decode_text`], but `fallback` decides the byte order of UTF-16 strings without a BOM
///
/// Some encoders only write a BOM for the first string in a frame, the rest are assumed to
/// have the same byte order. This is seen in SYLT frames.
pub(crate) fn decode_text_with_endianness(
	bytes: &[u8],
	encoding: TextEncoding,
	fallback: Utf16Endianness,
) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	let read_string = match encoding {
		TextEncoding::Latin1 => latin1_decode(bytes),
		TextEncoding::UTF16 => match utf16_bom_endianness(bytes) {
			Some(endianness) => utf16_decode_bytes(&bytes[2..], endianness)?,
			None => utf16_decode_bytes(bytes, fallback)?,
		},
		TextEncoding::UTF16BE => utf16_decode_bytes(bytes, u16::from_be_bytes)?,
		TextEncoding::UTF8 => utf8_decode(bytes)?,
	};

	Ok(read_string)
}

/// Checks `bytes` for a leading UTF-16 byte order mark
pub(crate) fn utf16_bom_endianness(bytes: &[u8]) -> Option<Utf16Endianness> {
	match bytes {
		[0xFF, 0xFE, ..] => Some(u16::from_le_bytes),
		[0xFE, 0xFF, ..] => Some(u16::from_be_bytes),
		_ => None,
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| char::from(*c)).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

pub(crate) fn utf8_decode(bytes: &[u8]) -> Result<String> {
	let mut text = std::str::from_utf8(bytes)
		.map_err(|_| MetadataError::new(ErrorKind::InvalidEncoding("Expected a UTF-8 string")))?
		.to_owned();
	trim_end_nulls(&mut text);
	Ok(text)
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: Utf16Endianness) -> Result<String> {
	if bytes.len() % 2 != 0 {
		err!(InvalidEncoding("UTF-16 string has an odd length"));
	}

	// Any BOM has already been stripped, a U+FEFF past this point is part of the text
	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect();

	let mut text = String::from_utf16(&unverified)
		.map_err(|_| MetadataError::new(ErrorKind::InvalidEncoding("Given an invalid UTF-16 string")))?;
	trim_end_nulls(&mut text);
	Ok(text)
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}
