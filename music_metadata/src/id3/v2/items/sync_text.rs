use super::read_encoding;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::macros::id3v2_err;
use crate::util::bytes::ByteReader;
use crate::util::text::{decode_text, decode_text_with_endianness, utf16_bom_endianness};

use byteorder::BigEndian;

/// The unit used for [`SynchronizedTextFrame`] timestamps
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
pub enum TimestampFormat {
	/// The unit isn't specified
	Unknown = 0,
	/// The unit is MPEG frames
	MPEG = 1,
	/// The unit is milliseconds
	MS = 2,
}

impl TimestampFormat {
	/// Get a `TimestampFormat` from a u8, must be 0-2 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Unknown),
			1 => Some(Self::MPEG),
			2 => Some(Self::MS),
			_ => None,
		}
	}
}

/// The type of text stored in a [`SynchronizedTextFrame`]
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SyncTextContentType {
	Other = 0,
	Lyrics = 1,
	TextTranscription = 2,
	PartName = 3,
	Events = 4,
	Chord = 5,
	Trivia = 6,
	WebpageURL = 7,
	ImageURL = 8,
}

impl SyncTextContentType {
	/// Get a `SyncTextContentType` from a u8, must be 0-8 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::Lyrics),
			2 => Some(Self::TextTranscription),
			3 => Some(Self::PartName),
			4 => Some(Self::Events),
			5 => Some(Self::Chord),
			6 => Some(Self::Trivia),
			7 => Some(Self::WebpageURL),
			8 => Some(Self::ImageURL),
			_ => None,
		}
	}
}

/// Represents an ID3v2 synchronized text frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SynchronizedTextFrame {
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// The format of the timestamps
	pub timestamp_format: TimestampFormat,
	/// The type of content stored
	pub content_type: SyncTextContentType,
	/// Unique content description
	pub description: String,
	/// Collection of timestamps and text
	pub content: Vec<(u32, String)>,
}

impl SynchronizedTextFrame {
	/// Read a [`SynchronizedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * [`BadTimestampFormat`](Id3v2ErrorKind::BadTimestampFormat) for an unknown timestamp format
	/// * [`BadSyncText`](Id3v2ErrorKind::BadSyncText) for an unknown content type, or a
	///   syllable without a complete timestamp
	/// * Unable to decode any of the text
	pub(crate) fn parse(data: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(data);

		let encoding = read_encoding(&mut reader)?;

		let mut language = [0; 3];
		language.copy_from_slice(reader.read_bytes(3)?);

		let timestamp_format = TimestampFormat::from_u8(reader.read_u8()?)
			.ok_or_else(|| Id3v2Error::new(Id3v2ErrorKind::BadTimestampFormat))?;
		let content_type = SyncTextContentType::from_u8(reader.read_u8()?)
			.ok_or_else(|| Id3v2Error::new(Id3v2ErrorKind::BadSyncText))?;

		let raw_description = reader.read_terminated(encoding);
		let description = decode_text(raw_description, encoding)?;

		// It's possible for the description to be the only string with a BOM
		let endianness = utf16_bom_endianness(raw_description).unwrap_or(u16::from_le_bytes);

		let mut content = Vec::new();
		while !reader.is_empty() {
			let text = decode_text_with_endianness(
				reader.read_terminated(encoding),
				encoding,
				endianness,
			)?;

			if reader.remaining() < 4 {
				id3v2_err!(BadSyncText);
			}

			let time = reader.read_u32::<BigEndian>()?;
			content.push((time, text));
		}

		Ok(Self {
			language,
			timestamp_format,
			content_type,
			description,
			content,
		})
	}
}
