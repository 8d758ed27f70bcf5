mod attached_picture_frame;
mod audio_encryption_frame;
mod encapsulated_object;
mod extended_text_frame;
mod extended_url_frame;
mod identifier_frame;
pub(in crate::id3::v2) mod key_value_frame;
mod language_frame;
mod popularimeter;
mod sync_text;
pub(in crate::id3::v2) mod text_information_frame;
pub(in crate::id3::v2) mod url_link_frame;

pub use attached_picture_frame::{AttachedPictureFrame, PictureType};
pub use audio_encryption_frame::AudioEncryptionFrame;
pub use encapsulated_object::GeneralEncapsulatedObject;
pub use extended_text_frame::ExtendedTextFrame;
pub use extended_url_frame::ExtendedUrlFrame;
pub use identifier_frame::IdentifierFrame;
pub use key_value_frame::Credit;
pub use language_frame::LanguageFrame;
pub use popularimeter::PopularimeterFrame;
pub use sync_text::{SyncTextContentType, SynchronizedTextFrame, TimestampFormat};
pub use text_information_frame::Position;

use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::{
	TextEncoding, Utf16Endianness, decode_text, decode_text_with_endianness, find_terminator,
	utf16_bom_endianness,
};

/// Reads the leading encoding byte of a frame
pub(in crate::id3::v2) fn read_encoding(reader: &mut ByteReader<'_>) -> Result<TextEncoding> {
	reader.read_u8().map(TextEncoding::from_marker)
}

/// Reads a null terminated string, the terminator is optional
pub(in crate::id3::v2) fn read_terminated_text(
	reader: &mut ByteReader<'_>,
	encoding: TextEncoding,
) -> Result<String> {
	decode_text(reader.read_terminated(encoding), encoding)
}

/// Splits `bytes` on null terminators, decoding each value
///
/// A UTF-16 BOM applies to all following values until another BOM is found. A terminator
/// at the very end does not produce an empty trailing value.
pub(in crate::id3::v2) fn split_terminated_values(
	bytes: &[u8],
	encoding: TextEncoding,
) -> Result<Vec<String>> {
	split_terminated_values_with_endianness(bytes, encoding, u16::from_le_bytes)
}

/// Same as [`split_terminated_values`], but UTF-16 values before the first BOM use `endianness`
pub(in crate::id3::v2) fn split_terminated_values_with_endianness(
	bytes: &[u8],
	encoding: TextEncoding,
	mut endianness: Utf16Endianness,
) -> Result<Vec<String>> {
	let mut values = Vec::new();

	let mut remaining = bytes;
	while !remaining.is_empty() {
		let end = find_terminator(remaining, encoding);
		let value = &remaining[..end];

		if let Some(bom_endianness) =
			utf16_bom_endianness(value).filter(|_| encoding == TextEncoding::UTF16)
		{
			endianness = bom_endianness;
		}

		values.push(decode_text_with_endianness(value, encoding, endianness)?);

		let next = end.saturating_add(encoding.terminator_len());
		remaining = remaining.get(next..).unwrap_or_default();
	}

	Ok(values)
}

/// Reads a big-endian counter of any width
///
/// Counters grow by a byte whenever they overflow, anything beyond 8 bytes saturates.
pub(in crate::id3::v2) fn read_counter(bytes: &[u8]) -> u64 {
	if bytes.len() > 8 {
		return u64::MAX;
	}

	bytes
		.iter()
		.fold(0_u64, |counter, byte| (counter << 8) | u64::from(*byte))
}
