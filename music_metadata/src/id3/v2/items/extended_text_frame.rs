use super::{read_encoding, split_terminated_values_with_endianness};
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::{decode_text, utf16_bom_endianness};

/// An extended `ID3v2` text frame
///
/// This is used in the `TXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`](crate::id3::v2::FrameId)s.
/// This means for each `ExtendedTextFrame` in the tag, the description
/// must be unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedTextFrame {
	/// Unique content description
	pub description: String,
	/// The actual frame content, ID3v2.4 allows for multiple values
	pub values: Vec<String>,
}

impl ExtendedTextFrame {
	/// Read an [`ExtendedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The description isn't terminated
	/// * Unable to decode the text
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let encoding = read_encoding(&mut reader)?;
		let raw_description = reader.read_strictly_terminated(encoding)?;
		let description = decode_text(raw_description, encoding)?;

		// It's possible for the description to be the only string with a BOM
		let endianness = utf16_bom_endianness(raw_description).unwrap_or(u16::from_le_bytes);
		let values =
			split_terminated_values_with_endianness(reader.read_remaining(), encoding, endianness)?;

		Ok(ExtendedTextFrame {
			description,
			values,
		})
	}
}
