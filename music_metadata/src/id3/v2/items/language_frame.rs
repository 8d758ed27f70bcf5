use super::read_encoding;
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::{decode_text, decode_text_with_endianness, utf16_bom_endianness};

/// An `ID3v2` frame with a language, description, and text
///
/// This is used for both comment ("COMM"/"COM") and unsynchronized lyrics ("USLT"/"ULT") frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageFrame {
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl LanguageFrame {
	/// The language code as a string, if it is valid ASCII
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::LanguageFrame;
	///
	/// let frame = LanguageFrame {
	/// 	language: *b"eng",
	/// 	description: String::new(),
	/// 	content: String::from("Great album"),
	/// };
	///
	/// assert_eq!(frame.language_str(), Some("eng"));
	/// ```
	pub fn language_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.language)
			.ok()
			.filter(|language| language.is_ascii())
	}

	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let encoding = read_encoding(&mut reader)?;

		let mut language = [0; 3];
		language.copy_from_slice(reader.read_bytes(3)?);

		let raw_description = reader.read_terminated(encoding);
		let description = decode_text(raw_description, encoding)?;

		// The text may rely on the BOM of the description
		let endianness = utf16_bom_endianness(raw_description).unwrap_or(u16::from_le_bytes);
		let content = decode_text_with_endianness(reader.read_remaining(), encoding, endianness)?;

		Ok(Self {
			language,
			description,
			content,
		})
	}
}
