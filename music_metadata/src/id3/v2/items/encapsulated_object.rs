use super::{read_encoding, read_terminated_text};
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

/// Allows for encapsulation of any file type inside an ID3v2 tag
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct GeneralEncapsulatedObject {
	/// The file's mimetype
	pub mime_type: Option<String>,
	/// The file's name
	pub file_name: Option<String>,
	/// A unique content descriptor
	pub descriptor: Option<String>,
	/// The file's content
	pub data: Vec<u8>,
}

impl GeneralEncapsulatedObject {
	/// Read a [`GeneralEncapsulatedObject`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// This function will return an error if at any point it's unable to parse the data
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let encoding = read_encoding(&mut reader)?;

		// The MIME type is always Latin-1, regardless of the encoding byte
		let mime_type = read_terminated_text(&mut reader, TextEncoding::Latin1)?;
		let file_name = read_terminated_text(&mut reader, encoding)?;
		let descriptor = read_terminated_text(&mut reader, encoding)?;

		let data = reader.read_remaining().to_vec();

		Ok(Self {
			mime_type: text_or_none(mime_type),
			file_name: text_or_none(file_name),
			descriptor: text_or_none(descriptor),
			data,
		})
	}
}

fn text_or_none(text: String) -> Option<String> {
	(!text.is_empty()).then_some(text)
}
