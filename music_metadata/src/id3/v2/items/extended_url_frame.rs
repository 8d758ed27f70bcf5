use super::{read_encoding, read_terminated_text};
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

use url::Url;

/// An extended `ID3v2` URL frame
///
/// This is used in the `WXXX` frame, where the frames
/// are told apart by descriptions, rather than their [`FrameId`](crate::id3::v2::FrameId)s.
/// This means for each `ExtendedUrlFrame` in the tag, the description
/// must be unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedUrlFrame {
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub url: Url,
}

impl ExtendedUrlFrame {
	/// Read an [`ExtendedUrlFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Unable to decode the text
	/// * The URL is not valid, see [`Url::parse`]
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let encoding = read_encoding(&mut reader)?;
		let description = read_terminated_text(&mut reader, encoding)?;
		let url = read_terminated_text(&mut reader, TextEncoding::Latin1)?;

		Ok(ExtendedUrlFrame {
			description,
			url: Url::parse(url.trim())?,
		})
	}
}
