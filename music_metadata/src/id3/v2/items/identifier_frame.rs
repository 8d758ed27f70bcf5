use super::read_terminated_text;
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

/// An owner identifier followed by binary data
///
/// This is used for unique file identifier ("UFID"/"UFI") and private ("PRIV") frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentifierFrame {
	/// The owner of the frame, usually a URL or email address
	pub owner: String,
	/// The binary data, which is not interpreted
	pub data: Vec<u8>,
}

impl IdentifierFrame {
	/// Decode the frame contents from bytes
	///
	/// # Errors
	///
	/// The owner is not valid Latin-1
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let owner = read_terminated_text(&mut reader, TextEncoding::Latin1)?;
		let data = reader.read_remaining().to_vec();

		Ok(Self { owner, data })
	}
}
