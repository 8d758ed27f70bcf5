use super::{read_counter, read_terminated_text};
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

/// The contents of a popularimeter ("POPM") frame
///
/// A tag can contain multiple "POPM" frames, but there must only be
/// one with the same email address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PopularimeterFrame {
	/// An email address of the user performing the rating
	pub email: String,
	/// A rating of 1-255, where 1 is the worst and 255 is the best.
	/// A rating of 0 is unknown.
	///
	/// For mapping this value to a star rating see: <https://en.wikipedia.org/wiki/ID3#ID3v2_star_rating_tag_issue>
	pub rating: u8,
	/// A play counter for the user, if one was stored
	///
	/// This is a `u64` for simplicity. It may change if it becomes an issue.
	pub counter: Option<u64>,
}

impl PopularimeterFrame {
	/// Convert ID3v2 POPM frame bytes into a [`PopularimeterFrame`].
	///
	/// # Errors
	///
	/// * Email is improperly encoded
	/// * `bytes` doesn't contain enough data
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let email = read_terminated_text(&mut reader, TextEncoding::Latin1)?;
		let rating = reader.read_u8()?;

		// The counter may be omitted entirely
		let counter_content = reader.read_remaining();
		let counter = (!counter_content.is_empty()).then(|| read_counter(counter_content));

		Ok(Self {
			email,
			rating,
			counter,
		})
	}
}
