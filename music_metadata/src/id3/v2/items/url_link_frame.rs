use super::{read_encoding, read_terminated_text};
use crate::error::Result;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

/// Reads the content of a "W..." (excluding "WXXX") frame
///
/// URL frames are always Latin-1 and may optionally be terminated.
pub(in crate::id3::v2) fn parse_url(content: &[u8]) -> Result<String> {
	let mut reader = ByteReader::new(content);
	read_terminated_text(&mut reader, TextEncoding::Latin1)
}

/// Reads the content of a podcast feed ("WFED"/"WFD") frame
///
/// Unlike the other URL frames, these have an encoding byte.
pub(in crate::id3::v2) fn parse_podcast_url(content: &[u8]) -> Result<String> {
	let mut reader = ByteReader::new(content);
	let encoding = read_encoding(&mut reader)?;
	read_terminated_text(&mut reader, encoding)
}

#[cfg(test)]
mod tests {
	use super::{parse_podcast_url, parse_url};

	#[test_log::test]
	fn url_link() {
		assert_eq!(
			parse_url(b"https://example.com/artist").unwrap(),
			"https://example.com/artist"
		);
		assert_eq!(
			parse_url(b"https://example.com\x00junk").unwrap(),
			"https://example.com"
		);
		assert_eq!(parse_url(b"").unwrap(), "");
	}

	#[test_log::test]
	fn podcast_url() {
		assert_eq!(
			parse_podcast_url(b"\x03https://example.com/feed.xml\x00").unwrap(),
			"https://example.com/feed.xml"
		);
		assert!(parse_podcast_url(b"").is_err());
	}
}
