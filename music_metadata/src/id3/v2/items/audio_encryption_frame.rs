use super::read_terminated_text;
use crate::error::Result;
use crate::macros::id3v2_err;
use crate::util::bytes::ByteReader;
use crate::util::text::TextEncoding;

use byteorder::BigEndian;

/// An audio encryption ("AENC"/"CRA") frame
///
/// This describes how the audio stream itself is encrypted, the frames of the tag are unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AudioEncryptionFrame {
	/// The owner of the encryption method, usually a URL or email address
	pub owner: String,
	/// The first unencrypted MPEG frame of the preview
	pub preview_start: Option<u16>,
	/// The number of unencrypted MPEG frames in the preview
	pub preview_length: Option<u16>,
	/// Data required to decrypt the audio, specific to the owner
	pub encryption_info: Option<Vec<u8>>,
}

impl AudioEncryptionFrame {
	/// Read an [`AudioEncryptionFrame`] from a slice
	///
	/// # Errors
	///
	/// * The owner is not valid Latin-1
	/// * The preview fields are cut short
	pub(crate) fn parse(content: &[u8]) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let owner = read_terminated_text(&mut reader, TextEncoding::Latin1)?;

		let mut frame = Self {
			owner,
			preview_start: None,
			preview_length: None,
			encryption_info: None,
		};

		if reader.is_empty() {
			return Ok(frame);
		}

		if reader.remaining() < 4 {
			id3v2_err!(BadFrameLength);
		}

		frame.preview_start = Some(reader.read_u16::<BigEndian>()?);
		frame.preview_length = Some(reader.read_u16::<BigEndian>()?);

		let encryption_info = reader.read_remaining();
		if !encryption_info.is_empty() {
			frame.encryption_info = Some(encryption_info.to_vec());
		}

		Ok(frame)
	}
}

#[cfg(test)]
mod tests {
	use super::AudioEncryptionFrame;
	use crate::error::{ErrorKind, Id3v2ErrorKind};

	#[test_log::test]
	fn aenc() {
		let frame =
			AudioEncryptionFrame::parse(b"owner@example.com\x00\x00\x10\x00\x20\x01\x02").unwrap();

		assert_eq!(frame.owner, "owner@example.com");
		assert_eq!(frame.preview_start, Some(0x10));
		assert_eq!(frame.preview_length, Some(0x20));
		assert_eq!(frame.encryption_info.as_deref(), Some(&[0x01, 0x02][..]));
	}

	#[test_log::test]
	fn aenc_without_preview() {
		let frame = AudioEncryptionFrame::parse(b"owner\x00").unwrap();

		assert_eq!(frame.owner, "owner");
		assert_eq!(frame.preview_start, None);
		assert_eq!(frame.preview_length, None);
		assert_eq!(frame.encryption_info, None);
	}

	#[test_log::test]
	fn aenc_preview_without_info() {
		let frame = AudioEncryptionFrame::parse(b"owner\x00\x00\x01\x00\x02").unwrap();
		assert_eq!(frame.preview_length, Some(2));
		assert_eq!(frame.encryption_info, None);
	}

	#[test_log::test]
	fn aenc_truncated_preview() {
		let err = AudioEncryptionFrame::parse(b"owner\x00\x00\x01").unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::BadFrameLength)
		));
	}
}
