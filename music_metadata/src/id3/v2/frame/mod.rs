pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	AttachedPictureFrame, AudioEncryptionFrame, Credit, ExtendedTextFrame, ExtendedUrlFrame,
	GeneralEncapsulatedObject, IdentifierFrame, LanguageFrame, PopularimeterFrame, Position,
	SynchronizedTextFrame,
};
use header::{FrameHeader, FrameId};

use std::ops::Range;

/// The decoded content of a [`Frame`]
///
/// The variant is chosen by the frame ID alone, see the variant docs for the IDs that
/// map to each. Frames that fail to decode, or that have an ID without a known layout,
/// are kept as [`FrameValue::Invalid`] with a description of the problem.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameValue {
	/// A frame that could not be decoded
	///
	/// This holds a human readable reason, such as `"truncated"` or `"unsupported frame type XXXX"`.
	Invalid(String),
	/// "T..." frames (excluding the ones below), "GRP1", "MVIN", "MVNM", "PCST"
	///
	/// "TCON" genres are resolved to their names, see [`GENRES`](crate::id3::v1::GENRES).
	TextList(Vec<String>),
	/// "TXXX"/"TXX"
	UserText(ExtendedTextFrame),
	/// "TRCK"/"TRK", "TPOS"/"TPA"
	Position(Position),
	/// "TMCL", "TIPL", "IPLS"/"IPL"
	Credits(Vec<Credit>),
	/// "APIC"/"PIC"
	Picture(AttachedPictureFrame),
	/// "W..." frames (excluding "WXXX"), "WFED"
	UrlLink(String),
	/// "WXXX"/"WXX"
	UserUrlLink(ExtendedUrlFrame),
	/// "COMM"/"COM", "USLT"/"ULT"
	Comment(LanguageFrame),
	/// "SYLT"/"SLT"
	SynchronizedText(SynchronizedTextFrame),
	/// "PCNT"/"CNT"
	///
	/// Some encoders write empty counters, these are `None`.
	Counter(Option<u64>),
	/// "UFID"/"UFI", "PRIV"
	Identifier(IdentifierFrame),
	/// "POPM"/"POP"
	Popularimeter(PopularimeterFrame),
	/// "GEOB"/"GEO"
	EncapsulatedObject(GeneralEncapsulatedObject),
	/// "AENC"/"CRA"
	AudioEncryption(AudioEncryptionFrame),
	/// "MCDI"/"MCI", the raw CD table of contents
	MusicCdTableOfContents(Vec<u8>),
}

impl FrameValue {
	/// Whether the frame failed to decode
	pub fn is_invalid(&self) -> bool {
		matches!(self, Self::Invalid(_))
	}

	/// Get the text values of a [`FrameValue::TextList`]
	pub fn as_text(&self) -> Option<&[String]> {
		match self {
			Self::TextList(values) => Some(values),
			_ => None,
		}
	}
}

macro_rules! impl_frame_value_from {
	($($variant:ident($type:ty)),+ $(,)?) => {
		$(
			impl From<$type> for FrameValue {
				fn from(value: $type) -> Self {
					FrameValue::$variant(value)
				}
			}
		)+
	};
}

impl_frame_value_from! {
	UserText(ExtendedTextFrame),
	Position(Position),
	Picture(AttachedPictureFrame),
	UserUrlLink(ExtendedUrlFrame),
	Comment(LanguageFrame),
	SynchronizedText(SynchronizedTextFrame),
	Identifier(IdentifierFrame),
	Popularimeter(PopularimeterFrame),
	EncapsulatedObject(GeneralEncapsulatedObject),
	AudioEncryption(AudioEncryptionFrame),
}

/// Represents an `ID3v2` frame
///
/// Frames are never upgraded, an ID3v2.2 tag will have [`FrameId::Outdated`] IDs such as "TT2".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
	pub(crate) header: FrameHeader,
	pub(crate) value: FrameValue,
	pub(crate) content_range: Range<usize>,
}

impl Frame {
	/// Get the ID of the frame
	pub fn id(&self) -> &FrameId {
		self.header.id()
	}

	/// Extract the string from the [`FrameId`]
	pub fn id_str(&self) -> &str {
		self.id().as_str()
	}

	/// Get the frame header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Get the flags for the frame
	///
	/// The group identifier and encryption method will be filled in when present.
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Get the decoded content of the frame
	pub fn value(&self) -> &FrameValue {
		&self.value
	}

	/// Take the decoded content of the frame
	pub fn into_value(self) -> FrameValue {
		self.value
	}

	/// The location of the raw frame content
	///
	/// This is relative to the start of the tag body (after the 10 byte header), *after*
	/// tag-wide unsynchronisation has been removed. It covers the content as declared by the
	/// frame header, including any prefix bytes added by the flags.
	pub fn content_range(&self) -> Range<usize> {
		self.content_range.clone()
	}

	/// Whether the frame failed to decode
	pub fn is_invalid(&self) -> bool {
		self.value.is_invalid()
	}
}

/// Various flags to describe the content of an item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	///
	/// All frames with the same group identifier byte belong to the same group.
	pub grouping_identity: Option<u8>,
	/// Frame is zlib compressed
	pub compression: bool,
	/// Frame encryption method symbol
	///
	/// NOTE: Since the encryption method is unknown, the content of these frames can't be read.
	pub encryption: Option<u8>,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// The data length indicator is the size of the frame if the flags were all zeroed out.
	/// This is usually used in combination with `compression` and `encryption`.
	///
	/// For ID3v2.3 frames, this holds the decompressed size of a compressed frame.
	pub data_length_indicator: Option<u32>,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	/// * `data_length_indicator`
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: (flags & 0x0040 == 0x0040).then_some(0),
			compression: flags & 0x0008 == 0x0008,
			encryption: (flags & 0x0004 == 0x0004).then_some(0),
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	/// * `data_length_indicator` (when `compression` is set)
	pub fn parse_id3v23(flags: u16) -> Self {
		let compression = flags & 0x0080 == 0x0080;

		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
			compression,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			unsynchronisation: false,
			data_length_indicator: compression.then_some(0),
		}
	}
}
