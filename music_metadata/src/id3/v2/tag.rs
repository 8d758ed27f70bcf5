use super::frame::{Frame, FrameValue};
use super::header::{ExtendedHeader, Id3v2Header, Id3v2Version};
use super::items::{AttachedPictureFrame, LanguageFrame, Position};

/// An `ID3v2` tag
///
/// The frames are kept in the order they appear in the tag, and are never upgraded. This means
/// the IDs of an ID3v2.2 tag are the 3 character variants ("TT2" instead of "TIT2").
///
/// The convenience accessors (such as [`Id3v2Tag::title`]) accept the IDs of every version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Tag {
	pub(crate) header: Id3v2Header,
	pub(crate) extended_header: Option<ExtendedHeader>,
	pub(crate) frames: Vec<Frame>,
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	pub(crate) fn new(header: Id3v2Header) -> Self {
		Self {
			header,
			extended_header: None,
			frames: Vec::new(),
		}
	}

	/// The header the tag was read with
	pub fn header(&self) -> &Id3v2Header {
		&self.header
	}

	/// The version of the tag
	pub fn version(&self) -> Id3v2Version {
		self.header.version
	}

	/// The extended header, if one was present
	pub fn extended_header(&self) -> Option<&ExtendedHeader> {
		self.extended_header.as_ref()
	}

	/// All frames, in the order they were read
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns an iterator over the frames
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Gets the first [`Frame`] with an id
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::config::ParseOptions;
	/// use music_metadata::id3::v2::read_id3v2;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x0FTIT2\x00\x00\x00\x05\x00\x00\x03Home";
	/// let tag = read_id3v2(bytes, ParseOptions::new())?.unwrap();
	///
	/// assert!(tag.get("TIT2").is_some());
	/// assert!(tag.get("TALB").is_none());
	/// # Ok(()) }
	/// ```
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id_str() == id)
	}

	/// Gets all [`Frame`]s with an id
	pub fn get_all<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
		self.frames.iter().filter(move |frame| frame.id_str() == id)
	}

	fn values_of(&self, ids: &'static [&'static str]) -> impl Iterator<Item = &FrameValue> + '_ {
		self.frames
			.iter()
			.filter(move |frame| ids.contains(&frame.id_str()))
			.map(Frame::value)
	}

	fn first_text(&self, ids: &'static [&'static str]) -> Option<&str> {
		self.values_of(ids)
			.find_map(FrameValue::as_text)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	fn first_position(&self, ids: &'static [&'static str]) -> Option<&Position> {
		self.values_of(ids).find_map(|value| match value {
			FrameValue::Position(position) => Some(position),
			_ => None,
		})
	}

	/// The first title ("TIT2"/"TT2")
	pub fn title(&self) -> Option<&str> {
		self.first_text(&["TIT2", "TT2"])
	}

	/// The first artist ("TPE1"/"TP1")
	pub fn artist(&self) -> Option<&str> {
		self.first_text(&["TPE1", "TP1"])
	}

	/// The first album title ("TALB"/"TAL")
	pub fn album(&self) -> Option<&str> {
		self.first_text(&["TALB", "TAL"])
	}

	/// The genres ("TCON"/"TCO"), with ID3v1 genre numbers resolved to their names
	pub fn genres(&self) -> Option<&[String]> {
		self.values_of(&["TCON", "TCO"]).find_map(FrameValue::as_text)
	}

	/// The track number and total ("TRCK"/"TRK")
	pub fn track(&self) -> Option<&Position> {
		self.first_position(&["TRCK", "TRK"])
	}

	/// The disc number and total ("TPOS"/"TPA")
	pub fn disk(&self) -> Option<&Position> {
		self.first_position(&["TPOS", "TPA"])
	}

	/// All comments ("COMM"/"COM")
	pub fn comments(&self) -> impl Iterator<Item = &LanguageFrame> + '_ {
		self.values_of(&["COMM", "COM"])
			.filter_map(|value| match value {
				FrameValue::Comment(comment) => Some(comment),
				_ => None,
			})
	}

	/// All pictures ("APIC"/"PIC")
	pub fn pictures(&self) -> impl Iterator<Item = &AttachedPictureFrame> + '_ {
		self.values_of(&["APIC", "PIC"])
			.filter_map(|value| match value {
				FrameValue::Picture(picture) => Some(picture),
				_ => None,
			})
	}
}
