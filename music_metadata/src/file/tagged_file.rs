use super::file_type::FileType;
use crate::id3::v2::Id3v2Tag;

/// A file with its detected type and, if present, its ID3v2 tag
///
/// This is the result of [`Probe::read`](crate::probe::Probe::read), [`read_from`](crate::read_from),
/// and [`read_from_path`](crate::read_from_path).
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedFile {
	pub(crate) file_type: FileType,
	pub(crate) tag: Option<Id3v2Tag>,
}

impl TaggedFile {
	pub(crate) fn new(file_type: FileType, tag: Option<Id3v2Tag>) -> Self {
		Self { file_type, tag }
	}

	/// Returns the file's [`FileType`]
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use music_metadata::file::FileType;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// # let path_to_mp3 = "tests/files/assets/minimal/full_test.mp3";
	/// let tagged_file = music_metadata::read_from_path(path_to_mp3)?;
	///
	/// assert_eq!(tagged_file.file_type(), FileType::Mpeg);
	/// # Ok(()) }
	/// ```
	pub fn file_type(&self) -> FileType {
		self.file_type
	}

	/// Returns the file's ID3v2 tag, if it has one
	///
	/// Only [`FileType::Mpeg`] files are searched for tags.
	pub fn tag(&self) -> Option<&Id3v2Tag> {
		self.tag.as_ref()
	}

	/// Consumes the file, returning its ID3v2 tag
	pub fn into_tag(self) -> Option<Id3v2Tag> {
		self.tag
	}
}
