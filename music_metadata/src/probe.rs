//! Format-agonostic file parsing tools

use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::{FileType, FileTypeGuessResult, MAX_JUNK_BYTES, TaggedFile};
use crate::id3::find_id3v2;
use crate::id3::v2::header::ID3V2_HEADER_SIZE;
use crate::macros::err;
use crate::mpeg::header::{is_adts, search_for_frame_sync};

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// A format agnostic reader
///
/// This provides a way to determine the [`FileType`] of a reader, for when a concrete
/// type is not known.
///
/// ## Usage
///
/// When reading from a path, the [`FileType`] will be inferred from the path, rather than the
/// open file.
///
/// ```rust,no_run
/// # fn main() -> music_metadata::error::Result<()> {
/// use music_metadata::file::FileType;
/// use music_metadata::probe::Probe;
///
/// let probe = Probe::open("path/to/my.mp3")?;
///
/// // Inferred from the `mp3` extension
/// assert_eq!(probe.file_type(), Some(FileType::Mpeg));
/// # Ok(())
/// # }
/// ```
///
/// When a path isn't available, or is unreliable, content-based detection is also possible.
///
/// ```rust
/// # fn main() -> music_metadata::error::Result<()> {
/// use music_metadata::file::FileType;
/// use music_metadata::probe::Probe;
/// use std::io::Cursor;
///
/// // An ID3v2.4 tag with a single "TIT2" frame, followed by an MPEG frame
/// let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x0FTIT2\x00\x00\x00\x05\x00\x00\x03Home".to_vec();
/// data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
///
/// let tagged_file = Probe::new(Cursor::new(data)).guess_file_type()?.read()?;
///
/// assert_eq!(tagged_file.file_type(), FileType::Mpeg);
/// assert_eq!(tagged_file.tag().and_then(|tag| tag.title()), Some("Home"));
/// # Ok(())
/// # }
/// ```
pub struct Probe<R: Read> {
	inner: R,
	options: Option<ParseOptions>,
	f_ty: Option<FileType>,
}

impl<R: Read> Probe<R> {
	/// Create a new `Probe`
	///
	/// Before creating a `Probe`, consider wrapping it in a [`BufReader`] for better
	/// performance.
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::probe::Probe;
	/// use std::io::Cursor;
	///
	/// let probe = Probe::new(Cursor::new([0xFF, 0xFB, 0x90, 0x00]));
	/// assert_eq!(probe.file_type(), None);
	/// ```
	#[must_use]
	pub const fn new(reader: R) -> Self {
		Self {
			inner: reader,
			options: None,
			f_ty: None,
		}
	}

	/// Create a new `Probe` with a specified [`FileType`]
	///
	/// Before creating a `Probe`, consider wrapping it in a [`BufReader`] for better
	/// performance.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use music_metadata::file::FileType;
	/// use music_metadata::probe::Probe;
	/// use std::fs::File;
	/// use std::io::BufReader;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// # let my_mp3_path = "path/to/my.mp3";
	/// // We know the file is going to be an MP3,
	/// // so we can skip the format detection
	/// let file = File::open(my_mp3_path)?;
	/// let reader = BufReader::new(file);
	///
	/// let probe = Probe::with_file_type(reader, FileType::Mpeg);
	/// # Ok(()) }
	/// ```
	pub fn with_file_type(reader: R, file_type: FileType) -> Self {
		Self {
			inner: reader,
			options: None,
			f_ty: Some(file_type),
		}
	}

	/// Returns the current [`FileType`]
	pub fn file_type(&self) -> Option<FileType> {
		self.f_ty
	}

	/// Set the [`FileType`] with which to read the file
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	/// use music_metadata::probe::Probe;
	///
	/// # let reader = std::io::Cursor::new(&[]);
	/// let probe = Probe::new(reader);
	/// assert_eq!(probe.file_type(), None);
	///
	/// let probe = probe.set_file_type(FileType::Mpeg);
	///
	/// assert_eq!(probe.file_type(), Some(FileType::Mpeg));
	/// ```
	pub fn set_file_type(mut self, file_type: FileType) -> Self {
		self.f_ty = Some(file_type);
		self
	}

	/// Set the [`ParseOptions`] for the Probe
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::config::ParseOptions;
	/// use music_metadata::probe::Probe;
	///
	/// # let reader = std::io::Cursor::new(&[]);
	/// // By default, pictures will be read.
	/// // In this example, we want to turn this off.
	/// let options = ParseOptions::new().read_cover_art(false);
	///
	/// let probe = Probe::new(reader).options(options);
	/// ```
	#[must_use]
	pub fn options(mut self, options: ParseOptions) -> Self {
		self.options = Some(options);
		self
	}

	/// Extract the reader
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Attempts to extract a [`TaggedFile`] from the reader
	///
	/// The reader is expected to be positioned at the start of the file. Only
	/// [`FileType::Mpeg`] files are searched for an ID3v2 tag, any other type produces a
	/// [`TaggedFile`] without one.
	///
	/// # Errors
	///
	/// * No file type
	///     - This expects the file type to have been set already, either with
	///       [`Probe::guess_file_type`] or [`Probe::set_file_type`]. When reading from
	///       paths, this is not necessary.
	/// * The reader contains an invalid ID3v2 tag (see [`ParsingMode`](crate::config::ParsingMode))
	pub fn read(mut self) -> Result<TaggedFile> {
		let Some(file_type) = self.f_ty else {
			err!(UnknownFormat);
		};

		let options = self.options.unwrap_or_default();

		let tag = match file_type {
			FileType::Mpeg => find_id3v2(&mut self.inner, options)?,
			_ => {
				log::debug!("Probe: Tags are not read from {file_type:?} files");
				None
			},
		};

		Ok(TaggedFile::new(file_type, tag))
	}
}

impl Probe<BufReader<File>> {
	/// Opens a file for reading
	///
	/// This will initially guess the [`FileType`] from the path, but
	/// this can be overwritten with [`Probe::guess_file_type`] or [`Probe::set_file_type`]
	///
	/// # Errors
	///
	/// * `path` does not exist
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use music_metadata::file::FileType;
	/// use music_metadata::probe::Probe;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let probe = Probe::open("path/to/my.mp3")?;
	///
	/// // Guessed from the "mp3" extension, see `FileType::from_ext`
	/// assert_eq!(probe.file_type(), Some(FileType::Mpeg));
	/// # Ok(()) }
	/// ```
	pub fn open<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Probe: Opening `{}` for reading", path.display());

		let file_type = FileType::from_path(path);
		log::debug!("Probe: Guessed file type `{:?}` from extension", file_type);

		Ok(Self {
			inner: BufReader::new(File::open(path)?),
			options: None,
			f_ty: file_type,
		})
	}
}

impl<R: Read + Seek> Probe<R> {
	/// Attempts to get the [`FileType`] based on the data in the reader
	///
	/// On success, the file type will be replaced. The reader is always returned to its
	/// starting position.
	///
	/// # Errors
	///
	/// All errors that occur within this function are [`std::io::Error`].
	/// If an error does occur, there is likely an issue with the provided
	/// reader, and the entire `Probe` should be discarded.
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	/// use music_metadata::probe::Probe;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let reader = std::io::Cursor::new(b"fLaC\x00\x00\x00\x22");
	/// let probe = Probe::new(reader).guess_file_type()?;
	///
	/// assert_eq!(probe.file_type(), Some(FileType::Flac));
	/// # Ok(()) }
	/// ```
	pub fn guess_file_type(mut self) -> std::io::Result<Self> {
		let f_ty = self.guess_inner()?;
		self.f_ty = f_ty.or(self.f_ty);

		log::debug!("Probe: Guessed file type: {:?}", self.f_ty);

		Ok(self)
	}

	fn guess_inner(&mut self) -> std::io::Result<Option<FileType>> {
		// temporary buffer for storing 36 bytes
		// (36 is just a guess as to how long the data for estimating the file type might be)
		let mut buf = [0; 36];

		let starting_position = self.inner.stream_position()?;
		// Read (up to) 36 bytes
		let buf_len = std::io::copy(
			&mut self.inner.by_ref().take(buf.len() as u64),
			&mut Cursor::new(&mut buf[..]),
		)? as usize;

		self.inner.seek(SeekFrom::Start(starting_position))?;

		// Guess the file type by using these 36 bytes
		let Some(file_type_guess) = FileType::from_buffer_inner(&buf[..buf_len]) else {
			return Ok(None);
		};

		match file_type_guess {
			// We were able to determine a file type
			FileTypeGuessResult::Determined(file_ty) => Ok(Some(file_ty)),
			// The file starts with an ID3v2 tag, other data can follow (e.g. APE or MP3 frames)
			FileTypeGuessResult::MaybePrecededById3(id3_len) => {
				// `id3_len` is the size of the tag, not including the header
				let skip = u64::from(id3_len) + ID3V2_HEADER_SIZE as u64;
				log::debug!("Probe: ID3v2 tag detected, skipping {skip} bytes");

				self.inner.seek(SeekFrom::Start(starting_position + skip))?;

				// try to guess the file type after the ID3 block by inspecting the first 4 bytes
				let mut ident = [0; 4];
				let ident_len = std::io::copy(
					&mut self.inner.by_ref().take(ident.len() as u64),
					&mut Cursor::new(&mut ident[..]),
				)? as usize;

				let file_type_after_id3_block = match &ident[..ident_len] {
					[b'M', b'A', b'C', ..] => Ok(Some(FileType::Ape)),
					b"fLaC" => Ok(Some(FileType::Flac)),
					b"MPCK" | [b'M', b'P', b'+', ..] => Ok(Some(FileType::Mpc)),
					// Search for a frame sync, which may be preceded by junk
					_ => {
						self.inner.seek(SeekFrom::Start(starting_position + skip))?;
						// Nothing recognizable after the tag, it still belongs to an MPEG file
						self.check_mpeg_or_aac()
							.map(|f_ty| f_ty.or(Some(FileType::Mpeg)))
					},
				};

				// before returning any result for a file type, seek back to the front
				self.inner.seek(SeekFrom::Start(starting_position))?;

				file_type_after_id3_block
			},
			FileTypeGuessResult::MaybePrecededByJunk => {
				log::debug!(
					"Probe: Possible junk bytes detected, searching up to {} bytes",
					MAX_JUNK_BYTES
				);

				let ret = self.check_mpeg_or_aac();

				// before returning any result for a file type, seek back to the front
				self.inner.seek(SeekFrom::Start(starting_position))?;

				ret
			},
		}
	}

	/// Searches for an MPEG/AAC frame sync, which may be preceded by junk bytes
	fn check_mpeg_or_aac(&mut self) -> std::io::Result<Option<FileType>> {
		{
			let mut restricted_reader = self.inner.by_ref().take(MAX_JUNK_BYTES as u64);
			if search_for_frame_sync(&mut restricted_reader)?.is_none() {
				return Ok(None);
			}
		}

		// Seek back to the start of the frame sync to check if we are dealing with
		// an AAC or MPEG file. See `FileType::quick_type_guess` for explanation.
		let sync_pos = self.inner.seek(SeekFrom::Current(-2))?;
		log::debug!("Probe: Found possible frame sync at position {}", sync_pos);

		let mut buf = [0; 2];
		self.inner.read_exact(&mut buf)?;

		if is_adts(buf) {
			Ok(Some(FileType::Aac))
		} else {
			Ok(Some(FileType::Mpeg))
		}
	}
}

/// Read a [`TaggedFile`] from a reader
///
/// The [`FileType`] is guessed from the content.
///
/// # Errors
///
/// See:
///
/// * [`Probe::guess_file_type`]
/// * [`Probe::read`]
///
/// # Examples
///
/// ```rust
/// use music_metadata::file::FileType;
/// use music_metadata::read_from;
/// use std::io::Cursor;
///
/// # fn main() -> music_metadata::error::Result<()> {
/// let mut reader = Cursor::new([0xFF, 0xFB, 0x90, 0x00]);
///
/// let parsed_file = read_from(&mut reader)?;
/// assert_eq!(parsed_file.file_type(), FileType::Mpeg);
/// assert!(parsed_file.tag().is_none());
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R) -> Result<TaggedFile>
where
	R: Read + Seek,
{
	Probe::new(reader).guess_file_type()?.read()
}

/// Read a [`TaggedFile`] from a path
///
/// The [`FileType`] is guessed from the content, falling back to the extension.
///
/// # Errors
///
/// See:
///
/// * [`Probe::open`]
/// * [`Probe::guess_file_type`]
/// * [`Probe::read`]
///
/// # Examples
///
/// ```rust,no_run
/// use music_metadata::read_from_path;
///
/// # fn main() -> music_metadata::error::Result<()> {
/// # let path = "path/to/my.mp3";
/// let parsed_file = read_from_path(path)?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> Result<TaggedFile>
where
	P: AsRef<Path>,
{
	Probe::open(path)?.guess_file_type()?.read()
}
