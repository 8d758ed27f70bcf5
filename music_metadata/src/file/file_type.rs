use crate::id3::v2::header::ID3V2_HEADER_SIZE;
use crate::mpeg::header::{is_adts, search_for_frame_sync, verify_frame_sync};

use std::ffi::OsStr;
use std::path::Path;

/// The number of bytes searched for an MPEG frame sync, when a stream doesn't start with one
pub(crate) const MAX_JUNK_BYTES: usize = 1024;

/// List of common audio extensions
///
/// This contains a bunch of common extensions for all known [`FileType`]s, and can be used a filter
/// when scanning directories.
///
/// NOTE: This is **not** an exhaustive list, but it should work fine in most cases.
pub const EXTENSIONS: &[&str] = &[
	// Also update `FileType::from_ext()` below
	"aac", "ape", "aiff", "aif", "afc", "aifc", "mp3", "mp2", "mp1", "wav", "wv", "opus", "flac",
	"ogg", "mp4", "m4a", "m4b", "m4p", "m4r", "m4v", "3gp", "mpc", "mp+", "mpp", "spx",
];

/// The type of file read
///
/// Only [`FileType::Mpeg`] files have their tags read, the rest are only recognized.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum FileType {
	Aac,
	Aiff,
	Ape,
	Flac,
	Mpeg,
	Mp4,
	Mpc,
	Opus,
	Vorbis,
	Speex,
	Wav,
	WavPack,
}

impl FileType {
	/// The primary extension for the file type
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	///
	/// assert_eq!(FileType::Mpeg.extension(), "mp3");
	/// ```
	pub fn extension(self) -> &'static str {
		match self {
			FileType::Aac => "aac",
			FileType::Aiff => "aiff",
			FileType::Ape => "ape",
			FileType::Flac => "flac",
			FileType::Mpeg => "mp3",
			FileType::Mp4 => "m4a",
			FileType::Mpc => "mpc",
			FileType::Opus => "opus",
			FileType::Vorbis => "ogg",
			FileType::Speex => "spx",
			FileType::Wav => "wav",
			FileType::WavPack => "wv",
		}
	}

	/// The MIME type for the file type
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	///
	/// assert_eq!(FileType::Mpeg.mime_type(), "audio/mpeg");
	/// ```
	pub fn mime_type(self) -> &'static str {
		match self {
			FileType::Aac => "audio/aac",
			FileType::Aiff => "audio/aiff",
			FileType::Ape => "audio/ape",
			FileType::Flac => "audio/flac",
			FileType::Mpeg => "audio/mpeg",
			FileType::Mp4 => "audio/mp4",
			FileType::Mpc => "audio/x-musepack",
			FileType::Opus => "audio/opus",
			FileType::Vorbis => "audio/vorbis",
			FileType::Speex => "audio/speex",
			FileType::Wav => "audio/wav",
			FileType::WavPack => "audio/wavpack",
		}
	}

	/// Attempts to extract a [`FileType`] from an extension
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	///
	/// let extension = "mp3";
	/// assert_eq!(FileType::from_ext(extension), Some(FileType::Mpeg));
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		// Also update `EXTENSIONS` above
		match ext.as_str() {
			"aac" => Some(Self::Aac),
			"ape" => Some(Self::Ape),
			"aiff" | "aif" | "afc" | "aifc" => Some(Self::Aiff),
			"mp3" | "mp2" | "mp1" => Some(Self::Mpeg),
			"wav" | "wave" => Some(Self::Wav),
			"wv" => Some(Self::WavPack),
			"opus" => Some(Self::Opus),
			"flac" => Some(Self::Flac),
			"ogg" => Some(Self::Vorbis),
			"mp4" | "m4a" | "m4b" | "m4p" | "m4r" | "m4v" | "3gp" => Some(Self::Mp4),
			"mpc" | "mp+" | "mpp" => Some(Self::Mpc),
			"spx" => Some(Self::Speex),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a path
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	/// use std::path::Path;
	///
	/// let path = Path::new("path/to/my.mp3");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Mpeg));
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let ext = path.as_ref().extension();
		ext.and_then(Self::from_ext)
	}

	/// Attempts to extract a [`FileType`] from a buffer
	///
	/// Unlike [`Probe::guess_file_type`], the buffer is expected to hold everything needed. A
	/// buffer starting with an ID3v2 tag is classified by the data following the tag, and is
	/// assumed to be an MPEG stream if nothing else is recognized.
	///
	/// [`Probe::guess_file_type`]: crate::probe::Probe::guess_file_type
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::file::FileType;
	///
	/// assert_eq!(FileType::from_buffer(b"fLaC\x00\x00\x00\x22"), Some(FileType::Flac));
	///
	/// // An empty ID3v2 tag, followed by nothing
	/// assert_eq!(
	/// 	FileType::from_buffer(b"ID3\x04\x00\x00\x00\x00\x00\x00"),
	/// 	Some(FileType::Mpeg)
	/// );
	///
	/// assert_eq!(FileType::from_buffer(b"nothing"), None);
	/// ```
	pub fn from_buffer(buf: &[u8]) -> Option<Self> {
		match Self::from_buffer_inner(buf)? {
			FileTypeGuessResult::Determined(file_ty) => Some(file_ty),
			FileTypeGuessResult::MaybePrecededById3(id3_len) => {
				let after_id3 = ID3V2_HEADER_SIZE.saturating_add(id3_len as usize);
				let remaining = buf.get(after_id3..).unwrap_or_default();

				Some(Self::guess_after_id3(remaining).unwrap_or(Self::Mpeg))
			},
			FileTypeGuessResult::MaybePrecededByJunk => Self::search_mpeg_or_aac(buf),
		}
	}

	pub(crate) fn from_buffer_inner(buf: &[u8]) -> Option<FileTypeGuessResult> {
		use crate::id3::v2::util::synchsafe::SynchsafeInteger;

		// Start out with an empty return
		let mut ret = None;

		if buf.is_empty() {
			return ret;
		}

		match Self::quick_type_guess(buf) {
			Some(f_ty) => ret = Some(FileTypeGuessResult::Determined(f_ty)),
			// Special case for ID3, gets checked in `Probe::guess_file_type`
			// The bare minimum size for an ID3v2 header is 10 bytes
			None if buf.len() >= ID3V2_HEADER_SIZE && &buf[..3] == b"ID3" => {
				// This is infallible, but preferable to an unwrap
				if let Ok(arr) = buf[6..10].try_into() {
					let mut id3_len = u32::from_be_bytes(arr).unsynch();

					// The footer is a copy of the header
					if buf[5] & 0x10 == 0x10 {
						id3_len = id3_len.saturating_add(ID3V2_HEADER_SIZE as u32);
					}

					ret = Some(FileTypeGuessResult::MaybePrecededById3(id3_len));
				}
			},
			None => ret = Some(FileTypeGuessResult::MaybePrecededByJunk),
		}

		ret
	}

	/// Guess the type of a stream that started with an ID3v2 tag, using its first 4 bytes after the tag
	fn guess_after_id3(ident: &[u8]) -> Option<Self> {
		match ident {
			[b'M', b'A', b'C', ..] => Some(FileType::Ape),
			[b'f', b'L', b'a', b'C', ..] => Some(FileType::Flac),
			[b'M', b'P', b'C', b'K', ..] | [b'M', b'P', b'+', ..] => Some(FileType::Mpc),
			_ => Self::search_mpeg_or_aac(ident),
		}
	}

	fn search_mpeg_or_aac(buf: &[u8]) -> Option<Self> {
		let window = &buf[..buf.len().min(MAX_JUNK_BYTES)];

		let sync_index = search_for_frame_sync(&mut &*window).ok()?? as usize;
		let frame_sync = [window[sync_index], window[sync_index + 1]];

		if is_adts(frame_sync) {
			Some(FileType::Aac)
		} else {
			Some(FileType::Mpeg)
		}
	}

	fn quick_type_guess(buf: &[u8]) -> Option<Self> {
		// Safe to index, since we return early on an empty buffer
		match buf[0] {
			77 if buf.starts_with(b"MAC") => Some(Self::Ape),
			255 if buf.len() >= 2 && verify_frame_sync([buf[0], buf[1]]) => {
				// ADTS and MPEG frame headers are way too similar, see `is_adts`
				if is_adts([buf[0], buf[1]]) {
					return Some(Self::Aac);
				}

				Some(Self::Mpeg)
			},
			70 if buf.len() >= 12 && &buf[..4] == b"FORM" => {
				let id = &buf[8..12];

				if id == b"AIFF" || id == b"AIFC" {
					return Some(Self::Aiff);
				}

				None
			},
			79 if buf.len() >= 36 && &buf[..4] == b"OggS" => {
				if &buf[29..35] == b"vorbis" {
					return Some(Self::Vorbis);
				} else if &buf[28..36] == b"OpusHead" {
					return Some(Self::Opus);
				} else if &buf[28..36] == b"Speex   " {
					return Some(Self::Speex);
				}

				None
			},
			102 if buf.starts_with(b"fLaC") => Some(Self::Flac),
			82 if buf.len() >= 12 && &buf[..4] == b"RIFF" => {
				if &buf[8..12] == b"WAVE" {
					return Some(Self::Wav);
				}

				None
			},
			119 if buf.len() >= 4 && &buf[..4] == b"wvpk" => Some(Self::WavPack),
			_ if buf.len() >= 8 && &buf[4..8] == b"ftyp" => Some(Self::Mp4),
			_ if buf.starts_with(b"MPCK") || buf.starts_with(b"MP+") => Some(Self::Mpc),
			_ => None,
		}
	}
}

/// The result of a `FileType` guess
///
/// External callers of `FileType::from_buffer()` will only ever see `Determined` cases.
/// The remaining cases are used internally in `Probe::guess_file_type()`.
pub(crate) enum FileTypeGuessResult {
	/// The `FileType` was guessed
	Determined(FileType),
	/// The stream starts with an ID3v2 tag, this holds its size (excluding the header)
	MaybePrecededById3(u32),
	/// The stream starts with potential junk data
	MaybePrecededByJunk,
}

#[cfg(test)]
mod tests {
	use super::FileType;

	#[test_log::test]
	fn extensions() {
		for ext in super::EXTENSIONS {
			assert!(FileType::from_ext(ext).is_some(), "{ext}");
		}

		assert_eq!(FileType::from_ext("MP3"), Some(FileType::Mpeg));
		assert_eq!(FileType::from_ext("txt"), None);
		assert_eq!(FileType::from_path("a/b/c.FLAC"), Some(FileType::Flac));
		assert_eq!(FileType::from_path("no_extension"), None);
	}

	#[test_log::test]
	fn mpeg_classification() {
		assert_eq!(FileType::Mpeg.extension(), "mp3");
		assert_eq!(FileType::Mpeg.mime_type(), "audio/mpeg");

		assert_eq!(
			FileType::from_buffer(&[0xFF, 0xFB, 0x90, 0x00]),
			Some(FileType::Mpeg)
		);
		assert_eq!(
			FileType::from_buffer(&[0xFF, 0xF1, 0x50, 0x80]),
			Some(FileType::Aac)
		);

		// Junk before the first frame
		assert_eq!(
			FileType::from_buffer(&[0x20, 0x20, 0x20, 0xFF, 0xFB, 0x90, 0x00]),
			Some(FileType::Mpeg)
		);
	}

	#[test_log::test]
	fn after_id3v2() {
		let mut buf = b"ID3\x03\x00\x00\x00\x00\x00\x04\x00\x00\x00\x00".to_vec();
		buf.extend(b"fLaC");
		assert_eq!(FileType::from_buffer(&buf), Some(FileType::Flac));

		// With a footer, the audio starts 10 bytes later
		let mut buf = b"ID3\x04\x00\x10\x00\x00\x00\x00".to_vec();
		buf.extend(b"3DI\x04\x00\x10\x00\x00\x00\x00");
		buf.extend(b"MAC ");
		assert_eq!(FileType::from_buffer(&buf), Some(FileType::Ape));

		// Anything else is assumed to be MPEG
		let buf = b"ID3\x04\x00\x00\x00\x00\x00\x00????";
		assert_eq!(FileType::from_buffer(buf), Some(FileType::Mpeg));
	}

	#[test_log::test]
	fn other_formats() {
		assert_eq!(FileType::from_buffer(b"RIFF\x00\x00\x00\x00WAVE"), Some(FileType::Wav));
		assert_eq!(FileType::from_buffer(b"FORM\x00\x00\x00\x00AIFF"), Some(FileType::Aiff));
		assert_eq!(FileType::from_buffer(b"\x00\x00\x00\x20ftypM4A "), Some(FileType::Mp4));
		assert_eq!(FileType::from_buffer(b"wvpk"), Some(FileType::WavPack));
		assert_eq!(FileType::from_buffer(b"MPCK"), Some(FileType::Mpc));
		assert_eq!(FileType::from_buffer(b""), None);
		assert_eq!(FileType::from_buffer(b"plain text"), None);
	}
}
