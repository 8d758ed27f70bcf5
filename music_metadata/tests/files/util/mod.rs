use music_metadata::config::ParseOptions;
use music_metadata::file::FileType;
use music_metadata::id3::v2::Id3v2Tag;
use music_metadata::probe::Probe;

use std::io::{Cursor, Write as _};

use tempfile::NamedTempFile;

/// The start of an MPEG-1 Layer III frame, enough to be detected as MPEG audio
pub const MPEG_FRAME: &[u8] = &[
	0xFF, 0xFB, 0x50, 0xC4, 0x00, 0x03, 0xC0, 0x00, 0x01, 0xA4, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00,
	0x34, 0x80, 0x00, 0x00, 0x04,
];

/// Encode `n` as a 4 byte synchsafe integer
pub fn synchsafe(n: u32) -> [u8; 4] {
	assert!(n < 1 << 28, "{n} doesn't fit in a synchsafe integer");
	[
		((n >> 21) & 0x7F) as u8,
		((n >> 14) & 0x7F) as u8,
		((n >> 7) & 0x7F) as u8,
		(n & 0x7F) as u8,
	]
}

/// Builds an ID3v2 tag byte by byte
pub struct TagBuilder {
	version: u8,
	flags: u8,
	body: Vec<u8>,
	declared_size: Option<u32>,
}

impl TagBuilder {
	pub fn new(version: u8) -> Self {
		assert!((2..=4).contains(&version));
		Self {
			version,
			flags: 0,
			body: Vec::new(),
			declared_size: None,
		}
	}

	/// Set the tag header flags byte
	pub fn flags(mut self, flags: u8) -> Self {
		self.flags = flags;
		self
	}

	/// Declare a tag size other than the actual body length
	pub fn declared_size(mut self, size: u32) -> Self {
		self.declared_size = Some(size);
		self
	}

	/// Append a frame, `flags` are ignored for ID3v2.2
	pub fn frame_with_flags(mut self, id: &str, flags: [u8; 2], content: &[u8]) -> Self {
		let len = content.len() as u32;

		self.body.extend_from_slice(id.as_bytes());
		match self.version {
			2 => self.body.extend_from_slice(&len.to_be_bytes()[1..]),
			3 => self.body.extend_from_slice(&len.to_be_bytes()),
			_ => self.body.extend_from_slice(&synchsafe(len)),
		}

		if self.version > 2 {
			self.body.extend_from_slice(&flags);
		}

		self.body.extend_from_slice(content);
		self
	}

	pub fn frame(self, id: &str, content: &[u8]) -> Self {
		self.frame_with_flags(id, [0, 0], content)
	}

	/// Append a text frame, UTF-8 for ID3v2.4 and Latin-1 otherwise
	pub fn text(self, id: &str, value: &str) -> Self {
		let encoding = if self.version == 4 { 3 } else { 0 };

		let mut content = vec![encoding];
		content.extend_from_slice(value.as_bytes());
		self.frame(id, &content)
	}

	/// Append raw bytes to the tag body
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.body.extend_from_slice(bytes);
		self
	}

	pub fn padding(mut self, len: usize) -> Self {
		self.body.resize(self.body.len() + len, 0);
		self
	}

	pub fn build(self) -> Vec<u8> {
		let size = self.declared_size.unwrap_or(self.body.len() as u32);

		let mut tag = vec![b'I', b'D', b'3', self.version, 0, self.flags];
		tag.extend_from_slice(&synchsafe(size));
		tag.extend(self.body);
		tag
	}

	/// Build the tag, followed by an MPEG frame
	pub fn build_mp3(self) -> Vec<u8> {
		let mut file = self.build();
		file.extend_from_slice(MPEG_FRAME);
		file
	}
}

/// Write `content` to a temporary file with the extension `ext`
pub fn temp_file(content: &[u8], ext: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(&format!(".{ext}"))
		.tempfile()
		.unwrap();
	file.write_all(content).unwrap();
	file.flush().unwrap();

	file
}

/// Read the ID3v2 tag from an in-memory MP3 file
pub fn read_tag(content: &[u8], options: ParseOptions) -> Id3v2Tag {
	try_read_tag(content, options).expect("should have an ID3v2 tag")
}

pub fn try_read_tag(content: &[u8], options: ParseOptions) -> Option<Id3v2Tag> {
	let tagged_file = Probe::new(Cursor::new(content))
		.options(options)
		.guess_file_type()
		.unwrap()
		.read()
		.unwrap();

	assert_eq!(tagged_file.file_type(), FileType::Mpeg);
	tagged_file.into_tag()
}
