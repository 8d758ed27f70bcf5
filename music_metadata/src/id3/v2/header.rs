use crate::error::Result;
use crate::macros::id3v2_err;
use crate::util::bytes::{ByteReader, read_synchsafe_u32_at};

use byteorder::BigEndian;

/// The size of an ID3v2 header, as well as the optional footer
pub(crate) const ID3V2_HEADER_SIZE: usize = 10;

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// The size of a frame header in this version
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::Id3v2Version;
	///
	/// assert_eq!(Id3v2Version::V2.frame_header_size(), 6);
	/// assert_eq!(Id3v2Version::V4.frame_header_size(), 10);
	/// ```
	pub fn frame_header_size(self) -> usize {
		match self {
			Id3v2Version::V2 => 6,
			Id3v2Version::V3 | Id3v2Version::V4 => 10,
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised. See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation)
	pub unsynchronisation: bool,
	/// Whether the tag has an [`ExtendedHeader`]
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	pub footer: bool,
}

/// An ID3v2 tag header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The major version
	pub version: Id3v2Version,
	/// The revision number, this has no effect on parsing
	pub revision: u8,
	/// The tag-wide flags
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// Parse an ID3v2 header from the start of `bytes`
	///
	/// This returns `Ok(None)` if `bytes` does not start with `"ID3"`, which just means
	/// there is no tag.
	///
	/// # Errors
	///
	/// * The header is cut short
	/// * The major version is not one of 2, 3, or 4
	/// * The tag is an ID3v2.2 tag with compression enabled
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::{Id3v2Header, Id3v2Version};
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let header = Id3v2Header::parse(b"ID3\x04\x00\x00\x00\x00\x02\x01")?.unwrap();
	/// assert_eq!(header.version, Id3v2Version::V4);
	/// assert_eq!(header.size, 257);
	///
	/// assert!(Id3v2Header::parse(b"fLaC")?.is_none());
	/// # Ok(()) }
	/// ```
	pub fn parse(bytes: &[u8]) -> Result<Option<Self>> {
		if !bytes.starts_with(b"ID3") {
			return Ok(None);
		}

		log::debug!("Parsing ID3v2 header");

		let mut reader = ByteReader::new(bytes);
		let _magic = reader.read_bytes(3)?;
		let major = reader.read_u8()?;
		let revision = reader.read_u8()?;
		let flags = reader.read_u8()?;
		let size = reader.read_synchsafe_u32()?;

		let version = match major {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			_ => id3v2_err!(BadId3v2Version(major, revision)),
		};

		// Compression was a flag only used in ID3v2.2 (bit 6).
		// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
		// ID3v2.2 recommends just ignoring the tag in this case.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			id3v2_err!(V2Compression);
		}

		let flags = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: version != Id3v2Version::V2 && flags & 0x40 == 0x40,
			experimental: flags & 0x20 == 0x20,
			footer: flags & 0x10 == 0x10,
		};

		log::debug!("Found an ID3v2 tag (version: {version:?}, size: {size}, flags: {flags:?})");

		Ok(Some(Id3v2Header {
			version,
			revision,
			flags,
			size,
		}))
	}

	/// The total size of the tag, including the header and footer
	pub fn full_tag_size(&self) -> u64 {
		let footer = if self.flags.footer {
			ID3V2_HEADER_SIZE as u64
		} else {
			0
		};

		u64::from(self.size) + ID3V2_HEADER_SIZE as u64 + footer
	}
}

/// An ID3v2.3 or ID3v2.4 extended header
///
/// The layouts of the two versions differ, fields that don't exist in a version are left
/// at their defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtendedHeader {
	/// The size as it was declared
	///
	/// In ID3v2.3 this excludes the size field itself, in ID3v2.4 it includes it.
	pub size: u32,
	/// The raw extended flags
	pub flags: u16,
	/// The size of the padding (ID3v2.3 only)
	pub padding: u32,
	/// The CRC-32 of the frame data, if present
	pub crc: Option<u32>,
	/// Whether this tag is an update of an earlier tag (ID3v2.4 only)
	pub update: bool,
	/// The raw tag restrictions byte (ID3v2.4 only)
	pub restrictions: Option<u8>,
}

impl ExtendedHeader {
	/// Parse the extended header at the start of a tag body
	///
	/// `body` is the tag content following the 10 byte header, after any tag-wide
	/// unsynchronisation was removed.
	///
	/// On success, this returns the header along with the number of bytes it occupies.
	pub(crate) fn parse(body: &[u8], version: Id3v2Version) -> Result<(Self, usize)> {
		log::debug!("Parsing ID3v2 extended header");

		let (header, len) = match version {
			Id3v2Version::V3 => Self::parse_id3v23(body)?,
			Id3v2Version::V4 => Self::parse_id3v24(body)?,
			// There is no extended header in ID3v2.2, the flag bit is used for compression
			Id3v2Version::V2 => return Ok((Self::default(), 0)),
		};

		if len > body.len() {
			id3v2_err!(BadExtendedHeaderSize);
		}

		Ok((header, len))
	}

	fn parse_id3v23(body: &[u8]) -> Result<(Self, usize)> {
		let mut reader = ByteReader::new(body);

		// Excludes itself, and is either 6 or 10 depending on the CRC
		let size = reader.read_u32::<BigEndian>()?;
		if size < 6 {
			id3v2_err!(BadExtendedHeaderSize);
		}

		let flags = reader.read_u16::<BigEndian>()?;
		let padding = reader.read_u32::<BigEndian>()?;

		let mut crc = None;
		if flags & 0x8000 == 0x8000 {
			crc = Some(reader.read_u32::<BigEndian>()?);
		}

		let len = size as usize + 4;
		Ok((
			Self {
				size,
				flags,
				padding,
				crc,
				..Self::default()
			},
			len,
		))
	}

	fn parse_id3v24(body: &[u8]) -> Result<(Self, usize)> {
		let size = read_synchsafe_u32_at(body, 0)?;
		if size < 6 {
			id3v2_err!(BadExtendedHeaderSize);
		}

		let mut reader = ByteReader::new(body.get(..size as usize).unwrap_or(body));
		let _size = reader.read_bytes(4)?;

		// There is only ever 1 flag byte
		let _num_flag_bytes = reader.read_u8()?;
		let flags = reader.read_u8()?;

		let mut header = Self {
			size,
			flags: u16::from(flags),
			..Self::default()
		};

		// Each flag with data is followed by a length byte, which is fixed
		if flags & 0x40 == 0x40 {
			header.update = true;
			let _data_length = reader.read_u8()?;
		}

		if flags & 0x20 == 0x20 {
			let _data_length = reader.read_u8()?;

			// A 32 bit CRC stored as a 35 bit synchsafe integer
			let crc = reader.read_bytes(5)?;
			header.crc = Some(
				crc.iter()
					.fold(0_u32, |acc, byte| (acc << 7) | u32::from(byte & 0x7F)),
			);
		}

		if flags & 0x10 == 0x10 {
			let _data_length = reader.read_u8()?;
			header.restrictions = Some(reader.read_u8()?);
		}

		Ok((header, size as usize))
	}
}
