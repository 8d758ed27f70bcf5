use super::{read_encoding, read_terminated_text};
use crate::error::Result;
use crate::id3::v2::header::Id3v2Version;
use crate::util::bytes::ByteReader;
use crate::util::text::{TextEncoding, latin1_decode};

/// The picture type, according to ID3v2 APIC
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum PictureType {
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
	Undefined(u8),
}

impl PictureType {
	/// Get a `u8` from a `PictureType` according to ID3v2 APIC
	pub fn as_u8(&self) -> u8 {
		match self {
			Self::Other => 0,
			Self::Icon => 1,
			Self::OtherIcon => 2,
			Self::CoverFront => 3,
			Self::CoverBack => 4,
			Self::Leaflet => 5,
			Self::Media => 6,
			Self::LeadArtist => 7,
			Self::Artist => 8,
			Self::Conductor => 9,
			Self::Band => 10,
			Self::Composer => 11,
			Self::Lyricist => 12,
			Self::RecordingLocation => 13,
			Self::DuringRecording => 14,
			Self::DuringPerformance => 15,
			Self::ScreenCapture => 16,
			Self::BrightFish => 17,
			Self::Illustration => 18,
			Self::BandLogo => 19,
			Self::PublisherLogo => 20,
			Self::Undefined(i) => *i,
		}
	}

	/// Get a `PictureType` from a u8 according to ID3v2 APIC
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0 => Self::Other,
			1 => Self::Icon,
			2 => Self::OtherIcon,
			3 => Self::CoverFront,
			4 => Self::CoverBack,
			5 => Self::Leaflet,
			6 => Self::Media,
			7 => Self::LeadArtist,
			8 => Self::Artist,
			9 => Self::Conductor,
			10 => Self::Band,
			11 => Self::Composer,
			12 => Self::Lyricist,
			13 => Self::RecordingLocation,
			14 => Self::DuringRecording,
			15 => Self::DuringPerformance,
			16 => Self::ScreenCapture,
			17 => Self::BrightFish,
			18 => Self::Illustration,
			19 => Self::BandLogo,
			20 => Self::PublisherLogo,
			i => Self::Undefined(i),
		}
	}
}

/// An `ID3v2` attached picture frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The MIME type of the image
	///
	/// For ID3v2.2 `PIC` frames, the 3 character image format is converted when possible.
	pub mime_type: String,
	/// The picture type
	pub picture_type: PictureType,
	/// A description of the picture
	pub description: String,
	/// The raw image data
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Get an [`AttachedPictureFrame`] from ID3v2 A/PIC bytes:
	///
	/// NOTE: This expects *only* the frame content
	///
	/// # Errors
	///
	/// * There isn't enough data present
	/// * Unable to decode any of the text
	pub(crate) fn parse(content: &[u8], version: Id3v2Version) -> Result<Self> {
		let mut reader = ByteReader::new(content);

		let encoding = read_encoding(&mut reader)?;

		let mime_type = if version == Id3v2Version::V2 {
			match reader.read_bytes(3)? {
				b"PNG" => String::from("image/png"),
				b"JPG" => String::from("image/jpeg"),
				format => {
					let format = latin1_decode(format);
					log::warn!("Found an unknown ID3v2.2 picture format \"{format}\"");
					format
				},
			}
		} else {
			read_terminated_text(&mut reader, TextEncoding::Latin1)?
		};

		let picture_type = PictureType::from_u8(reader.read_u8()?);
		let description = read_terminated_text(&mut reader, encoding)?;
		let data = reader.read_remaining().to_vec();

		Ok(Self {
			mime_type,
			picture_type,
			description,
			data,
		})
	}
}
