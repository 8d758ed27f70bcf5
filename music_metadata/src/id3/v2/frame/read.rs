use super::content::parse_content;
use super::header::FrameHeader;
use super::{Frame, FrameFlags, FrameValue};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::util::synchsafe::remove_unsynchronisation;
use crate::macros::id3v2_err;
use crate::util::alloc::fallible_copy;
use crate::util::bytes::ByteReader;

use std::borrow::Cow;
use std::ops::Range;

use byteorder::BigEndian;

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
}

impl ParsedFrame {
	/// Read the content of a frame
	///
	/// `content` is the frame content as declared by `header`, and `content_range` is its location in
	/// the tag body. Only tag-wide unsynchronisation of ID3v2.2/3 tags is expected to be undone.
	///
	/// Errors in the content never stop the tag from being read, the frame is kept
	/// as a [`FrameValue::Invalid`].
	pub(crate) fn read(
		mut header: FrameHeader,
		content: &[u8],
		content_range: Range<usize>,
		version: Id3v2Version,
		tag_unsynchronised: bool,
		parse_options: ParseOptions,
	) -> Self {
		if !parse_options.read_cover_art && matches!(header.id.as_str(), "APIC" | "PIC") {
			log::trace!("Skipping picture frame");
			return Self::Skip;
		}

		let value = match unwrap_content(
			&mut header.flags,
			content,
			version,
			tag_unsynchronised,
			parse_options.allocation_limit,
		) {
			Ok(content) => parse_content(&header.id, version, &content),
			Err(err) => {
				log::warn!("Unable to read the content of frame \"{}\": {err}", header.id);
				FrameValue::Invalid(err.to_string())
			},
		};

		Self::Next(Frame {
			header,
			value,
			content_range,
		})
	}
}

// It seems like the flags are applied in the order:
//
// unsynchronization -> compression -> encryption
//
// With the prefix bytes written after unsynchronization.
fn unwrap_content<'a>(
	flags: &mut FrameFlags,
	content: &'a [u8],
	version: Id3v2Version,
	tag_unsynchronised: bool,
	allocation_limit: usize,
) -> Result<Cow<'a, [u8]>> {
	let mut content = Cow::Borrowed(content);

	// ID3v2.4 tags are unsynchronised frame by frame, the tag flag means every frame is
	if version == Id3v2Version::V4 && (flags.unsynchronisation || tag_unsynchronised) {
		log::trace!("Removing frame unsynchronisation");
		let copy = fallible_copy(&content, allocation_limit)?;
		content = Cow::Owned(remove_unsynchronisation(copy));
	}

	let prefix_len = read_prefix(flags, &content, version)?;
	let content = match content {
		Cow::Borrowed(content) => Cow::Borrowed(&content[prefix_len..]),
		Cow::Owned(mut content) => {
			content.drain(..prefix_len);
			Cow::Owned(content)
		},
	};

	// Nothing further we can do with encrypted frames
	if let Some(method) = flags.encryption {
		id3v2_err!(EncryptedFrame(method));
	}

	if flags.compression {
		log::trace!("Decompressing frame");
		let decompressed = decompress(&content, flags.data_length_indicator, allocation_limit)?;
		return Ok(Cow::Owned(decompressed));
	}

	Ok(content)
}

/// Fill in the values of the flags that add data to the start of the frame
///
/// This returns the number of bytes used.
fn read_prefix(flags: &mut FrameFlags, content: &[u8], version: Id3v2Version) -> Result<usize> {
	let mut reader = ByteReader::new(content);

	match version {
		Id3v2Version::V4 => {
			if let Some(group) = flags.grouping_identity.as_mut() {
				log::trace!("Reading group identifier");
				*group = reader.read_u8()?;
			}

			if let Some(method) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*method = reader.read_u8()?;
			}

			// For some reason, no one can follow the ID3v2 standard, so while a data length indicator is *written*
			// the flag **isn't always set**
			if flags.data_length_indicator.is_some() || flags.compression {
				log::trace!("Reading data length indicator");
				flags.data_length_indicator = Some(reader.read_synchsafe_u32()?);
			}
		},
		Id3v2Version::V3 => {
			if flags.compression {
				log::trace!("Reading decompressed size");
				flags.data_length_indicator = Some(reader.read_u32::<BigEndian>()?);
			}

			if let Some(method) = flags.encryption.as_mut() {
				log::trace!("Reading encryption method symbol");
				*method = reader.read_u8()?;
			}

			if let Some(group) = flags.grouping_identity.as_mut() {
				log::trace!("Reading group identifier");
				*group = reader.read_u8()?;
			}
		},
		Id3v2Version::V2 => {},
	}

	Ok(reader.position())
}

#[cfg(feature = "id3v2_compression_support")]
fn decompress(
	content: &[u8],
	decompressed_size: Option<u32>,
	allocation_limit: usize,
) -> Result<Vec<u8>> {
	use crate::error::{Id3v2Error, Id3v2ErrorKind};
	use crate::macros::err;
	use crate::util::alloc::VecFallibleCapacity;

	use std::io::Read;

	// The declared size is only a hint, it can't be trusted
	let capacity = decompressed_size
		.map_or(content.len(), |size| size as usize)
		.min(allocation_limit);

	let mut decompressed = Vec::try_with_capacity_stable(capacity, allocation_limit)?;

	let limit = u64::try_from(allocation_limit)
		.unwrap_or(u64::MAX)
		.saturating_add(1);
	flate2::read::ZlibDecoder::new(content)
		.take(limit)
		.read_to_end(&mut decompressed)
		.map_err(|e| Id3v2Error::new(Id3v2ErrorKind::Decompression(e)))?;

	if decompressed.len() > allocation_limit {
		err!(TooMuchData);
	}

	Ok(decompressed)
}

#[cfg(not(feature = "id3v2_compression_support"))]
#[allow(clippy::unnecessary_wraps)]
fn decompress(_: &[u8], _: Option<u32>, _: usize) -> Result<Vec<u8>> {
	id3v2_err!(CompressedFrameEncountered);
}
