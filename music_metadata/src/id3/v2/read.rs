use super::frame::header::parse::parse_header;
use super::frame::read::ParsedFrame;
use super::frame::{Frame, FrameValue};
use super::header::{ExtendedHeader, ID3V2_HEADER_SIZE, Id3v2Header, Id3v2Version};
use super::tag::Id3v2Tag;
use super::util::synchsafe::remove_unsynchronisation;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{MetadataError, Result};
use crate::macros::{id3v2_err, parse_mode_choice};
use crate::util::alloc::fallible_copy;

use std::borrow::Cow;

/// Read an ID3v2 tag from the start of `bytes`
///
/// This returns `Ok(None)` if `bytes` doesn't start with an ID3v2 header. A tag with a size of
/// zero is still a tag, it just has no frames.
///
/// Problems with the content of individual frames never cause an error, those frames are kept
/// as [`FrameValue::Invalid`] (or dropped in [`ParsingMode::Relaxed`]).
///
/// # Errors
///
/// * The header is invalid, see [`Id3v2Header::parse`]
/// * The extended header is invalid
/// * In [`ParsingMode::Strict`]:
///   * The tag is larger than `bytes`
///   * A frame header is invalid, or a frame extends past the end of the tag
///
/// # Examples
///
/// ```rust
/// use music_metadata::config::ParseOptions;
/// use music_metadata::id3::v2::{FrameValue, read_id3v2};
///
/// # fn main() -> music_metadata::error::Result<()> {
/// let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x0FTIT2\x00\x00\x00\x05\x00\x00\x03Home";
///
/// let tag = read_id3v2(bytes, ParseOptions::new())?.expect("tag should be present");
/// assert_eq!(tag.len(), 1);
/// assert_eq!(
/// 	tag.frames()[0].value(),
/// 	&FrameValue::TextList(vec![String::from("Home")])
/// );
///
/// assert!(read_id3v2(b"not a tag", ParseOptions::new())?.is_none());
/// # Ok(()) }
/// ```
pub fn read_id3v2(bytes: &[u8], parse_options: ParseOptions) -> Result<Option<Id3v2Tag>> {
	let Some(header) = Id3v2Header::parse(bytes)? else {
		log::debug!("No ID3v2 tag found");
		return Ok(None);
	};

	let available = bytes.get(ID3V2_HEADER_SIZE..).unwrap_or_default();
	let body = restrict_to_tag(available, &header, parse_options.parsing_mode)?;

	parse_id3v2(body, header, parse_options).map(Some)
}

/// Restrict `available` to the size declared in the tag header
///
/// Outside of [`ParsingMode::Strict`], a tag that is cut short is read as far as possible.
pub(crate) fn restrict_to_tag<'a>(
	available: &'a [u8],
	header: &Id3v2Header,
	parsing_mode: ParsingMode,
) -> Result<&'a [u8]> {
	let declared_size = header.size as usize;
	match available.get(..declared_size) {
		Some(body) => Ok(body),
		None => parse_mode_choice!(
			parsing_mode,
			STRICT: Err(MetadataError::out_of_range(
				ID3V2_HEADER_SIZE,
				declared_size,
				available.len() + ID3V2_HEADER_SIZE
			)),
			DEFAULT: {
				log::warn!(
					"Tag size ({declared_size}) is larger than the available data ({}), reading \
					 what remains",
					available.len()
				);
				Ok(available)
			}
		),
	}
}

/// Read the frames of a tag body, following the header
pub(crate) fn parse_id3v2(
	body: &[u8],
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag> {
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	// ID3v2.4 tags are unsynchronised frame by frame
	let body = if header.flags.unsynchronisation && header.version != Id3v2Version::V4 {
		log::trace!("Removing tag unsynchronisation");
		let copy = fallible_copy(body, parse_options.allocation_limit)?;
		Cow::Owned(remove_unsynchronisation(copy))
	} else {
		Cow::Borrowed(body)
	};

	let mut tag = Id3v2Tag::new(header);

	let mut offset = 0;
	if header.flags.extended_header {
		let (extended_header, len) = ExtendedHeader::parse(&body, header.version)?;
		log::debug!("Found an extended header: {extended_header:?}");

		tag.extended_header = Some(extended_header);
		offset = len;
	}

	read_all_frames_into_tag(&body, offset, &mut tag, parse_options)?;
	Ok(tag)
}

fn read_all_frames_into_tag(
	body: &[u8],
	mut offset: usize,
	tag: &mut Id3v2Tag,
	parse_options: ParseOptions,
) -> Result<()> {
	let version = tag.header.version;
	let tag_unsynchronised = tag.header.flags.unsynchronisation;
	let parsing_mode = parse_options.parsing_mode;
	let frame_header_size = version.frame_header_size();

	while offset + frame_header_size <= body.len() {
		let frame_header = match parse_header(&body[offset..], version) {
			Ok(Some(frame_header)) => frame_header,
			Ok(None) => {
				log::trace!("Found padding at offset {offset}");
				break;
			},
			Err(err) => parse_mode_choice!(
				parsing_mode,
				STRICT: return Err(err),
				DEFAULT: {
					log::warn!("Failed to read frame header at offset {offset}, stopping: {err}");
					break;
				}
			),
		};

		log::trace!(
			"Found frame \"{}\" at offset {offset}, size: {}",
			frame_header.id,
			frame_header.size
		);

		let content_start = offset + frame_header_size;
		let content_end = content_start.saturating_add(frame_header.size as usize);

		if content_end > body.len() {
			parse_mode_choice!(
				parsing_mode,
				STRICT: id3v2_err!(BadFrameLength),
				DEFAULT: log::warn!(
					"Frame \"{}\" extends past the end of the tag, marking it as truncated",
					frame_header.id
				)
			);

			let truncated = Frame {
				header: frame_header,
				value: FrameValue::Invalid(String::from("truncated")),
				content_range: content_start..body.len(),
			};

			push_frame(tag, truncated, parsing_mode);
			break;
		}

		let content_range = content_start..content_end;
		if let ParsedFrame::Next(frame) = ParsedFrame::read(
			frame_header,
			&body[content_range.clone()],
			content_range,
			version,
			tag_unsynchronised,
			parse_options,
		) {
			push_frame(tag, frame, parsing_mode);
		}

		offset = content_end;
	}

	Ok(())
}

fn push_frame(tag: &mut Id3v2Tag, frame: Frame, parsing_mode: ParsingMode) {
	if parsing_mode == ParsingMode::Relaxed && frame.is_invalid() {
		log::debug!("Discarding invalid frame \"{}\"", frame.id());
		return;
	}

	tag.frames.push(frame);
}
