use crate::util::{TagBuilder, read_tag};
use music_metadata::config::{ParseOptions, ParsingMode};
use music_metadata::error::ErrorKind;
use music_metadata::file::FileType;
use music_metadata::id3::v2::{FrameValue, read_id3v2};
use music_metadata::probe::Probe;

use std::io::Cursor;

// A "TALB" frame header claiming 100 bytes, with only 5 present
const TRUNCATED_FRAME: &[u8] = b"TALB\x00\x00\x00\x64\x00\x00\x03Albu";

// A frame header with an ID that isn't alphanumeric
const BAD_FRAME_HEADER: &[u8] = b"T!T2\x00\x00\x00\x02\x00\x00\x03A";

fn options(parsing_mode: ParsingMode) -> ParseOptions {
	ParseOptions::new().parsing_mode(parsing_mode)
}

fn probe_read(content: &[u8], parsing_mode: ParsingMode) -> music_metadata::error::Result<()> {
	Probe::with_file_type(Cursor::new(content), FileType::Mpeg)
		.options(options(parsing_mode))
		.read()
		.map(|_| ())
}

#[test_log::test]
fn truncated_frame() {
	let content = TagBuilder::new(4)
		.text("TIT2", "Home")
		.raw(TRUNCATED_FRAME)
		.build_mp3();

	assert!(probe_read(&content, ParsingMode::Strict).is_err());

	let tag = read_tag(&content, options(ParsingMode::BestAttempt));
	assert_eq!(tag.len(), 2);
	assert_eq!(tag.title(), Some("Home"));

	let truncated = tag.get("TALB").unwrap();
	assert_eq!(
		truncated.value(),
		&FrameValue::Invalid(String::from("truncated"))
	);
	// "TIT2" takes 15 bytes, the "TALB" header another 10
	assert_eq!(truncated.content_range(), 25..30);

	let tag = read_tag(&content, options(ParsingMode::Relaxed));
	assert_eq!(tag.len(), 1);
	assert!(tag.get("TALB").is_none());
}

#[test_log::test]
fn bad_frame_header() {
	let content = TagBuilder::new(4)
		.text("TIT2", "Home")
		.raw(BAD_FRAME_HEADER)
		.text("TALB", "Album")
		.build_mp3();

	assert!(probe_read(&content, ParsingMode::Strict).is_err());

	// Everything after the bad header is lost
	for parsing_mode in [ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let tag = read_tag(&content, options(parsing_mode));
		assert_eq!(tag.len(), 1);
		assert_eq!(tag.title(), Some("Home"));
		assert_eq!(tag.album(), None);
	}
}

#[test_log::test]
fn invalid_frames_never_fail_the_tag() {
	let content = TagBuilder::new(4)
		// Encrypted with method 0x80
		.frame_with_flags("TIT2", [0x00, 0x04], b"\x80\x03Home")
		.frame("ZZZZ", b"unknown")
		.text("TALB", "Album")
		.build();

	for parsing_mode in [ParsingMode::Strict, ParsingMode::BestAttempt] {
		let tag = read_id3v2(&content, options(parsing_mode))
			.unwrap()
			.unwrap();

		assert_eq!(tag.len(), 3);
		assert!(tag.get("TIT2").unwrap().is_invalid());
		assert!(tag.get("ZZZZ").unwrap().is_invalid());
		assert_eq!(tag.title(), None);
		assert_eq!(tag.album(), Some("Album"));
	}

	let tag = read_id3v2(&content, options(ParsingMode::Relaxed))
		.unwrap()
		.unwrap();
	assert_eq!(tag.len(), 1);
	assert!(tag.iter().all(|frame| !frame.is_invalid()));
}

#[test_log::test]
fn tag_larger_than_input() {
	let content = TagBuilder::new(4)
		.text("TIT2", "Home")
		.declared_size(1000)
		.build();

	let err = read_id3v2(&content, options(ParsingMode::Strict)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::OutOfRange { .. }));

	let tag = read_id3v2(&content, options(ParsingMode::BestAttempt))
		.unwrap()
		.unwrap();
	assert_eq!(tag.title(), Some("Home"));
}

#[test_log::test]
fn padding_ends_frames() {
	let content = TagBuilder::new(3)
		.text("TIT2", "Home")
		.padding(64)
		.build_mp3();

	for parsing_mode in [
		ParsingMode::Strict,
		ParsingMode::BestAttempt,
		ParsingMode::Relaxed,
	] {
		let tag = read_tag(&content, options(parsing_mode));
		assert_eq!(tag.len(), 1);
	}
}

#[test_log::test]
fn unsupported_version() {
	let mut content = TagBuilder::new(4).text("TIT2", "Home").build();
	content[3] = 5;

	let err = read_id3v2(&content, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Id3v2(_)));
}
