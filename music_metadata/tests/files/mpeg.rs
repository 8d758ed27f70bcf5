use crate::util::{MPEG_FRAME, TagBuilder, temp_file, try_read_tag};
use music_metadata::config::ParseOptions;
use music_metadata::file::FileType;
use music_metadata::id3::v2::{FrameValue, Id3v2Version};
use music_metadata::probe::Probe;

use std::fs::File;

fn home_explo() -> Vec<u8> {
	TagBuilder::new(4)
		.text("TIT2", "Home")
		.text("TPE1", "Explo")
		.build_mp3()
}

#[test_log::test]
fn read_from_path() {
	let file = temp_file(&home_explo(), "mp3");

	let tagged_file = music_metadata::read_from_path(file.path()).unwrap();
	assert_eq!(tagged_file.file_type(), FileType::Mpeg);
	assert_eq!(tagged_file.file_type().extension(), "mp3");
	assert_eq!(tagged_file.file_type().mime_type(), "audio/mpeg");

	let tag = tagged_file.tag().unwrap();
	assert_eq!(tag.version(), Id3v2Version::V4);
	assert_eq!(tag.len(), 2);
	assert_eq!(tag.title(), Some("Home"));
	assert_eq!(tag.artist(), Some("Explo"));

	let ids = tag.iter().map(|frame| frame.id_str()).collect::<Vec<_>>();
	assert_eq!(ids, ["TIT2", "TPE1"]);
}

#[test_log::test]
fn read_from_file() {
	let file = temp_file(&home_explo(), "mp3");
	let mut file = File::open(file.path()).unwrap();

	let tagged_file = music_metadata::read_from(&mut file).unwrap();
	assert_eq!(tagged_file.file_type(), FileType::Mpeg);
	assert_eq!(tagged_file.into_tag().unwrap().title(), Some("Home"));
}

#[test_log::test]
fn content_overrides_extension() {
	// An MP3 file with the wrong extension
	let file = temp_file(&home_explo(), "flac");

	let probe = Probe::open(file.path()).unwrap();
	assert_eq!(probe.file_type(), Some(FileType::Flac));

	let tagged_file = music_metadata::read_from_path(file.path()).unwrap();
	assert_eq!(tagged_file.file_type(), FileType::Mpeg);
	assert_eq!(tagged_file.tag().unwrap().artist(), Some("Explo"));
}

#[test_log::test]
fn extension_only() {
	let file = temp_file(&home_explo(), "mp3");

	let tagged_file = Probe::open(file.path()).unwrap().read().unwrap();
	assert_eq!(tagged_file.tag().unwrap().title(), Some("Home"));
}

#[test_log::test]
fn read_with_junk_bytes_between_frames() {
	let mut content = TagBuilder::new(3)
		.text("TIT2", "title test")
		.text("TALB", "album test")
		.build();
	content.extend_from_slice(&[0x20, 0x20, 0x20, 0x20]);
	content.extend_from_slice(MPEG_FRAME);

	let tag = try_read_tag(&content, ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("title test"));
	assert_eq!(tag.album(), Some("album test"));
}

#[test_log::test]
fn no_tag() {
	assert!(try_read_tag(MPEG_FRAME, ParseOptions::new()).is_none());
}

#[test_log::test]
fn empty_tag() {
	let tag = try_read_tag(&TagBuilder::new(3).build_mp3(), ParseOptions::new()).unwrap();
	assert!(tag.is_empty());
	assert_eq!(tag.version(), Id3v2Version::V3);
}

#[test_log::test]
fn other_formats_have_no_tag() {
	let mut content = TagBuilder::new(4).text("TIT2", "Home").build();
	content.extend_from_slice(b"fLaC\x00\x00\x00\x22");

	let file = temp_file(&content, "flac");
	let tagged_file = music_metadata::read_from_path(file.path()).unwrap();
	assert_eq!(tagged_file.file_type(), FileType::Flac);
	assert!(tagged_file.tag().is_none());
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();
	assert!(music_metadata::read_from_path(dir.path().join("missing.mp3")).is_err());
}

#[test_log::test]
fn skip_cover_art() {
	let mut apic = b"\x00image/png\x00\x03\x00".to_vec();
	apic.extend_from_slice(&[0x89, b'P', b'N', b'G']);

	let content = TagBuilder::new(4)
		.text("TIT2", "Home")
		.frame("APIC", &apic)
		.build_mp3();

	let tag = try_read_tag(&content, ParseOptions::new()).unwrap();
	assert_eq!(tag.pictures().count(), 1);
	assert!(matches!(tag.get("APIC").unwrap().value(), FrameValue::Picture(_)));

	let tag = try_read_tag(&content, ParseOptions::new().read_cover_art(false)).unwrap();
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.pictures().count(), 0);
}
