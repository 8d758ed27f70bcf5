use crate::util::{TagBuilder, read_tag};
use music_metadata::config::ParseOptions;
use music_metadata::id3::v2::{
	Credit, FrameValue, Id3v2Version, IdentifierFrame, PictureType, PopularimeterFrame, Position,
};

const COMMENT: &[u8] = b"\x00engdesc\x00Some comment";
const POPULARIMETER: &[u8] = b"foo@bar.com\x00\xC4\x00\x00\x00\x0A";
const USER_URL: &[u8] = b"\x00Homepage\x00https://example.com";

macro_rules! common_frames_tests {
	($($name:ident => $version:literal),+ $(,)?) => {
		$(
			paste::paste! {
				#[test_log::test]
				fn [<text_frames_ $name>]() {
					let content = TagBuilder::new($version)
						.text("TIT2", "Title")
						.text("TALB", "Album")
						.text("TRCK", "3/12")
						.text("TPOS", "1")
						.text("TCON", "(17)")
						.build_mp3();

					let tag = read_tag(&content, ParseOptions::new());
					assert_eq!(tag.len(), 5);
					assert_eq!(tag.title(), Some("Title"));
					assert_eq!(tag.album(), Some("Album"));
					assert_eq!(tag.track(), Some(&Position::NumberWithTotal(3, 12)));
					assert_eq!(tag.disk(), Some(&Position::Number(1)));
					assert_eq!(tag.genres(), Some(&[String::from("Rock")][..]));
				}

				#[test_log::test]
				fn [<comment_ $name>]() {
					let content = TagBuilder::new($version)
						.frame("COMM", COMMENT)
						.frame("COMM", b"\x00deuOther\x00")
						.build_mp3();

					let tag = read_tag(&content, ParseOptions::new());
					let comments = tag.comments().collect::<Vec<_>>();
					assert_eq!(comments.len(), 2);

					assert_eq!(comments[0].language_str(), Some("eng"));
					assert_eq!(comments[0].description, "desc");
					assert_eq!(comments[0].content, "Some comment");

					assert_eq!(comments[1].language, *b"deu");
					assert_eq!(comments[1].description, "Other");
					assert!(comments[1].content.is_empty());
				}

				#[test_log::test]
				fn [<counters_ $name>]() {
					let content = TagBuilder::new($version)
						.frame("PCNT", &[0x00, 0x00, 0x01, 0x00])
						.frame("POPM", POPULARIMETER)
						.build_mp3();

					let tag = read_tag(&content, ParseOptions::new());
					assert_eq!(tag.get("PCNT").unwrap().value(), &FrameValue::Counter(Some(256)));
					assert_eq!(
						tag.get("POPM").unwrap().value(),
						&FrameValue::Popularimeter(PopularimeterFrame {
							email: String::from("foo@bar.com"),
							rating: 196,
							counter: Some(10),
						})
					);
				}

				#[test_log::test]
				fn [<urls_ $name>]() {
					let content = TagBuilder::new($version)
						.frame("WOAR", b"https://example.com/artist")
						.frame("WXXX", USER_URL)
						.build_mp3();

					let tag = read_tag(&content, ParseOptions::new());
					assert_eq!(
						tag.get("WOAR").unwrap().value(),
						&FrameValue::UrlLink(String::from("https://example.com/artist"))
					);

					let FrameValue::UserUrlLink(user_url) = tag.get("WXXX").unwrap().value() else {
						panic!("Expected a user URL frame");
					};
					assert_eq!(user_url.description, "Homepage");
					assert_eq!(user_url.url.as_str(), "https://example.com/");
				}

				#[test_log::test]
				fn [<user_text_and_identifiers_ $name>]() {
					let content = TagBuilder::new($version)
						.frame("TXXX", b"\x00MusicBrainz Album Id\x00abc-123")
						.frame("UFID", b"http://musicbrainz.org\x00\x01\x02\x03")
						.build_mp3();

					let tag = read_tag(&content, ParseOptions::new());

					let FrameValue::UserText(user_text) = tag.get("TXXX").unwrap().value() else {
						panic!("Expected a user text frame");
					};
					assert_eq!(user_text.description, "MusicBrainz Album Id");
					assert_eq!(user_text.values, ["abc-123"]);

					assert_eq!(
						tag.get("UFID").unwrap().value(),
						&FrameValue::Identifier(IdentifierFrame {
							owner: String::from("http://musicbrainz.org"),
							data: vec![1, 2, 3],
						})
					);
				}
			}
		)+
	};
}

common_frames_tests!(v3 => 3, v4 => 4);

#[test_log::test]
fn v4_multiple_values() {
	let content = TagBuilder::new(4)
		.frame("TPE1", b"\x03Foo\x00Bar\x00")
		.frame("TIPL", b"\x03Producer\x00Alice, Bob\x00Mixer\x00Carol")
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(
		tag.get("TPE1").unwrap().value().as_text(),
		Some(&[String::from("Foo"), String::from("Bar")][..])
	);
	assert_eq!(tag.artist(), Some("Foo"));

	assert_eq!(
		tag.get("TIPL").unwrap().value(),
		&FrameValue::Credits(vec![
			Credit {
				role: String::from("Producer"),
				names: vec![String::from("Alice"), String::from("Bob")],
			},
			Credit {
				role: String::from("Mixer"),
				names: vec![String::from("Carol")],
			},
		])
	);
}

#[test_log::test]
fn v3_slash_separated_artists() {
	let content = TagBuilder::new(3).text("TPE1", "Foo/Bar").build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(
		tag.get("TPE1").unwrap().value().as_text(),
		Some(&[String::from("Foo"), String::from("Bar")][..])
	);
}

#[test_log::test]
fn v3_utf16_text() {
	// UTF-16 with a BOM, "aaa"
	let content = TagBuilder::new(3)
		.frame("TALB", &[0x01, 0xFF, 0xFE, 0x61, 0x00, 0x61, 0x00, 0x61, 0x00])
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(tag.album(), Some("aaa"));
}

#[test_log::test]
fn utf16be_keeps_inner_byte_order_mark() {
	let content = TagBuilder::new(4)
		.frame("TIT2", &[0x02, 0x00, b'A', 0xFE, 0xFF, 0x00, b'B'])
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(tag.title(), Some("A\u{FEFF}B"));
}

#[test_log::test]
fn v2_frames() {
	let mut pic = b"\x00JPG\x03cover\x00".to_vec();
	pic.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);

	let content = TagBuilder::new(2)
		.text("TT2", "Title")
		.text("TP1", "Foo/Bar")
		.text("TRK", "7")
		.frame("COM", COMMENT)
		.frame("CNT", &[0x00, 0x00, 0x00, 0x02])
		.frame("PIC", &pic)
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(tag.version(), Id3v2Version::V2);
	assert_eq!(tag.len(), 6);

	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.artist(), Some("Foo"));
	assert_eq!(tag.track(), Some(&Position::Number(7)));
	assert_eq!(tag.comments().next().unwrap().content, "Some comment");
	assert_eq!(tag.get("CNT").unwrap().value(), &FrameValue::Counter(Some(2)));

	let picture = tag.pictures().next().unwrap();
	assert_eq!(picture.mime_type, "image/jpeg");
	assert_eq!(picture.picture_type, PictureType::CoverFront);
	assert_eq!(picture.description, "cover");
	assert_eq!(picture.data, [0xFF, 0xD8, 0xFF, 0xE0]);
}

#[test_log::test]
fn encapsulated_object() {
	let content = TagBuilder::new(4)
		.frame("GEOB", b"\x00text/plain\x00notes.txt\x00Liner notes\x00hello")
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	let FrameValue::EncapsulatedObject(object) = tag.get("GEOB").unwrap().value() else {
		panic!("Expected an encapsulated object");
	};

	assert_eq!(object.mime_type.as_deref(), Some("text/plain"));
	assert_eq!(object.file_name.as_deref(), Some("notes.txt"));
	assert_eq!(object.descriptor.as_deref(), Some("Liner notes"));
	assert_eq!(object.data, b"hello");
}

#[test_log::test]
fn unsupported_and_empty_frames() {
	let content = TagBuilder::new(4)
		.frame("RVA2", b"\x00\x01\x02")
		.frame("TIT2", b"")
		.frame("PCNT", b"")
		.text("TALB", "Album")
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(tag.len(), 4);
	assert_eq!(
		tag.get("RVA2").unwrap().value(),
		&FrameValue::Invalid(String::from("unsupported frame type RVA2"))
	);
	assert_eq!(
		tag.get("TIT2").unwrap().value(),
		&FrameValue::Invalid(String::from("frame contains no data"))
	);
	assert_eq!(tag.get("PCNT").unwrap().value(), &FrameValue::Counter(None));
	assert_eq!(tag.album(), Some("Album"));
}

#[test_log::test]
fn v3_tag_unsynchronisation() {
	// The frame size is that of the resynchronised content
	let content = TagBuilder::new(3)
		.flags(0x80)
		.raw(b"PRIV\x00\x00\x00\x04\x00\x00o\x00\xFF\x00\xE0")
		.build_mp3();

	let tag = read_tag(&content, ParseOptions::new());
	assert_eq!(
		tag.get("PRIV").unwrap().value(),
		&FrameValue::Identifier(IdentifierFrame {
			owner: String::from("o"),
			data: vec![0xFF, 0xE0],
		})
	);
}
