//! Prints the ID3v2 tag of the file given on the command line

use music_metadata::id3::v2::FrameValue;
use music_metadata::probe::Probe;

use std::path::Path;

fn describe(value: &FrameValue) -> String {
	match value {
		FrameValue::Invalid(reason) => format!("<invalid: {reason}>"),
		FrameValue::TextList(values) => values.join("; "),
		FrameValue::UserText(frame) => format!("{}: {}", frame.description, frame.values.join("; ")),
		FrameValue::Position(position) => position.to_string(),
		FrameValue::Credits(credits) => credits
			.iter()
			.map(|credit| format!("{}: {}", credit.role, credit.names.join(", ")))
			.collect::<Vec<_>>()
			.join("; "),
		FrameValue::Picture(picture) => format!(
			"{:?} ({}, {} bytes)",
			picture.picture_type,
			picture.mime_type,
			picture.data.len()
		),
		FrameValue::UrlLink(url) => url.clone(),
		FrameValue::UserUrlLink(frame) => format!("{}: {}", frame.description, frame.url),
		FrameValue::Comment(comment) => format!(
			"[{}] {}: {}",
			comment.language_str().unwrap_or("???"),
			comment.description,
			comment.content
		),
		FrameValue::SynchronizedText(frame) => {
			format!("{} ({} items)", frame.description, frame.content.len())
		},
		FrameValue::Counter(counter) => counter.map_or_else(|| String::from("None"), |c| c.to_string()),
		FrameValue::Identifier(frame) => format!("{} ({} bytes)", frame.owner, frame.data.len()),
		FrameValue::Popularimeter(frame) => format!("{} rated {}", frame.email, frame.rating),
		FrameValue::EncapsulatedObject(object) => format!(
			"{} ({} bytes)",
			object.file_name.as_deref().unwrap_or("unnamed"),
			object.data.len()
		),
		FrameValue::AudioEncryption(frame) => frame.owner.clone(),
		FrameValue::MusicCdTableOfContents(toc) => format!("{} bytes", toc.len()),
		_ => String::from("<unknown>"),
	}
}

fn main() {
	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	assert!(path.is_file(), "ERROR: Path is not a file!");

	let tagged_file = Probe::open(path)
		.expect("ERROR: Bad path provided!")
		.guess_file_type()
		.expect("ERROR: Failed to guess the file type!")
		.read()
		.expect("ERROR: Failed to read file!");

	let file_type = tagged_file.file_type();
	println!("--- File ---");
	println!("Type: {:?} ({}, {})", file_type, file_type.extension(), file_type.mime_type());

	let Some(tag) = tagged_file.tag() else {
		println!("No ID3v2 tag found");
		return;
	};

	println!("--- ID3v2 Tag ({:?}) ---", tag.version());
	println!("Title: {}", tag.title().unwrap_or("None"));
	println!("Artist: {}", tag.artist().unwrap_or("None"));
	println!("Album: {}", tag.album().unwrap_or("None"));

	println!("--- Frames ---");
	for frame in tag {
		println!("{}: {}", frame.id_str(), describe(frame.value()));
	}
}
