use super::{read_encoding, split_terminated_values};
use crate::error::Result;
use crate::id3::v1::GENRES;
use crate::id3::v2::header::Id3v2Version;
use crate::util::bytes::ByteReader;

use std::fmt::{Display, Formatter};

/// ID3v2.2/3 frames that use `/` to separate multiple values
const SLASH_SEPARATED_FRAMES: [&str; 10] = [
	"TCOM", "TEXT", "TOLY", "TOPE", "TPE1", // ID3v2.3
	"TCM", "TXT", "TOL", "TOA", "TP1", // ID3v2.2
];

/// Splits the content of a text information frame into its values
///
/// Values are separated by null terminators in any version. ID3v2.2 and ID3v2.3 frames in
/// [`SLASH_SEPARATED_FRAMES`] are split on `/` if there is only a single value.
///
/// Values are trimmed, empty values are kept so the positions of paired values are preserved.
pub(in crate::id3::v2) fn parse_text_values(
	content: &[u8],
	id: &str,
	version: Id3v2Version,
) -> Result<Vec<String>> {
	let mut reader = ByteReader::new(content);
	let encoding = read_encoding(&mut reader)?;

	let mut values = split_terminated_values(reader.read_remaining(), encoding)?;

	if values.len() == 1
		&& version != Id3v2Version::V4
		&& SLASH_SEPARATED_FRAMES.contains(&id)
	{
		values = values[0].split('/').map(str::to_owned).collect();
	}

	Ok(values
		.iter()
		.map(|value| trim_value(value).to_owned())
		.collect())
}

/// Same as [`parse_text_values`], with empty values removed
pub(in crate::id3::v2) fn parse_text_list(
	content: &[u8],
	id: &str,
	version: Id3v2Version,
) -> Result<Vec<String>> {
	let mut values = parse_text_values(content, id, version)?;
	values.retain(|value| !value.is_empty());
	Ok(values)
}

fn trim_value(value: &str) -> &str {
	value.trim_matches(|c: char| c.is_whitespace() || c == '\0')
}

/// A track or disc position, from a "TRCK" or "TPOS" frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
	/// Only the number is known, ex. `"3"`
	Number(u32),
	/// Both the number and total are known, ex. `"3/12"`
	NumberWithTotal(u32, u32),
	/// A value that isn't in either form
	RawString(String),
}

impl Position {
	/// Parse a position from a string
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::Position;
	///
	/// assert_eq!(Position::parse("3/12"), Position::NumberWithTotal(3, 12));
	/// assert_eq!(Position::parse("3"), Position::Number(3));
	/// assert_eq!(
	/// 	Position::parse("three"),
	/// 	Position::RawString(String::from("three"))
	/// );
	/// ```
	pub fn parse(value: &str) -> Self {
		let value = trim_value(value);

		if let Some((number, total)) = value.split_once('/') {
			if let (Ok(number), Ok(total)) = (number.trim().parse(), total.trim().parse()) {
				return Position::NumberWithTotal(number, total);
			}
		} else if let Ok(number) = value.parse() {
			return Position::Number(number);
		}

		Position::RawString(value.to_owned())
	}

	/// The track or disc number, if it could be parsed
	pub fn number(&self) -> Option<u32> {
		match self {
			Position::Number(number) | Position::NumberWithTotal(number, _) => Some(*number),
			Position::RawString(_) => None,
		}
	}

	/// The total number of tracks or discs, if it could be parsed
	pub fn total(&self) -> Option<u32> {
		match self {
			Position::NumberWithTotal(_, total) => Some(*total),
			_ => None,
		}
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Position::Number(number) => write!(f, "{number}"),
			Position::NumberWithTotal(number, total) => write!(f, "{number}/{total}"),
			Position::RawString(raw) => f.write_str(raw),
		}
	}
}

pub(in crate::id3::v2) fn parse_position(
	content: &[u8],
	id: &str,
	version: Id3v2Version,
) -> Result<Position> {
	let values = parse_text_list(content, id, version)?;
	Ok(values
		.first()
		.map_or_else(|| Position::RawString(String::new()), |value| Position::parse(value)))
}

/// Resolves the values of a "TCON" frame
///
/// Numeric values are looked up in the ID3v1 genre list. The ID3v2.3 reference form,
/// `"(17)(RX)Rock"`, is also accepted.
pub(in crate::id3::v2) fn parse_genres(
	content: &[u8],
	id: &str,
	version: Id3v2Version,
) -> Result<Vec<String>> {
	let values = parse_text_list(content, id, version)?;

	let mut genres = Vec::with_capacity(values.len());
	for value in &values {
		for genre in GenresIter::new(value) {
			let genre = trim_value(genre);
			if !genre.is_empty() {
				genres.push(genre.to_owned());
			}
		}
	}

	Ok(genres)
}

pub(crate) struct GenresIter<'a> {
	value: &'a str,
	pos: usize,
}

impl<'a> GenresIter<'a> {
	pub fn new(value: &'a str) -> GenresIter<'a> {
		GenresIter { value, pos: 0 }
	}
}

impl<'a> Iterator for GenresIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		let remainder = self.value.get(self.pos..)?;
		if remainder.is_empty() {
			return None;
		}

		if let Some(reference) = remainder.strip_prefix('(') {
			// A refinement starting with a parenthesis is escaped, e.g. "((I think...)"
			if reference.starts_with('(') {
				self.pos = self.value.len();
				return Some(reference);
			}

			if let Some(end) = reference.find(')') {
				self.pos += end + 2;
				return Some(parse_genre(&reference[..end]));
			}
		}

		self.pos = self.value.len();
		Some(parse_genre(remainder))
	}
}

fn parse_genre(genre: &str) -> &str {
	if genre.len() > 3 {
		return genre;
	}

	if let Ok(id) = genre.parse::<usize>() {
		GENRES.get(id).copied().unwrap_or(genre)
	} else if genre == "RX" {
		"Remix"
	} else if genre == "CR" {
		"Cover"
	} else {
		genre
	}
}
