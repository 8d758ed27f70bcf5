use super::text_information_frame::parse_text_values;
use crate::error::Result;
use crate::id3::v2::header::Id3v2Version;

/// A single credit from an involved people list
///
/// This is read from "TMCL", "TIPL", "IPLS", and "IPL" frames, which store a list of
/// alternating roles and names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Credit {
	/// The role, ex. "producer" or "guitar"
	pub role: String,
	/// The people credited with the role
	pub names: Vec<String>,
}

/// Pairs up the values of an involved people list
///
/// The names of each pair are further split on `,`. A trailing role without any names is dropped.
pub(in crate::id3::v2) fn parse_credits(
	content: &[u8],
	id: &str,
	version: Id3v2Version,
) -> Result<Vec<Credit>> {
	let values = parse_text_values(content, id, version)?;

	let pairs = values.chunks_exact(2);
	if !pairs.remainder().is_empty() {
		log::warn!("{id}: Found a role without any names, discarding");
	}

	let credits = pairs
		.map(|pair| Credit {
			role: pair[0].clone(),
			names: pair[1]
				.split(',')
				.map(str::trim)
				.filter(|name| !name.is_empty())
				.map(str::to_owned)
				.collect(),
		})
		.collect();

	Ok(credits)
}

#[cfg(test)]
mod tests {
	use super::{Credit, parse_credits};
	use crate::id3::v2::header::Id3v2Version;

	#[test_log::test]
	fn credits() {
		let credits = parse_credits(
			b"\x00Producer\x00Alice, Bob\x00Guitar\x00Carol\x00Drums",
			"TIPL",
			Id3v2Version::V4,
		)
		.unwrap();

		assert_eq!(
			credits,
			[
				Credit {
					role: String::from("Producer"),
					names: vec![String::from("Alice"), String::from("Bob")],
				},
				Credit {
					role: String::from("Guitar"),
					names: vec![String::from("Carol")],
				},
			]
		);
	}

	#[test_log::test]
	fn credit_without_names() {
		let credits = parse_credits(b"\x00Mixer\x00\x00Engineer\x00Dan", "IPLS", Id3v2Version::V3)
			.unwrap();

		assert_eq!(credits.len(), 2);
		assert_eq!(credits[0].role, "Mixer");
		assert!(credits[0].names.is_empty());
		assert_eq!(credits[1].names, ["Dan"]);
	}

	#[test_log::test]
	fn empty_credits() {
		assert!(
			parse_credits(b"\x00", "TMCL", Id3v2Version::V4)
				.unwrap()
				.is_empty()
		);
	}
}
