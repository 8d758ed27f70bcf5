use super::FrameValue;
use crate::error::Result;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::items::key_value_frame::parse_credits;
use crate::id3::v2::items::text_information_frame::{parse_genres, parse_position, parse_text_list};
use crate::id3::v2::items::url_link_frame::{parse_podcast_url, parse_url};
use crate::id3::v2::items::{
	AttachedPictureFrame, AudioEncryptionFrame, ExtendedTextFrame, ExtendedUrlFrame,
	GeneralEncapsulatedObject, IdentifierFrame, LanguageFrame, PopularimeterFrame,
	SynchronizedTextFrame, read_counter,
};
use crate::id3::v2::FrameId;
use crate::macros::id3v2_err;

/// The layout of a frame's content, as determined by its ID
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(in crate::id3::v2) enum Grammar {
	Text,
	Genres,
	Position,
	Credits,
	UserText,
	Picture,
	Url,
	PodcastUrl,
	UserUrl,
	Language,
	SynchronizedText,
	Counter,
	Identifier,
	Popularimeter,
	EncapsulatedObject,
	AudioEncryption,
	CdTableOfContents,
	Unsupported,
}

impl Grammar {
	/// Get the grammar for an ID3v2.2, ID3v2.3, or ID3v2.4 frame ID
	#[rustfmt::skip]
	pub(in crate::id3::v2) fn for_id(id: &str) -> Self {
		match id {
			"TXXX" | "TXX" => Grammar::UserText,
			"TCON" | "TCO" => Grammar::Genres,
			"TRCK" | "TRK" | "TPOS" | "TPA" => Grammar::Position,
			"TMCL" | "TIPL" | "IPLS" | "IPL" => Grammar::Credits,
			// Apple proprietary frames
			// GRP1 (Grouping), MVNM (Movement Name), MVIN (Movement Number), PCST/PCS (Podcast)
			i if i.starts_with('T') || matches!(i, "GRP1" | "MVNM" | "MVIN" | "PCST" | "PCS") => {
				Grammar::Text
			},
			"APIC" | "PIC" => Grammar::Picture,
			"WXXX" | "WXX" => Grammar::UserUrl,
			"WFED" | "WFD" => Grammar::PodcastUrl,
			"WCOM" | "WCOP" | "WOAF" | "WOAR" | "WOAS" | "WORS" | "WPAY" | "WPUB"
			| "WAF" | "WAR" | "WAS" | "WCM" | "WCP" | "WPB" => Grammar::Url,
			"COMM" | "COM" | "USLT" | "ULT" => Grammar::Language,
			"SYLT" | "SLT" => Grammar::SynchronizedText,
			"PCNT" | "CNT" => Grammar::Counter,
			"UFID" | "UFI" | "PRIV" => Grammar::Identifier,
			"POPM" | "POP" => Grammar::Popularimeter,
			"GEOB" | "GEO" => Grammar::EncapsulatedObject,
			"AENC" | "CRA" => Grammar::AudioEncryption,
			"MCDI" | "MCI" => Grammar::CdTableOfContents,
			_ => Grammar::Unsupported,
		}
	}
}

/// Decode the content of a frame
///
/// `content` must have already had all flag-related transformations undone.
///
/// This never fails, any error is stored in a [`FrameValue::Invalid`].
pub(in crate::id3::v2) fn parse_content(
	id: &FrameId,
	version: Id3v2Version,
	content: &[u8],
) -> FrameValue {
	log::trace!("Parsing frame content for ID: {}", id);

	let grammar = Grammar::for_id(id.as_str());

	if content.is_empty() {
		// Empty counters are written by some encoders to mean "no count"
		if grammar == Grammar::Counter {
			return FrameValue::Counter(None);
		}

		return FrameValue::Invalid(String::from("frame contains no data"));
	}

	match decode(grammar, id.as_str(), version, content) {
		Ok(value) => value,
		Err(err) => {
			log::warn!("Failed to decode frame \"{id}\": {err}");
			FrameValue::Invalid(err.to_string())
		},
	}
}

fn decode(grammar: Grammar, id: &str, version: Id3v2Version, content: &[u8]) -> Result<FrameValue> {
	Ok(match grammar {
		Grammar::Text => FrameValue::TextList(parse_text_list(content, id, version)?),
		Grammar::Genres => FrameValue::TextList(parse_genres(content, id, version)?),
		Grammar::Position => FrameValue::Position(parse_position(content, id, version)?),
		Grammar::Credits => FrameValue::Credits(parse_credits(content, id, version)?),
		Grammar::UserText => ExtendedTextFrame::parse(content)?.into(),
		Grammar::Picture => AttachedPictureFrame::parse(content, version)?.into(),
		Grammar::Url => FrameValue::UrlLink(parse_url(content)?),
		Grammar::PodcastUrl => FrameValue::UrlLink(parse_podcast_url(content)?),
		Grammar::UserUrl => ExtendedUrlFrame::parse(content)?.into(),
		Grammar::Language => LanguageFrame::parse(content)?.into(),
		Grammar::SynchronizedText => SynchronizedTextFrame::parse(content)?.into(),
		Grammar::Counter => {
			if content.len() < 4 {
				id3v2_err!(BadFrameLength);
			}

			FrameValue::Counter(Some(read_counter(content)))
		},
		Grammar::Identifier => IdentifierFrame::parse(content)?.into(),
		Grammar::Popularimeter => PopularimeterFrame::parse(content)?.into(),
		Grammar::EncapsulatedObject => GeneralEncapsulatedObject::parse(content)?.into(),
		Grammar::AudioEncryption => AudioEncryptionFrame::parse(content)?.into(),
		Grammar::CdTableOfContents => FrameValue::MusicCdTableOfContents(content.to_vec()),
		Grammar::Unsupported => FrameValue::Invalid(format!("unsupported frame type {id}")),
	})
}
