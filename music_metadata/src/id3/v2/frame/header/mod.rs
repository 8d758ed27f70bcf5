pub(in crate::id3::v2) mod parse;

use crate::error::Result;
use crate::id3::v2::FrameFlags;
use crate::macros::id3v2_err;

use std::fmt::{Display, Formatter};

/// An ID3v2 frame header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	/// The size of the frame content as declared in the header
	///
	/// This excludes the header itself, but includes any prefix bytes added by the flags.
	pub size: u32,
	/// The frame flags
	///
	/// ID3v2.2 frames have no flags, these will always be the default.
	pub flags: FrameFlags,
}

impl FrameHeader {
	/// Create a new [`FrameHeader`]
	pub const fn new(id: FrameId, size: u32, flags: FrameFlags) -> Self {
		Self { id, size, flags }
	}

	/// Get the ID of the frame
	pub const fn id(&self) -> &FrameId {
		&self.id
	}
}

/// An `ID3v2` frame ID
///
/// It is recommended to use [`FrameId::new`] to construct these.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub enum FrameId {
	/// A 4 character `ID3v2.3/4` ID
	Valid(String),
	/// A 3 character `ID3v2.2` ID
	Outdated(String),
}

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::FrameId;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let id = FrameId::new("TIT2")?;
	/// assert_eq!(id.as_str(), "TIT2");
	///
	/// assert!(FrameId::new("tit2").is_err());
	/// assert!(FrameId::new("TIT").is_ok());
	/// assert!(FrameId::new("TI").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<String>,
	{
		Self::new_owned(id.into())
	}

	// Split from generic, public method to avoid code bloat by monomorphization.
	fn new_owned(id: String) -> Result<Self> {
		Self::verify_id(&id)?;

		match id.len() {
			3 => Ok(FrameId::Outdated(id)),
			4 => Ok(FrameId::Valid(id)),
			_ => id3v2_err!(BadFrameId(id.into_bytes())),
		}
	}

	/// Whether this frame ID represents an outdated (ID3v2.2) ID
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::FrameId;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let id_valid = FrameId::new("TPE1")?;
	/// assert!(!id_valid.is_outdated());
	///
	/// let id_outdated = FrameId::new("TP1")?;
	/// assert!(id_outdated.is_outdated());
	/// # Ok(()) }
	/// ```
	pub fn is_outdated(&self) -> bool {
		matches!(self, FrameId::Outdated(_))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		match self {
			FrameId::Valid(v) | FrameId::Outdated(v) => v,
		}
	}

	pub(in crate::id3::v2::frame) fn verify_id(id_str: &str) -> Result<()> {
		for c in id_str.chars() {
			if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
				id3v2_err!(BadFrameId(id_str.as_bytes().to_vec()));
			}
		}

		Ok(())
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for FrameId {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}
