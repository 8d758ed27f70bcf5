//! Utilities for working with unsynchronized ID3v2 content
//!
//! See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation) for an explanation.

use crate::error::Result;

/// Reverses unsynchronisation, removing the `0x00` inserted after every `0xFF`
///
/// This works in place with independent read and write positions, the returned buffer is
/// `content` truncated to its new length. Any `0xFF` not followed by `0x00` is left alone.
///
/// # Examples
///
/// ```rust
/// use music_metadata::id3::v2::util::synchsafe::remove_unsynchronisation;
///
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = vec![0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// // All null bytes following `0xFF` have been removed
/// assert_eq!(remove_unsynchronisation(content), [0xFF, 0x1A, 0xFF, 0x15]);
/// ```
pub fn remove_unsynchronisation(mut content: Vec<u8>) -> Vec<u8> {
	let len = content.len();

	let mut read_pos = 0;
	let mut write_pos = 0;
	while read_pos < len {
		let current_byte = content[read_pos];
		content[write_pos] = current_byte;
		write_pos += 1;
		read_pos += 1;

		// Only skip the next byte if this is valid unsynchronization
		if current_byte == 0xFF && content.get(read_pos) == Some(&0) {
			read_pos += 1;
		}
	}

	content.truncate(write_pos);
	content
}

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation) for an explanation.
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// Each byte contributes its low 7 bits, most significant byte first.
	///
	/// # Examples
	///
	/// ```rust
	/// use music_metadata::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> music_metadata::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Our synchronized number should be something completely different
	/// assert_ne!(synch_number, unsynch_number);
	///
	/// // Now, our re-unsynchronized number should match our original
	/// let re_unsynch_number = synch_number.unsynch();
	/// assert_eq!(re_unsynch_number, unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

macro_rules! impl_synchsafe {
	(
		$ty:ty,
		synch($n:ident) $body:block;
		unsynch($u:ident) $unsynch_body:block
	) => {
		#[allow(unused_parens)]
		impl SynchsafeInteger for $ty {
			fn synch(self) -> Result<Self> {
				const MAXIMUM_INTEGER: $ty = {
					let num_bytes = core::mem::size_of::<$ty>();
					// 7 bits are available per byte, shave off 1 bit per byte
					<$ty>::MAX >> num_bytes
				};

				if self > MAXIMUM_INTEGER {
					crate::macros::err!(TooMuchData);
				}

				let $n = self;
				Ok($body)
			}

			fn unsynch(self) -> Self {
				let $u = self;
				$unsynch_body
			}
		}
	};
}

impl_synchsafe! {
	u16,
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1)
	};
	unsynch(u) {
		((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

impl_synchsafe! {
	u32,
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1) |
		((n & (0x7F << 14)) << 2) |
		((n & (0x7F << 21)) << 3)
	};
	unsynch(u) {
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}
