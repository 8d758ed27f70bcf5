use crate::error::Result;
use crate::macros::err;

/// Provides the `try_with_capacity_stable` method on `Vec`
///
/// This can be used directly.
pub(crate) trait VecFallibleCapacity<T>: Sized {
	/// Same as `Vec::with_capacity`, but takes an allocation limit into account.
	///
	/// Named `try_with_capacity_stable` to avoid conflicts with the nightly `Vec::try_with_capacity`.
	fn try_with_capacity_stable(capacity: usize, allocation_limit: usize) -> Result<Self>;
}

impl<T> VecFallibleCapacity<T> for Vec<T> {
	fn try_with_capacity_stable(capacity: usize, allocation_limit: usize) -> Result<Self> {
		if capacity > allocation_limit {
			err!(TooMuchData);
		}

		let mut v = Vec::new();
		v.try_reserve(capacity)?;

		Ok(v)
	}
}

/// Copies `bytes` into a new `Vec`, respecting `allocation_limit`
pub(crate) fn fallible_copy(bytes: &[u8], allocation_limit: usize) -> Result<Vec<u8>> {
	let mut v = Vec::try_with_capacity_stable(bytes.len(), allocation_limit)?;
	v.extend_from_slice(bytes);
	Ok(v)
}
