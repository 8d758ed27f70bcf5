//! Bounds-checked readers over byte buffers
//!
//! Nothing in here indexes a slice directly. Any read that would extend past the end of
//! the buffer fails with [`ErrorKind::OutOfRange`](crate::error::ErrorKind::OutOfRange), the
//! caller decides whether that aborts the tag or just the current frame.

use crate::error::{MetadataError, Result};
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::util::text::{TextEncoding, find_terminator};

use byteorder::{BigEndian, ByteOrder};

fn range_at(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
	offset
		.checked_add(len)
		.and_then(|end| buf.get(offset..end))
		.ok_or_else(|| MetadataError::out_of_range(offset, len, buf.len()))
}

pub(crate) fn read_u16_at<B: ByteOrder>(buf: &[u8], offset: usize) -> Result<u16> {
	range_at(buf, offset, 2).map(B::read_u16)
}

pub(crate) fn read_u24_at<B: ByteOrder>(buf: &[u8], offset: usize) -> Result<u32> {
	range_at(buf, offset, 3).map(B::read_u24)
}

pub(crate) fn read_u32_at<B: ByteOrder>(buf: &[u8], offset: usize) -> Result<u32> {
	range_at(buf, offset, 4).map(B::read_u32)
}

/// Reads a 4 byte big-endian synchsafe integer, 7 bits are taken from each byte
pub(crate) fn read_synchsafe_u32_at(buf: &[u8], offset: usize) -> Result<u32> {
	read_u32_at::<BigEndian>(buf, offset).map(SynchsafeInteger::unsynch)
}

/// Reads a single bit, where bit 7 is the most significant bit of the byte at `offset`
pub(crate) fn read_bit_at(buf: &[u8], offset: usize, bit: u8) -> Result<bool> {
	let byte = range_at(buf, offset, 1)?[0];
	Ok(byte
		.checked_shr(u32::from(bit))
		.is_some_and(|shifted| shifted & 1 == 1))
}

/// A forward-only cursor over a frame's content
#[derive(Copy, Clone, Debug)]
pub(crate) struct ByteReader<'a> {
	buf: &'a [u8],
	pos: usize,
}

impl<'a> ByteReader<'a> {
	pub(crate) fn new(buf: &'a [u8]) -> Self {
		Self { buf, pos: 0 }
	}

	pub(crate) fn position(&self) -> usize {
		self.pos
	}

	pub(crate) fn remaining(&self) -> usize {
		self.buf.len().saturating_sub(self.pos)
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	pub(crate) fn read_u8(&mut self) -> Result<u8> {
		let byte = range_at(self.buf, self.pos, 1)?[0];
		self.pos += 1;
		Ok(byte)
	}

	pub(crate) fn read_u16<B: ByteOrder>(&mut self) -> Result<u16> {
		let value = read_u16_at::<B>(self.buf, self.pos)?;
		self.pos += 2;
		Ok(value)
	}

	pub(crate) fn read_u32<B: ByteOrder>(&mut self) -> Result<u32> {
		let value = read_u32_at::<B>(self.buf, self.pos)?;
		self.pos += 4;
		Ok(value)
	}

	pub(crate) fn read_synchsafe_u32(&mut self) -> Result<u32> {
		let value = read_synchsafe_u32_at(self.buf, self.pos)?;
		self.pos += 4;
		Ok(value)
	}

	/// Takes exactly `len` bytes
	pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
		let bytes = range_at(self.buf, self.pos, len)?;
		self.pos += len;
		Ok(bytes)
	}

	/// Takes everything up to the end of the buffer
	pub(crate) fn read_remaining(&mut self) -> &'a [u8] {
		let rest = self.buf.get(self.pos..).unwrap_or_default();
		self.pos = self.buf.len();
		rest
	}

	/// Takes the bytes up to the next terminator for `encoding`, skipping the terminator itself
	///
	/// A missing terminator is tolerated, the value then extends to the end of the buffer.
	pub(crate) fn read_terminated(&mut self, encoding: TextEncoding) -> &'a [u8] {
		let rest = self.buf.get(self.pos..).unwrap_or_default();
		let end = find_terminator(rest, encoding);

		self.pos = self
			.pos
			.saturating_add(end + encoding.terminator_len())
			.min(self.buf.len());

		&rest[..end]
	}

	/// Like [`Self::read_terminated`], but fails if the buffer is exhausted before a terminator
	pub(crate) fn read_strictly_terminated(&mut self, encoding: TextEncoding) -> Result<&'a [u8]> {
		let rest = self.buf.get(self.pos..).unwrap_or_default();
		let end = find_terminator(rest, encoding);
		if end == rest.len() {
			return Err(MetadataError::out_of_range(
				self.pos + end,
				encoding.terminator_len(),
				self.buf.len(),
			));
		}

		self.pos += end + encoding.terminator_len();
		Ok(&rest[..end])
	}
}

#[cfg(test)]
mod tests {
	use super::{
		ByteReader, read_bit_at, read_synchsafe_u32_at, read_u16_at, read_u24_at, read_u32_at,
	};
	use crate::error::ErrorKind;
	use crate::util::text::TextEncoding;

	use byteorder::{BigEndian, LittleEndian};

	const BUF: &[u8] = &[0x01, 0x02, 0x03, 0x04, 0x80];

	#[test_log::test]
	fn fixed_width_reads() {
		assert_eq!(read_u16_at::<BigEndian>(BUF, 0).unwrap(), 0x0102);
		assert_eq!(read_u16_at::<LittleEndian>(BUF, 0).unwrap(), 0x0201);
		assert_eq!(read_u24_at::<BigEndian>(BUF, 1).unwrap(), 0x02_0304);
		assert_eq!(read_u24_at::<LittleEndian>(BUF, 1).unwrap(), 0x04_0302);
		assert_eq!(read_u32_at::<BigEndian>(BUF, 1).unwrap(), 0x0203_0480);
		assert_eq!(read_u32_at::<LittleEndian>(BUF, 0).unwrap(), 0x0403_0201);
	}

	#[test_log::test]
	fn short_buffer_is_out_of_range() {
		let err = read_u32_at::<BigEndian>(BUF, 2).unwrap_err();
		match err.kind() {
			ErrorKind::OutOfRange {
				offset,
				len,
				available,
			} => {
				assert_eq!(*offset, 2);
				assert_eq!(*len, 4);
				assert_eq!(*available, 5);
			},
			kind => panic!("unexpected error: {kind:?}"),
		}

		assert!(read_u16_at::<BigEndian>(BUF, usize::MAX).is_err());
		assert!(read_u24_at::<BigEndian>(&[], 0).is_err());
		assert!(read_bit_at(BUF, 5, 0).is_err());
	}

	#[test_log::test]
	fn synchsafe() {
		assert_eq!(
			read_synchsafe_u32_at(&[0x00, 0x00, 0x02, 0x01], 0).unwrap(),
			257
		);
		assert_eq!(
			read_synchsafe_u32_at(&[0x7F, 0x7F, 0x7F, 0x7F], 0).unwrap(),
			0x0FFF_FFFF
		);
		// The high bit of every byte is ignored
		assert_eq!(
			read_synchsafe_u32_at(&[0x80, 0x80, 0x80, 0x81], 0).unwrap(),
			1
		);
	}

	#[test_log::test]
	fn bits() {
		assert!(read_bit_at(BUF, 4, 7).unwrap());
		assert!(!read_bit_at(BUF, 4, 6).unwrap());
		assert!(read_bit_at(BUF, 0, 0).unwrap());
		assert!(!read_bit_at(BUF, 0, 9).unwrap());
	}

	#[test_log::test]
	fn reader_terminated() {
		let mut reader = ByteReader::new(b"abc\0def");
		assert_eq!(reader.read_terminated(TextEncoding::Latin1), b"abc");
		assert_eq!(reader.position(), 4);

		// No terminator, runs to the end
		assert_eq!(reader.read_terminated(TextEncoding::Latin1), b"def");
		assert!(reader.is_empty());

		// Reading past the end is tolerated for terminated values...
		assert_eq!(reader.read_terminated(TextEncoding::Latin1), b"");
		// ...but not for fixed size reads
		assert!(reader.read_u8().is_err());
		assert!(reader.read_bytes(1).is_err());
		assert_eq!(reader.read_bytes(0).unwrap(), b"");
	}

	#[test_log::test]
	fn reader_strictly_terminated() {
		let mut reader = ByteReader::new(&[0x61, 0x00, 0x00, 0x00, 0x62, 0x00]);
		assert_eq!(
			reader
				.read_strictly_terminated(TextEncoding::UTF16BE)
				.unwrap(),
			&[0x61, 0x00]
		);
		assert_eq!(reader.remaining(), 2);
		assert!(
			reader
				.read_strictly_terminated(TextEncoding::UTF16BE)
				.is_err()
		);
	}
}
