use std::io::Read;

/// Checks the first 11 bits of an MPEG or ADTS frame header
pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

/// Whether a frame header with a valid sync is an ADTS (AAC) header rather than MPEG
///
/// ADTS (<https://wiki.multimedia.cx/index.php/ADTS#Header>):
///
/// AAAAAAAA AAAABCCX
///
/// MPEG (<http://www.mp3-tech.org/programmer/frame_header.html>):
///
/// AAAAAAAA AAABBCCX
///
/// Where `A` is the sync, `B` the version and `C` the layer. ADTS always has a layer of 0,
/// which no MPEG stream uses.
pub(crate) fn is_adts(frame_sync: [u8; 2]) -> bool {
	frame_sync[1] & 0b10000 > 0 && frame_sync[1] & 0b110 == 0
}

// Searches for a frame sync (11 set bits) in the reader.
// The search starts at the beginning of the reader and returns the index relative to this beginning.
// This will return the first match, if one is found.
//
// Note that the search searches in 8 bit steps, i.e. the first 8 bits need to be byte aligned.
pub(crate) fn search_for_frame_sync<R>(input: &mut R) -> std::io::Result<Option<u64>>
where
	R: Read,
{
	let mut iterator = input.bytes();
	let mut buffer = [0u8; 2];
	// Read the first byte, as each iteration expects that buffer 0 was set from a previous iteration.
	// This is not the case in the first iteration, which is therefore a special case.
	if let Some(byte) = iterator.next() {
		buffer[0] = byte?;
	}
	// Create a stream of overlapping 2 byte pairs
	//
	// Example:
	// [0x01, 0x02, 0x03, 0x04] should be analyzed as
	// [0x01, 0x02], [0x02, 0x03], [0x03, 0x04]
	for (index, byte) in iterator.enumerate() {
		buffer[1] = byte?;
		if verify_frame_sync(buffer) {
			return Ok(Some(index as u64));
		}

		buffer[0] = buffer[1];
	}
	Ok(None)
}
