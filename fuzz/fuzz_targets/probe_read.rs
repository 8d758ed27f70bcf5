#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use music_metadata::probe::Probe;

fuzz_target!(|data: Vec<u8>| {
	if let Ok(probe) = Probe::new(Cursor::new(data)).guess_file_type() {
		let _ = probe.read();
	}
});
