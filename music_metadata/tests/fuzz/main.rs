#![allow(missing_docs)]

use music_metadata::config::{ParseOptions, ParsingMode};
use music_metadata::id3::v2::read_id3v2;
use music_metadata::probe::Probe;

use std::io::Cursor;
use std::thread;
use std::time::Instant;

mod id3v2;
mod probe;

/// Read `data` in every parsing mode, failing if any read takes longer than 3 seconds
#[allow(clippy::missing_panics_doc)]
pub fn oom_test(data: &'static [u8]) {
	let instant = Instant::now();
	let thread = thread::spawn(move || {
		for parsing_mode in [
			ParsingMode::Strict,
			ParsingMode::BestAttempt,
			ParsingMode::Relaxed,
		] {
			let options = ParseOptions::new().parsing_mode(parsing_mode);

			let _ = read_id3v2(data, options);

			if let Ok(probe) = Probe::new(Cursor::new(data)).guess_file_type() {
				let _ = probe.options(options).read();
			}
		}
	});

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			assert!(thread.join().is_ok(), "Reading panicked");
			return;
		}
	}

	panic!("Failed to run test");
}
