#![no_main]

use libfuzzer_sys::fuzz_target;
use music_metadata::config::{ParseOptions, ParsingMode};
use music_metadata::id3::v2::read_id3v2;

fuzz_target!(|data: &[u8]| {
	for parsing_mode in [
		ParsingMode::Strict,
		ParsingMode::BestAttempt,
		ParsingMode::Relaxed,
	] {
		let _ = read_id3v2(data, ParseOptions::new().parsing_mode(parsing_mode));
	}
});
