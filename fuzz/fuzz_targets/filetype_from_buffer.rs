#![no_main]

use libfuzzer_sys::fuzz_target;
use music_metadata::file::FileType;

fuzz_target!(|data: &[u8]| {
	if let Some(file_type) = FileType::from_buffer(data) {
		let _ = (file_type.extension(), file_type.mime_type());
	}
});
