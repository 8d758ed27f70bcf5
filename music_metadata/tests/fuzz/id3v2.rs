use crate::oom_test;

#[test_log::test]
fn huge_tag_size() {
	// Maximum synchsafe size, with nothing following the header
	oom_test(b"ID3\x04\x00\x00\x7F\x7F\x7F\x7F");
}

#[test_log::test]
fn huge_frame_size() {
	oom_test(b"ID3\x03\x00\x00\x00\x00\x00\x0FTIT2\xFF\xFF\xFF\xFF\x00\x00\x00Home");
}

#[test_log::test]
fn huge_data_length_indicator() {
	// Compressed, with a data length indicator of 0x0FFFFFFF
	oom_test(
		b"ID3\x04\x00\x00\x00\x00\x00\x14TIT2\x00\x00\x00\x0A\x00\x09\x7F\x7F\x7F\x7F\x78\x9C\x03\x00\x00\x00",
	);
}

#[test_log::test]
fn huge_v3_decompressed_size() {
	oom_test(
		b"ID3\x03\x00\x00\x00\x00\x00\x14TIT2\x00\x00\x00\x0A\x00\x80\xFF\xFF\xFF\xFF\x78\x9C\x03\x00\x00\x00",
	);
}

#[test_log::test]
fn extended_header_overflow() {
	oom_test(b"ID3\x04\x00\x40\x00\x00\x00\x06\x7F\x7F\x7F\x7F\x01\x70");
	oom_test(b"ID3\x03\x00\x40\x00\x00\x00\x06\xFF\xFF\xFF\xFF\x00\x00");
}

#[test_log::test]
fn only_unsynchronisation_bytes() {
	oom_test(b"ID3\x03\x00\x80\x00\x00\x00\x08\xFF\x00\xFF\x00\xFF\x00\xFF\x00");
}

#[test_log::test]
fn truncated_headers() {
	oom_test(b"ID3");
	oom_test(b"ID3\x04\x00");
	oom_test(b"ID3\x02\x00\x00\x00\x00\x00\x04TT2\x00");
	oom_test(b"ID3\x04\x00\x00\x00\x00\x00\x09TIT2\x00\x00\x00\x00\x00");
}

#[test_log::test]
fn malformed_frame_contents() {
	// UTF-16 with an odd length
	oom_test(b"ID3\x04\x00\x00\x00\x00\x00\x0FTIT2\x00\x00\x00\x05\x00\x00\x01\xFF\xFE\x41\x00");
	// Synchronised lyrics with an unterminated item
	oom_test(b"ID3\x04\x00\x00\x00\x00\x00\x11SYLT\x00\x00\x00\x07\x00\x00\x00eng\x02\x01A");
	// Popularimeter with a 9 byte counter
	oom_test(
		b"ID3\x04\x00\x00\x00\x00\x00\x15POPM\x00\x00\x00\x0B\x00\x00\x00\x01\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF",
	);
	// Audio encryption with a partial preview
	oom_test(b"ID3\x04\x00\x00\x00\x00\x00\x0DAENC\x00\x00\x00\x03\x00\x00o\x00\x01");
}
