use crate::oom_test;

#[test_log::test]
fn tag_size_past_end_of_stream() {
	oom_test(b"ID3\x04\x00\x00\x7F\x7F\x7F\x7F\xFF\xFB");
}

#[test_log::test]
fn footer_with_huge_size() {
	oom_test(b"ID3\x04\x00\x10\x7F\x7F\x7F\x7F3DI");
}

#[test_log::test]
fn only_junk() {
	oom_test(&[0x20; 2048]);
	oom_test(&[0xFF; 64]);
}

#[test_log::test]
fn empty() {
	oom_test(b"");
}
