#![no_main]

use edit_core::{byte_offset_of_char, char_count, char_start_offset, count_char_starts};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Byte-level helpers must never panic, even on invalid UTF-8.
    let n = count_char_starts(data);
    assert!(char_start_offset(data, n + 1) <= data.len());

    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(n, char_count(text));
        assert_eq!(n, text.chars().count());
        for i in 0..=n {
            let off = byte_offset_of_char(text, i);
            assert!(text.is_char_boundary(off));
            assert_eq!(off, char_start_offset(data, i));
        }
    }
});
