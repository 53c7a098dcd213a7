#![no_main]

use libfuzzer_sys::fuzz_target;
use valuecodec::{decode, Writer};

// Decoding arbitrary bytes must never panic or read out of bounds. When a
// message does decode, the format is canonical: re-encoding the tree must
// reproduce the input byte-for-byte.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = decode(data) {
        let mut writer = Writer::new();
        let encoded = writer
            .encode(&value)
            .expect("failed to re-encode a successfully decoded input!");
        assert_eq!(encoded, data);
    }
});
