#![no_main]

use au::{parse_lexicon, serialize_lexicon};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(lexicon) = parse_lexicon(s) {
            // Whatever parses must survive being written back
            let written = serialize_lexicon(&lexicon);
            assert!(written.is_ok(), "{:?}", written);
            let reparsed = written.and_then(|w| parse_lexicon(&w));
            assert_eq!(reparsed.as_ref(), Ok(&lexicon));
        }
    }
});
