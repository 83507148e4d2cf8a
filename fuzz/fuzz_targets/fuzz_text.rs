#![no_main]

use au::{GlossMode, parse_text, serialize_gloss};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(text) = parse_text(s) {
            let mut calls = 0;
            let _ = text.render(|gloss| {
                calls += 1;
                serialize_gloss(GlossMode::ImplicitPointers, gloss)
            });
            assert_eq!(calls, text.glosses().count());

            // Literal segments alone never outgrow the input
            let verbatim = text.render(|_| String::new());
            assert!(verbatim.len() <= s.len());
        }
    }
});
