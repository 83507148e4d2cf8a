#![no_main]

use arbitrary::Arbitrary;
use au::{GlossMode, parse_gloss, serialize_gloss};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    mode: GlossMode,
    token: String,
}

fuzz_target!(|input: Input| {
    if let Ok(gloss) = parse_gloss(input.mode, &input.token) {
        let printed = serialize_gloss(input.mode, &gloss);
        assert_eq!(parse_gloss(input.mode, &printed), Ok(gloss));
    }
});
