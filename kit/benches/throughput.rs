use au::{GlossMode, parse_lexicon, parse_text, serialize_gloss, serialize_lexicon};
use divan::{Bencher, black_box};

fn main() {
    divan::main();
}

const SAMPLE_ROWS: &[&str] = &[
    "bear,*bear-root#PL,noun,\"large, furry\"",
    "cat,kät,noun,",
    "see,[to see],verb,irregular",
    "big,?gorp,adj,",
];

const SAMPLE_PROSE: &[&str] = &[
    "The word for bears is __bear#PL__, and ",
    "__I see big cat__. ",
    "Some plain prose with nothing to translate. ",
    "__[literal] big#CMP, cat#PL & bear__!\n",
];

/// Generate a lexicon with N data rows
fn generate_lexicon(count: usize) -> String {
    let mut result = String::with_capacity(count * 32);
    result.push_str("id,translation,generator,note\n");
    for i in 0..count {
        result.push_str(SAMPLE_ROWS[i % SAMPLE_ROWS.len()]);
        result.push('\n');
    }
    result
}

/// Generate a document with N sentences
fn generate_text(count: usize) -> String {
    let mut result = String::with_capacity(count * 48);
    for i in 0..count {
        result.push_str(SAMPLE_PROSE[i % SAMPLE_PROSE.len()]);
    }
    result
}

#[divan::bench(name = "lexicon_parse", args = [100, 1000, 10_000, 100_000])]
fn bench_lexicon_parse(bencher: Bencher, n: usize) {
    let input = generate_lexicon(n);

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(parse_lexicon(black_box(&input))));
}

#[divan::bench(name = "lexicon_serialize", args = [100, 1000, 10_000, 100_000])]
fn bench_lexicon_serialize(bencher: Bencher, n: usize) {
    let Ok(lexicon) = parse_lexicon(&generate_lexicon(n)) else {
        return;
    };

    bencher.bench(|| black_box(serialize_lexicon(black_box(&lexicon))));
}

#[divan::bench(name = "text_parse", args = [100, 1000, 10_000, 100_000])]
fn bench_text_parse(bencher: Bencher, n: usize) {
    let input = generate_text(n);

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(parse_text(black_box(&input))));
}

#[divan::bench(name = "text_render", args = [100, 1000, 10_000, 100_000])]
fn bench_text_render(bencher: Bencher, n: usize) {
    let Ok(text) = parse_text(&generate_text(n)) else {
        return;
    };

    bencher.bench(|| {
        black_box(text.render(|gloss| serialize_gloss(GlossMode::ImplicitPointers, gloss)))
    });
}
