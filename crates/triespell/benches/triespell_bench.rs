// Criterion benchmarks for triespell.
//
// Uses a generated dictionary so the benchmarks need no external files.
//
// Run:
//   cargo bench -p triespell

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};
use triespell::{LoadPolicy, SpellChecker};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Every word of length 1..=4 over the letters `a`-`h` (4680 words).
fn generated_words() -> Vec<String> {
    let letters = b"abcdefgh";
    let mut words = Vec::new();
    let mut frontier = vec![String::new()];
    for _ in 0..4 {
        let mut next = Vec::new();
        for stem in &frontier {
            for &l in letters {
                let mut w = stem.clone();
                w.push(l as char);
                words.push(w.clone());
                next.push(w);
            }
        }
        frontier = next;
    }
    words
}

fn dictionary_text() -> String {
    generated_words().join("\n")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_load(c: &mut Criterion) {
    let text = dictionary_text();
    c.bench_function("load_dictionary", |b| {
        b.iter(|| {
            SpellChecker::from_reader(Cursor::new(text.as_bytes()), LoadPolicy::Strict)
                .expect("dictionary loads")
        })
    });
}

fn bench_check(c: &mut Criterion) {
    let checker = SpellChecker::from_reader(Cursor::new(dictionary_text()), LoadPolicy::Strict)
        .expect("dictionary loads");
    let probes = ["abcd", "hhhh", "abcz", "zzzz", "ABCD", "a"];
    c.bench_function("check_words", |b| {
        b.iter(|| {
            for w in probes {
                std::hint::black_box(checker.check(w));
            }
        })
    });
}

fn bench_completions(c: &mut Criterion) {
    let checker = SpellChecker::from_reader(Cursor::new(dictionary_text()), LoadPolicy::Strict)
        .expect("dictionary loads");
    c.bench_function("completions_limit_5", |b| {
        b.iter(|| std::hint::black_box(checker.lexicon().completions("a", 5)))
    });
    c.bench_function("completions_unbounded", |b| {
        b.iter(|| std::hint::black_box(checker.lexicon().completions("a", usize::MAX)))
    });
}

criterion_group!(benches, bench_load, bench_check, bench_completions);
criterion_main!(benches);
