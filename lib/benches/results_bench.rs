#![cfg_attr(feature = "unstable", feature(test))]
#![cfg(feature = "unstable")]

extern crate test;

use std::collections::HashSet;
use test::Bencher;
use wordle_strategies::*;

fn synthetic_words(count: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(count);
    let mut seen = HashSet::new();
    let mut state: u32 = 0x2545_f491;
    while words.len() < count {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let mut text = String::new();
        let mut value = state;
        for _ in 0..WORD_LENGTH {
            text.push(char::from(b'a' + (value % 26) as u8));
            value /= 26;
        }
        if seen.insert(text.clone()) {
            words.push(text);
        }
    }
    words
}

#[bench]
fn bench_score_all_pairs(b: &mut Bencher) {
    let words: Vec<Word> = synthetic_words(128)
        .iter()
        .map(|text| Word::encode(text).unwrap())
        .collect();

    b.iter(|| {
        let mut matches = 0;
        for &attempt in &words {
            for &actual in &words {
                matches += Score::of(attempt, actual).matches();
            }
        }
        matches
    });
}

#[bench]
fn bench_build_score_cache(b: &mut Bencher) {
    let words = synthetic_words(128);
    let dict = Dictionary::from_iterators(&words, &words).unwrap();

    b.iter(|| ScoreCache::new(&dict));
}
