use crate::data::{Dictionary, Word};
use crate::results::{Score, Scorer};
use rayon::prelude::*;
use std::collections::HashMap;

/// Every guess-against-solution score for a dictionary, precomputed once.
///
/// The table is built in parallel at startup and is read-only afterwards, so
/// one cache can be shared by every worker in a batch run. Pairs outside the
/// dictionary fall back to computing the score directly.
pub struct ScoreCache {
    scores: HashMap<u64, Score>,
}

impl ScoreCache {
    pub fn new(dict: &Dictionary) -> ScoreCache {
        let solutions = dict.solution_words();
        let scores = dict
            .guess_words()
            .par_iter()
            .flat_map_iter(|&attempt| {
                solutions
                    .iter()
                    .map(move |&actual| (pair_key(attempt, actual), Score::of(attempt, actual)))
            })
            .collect();
        ScoreCache { scores }
    }

    /// How many pairs are in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Scorer for ScoreCache {
    fn score(&self, attempt: Word, actual: Word) -> Score {
        match self.scores.get(&pair_key(attempt, actual)) {
            Some(&score) => score,
            None => Score::of(attempt, actual),
        }
    }
}

fn pair_key(attempt: Word, actual: Word) -> u64 {
    (attempt.bits() as u64) << 32 | actual.bits() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::encode(text).unwrap()
    }

    #[test]
    fn cache_covers_every_pair() {
        let dict =
            Dictionary::from_iterators(["crane", "slate", "pried"], ["crane", "slate"]).unwrap();
        let cache = ScoreCache::new(&dict);

        assert_eq!(cache.len(), 6);
        for &attempt in dict.guess_words() {
            for &actual in dict.solution_words() {
                assert_eq!(cache.score(attempt, actual), Score::of(attempt, actual));
            }
        }
    }

    #[test]
    fn cache_falls_back_outside_the_dictionary() {
        let dict = Dictionary::from_iterators(["crane"], ["crane"]).unwrap();
        let cache = ScoreCache::new(&dict);

        assert_eq!(
            cache.score(word("slate"), word("crane")),
            Score::of(word("slate"), word("crane"))
        );
    }
}
