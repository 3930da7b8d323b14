use crate::data::Word;
use crate::engine::CandidateSet;
use crate::results::{Score, Scorer, SolverError};
use std::collections::HashMap;

/// Strategies stop collecting tied guesses past this many.
pub const MAX_TIED_GUESSES: usize = 10;

/// Ranks the legal guesses by how well they partition the remaining
/// possible solutions.
///
/// Each possible solution would answer a candidate guess with some
/// feedback; solutions answering identically form a bucket, and the shape
/// of that bucket distribution is what the strategies disagree about.
/// Implementations return every guess tying for the best rank, capped at
/// [`MAX_TIED_GUESSES`] and ordered by each strategy's own tie-break rule.
/// A solver plays the first returned guess.
pub trait Guesser: Sync {
    fn guesses(
        &self,
        candidates: &CandidateSet,
        scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError>;
}

/// Minimizes the size of the largest feedback bucket, the fewest
/// guaranteed-worst-case remaining candidates. Ties narrow to a single
/// guess, preferring one that is itself still a possible solution.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimax;

impl Guesser for Minimax {
    fn guesses(
        &self,
        candidates: &CandidateSet,
        scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError> {
        let mut best = Vec::new();
        let mut best_worst = usize::MAX;
        let mut best_is_possible = false;
        for &guess in candidates.allowed_guesses() {
            let (buckets, guess_is_possible) = bucket_counts(guess, candidates, scorer);
            let worst = buckets.values().copied().max().unwrap_or(usize::MAX);
            if worst < best_worst
                || (worst == best_worst && (guess_is_possible || !best_is_possible))
            {
                best.clear();
                best.push(guess);
                best_worst = worst;
                best_is_possible = guess_is_possible;
            }
        }
        if best.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        Ok(best)
    }
}

/// Minimizes the sum of squared bucket sizes, the expected number of
/// candidates left after the guess. Equally-ranked guesses extend the tied
/// list while their still-possible status matches the incumbent's.
#[derive(Clone, Copy, Debug, Default)]
pub struct SumOfSquares;

impl Guesser for SumOfSquares {
    fn guesses(
        &self,
        candidates: &CandidateSet,
        scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError> {
        let mut best = Vec::new();
        let mut best_sum = usize::MAX;
        let mut best_is_possible = false;
        for &guess in candidates.allowed_guesses() {
            let (buckets, guess_is_possible) = bucket_counts(guess, candidates, scorer);
            let sum: usize = buckets.values().map(|&count| count * count).sum();
            if sum < best_sum || (sum == best_sum && guess_is_possible && !best_is_possible) {
                best.clear();
                best.push(guess);
                best_sum = sum;
                best_is_possible = guess_is_possible;
            } else if sum == best_sum
                && best.len() < MAX_TIED_GUESSES
                && guess_is_possible == best_is_possible
            {
                best.push(guess);
            }
        }
        if best.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        Ok(best)
    }
}

/// Maximizes the information carried by the feedback, Σ −n·ln n over the
/// bucket sizes n. This is the Shannon entropy of the bucket distribution
/// up to a constant scale: the shared 1/N factor and the log base cannot
/// change the ordering, so neither is applied. The tied list extends like
/// [`SumOfSquares`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Entropy;

impl Guesser for Entropy {
    fn guesses(
        &self,
        candidates: &CandidateSet,
        scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError> {
        let mut best = Vec::new();
        let mut best_entropy = f64::NEG_INFINITY;
        let mut best_is_possible = false;
        for &guess in candidates.allowed_guesses() {
            let (buckets, guess_is_possible) = bucket_counts(guess, candidates, scorer);
            let entropy: f64 = buckets
                .values()
                .map(|&count| {
                    let count = count as f64;
                    -count * count.ln()
                })
                .sum();
            if entropy > best_entropy
                || (entropy == best_entropy && guess_is_possible && !best_is_possible)
            {
                best.clear();
                best.push(guess);
                best_entropy = entropy;
                best_is_possible = guess_is_possible;
            } else if entropy == best_entropy
                && best.len() < MAX_TIED_GUESSES
                && guess_is_possible == best_is_possible
            {
                best.push(guess);
            }
        }
        if best.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        Ok(best)
    }
}

/// Counts, for one candidate guess, how many possible solutions fall into
/// each feedback bucket, and whether the guess is itself still possible.
fn bucket_counts(
    guess: Word,
    candidates: &CandidateSet,
    scorer: &dyn Scorer,
) -> (HashMap<Score, usize>, bool) {
    let mut buckets = HashMap::new();
    let mut guess_is_possible = false;
    for &actual in candidates.possible_solutions() {
        *buckets.entry(scorer.score(guess, actual)).or_insert(0) += 1;
        if actual == guess {
            guess_is_possible = true;
        }
    }
    (buckets, guess_is_possible)
}
