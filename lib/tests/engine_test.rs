#[macro_use]
extern crate assert_matches;

use std::sync::atomic::{AtomicUsize, Ordering};
use wordle_strategies::*;

fn word(text: &str) -> Word {
    Word::encode(text).unwrap()
}

fn mode_dictionary() -> Dictionary {
    Dictionary::from_iterators(["slate", "crane", "abate", "pried"], ["crane", "abate"]).unwrap()
}

#[test]
fn play_mode_defaults_to_hard() {
    assert_eq!(PlayMode::default(), PlayMode::Hard);
}

#[test]
fn normal_mode_allows_the_whole_guess_vocabulary() {
    let dict = mode_dictionary();
    let history = ScoreHistory::empty().plus(word("slate"), Score::of(word("slate"), word("crane")));

    let candidates = CandidateSet::new(&dict, &history, PlayMode::Normal);

    assert_eq!(candidates.allowed_guesses(), dict.guess_words());
    assert_eq!(candidates.possible_solutions(), &[word("crane")]);
}

#[test]
fn hard_mode_allows_more_than_consistent_mode() {
    let dict = mode_dictionary();
    let history = ScoreHistory::empty().plus(word("slate"), Score::of(word("slate"), word("crane")));

    let hard = CandidateSet::new(&dict, &history, PlayMode::Hard);
    let consistent = CandidateSet::new(&dict, &history, PlayMode::Consistent);

    assert_eq!(
        hard.allowed_guesses(),
        &[word("slate"), word("crane"), word("abate")]
    );
    assert_eq!(consistent.allowed_guesses(), &[word("crane")]);
    for guess in consistent.allowed_guesses() {
        assert!(hard.allowed_guesses().contains(guess));
    }
}

#[test]
fn solver_recognizes_an_opening_hit() -> Result<(), SolverError> {
    let dict = mode_dictionary();
    let solver = Solver::new(&dict, &DirectScorer, PlayMode::Hard, word("crane"));

    let solved = solver.solve(&SumOfSquares, word("crane"))?;

    assert!(solved.solved());
    assert_eq!(solved.len(), 1);
    assert_eq!(solved.to_string(), "crane:+++++");
    Ok(())
}

#[test]
fn solver_follows_the_forced_path() -> Result<(), SolverError> {
    let dict = Dictionary::from_iterators(
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
    )?;
    let solver = Solver::new(&dict, &DirectScorer, PlayMode::Hard, word("begot"));

    let solved = solver.solve(&SumOfSquares, word("endow"))?;

    assert_eq!(solved.to_string(), "begot:-/-+- endow:+++++");
    Ok(())
}

#[test]
fn solver_can_branch_from_a_shared_prefix() -> Result<(), SolverError> {
    let dict = Dictionary::from_iterators(
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
    )?;
    let solver = Solver::new(&dict, &DirectScorer, PlayMode::Hard, word("begot"));
    let prefix = ScoreHistory::empty().plus(word("alpha"), Score::of(word("alpha"), word("endow")));

    let one = solver.solve_from(&Minimax, word("endow"), prefix.clone())?;
    let other = solver.solve_from(&Entropy, word("endow"), prefix.clone())?;

    assert!(one.solved());
    assert!(other.solved());
    assert_eq!(prefix.len(), 1);
    Ok(())
}

/// Suggests the same word every time, whatever the candidates say.
struct Stubborn(Word);

impl Guesser for Stubborn {
    fn guesses(
        &self,
        _candidates: &CandidateSet,
        _scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError> {
        Ok(vec![self.0])
    }
}

#[test]
fn solver_rejects_a_repeated_suggestion() {
    let dict = mode_dictionary();
    let solver = Solver::new(&dict, &DirectScorer, PlayMode::Normal, word("slate"));

    let result = solver.solve(&Stubborn(word("slate")), word("crane"));

    assert_matches!(result, Err(SolverError::RepeatedGuess(repeated)) if repeated == "slate");
}

/// Hands out each of its words once, in order.
struct Conveyor {
    words: Vec<Word>,
    next: AtomicUsize,
}

impl Guesser for Conveyor {
    fn guesses(
        &self,
        _candidates: &CandidateSet,
        _scorer: &dyn Scorer,
    ) -> Result<Vec<Word>, SolverError> {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(vec![self.words[index]])
    }
}

#[test]
fn solver_gives_up_past_the_guess_limit() {
    let texts = [
        "aback", "bacon", "cabin", "dance", "eagle", "fable", "gamma", "habit", "ideal", "jolly",
        "koala", "lemon",
    ];
    let dict = Dictionary::from_iterators(texts, texts).unwrap();
    let conveyor = Conveyor {
        words: texts[1..].iter().map(|text| word(text)).collect(),
        next: AtomicUsize::new(0),
    };
    let solver = Solver::new(&dict, &DirectScorer, PlayMode::Normal, word("aback"));

    let result = solver.solve(&conveyor, word("zesty"));

    assert_matches!(result, Err(SolverError::TooManyGuesses(MAX_GUESSES)));
}
