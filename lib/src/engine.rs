use crate::data::{Dictionary, Word};
use crate::history::ScoreHistory;
use crate::results::{Scorer, SolverError};
use crate::strategies::Guesser;

/// A solve that gets this far has gone wrong; the strategies finish the
/// real dictionary well under it.
pub const MAX_GUESSES: usize = 10;

/// Which guesses stay legal as feedback accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    /// Any word in the guess vocabulary.
    Normal,
    /// Revealed letters must be reused: every green letter at its revealed
    /// position, and every ochre occurrence somewhere in the guess.
    Hard,
    /// Only guesses that could still be the solution given every feedback
    /// so far. Stricter than [`PlayMode::Hard`]: grey letters are excluded
    /// and ochre letters may not repeat their scored position.
    Consistent,
}

impl Default for PlayMode {
    fn default() -> PlayMode {
        PlayMode::Hard
    }
}

/// The live sets at one point in a game: the solutions still consistent
/// with the history, and the guesses legal under the play mode.
pub struct CandidateSet {
    possible_solutions: Vec<Word>,
    allowed_guesses: Vec<Word>,
}

impl CandidateSet {
    pub fn new(dict: &Dictionary, history: &ScoreHistory, mode: PlayMode) -> CandidateSet {
        let possible_solutions = history.possible(dict);
        let allowed_guesses = match mode {
            PlayMode::Normal => dict.guess_words().to_vec(),
            PlayMode::Hard => dict
                .guess_words()
                .iter()
                .copied()
                .filter(|&word| history.allowed_in_hard_mode(word))
                .collect(),
            PlayMode::Consistent => dict
                .guess_words()
                .iter()
                .copied()
                .filter(|&word| history.consistent_with(word))
                .collect(),
        };
        CandidateSet {
            possible_solutions,
            allowed_guesses,
        }
    }

    pub fn possible_solutions(&self) -> &[Word] {
        &self.possible_solutions
    }

    pub fn allowed_guesses(&self) -> &[Word] {
        &self.allowed_guesses
    }
}

/// Plays full games against hidden solutions from a fixed opening guess.
#[derive(Clone, Copy)]
pub struct Solver<'a> {
    dict: &'a Dictionary,
    scorer: &'a dyn Scorer,
    mode: PlayMode,
    opener: Word,
}

impl<'a> Solver<'a> {
    pub fn new(
        dict: &'a Dictionary,
        scorer: &'a dyn Scorer,
        mode: PlayMode,
        opener: Word,
    ) -> Solver<'a> {
        Solver {
            dict,
            scorer,
            mode,
            opener,
        }
    }

    /// Scores the opener against `actual`, then lets `guesser` drive until
    /// the game is solved.
    pub fn solve(&self, guesser: &dyn Guesser, actual: Word) -> Result<ScoreHistory, SolverError> {
        let opening = ScoreHistory::empty().plus(self.opener, self.scorer.score(self.opener, actual));
        self.solve_from(guesser, actual, opening)
    }

    /// Continues a game from an existing history. Histories are persistent,
    /// so several strategies can be run onward from one shared prefix.
    pub fn solve_from(
        &self,
        guesser: &dyn Guesser,
        actual: Word,
        mut history: ScoreHistory,
    ) -> Result<ScoreHistory, SolverError> {
        while !history.solved() {
            if history.len() >= MAX_GUESSES {
                return Err(SolverError::TooManyGuesses(MAX_GUESSES));
            }
            let candidates = CandidateSet::new(self.dict, &history, self.mode);
            let guesses = guesser.guesses(&candidates, self.scorer)?;
            let guess = guesses[0];
            if history.contains(guess) {
                return Err(SolverError::RepeatedGuess(guess.to_string()));
            }
            history = history.plus(guess, self.scorer.score(guess, actual));
        }
        Ok(history)
    }
}
