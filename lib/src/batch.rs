use crate::data::{Dictionary, Word};
use crate::engine::{PlayMode, Solver};
use crate::results::{Scorer, SolverError};
use crate::strategies::Guesser;
use rayon::ThreadPoolBuilder;
use std::sync::mpsc;

/// The aggregate of solving every solution word from one opener.
#[derive(Clone, Copy, Debug)]
pub struct BatchOutcome {
    pub opener: Word,
    /// Guess counts summed over the whole solution set.
    pub total_guesses: u64,
    /// The longest single solve.
    pub max_guesses: usize,
}

/// Solves the whole solution set from many openers across a fixed-size
/// worker pool.
///
/// The dictionary and scorer are shared read-only by every worker; each
/// worker builds its own history chains. Outcomes are delivered in the
/// order openers finish, not the order they were given.
pub struct BatchRunner<'a> {
    dict: &'a Dictionary,
    scorer: &'a dyn Scorer,
    mode: PlayMode,
    threads: usize,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        dict: &'a Dictionary,
        scorer: &'a dyn Scorer,
        mode: PlayMode,
        threads: usize,
    ) -> BatchRunner<'a> {
        BatchRunner {
            dict,
            scorer,
            mode,
            threads,
        }
    }

    /// Solves every solution word from `opener` and aggregates the counts.
    pub fn solve_all(
        &self,
        opener: Word,
        guesser: &dyn Guesser,
    ) -> Result<BatchOutcome, SolverError> {
        let solver = Solver::new(self.dict, self.scorer, self.mode, opener);
        let mut total_guesses = 0;
        let mut max_guesses = 0;
        for &actual in self.dict.solution_words() {
            let solved = solver.solve(guesser, actual)?;
            total_guesses += solved.len() as u64;
            max_guesses = max_guesses.max(solved.len());
        }
        Ok(BatchOutcome {
            opener,
            total_guesses,
            max_guesses,
        })
    }

    /// Runs [`solve_all`](BatchRunner::solve_all) for every opener on the
    /// worker pool, calling `on_outcome` as each one completes.
    ///
    /// A failing opener does not stop the others; the first error is
    /// returned once every worker has drained.
    pub fn run<F>(
        &self,
        openers: &[Word],
        guesser: &dyn Guesser,
        mut on_outcome: F,
    ) -> Result<(), SolverError>
    where
        F: FnMut(BatchOutcome),
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|err| SolverError::WorkerPool(err.to_string()))?;
        let (sender, receiver) = mpsc::channel();
        let mut first_error = None;
        pool.in_place_scope(|scope| {
            for &opener in openers {
                let sender = sender.clone();
                scope.spawn(move |_| {
                    let _ = sender.send(self.solve_all(opener, guesser));
                });
            }
            drop(sender);
            for outcome in receiver.iter() {
                match outcome {
                    Ok(outcome) => on_outcome(outcome),
                    Err(err) => {
                        if first_error.is_none() {
                            first_error = Some(err);
                        }
                    }
                }
            }
        });
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
