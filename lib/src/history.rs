use crate::data::{Dictionary, Word, LETTER_BITS, LETTER_MASK, WORD_LENGTH};
use crate::results::{Score, OCHRE};
use std::fmt;
use std::sync::Arc;

/// The guesses made so far in one game and the feedback each received.
///
/// A history is a persistent chain: [`plus`](ScoreHistory::plus) wraps the
/// existing links rather than mutating them, so extending one history never
/// disturbs another built from the same prefix. Cloning shares the links.
#[derive(Clone, Default)]
pub struct ScoreHistory {
    head: Option<Arc<Entry>>,
}

struct Entry {
    guess: Word,
    score: Score,
    prev: Option<Arc<Entry>>,
}

impl ScoreHistory {
    /// A history with no guesses in it yet.
    pub fn empty() -> ScoreHistory {
        ScoreHistory { head: None }
    }

    /// This history with one more scored guess appended.
    pub fn plus(&self, guess: Word, score: Score) -> ScoreHistory {
        ScoreHistory {
            head: Some(Arc::new(Entry {
                guess,
                score,
                prev: self.head.clone(),
            })),
        }
    }

    /// Whether `actual` would have produced every feedback recorded here.
    pub fn consistent_with(&self, actual: Word) -> bool {
        self.entries()
            .all(|entry| Score::of(entry.guess, actual) == entry.score)
    }

    /// Whether `guess` is legal under hard-mode rules: every green letter
    /// stays at its position, and every ochre occurrence is matched by a
    /// distinct occurrence somewhere in `guess`. Grey letters impose no
    /// constraint.
    pub fn allowed_in_hard_mode(&self, guess: Word) -> bool {
        self.entries().all(|entry| entry.allows_in_hard_mode(guess))
    }

    /// True iff the most recent guess scored green in every position.
    pub fn solved(&self) -> bool {
        self.head
            .as_deref()
            .map_or(false, |entry| entry.score.is_solved())
    }

    /// How many guesses have been made.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether `word` was guessed at any point in this history.
    pub fn contains(&self, word: Word) -> bool {
        self.entries().any(|entry| entry.guess == word)
    }

    /// The solution words still consistent with every recorded feedback.
    pub fn possible(&self, dict: &Dictionary) -> Vec<Word> {
        dict.solution_words()
            .iter()
            .copied()
            .filter(|&word| self.consistent_with(word))
            .collect()
    }

    fn entries(&self) -> Entries<'_> {
        Entries {
            next: self.head.as_deref(),
        }
    }
}

/// Walks the chain newest-first.
struct Entries<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let entry = self.next?;
        self.next = entry.prev.as_deref();
        Some(entry)
    }
}

impl Entry {
    fn allows_in_hard_mode(&self, guess: Word) -> bool {
        let green = self.score.green_mask();
        if self.guess.bits() & green != guess.bits() & green {
            return false;
        }
        // Each ochre occurrence must claim its own letter of the guess, and
        // a letter already matched green cannot double as that claim.
        let mut scratch = guess.bits() & !green;
        for index in 0..WORD_LENGTH {
            if self.score.slot(index) != OCHRE {
                continue;
            }
            let letter = self.guess.letter(index);
            let mut claimed = false;
            for guess_index in 0..WORD_LENGTH {
                let shift = guess_index as u32 * LETTER_BITS;
                if (scratch >> shift) & LETTER_MASK == letter {
                    scratch &= !(LETTER_MASK << shift);
                    claimed = true;
                    break;
                }
            }
            if !claimed {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for ScoreHistory {
    /// Space-joined `word:score` tokens, oldest guess first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<&Entry> = self.entries().collect();
        entries.reverse();
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", entry.guess, entry.score)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScoreHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScoreHistory(\"{}\")", self)
    }
}
