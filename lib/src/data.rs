use crate::results::SolverError;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;

/// Every word in the game is exactly this long.
pub const WORD_LENGTH: usize = 5;

pub(crate) const LETTER_BITS: u32 = 5;
pub(crate) const LETTER_MASK: u32 = (1 << LETTER_BITS) - 1;

/// A five-letter lowercase word, packed into five 5-bit fields.
///
/// Field `i` holds `letter - 'a' + 1` for the letter at index `i`; a zero
/// field means "no letter" and never appears in an encoded word. Equality
/// and hashing compare the packed integer directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(u32);

impl Word {
    /// Encodes a word of exactly [`WORD_LENGTH`] lowercase ASCII letters.
    pub fn encode(word: &str) -> Result<Word, SolverError> {
        let bytes = word.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidWord(word.to_string()));
        }
        let mut code = 0;
        for (index, byte) in bytes.iter().enumerate() {
            code |= ((byte - b'a' + 1) as u32) << (index as u32 * LETTER_BITS);
        }
        Ok(Word(code))
    }

    pub(crate) fn bits(self) -> u32 {
        self.0
    }

    /// The 5-bit code of the letter at `index`.
    pub(crate) fn letter(self, index: usize) -> u32 {
        (self.0 >> (index as u32 * LETTER_BITS)) & LETTER_MASK
    }

    /// One bit per distinct letter occurring anywhere in the word.
    pub(crate) fn letter_set(self) -> u32 {
        let mut set = 0;
        for index in 0..WORD_LENGTH {
            set |= 1 << self.letter(index);
        }
        set
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..WORD_LENGTH {
            let field = self.letter(index);
            debug_assert!((1..=26).contains(&field));
            fmt::Write::write_char(f, (b'a' + field as u8 - 1) as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{}\")", self)
    }
}

/// The two vocabularies of a game: the words a player may guess, and the
/// subset a hidden solution is drawn from.
///
/// Built once, read-only afterwards. Construction fails if any solution
/// word is missing from the guess vocabulary, since a solution must always
/// be guessable.
pub struct Dictionary {
    guess_words: Vec<Word>,
    solution_words: Vec<Word>,
    guess_set: HashSet<Word>,
}

impl Dictionary {
    /// Reads both vocabularies, one word per line.
    ///
    /// Lines that are not exactly five lowercase ASCII letters are dropped
    /// silently, so the sources may contain noise. Duplicates collapse to
    /// their first occurrence.
    pub fn from_readers<G: BufRead, S: BufRead>(
        guess_reader: G,
        solution_reader: S,
    ) -> Result<Dictionary, SolverError> {
        Dictionary::new(read_words(guess_reader)?, read_words(solution_reader)?)
    }

    /// Builds the vocabularies from in-memory word lists, with the same
    /// filtering as [`Dictionary::from_readers`].
    pub fn from_iterators<G, S>(guesses: G, solutions: S) -> Result<Dictionary, SolverError>
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Dictionary::new(collect_words(guesses), collect_words(solutions))
    }

    fn new(guess_words: Vec<Word>, solution_words: Vec<Word>) -> Result<Dictionary, SolverError> {
        let guess_set: HashSet<Word> = guess_words.iter().copied().collect();
        let missing: Vec<String> = solution_words
            .iter()
            .filter(|word| !guess_set.contains(word))
            .map(|word| word.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SolverError::MissingSolutions(missing));
        }
        Ok(Dictionary {
            guess_words,
            solution_words,
            guess_set,
        })
    }

    /// Every guessable word, in first-seen order.
    pub fn guess_words(&self) -> &[Word] {
        &self.guess_words
    }

    /// Every possible solution word, in first-seen order.
    pub fn solution_words(&self) -> &[Word] {
        &self.solution_words
    }

    pub fn contains_guess(&self, word: Word) -> bool {
        self.guess_set.contains(&word)
    }

    pub fn contains_solution(&self, word: Word) -> bool {
        self.solution_words.contains(&word)
    }
}

fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, SolverError> {
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    for line in reader.lines() {
        if let Ok(word) = Word::encode(line?.trim()) {
            if seen.insert(word) {
                words.push(word);
            }
        }
    }
    Ok(words)
}

fn collect_words<I>(items: I) -> Vec<Word>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    for item in items {
        if let Ok(word) = Word::encode(item.as_ref().trim()) {
            if seen.insert(word) {
                words.push(word);
            }
        }
    }
    words
}
