use rand::Rng;
use std::io::Cursor;
use wordle_strategies::*;

#[test]
fn encode_round_trips_random_words() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let text: String = (0..WORD_LENGTH)
            .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
            .collect();

        let word = Word::encode(&text).unwrap();

        assert_eq!(word.to_string(), text);
        assert_eq!(Word::encode(&word.to_string()).unwrap(), word);
    }
}

#[test]
fn dictionary_reads_noisy_sources() {
    let guesses = Cursor::new("crane\nslate\n\nSHOUT\ntoo-long\npried\nslate\n");
    let solutions = Cursor::new("slate\ncrane\n");

    let dict = Dictionary::from_readers(guesses, solutions).unwrap();

    assert_eq!(
        dict.guess_words(),
        &[
            Word::encode("crane").unwrap(),
            Word::encode("slate").unwrap(),
            Word::encode("pried").unwrap(),
        ]
    );
    assert_eq!(dict.solution_words().len(), 2);
}

#[test]
fn dictionary_rejects_unguessable_solutions() {
    let guesses = Cursor::new("crane\n");
    let solutions = Cursor::new("crane\nslate\n");

    assert!(Dictionary::from_readers(guesses, solutions).is_err());
}
