use clap::{ArgEnum, Parser, Subcommand};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process;
use std::time::Instant;
use wordle_strategies::*;

/// Analyzes and solves Wordle: scores guesses against hidden solutions,
/// tracks which solutions stay consistent with the feedback so far, and
/// compares guessing strategies across the whole solution set.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the guessable words, one per line.
    #[clap(short, long)]
    guess_words: String,

    /// Path to the possible solution words, one per line.
    #[clap(short, long)]
    solution_words: String,

    /// The fixed first guess of every game.
    #[clap(short, long, default_value = "plaid")]
    opener: String,

    /// The strategy that ranks candidate guesses.
    #[clap(long, arg_enum, default_value = "sum-of-squares")]
    strategy: StrategyArg,

    /// Which guesses stay legal as feedback accumulates.
    #[clap(long, arg_enum, default_value = "hard")]
    mode: ModeArg,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one hidden word and print the guess path.
    Solve {
        /// The hidden solution to play against.
        word: String,
    },
    /// Solve every solution word, printing each path and running totals.
    SolveAll,
    /// Aggregate guess counts for every opener in parallel, resumably.
    Batch {
        /// File the per-opener results are appended to; openers already
        /// present in it are skipped.
        #[clap(short, long, default_value = "wordlestart.txt")]
        progress_file: String,

        /// Fixed number of worker threads.
        #[clap(short, long, default_value_t = 10)]
        threads: usize,
    },
    /// Rebuild a game from word/score pairs and suggest the next guesses.
    Suggest {
        /// Alternating words and scores, e.g. `raise -+--- bunty --+/+`.
        #[clap(allow_hyphen_values = true)]
        pairs: Vec<String>,
    },
    /// Solve every word under two strategies and report where they differ.
    Compare {
        #[clap(arg_enum)]
        first: StrategyArg,

        #[clap(arg_enum)]
        second: StrategyArg,
    },
    /// Rank opening words by how many letters they hit across solutions.
    BestOpener,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Minimax,
    SumOfSquares,
    Entropy,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum ModeArg {
    Normal,
    Hard,
    Consistent,
}

impl From<ModeArg> for PlayMode {
    fn from(mode: ModeArg) -> PlayMode {
        match mode {
            ModeArg::Normal => PlayMode::Normal,
            ModeArg::Hard => PlayMode::Hard,
            ModeArg::Consistent => PlayMode::Consistent,
        }
    }
}

fn guesser_for(strategy: StrategyArg) -> &'static dyn Guesser {
    match strategy {
        StrategyArg::Minimax => &Minimax,
        StrategyArg::SumOfSquares => &SumOfSquares,
        StrategyArg::Entropy => &Entropy,
    }
}

fn strategy_name(strategy: StrategyArg) -> &'static str {
    match strategy {
        StrategyArg::Minimax => "minimax",
        StrategyArg::SumOfSquares => "sum-of-squares",
        StrategyArg::Entropy => "entropy",
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let guess_reader = BufReader::new(File::open(&args.guess_words)?);
    let solution_reader = BufReader::new(File::open(&args.solution_words)?);
    let dict = Dictionary::from_readers(guess_reader, solution_reader)?;
    println!(
        "{} guess words, {} solution words",
        dict.guess_words().len(),
        dict.solution_words().len()
    );

    let opener = Word::encode(&args.opener)?;
    let mode = PlayMode::from(args.mode);
    let guesser = guesser_for(args.strategy);

    match args.command {
        Command::Solve { word } => solve_one(&dict, mode, opener, guesser, &word)?,
        Command::SolveAll => solve_all(&dict, mode, opener, guesser)?,
        Command::Batch {
            progress_file,
            threads,
        } => batch(&dict, mode, guesser, &progress_file, threads)?,
        Command::Suggest { pairs } => suggest(&dict, mode, guesser, &pairs)?,
        Command::Compare { first, second } => compare(&dict, mode, opener, first, second)?,
        Command::BestOpener => best_opener(&dict),
    }

    println!("done in {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn solve_one(
    dict: &Dictionary,
    mode: PlayMode,
    opener: Word,
    guesser: &dyn Guesser,
    word: &str,
) -> Result<(), SolverError> {
    let actual = Word::encode(word)?;
    let solver = Solver::new(dict, &DirectScorer, mode, opener);

    let solved = solver.solve(guesser, actual)?;

    println!("{}", solved);
    println!("solved {} in {} guesses", actual, solved.len());
    Ok(())
}

fn solve_all(
    dict: &Dictionary,
    mode: PlayMode,
    opener: Word,
    guesser: &dyn Guesser,
) -> Result<(), SolverError> {
    let solver = Solver::new(dict, &DirectScorer, mode, opener);
    let count = dict.solution_words().len();
    let start = Instant::now();
    let mut total = 0u64;
    let mut max = 0usize;
    let mut pessimal: Vec<Word> = Vec::new();
    let mut optimal: Vec<Word> = Vec::new();
    for (index, &actual) in dict.solution_words().iter().enumerate() {
        let solved = solver.solve(guesser, actual)?;
        println!("{}", solved);

        let size = solved.len();
        if size >= 6 {
            pessimal.push(actual);
        }
        if size <= 2 {
            optimal.push(actual);
        }
        total += size as u64;
        max = max.max(size);

        let done = index + 1;
        let elapsed = start.elapsed().as_secs_f64();
        let rate = elapsed / done as f64;
        let eta = rate * (count - done) as f64;
        println!(
            "\nword {} ({}/{}) length {} average {:.3} total {} max {} elapsed {:.1}s {:.2}s per word ETA {}s\n",
            actual,
            done,
            count,
            size,
            total as f64 / done as f64,
            total,
            max,
            elapsed,
            rate,
            eta as u64
        );
    }
    println!("worst cases ({}): {}", pessimal.len(), display_words(&pessimal));
    println!("best cases ({}): {}", optimal.len(), display_words(&optimal));
    Ok(())
}

fn batch(
    dict: &Dictionary,
    mode: PlayMode,
    guesser: &dyn Guesser,
    progress_file: &str,
    threads: usize,
) -> Result<(), Box<dyn Error>> {
    let finished = read_finished_openers(progress_file)?;
    if !finished.is_empty() {
        println!(
            "skipping {} openers already in {}",
            finished.len(),
            progress_file
        );
    }
    let openers: Vec<Word> = dict
        .solution_words()
        .iter()
        .copied()
        .filter(|opener| !finished.contains(opener))
        .collect();
    let pending = openers.len();

    let cache = ScoreCache::new(dict);
    let runner = BatchRunner::new(dict, &cache, mode, threads);
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(progress_file)?;
    let start = Instant::now();
    let mut completed = 0usize;
    let mut log_error: Option<io::Error> = None;
    runner.run(&openers, guesser, |outcome| {
        completed += 1;
        println!(
            "{} total {} max {} ({}/{})",
            outcome.opener, outcome.total_guesses, outcome.max_guesses, completed, pending
        );
        if log_error.is_none() {
            log_error = append_progress(&mut log, &outcome, start.elapsed().as_secs_f64(), completed)
                .err();
        }
    })?;
    if let Some(err) = log_error {
        return Err(err.into());
    }
    Ok(())
}

fn read_finished_openers(progress_file: &str) -> io::Result<HashSet<Word>> {
    if !Path::new(progress_file).exists() {
        return Ok(HashSet::new());
    }
    let mut finished = HashSet::new();
    for line in BufReader::new(File::open(progress_file)?).lines() {
        if let Some(token) = line?.split_whitespace().next() {
            if let Ok(opener) = Word::encode(token) {
                finished.insert(opener);
            }
        }
    }
    Ok(finished)
}

fn append_progress(
    log: &mut File,
    outcome: &BatchOutcome,
    elapsed: f64,
    completed: usize,
) -> io::Result<()> {
    writeln!(
        log,
        "{} {} {} {}s {:.1}s per",
        outcome.opener,
        outcome.total_guesses,
        outcome.max_guesses,
        elapsed as u64,
        elapsed / completed as f64
    )?;
    log.flush()
}

fn suggest(
    dict: &Dictionary,
    mode: PlayMode,
    guesser: &dyn Guesser,
    pairs: &[String],
) -> Result<(), Box<dyn Error>> {
    if pairs.len() % 2 == 1 {
        return Err("arguments must alternate word and score".into());
    }
    let mut history = ScoreHistory::empty();
    for pair in pairs.chunks(2) {
        let guess = Word::encode(&pair[0])?;
        if !dict.contains_guess(guess) {
            return Err(format!("guess {} is not in the dictionary", pair[0]).into());
        }
        history = history.plus(guess, Score::parse(&pair[1])?);
    }
    println!("starting scores: {}", history);

    let possible = history.possible(dict);
    if possible.len() < 20 {
        println!(
            "{} possible solution{}: {}",
            possible.len(),
            if possible.len() == 1 { "" } else { "s" },
            display_words(&possible)
        );
    } else {
        println!("{} possible solutions", possible.len());
    }

    let candidates = CandidateSet::new(dict, &history, mode);
    let guesses = guesser.guesses(&candidates, &DirectScorer)?;
    let rendered: Vec<String> = guesses
        .iter()
        .map(|&guess| {
            if dict.contains_solution(guess) {
                format!("{}*", guess)
            } else {
                guess.to_string()
            }
        })
        .collect();
    println!("guesses: {}", rendered.join(" "));
    Ok(())
}

fn compare(
    dict: &Dictionary,
    mode: PlayMode,
    opener: Word,
    first: StrategyArg,
    second: StrategyArg,
) -> Result<(), SolverError> {
    let solver = Solver::new(dict, &DirectScorer, mode, opener);
    let first_guesser = guesser_for(first);
    let second_guesser = guesser_for(second);
    let mut first_better = 0;
    let mut first_much_better = 0;
    let mut second_better = 0;
    let mut second_much_better = 0;
    for &actual in dict.solution_words() {
        let first_solved = solver.solve(first_guesser, actual)?;
        let second_solved = solver.solve(second_guesser, actual)?;
        let difference = second_solved.len() as i64 - first_solved.len() as i64;
        if difference == 0 {
            continue;
        }
        println!(
            "for {}:\n  {:<14} {}\n  {:<14} {}\n",
            actual,
            strategy_name(first),
            first_solved,
            strategy_name(second),
            second_solved
        );
        if difference > 0 {
            first_better += 1;
            if difference > 1 {
                first_much_better += 1;
            }
        } else {
            second_better += 1;
            if difference < -1 {
                second_much_better += 1;
            }
        }
    }
    println!(
        "of {} words, {} better {} much better {}, {} better {} much better {}",
        dict.solution_words().len(),
        strategy_name(first),
        first_better,
        first_much_better,
        strategy_name(second),
        second_better,
        second_much_better
    );
    Ok(())
}

fn best_opener(dict: &Dictionary) {
    let mut best = (0u64, 0u64);
    let mut best_words: Vec<Word> = Vec::new();
    for &guess in dict.guess_words() {
        let mut total = (0u64, 0u64);
        for &actual in dict.solution_words() {
            let score = Score::of(guess, actual);
            total.0 += score.matches() as u64;
            total.1 += score.exact_matches() as u64;
        }
        match total.cmp(&best) {
            Ordering::Greater => {
                best = total;
                best_words.clear();
                best_words.push(guess);
            }
            Ordering::Equal => best_words.push(guess),
            Ordering::Less => {}
        }
    }
    println!(
        "best words {} with {} matches, {} exact",
        display_words(&best_words),
        best.0,
        best.1
    );
}

fn display_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
