//! Boggle Solver CLI
//!
//! Generates (or is seeded with) a random board, solves it against a
//! word file, and prints the board with every found word and its path.

use std::process;

use boggle_solver::{Board, BoggleSolver, Pos, DEFAULT_MIN_WORD_LEN};

const USAGE: &str = "\
Usage: boggle-solver [OPTIONS] <DICTIONARY>

Solve a randomly generated Boggle board against a word file
(one word per line).

Options:
  --size <N>        Board size, at least 1 (default: 4)
  --min-length <N>  Minimum word length to report (default: 3)
  --seed <N>        Seed the board for a reproducible run
  -h, --help        Print this help";

struct Args {
    dictionary: String,
    size: usize,
    min_length: usize,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut size = 4;
    let mut min_length = DEFAULT_MIN_WORD_LEN;
    let mut seed = None;
    let mut dictionary = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            "--size" => {
                size = parse_value(&arg, args.next())?;
                if size < 1 {
                    return Err("--size must be at least 1".to_string());
                }
            }
            "--min-length" => {
                min_length = parse_value(&arg, args.next())?;
            }
            "--seed" => {
                seed = Some(parse_value(&arg, args.next())?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if dictionary.replace(arg).is_some() {
                    return Err("only one dictionary file may be given".to_string());
                }
            }
        }
    }

    let dictionary = dictionary.ok_or("missing dictionary file argument")?;
    Ok(Args {
        dictionary,
        size,
        min_length,
        seed,
    })
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{} requires a numeric value", flag))
}

fn format_path(path: &[Pos]) -> String {
    path.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let solver = match BoggleSolver::from_file(&args.dictionary) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("Failed to read dictionary '{}': {}", args.dictionary, err);
            process::exit(1);
        }
    };
    println!("Loaded {} words.", solver.word_count());

    let board = match args.seed {
        Some(seed) => Board::random_seeded(args.size, seed),
        None => Board::random(args.size),
    };
    println!();
    print!("{}", board);
    println!();

    let solutions = solver.solve_with_min_length(&board, args.min_length);

    let mut words: Vec<&String> = solutions.keys().collect();
    words.sort();

    for word in &words {
        println!("{:<16} {}", word, format_path(&solutions[*word]));
    }
    println!();
    println!("Found {} words.", words.len());
}
