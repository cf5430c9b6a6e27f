use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use serde::Deserialize;

use crate::letterbox::{solve, Puzzle, SearchLimits, SolutionStore};

mod letterbox;

/// On-disk puzzle definition: the sides as strings of letters, plus optional
/// search limit overrides.
#[derive(Debug, Deserialize)]
struct PuzzleFile {
    sides: Vec<String>,
    #[serde(default)]
    limits: SearchLimits,
}

fn read_dictionary(path: &str) -> Vec<String> {
    let file = File::open(path).unwrap();
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line.unwrap().trim_end().to_lowercase();
        if word.is_empty() {
            continue;
        }
        words.push(word);
    }
    words
}

fn read_puzzle_file(path: &str) -> PuzzleFile {
    let mut file = File::open(path).unwrap();
    let mut data = String::new();
    file.read_to_string(&mut data).unwrap();
    serde_json::from_str(&data).unwrap()
}

fn print_solutions(store: &SolutionStore) {
    println!("Solutions:");
    for (length, solutions) in store.iter() {
        println!("Length {}: {}", length, solutions.len());
        for solution in solutions {
            println!("  {}", solution.words().join(" -> "));
        }
    }
    if store.is_empty() {
        println!("  (none found)");
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let dictionary_path = args.next().unwrap_or_else(|| "words.txt".to_string());
    let puzzle_path = args.next().unwrap_or_else(|| "puzzle.json".to_string());

    let dictionary = read_dictionary(&dictionary_path);
    println!("Number of Words: {}", dictionary.len());

    let puzzle_file = read_puzzle_file(&puzzle_path);
    let sides = puzzle_file
        .sides
        .iter()
        .map(|side| side.chars().collect())
        .collect();
    let puzzle = match Puzzle::new(dictionary.iter().map(String::as_str), sides) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Invalid puzzle: {}", err);
            std::process::exit(1);
        }
    };

    let store = solve(&puzzle, &puzzle_file.limits);
    print_solutions(&store);
}

#[cfg(test)]
mod tests {
    use super::PuzzleFile;

    #[test]
    fn test_puzzle_file_parses() {
        let parsed: PuzzleFile =
            serde_json::from_str(r#"{"sides": ["atr", "guf", "qin", "lec"]}"#).unwrap();
        assert_eq!(parsed.sides.len(), 4);
        assert_eq!(parsed.limits, crate::letterbox::SearchLimits::default());
    }

    #[test]
    fn test_puzzle_file_overrides_limits() {
        let parsed: PuzzleFile = serde_json::from_str(
            r#"{"sides": ["ab", "cd"], "limits": {"max_chain_length": 5, "only_increase_coverage": false}}"#,
        )
        .unwrap();
        assert_eq!(parsed.limits.max_chain_length, 5);
        assert!(!parsed.limits.only_increase_coverage);
        assert_eq!(parsed.limits.max_solutions_per_length, 10);
    }
}
