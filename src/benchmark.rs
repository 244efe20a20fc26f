use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

use lib_regex::Regex;
use serde::{Deserialize, Serialize};

use super::regex::{compile, Expr, Token};
use super::search::Strategy;

/// A pattern and a set of words to time each strategy on.
///
/// Words are either listed inline or read from `filename`, one per line, the
/// path being relative to the file the case was read from.
#[derive(Serialize, Deserialize, Clone)]
pub struct BenchmarkCase {
    name:        String,
    comment:     String,
    regex:       String,
    #[serde(default)]
    words:       Vec<String>,
    filename:    Option<String>,
    repetitions: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct BenchmarkResult {
    benchmark: BenchmarkCase,
    num_words: usize,
    nfa_states: usize,
    dfa_states: usize,
    compile_regex: f64,
    compile_reference: f64,
    strategies: Vec<StrategyResult>,
    reference: StrategyResult,
}

/// Timings of a recognizer over all the words of a case, in seconds.
#[derive(Serialize, Deserialize)]
pub struct StrategyResult {
    strategy: String,
    num_matches: usize,
    total: f64,
    delay_min: f64,
    delay_max: f64,
    delay_avg: f64,
    delay_stddev: f64,
}

impl BenchmarkCase {
    pub fn read_from_file(filename: &Path) -> Result<Vec<BenchmarkCase>, Box<dyn Error>> {
        let mut input = String::new();

        File::open(&filename)?.read_to_string(&mut input)?;
        let path = filename.parent();

        let mut benchmarks: Vec<BenchmarkCase> = serde_json::from_str(&input)?;

        if let Some(path) = path {
            for benchmark in &mut benchmarks {
                if let Some(words_file) = &benchmark.filename {
                    benchmark.filename = Some(path.join(words_file).to_string_lossy().into_owned());
                }
            }
        }

        Ok(benchmarks)
    }

    pub fn new(name: String, comment: String, regex: String, words: Vec<String>) -> BenchmarkCase {
        BenchmarkCase {
            name,
            comment,
            regex,
            words,
            filename: None,
            repetitions: None,
        }
    }

    fn load_words(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut words = self.words.clone();

        if let Some(filename) = &self.filename {
            let mut input = String::new();
            File::open(filename)?.read_to_string(&mut input)?;
            words.extend(input.lines().map(str::to_string));
        }

        Ok(words)
    }

    pub fn run(&self) -> Result<BenchmarkResult, Box<dyn Error>> {
        let words = self.load_words()?;
        let repetitions = self.repetitions.unwrap_or(10).max(1);

        // Compile the regex.
        let timer = Instant::now();
        let matcher = compile(&self.regex)?;
        let compile_regex = timer.elapsed();

        let timer = Instant::now();
        let reference = reference_regex(&self.regex)?;
        let compile_reference = timer.elapsed();

        let strategies = Strategy::ALL
            .iter()
            .map(|&strategy| {
                time_words(strategy.name(), &words, repetitions, |word| {
                    matcher.matches_with(strategy, word)
                })
            })
            .collect();

        let reference = time_words("regex", &words, repetitions, |word| reference.is_match(word));

        Ok(BenchmarkResult {
            benchmark: self.clone(),
            num_words: words.len(),
            nfa_states: matcher.nfa().nb_states(),
            dfa_states: matcher.dfa().nb_states(),
            compile_regex: seconds(compile_regex),
            compile_reference: seconds(compile_reference),
            strategies,
            reference,
        })
    }
}

impl BenchmarkResult {
    /// Check that all recognizers accepted the same number of words.
    pub fn is_consistent(&self) -> bool {
        self.strategies
            .iter()
            .all(|result| result.num_matches == self.reference.num_matches)
    }
}

/// Build the anchored pattern of the `regex` crate that recognizes the same
/// language as `pattern`.
pub fn reference_regex(pattern: &str) -> Result<Regex, lib_regex::Error> {
    let translated: String = Expr::tokenize(pattern)
        .tokens()
        .iter()
        .map(|token| match token {
            Token::Symbol(c) => lib_regex::escape(&c.to_string()),
            other => other.to_string(),
        })
        .collect();

    Regex::new(&format!("^(?:{})$", translated))
}

fn time_words<F>(name: &str, words: &[String], repetitions: usize, is_match: F) -> StrategyResult
where
    F: Fn(&str) -> bool,
{
    let timer = Instant::now();
    let num_matches = words.iter().filter(|word| is_match(word)).count();
    let total = timer.elapsed();

    // Keep the fastest of several runs for each word to get rid of outliers
    let delays: Vec<f64> = words
        .iter()
        .map(|word| {
            (0..repetitions)
                .map(|_| {
                    let start = Instant::now();
                    black_box(is_match(black_box(word)));
                    start.elapsed()
                })
                .min()
                .map(seconds)
                .unwrap_or(0.)
        })
        .collect();

    let minmax: stats::MinMax<f64> = delays.iter().cloned().collect();

    StrategyResult {
        strategy: name.to_string(),
        num_matches,
        total: seconds(total),
        delay_min: minmax.min().copied().unwrap_or(0.),
        delay_max: minmax.max().copied().unwrap_or(0.),
        delay_avg: stats::mean(delays.iter().cloned()),
        delay_stddev: stats::stddev(delays.iter().cloned()),
    }
}

fn seconds(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000_000.0
}
