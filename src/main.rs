extern crate clap;
extern crate env_logger;
extern crate thompson;

use std::error::Error;
use std::io::prelude::*;
use std::io::stdin;
use std::path::Path;
use std::process;

use clap::{App, Arg, ArgMatches};
use thompson::benchmark::BenchmarkCase;
use thompson::regex::{add_concat_operator, postfix};
use thompson::{Matcher, Strategy};

#[derive(PartialEq, Eq)]
enum DisplayFormat {
    /// Only display the count of accepted words
    Count,
    /// One line per word
    Verbose { show_word: bool },
}

/// Either a single recognizer, or all of them checked against each other.
#[derive(Clone, Copy)]
enum Mode {
    Single(Strategy),
    All,
}

fn main() {
    env_logger::init();

    //  ____
    // |  _ \ __ _ _ __ ___  ___ _ __
    // | |_) / _` | '__/ __|/ _ \ '__|
    // |  __/ (_| | |  \__ \  __/ |
    // |_|   \__,_|_|  |___/\___|_|
    //
    let matches = App::new("Thompson matcher")
        .version("0.1")
        .about("Decide if words belong to the language of a regular expression.")
        .arg(
            Arg::with_name("regex")
                .help("The pattern, made of literals, `|`, `*` and parentheses.")
                .required_unless_one(&["benchmark-file", "demo"])
                .conflicts_with("benchmark-file"),
        )
        .arg(
            Arg::with_name("words")
                .help("The words to be tested, if none is specified, lines of STDIN are used.")
                .multiple(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .default_value("multi-state")
                .possible_value("dfs")
                .possible_value("multi-state")
                .possible_value("dfa")
                .possible_value("all")
                .help("Recognizer used to decide membership, `all` checks that they agree."),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .help("Display the number of accepted words instead."),
        )
        .arg(
            Arg::with_name("dot")
                .long("dot")
                .takes_value(true)
                .help("Render the NFA to a Graphviz file."),
        )
        .arg(
            Arg::with_name("dfa_dot")
                .long("dfa-dot")
                .takes_value(true)
                .help("Render the DFA to a Graphviz file."),
        )
        .arg(
            Arg::with_name("postfix")
                .long("postfix")
                .help("Print the pattern with explicit concatenations and its postfix form."),
        )
        .arg(
            Arg::with_name("benchmark-file")
                .long("benchmark-file")
                .takes_value(true)
                .help("Read a set of benchmarks from a file in JSON syntax."),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .conflicts_with("benchmark-file")
                .help("Match `a*b` against a few words."),
        )
        .arg(
            Arg::with_name("debug_infos")
                .short("i")
                .long("debug-infos")
                .help("Display debuging infos"),
        )
        .get_matches();

    match run(&matches) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<i32, Box<dyn Error>> {
    //  ____                  _                          _
    // | __ )  ___ _ __   ___| |__  _ __ ___   __ _ _ __| | __
    // |  _ \ / _ \ '_ \ / __| '_ \| '_ ` _ \ / _` | '__| |/ /
    // | |_) |  __/ | | | (__| | | | | | | | | (_| | |  |   <
    // |____/ \___|_| |_|\___|_| |_|_| |_| |_|\__,_|_|  |_|\_\
    //

    if let Some(benchmark_file) = matches.value_of("benchmark-file") {
        return run_benchmarks(Path::new(benchmark_file));
    }

    if matches.is_present("demo") {
        let matcher = thompson::compile("a*b")?;

        for word in &["", "b", "aab", "abb"] {
            println!("{}", matcher.matches(word));
        }

        return Ok(0);
    }

    // Extract parameters
    let regex_str = matches.value_of("regex").unwrap_or_default();

    let mode = match matches.value_of("strategy") {
        None | Some("all") => Mode::All,
        Some(s) => Mode::Single(s.parse()?),
    };

    let debug_infos = matches.is_present("debug_infos");

    if matches.is_present("postfix") {
        println!("{}", add_concat_operator(regex_str));
        println!("{}", postfix(regex_str)?);
        return Ok(0);
    }

    //   ____                      _ _
    //  / ___|___  _ __ ___  _ __ (_) | ___
    // | |   / _ \| '_ ` _ \| '_ \| | |/ _ \
    // | |__| (_) | | | | | | |_) | | |  __/
    //  \____\___/|_| |_| |_| .__/|_|_|\___|
    //                      |_|

    let matcher = thompson::compile(regex_str)?;

    if let Some(filename) = matches.value_of("dot") {
        matcher.nfa().render(filename)?;
    }

    if let Some(filename) = matches.value_of("dfa_dot") {
        matcher.dfa().render(filename)?;
    }

    if debug_infos {
        eprintln!("===== Debug Infos =====");
        eprintln!(" - Postfix form: {}", postfix(regex_str)?);
        eprintln!(
            " - NFA states: {} (start: {}, end: {})",
            matcher.nfa().nb_states(),
            matcher.nfa().start(),
            matcher.nfa().end()
        );
        eprintln!(
            " - Alphabet: {}",
            matcher.nfa().alphabet().into_iter().collect::<String>()
        );
        eprintln!(" - DFA states: {}", matcher.dfa().nb_states());
    }

    //  ___                   _
    // |_ _|_ __  _ __  _   _| |_ ___
    //  | || '_ \| '_ \| | | | __/ __|
    //  | || | | | |_) | |_| | |_\__ \
    // |___|_| |_| .__/ \__,_|\__|___/
    //           |_|

    let words: Vec<String> = match matches.values_of("words") {
        Some(values) => values.map(str::to_string).collect(),
        None => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            text.lines().map(|line| line.trim_end_matches('\r').to_string()).collect()
        }
    };

    let display_format = if matches.is_present("count") {
        DisplayFormat::Count
    } else {
        DisplayFormat::Verbose {
            show_word: words.len() > 1,
        }
    };

    //  __  __       _       _
    // |  \/  | __ _| |_ ___| |__
    // | |\/| |/ _` | __/ __| '_ \
    // | |  | | (_| | || (__| | | |
    // |_|  |_|\__,_|\__\___|_| |_|
    //

    let mut count = 0;
    let mut disagreements = 0;

    for word in &words {
        let accepted = match mode {
            Mode::Single(strategy) => matcher.matches_with(strategy, word),
            Mode::All => {
                let (accepted, agree) = check_agreement(&matcher, word);

                if !agree {
                    disagreements += 1;
                }

                accepted
            }
        };

        if accepted {
            count += 1;
        }

        if let DisplayFormat::Verbose { show_word } = display_format {
            if show_word {
                println!("{}: {}", word, accepted);
            } else {
                println!("{}", accepted);
            }
        }
    }

    if display_format == DisplayFormat::Count {
        println!("{}", count);
    }

    Ok(if disagreements > 0 { 2 } else { 0 })
}

/// Run every recognizer on a word, the result of the default one is returned
/// along with whether all recognizers agreed.
fn check_agreement(matcher: &Matcher, word: &str) -> (bool, bool) {
    let accepted = matcher.matches(word);
    let disagreeing: Vec<Strategy> = Strategy::ALL
        .iter()
        .copied()
        .filter(|&strategy| matcher.matches_with(strategy, word) != accepted)
        .collect();

    if !disagreeing.is_empty() {
        eprintln!("recognizers disagree on {:?}:", word);

        for strategy in &disagreeing {
            eprintln!(" - {}: {}", strategy, !accepted);
        }
    }

    (accepted, disagreeing.is_empty())
}

fn run_benchmarks(path: &Path) -> Result<i32, Box<dyn Error>> {
    let benchmarks = BenchmarkCase::read_from_file(path)?;
    let mut results = Vec::with_capacity(benchmarks.len());
    let mut consistent = true;

    for benchmark in benchmarks {
        let result = benchmark.run()?;
        consistent &= result.is_consistent();
        results.push(result);
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(if consistent { 0 } else { 2 })
}
