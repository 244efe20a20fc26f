pub mod backtrack;
pub mod multi_state;
pub mod table;

use std::fmt;
use std::str::FromStr;

use super::automaton::dfa::Dfa;
use super::automaton::Nfa;

//  ____  _             _
// / ___|| |_ _ __ __ _| |_ ___  __ _ _   _
// \___ \| __| '__/ _` | __/ _ \/ _` | | | |
//  ___) | |_| | | (_| | ||  __/ (_| | |_| |
// |____/ \__|_|  \__,_|\__\___|\__, |\__, |
//                              |___/ |___/

/// The recognizers available for a compiled pattern. They all decide the same
/// language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// Depth-first search with backtracking over the NFA
    Backtrack,
    /// Simulation of all the runs of the NFA at once
    MultiState,
    /// Walk through the transition table of the DFA
    Dfa,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Backtrack, Strategy::MultiState, Strategy::Dfa];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Backtrack => "dfs",
            Strategy::MultiState => "multi-state",
            Strategy::Dfa => "dfa",
        }
    }
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::MultiState
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Strategy, String> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("Unknown strategy: {}", s))
    }
}

//  __  __       _       _
// |  \/  | __ _| |_ ___| |__   ___ _ __
// | |\/| |/ _` | __/ __| '_ \ / _ \ '__|
// | |  | | (_| | || (__| | | |  __/ |
// |_|  |_|\__,_|\__\___|_| |_|\___|_|
//

/// A compiled pattern: its ε-NFA and the equivalent DFA.
///
/// Both automata are frozen, a matcher can be shared between threads and
/// queried concurrently.
#[derive(Clone, Debug)]
pub struct Matcher {
    nfa: Nfa,
    dfa: Dfa,
}

impl Matcher {
    pub fn new(nfa: Nfa, dfa: Dfa) -> Matcher {
        Matcher { nfa, dfa }
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Check if the whole input belongs to the language of the pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.matches_with(Strategy::default(), input)
    }

    pub fn matches_with(&self, strategy: Strategy, input: &str) -> bool {
        match strategy {
            Strategy::Backtrack => backtrack::is_match(&self.nfa, input),
            Strategy::MultiState => multi_state::is_match(&self.nfa, input),
            Strategy::Dfa => table::is_match(&self.dfa, input),
        }
    }
}
