//! Compile a small regular-expression language (literals, `|`, `*` and
//! parentheses) into a Thompson ε-NFA, derive the equivalent DFA by subset
//! construction, and decide membership with one of three recognizers.
//!
//! ```
//! let matcher = thompson::compile("a*b").unwrap();
//!
//! assert!(matcher.matches("aab"));
//! assert!(!matcher.matches("abb"));
//! ```

#[macro_use]
extern crate log;
extern crate regex as lib_regex;

pub mod automaton;
pub mod benchmark;
pub mod regex;
pub mod search;
pub mod utils;

pub use crate::regex::{compile, compile_nfa, ParseError};
pub use crate::search::{Matcher, Strategy};
