pub mod parse;
mod thompson;

use thiserror::Error;

use super::automaton::dfa::Dfa;
use super::automaton::Nfa;
use super::search::Matcher;

pub use parse::{add_concat_operator, to_postfix, Expr, Token};
pub use thompson::to_nfa;

/// Reasons for a pattern to be rejected.
///
/// Well-formed patterns never fail to compile, these errors only report
/// patterns whose structure can't be turned into an automaton.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("unclosed `(` in pattern")]
    UnbalancedOpen,

    #[error("unmatched `)` at token {position}")]
    UnbalancedClose { position: usize },

    #[error("operator `{operator}` is missing an operand")]
    MissingOperand { operator: Token },

    #[error("{count} sub-expressions are not joined by any operator")]
    DanglingOperands { count: usize },
}

/// Rewrite a pattern into its postfix form, ready for Thompson construction.
pub fn postfix(pattern: &str) -> Result<Expr, ParseError> {
    to_postfix(&add_concat_operator(pattern))
}

/// Compile a pattern into an ε-NFA.
pub fn compile_nfa(pattern: &str) -> Result<Nfa, ParseError> {
    let postfix = postfix(pattern)?;
    let nfa = to_nfa(&postfix)?;

    debug!(
        "compiled {:?} (postfix {:?}) into an NFA of {} states",
        pattern,
        postfix.to_string(),
        nfa.nb_states()
    );

    Ok(nfa)
}

/// Compile a pattern into a matcher holding both its NFA and its DFA.
pub fn compile(pattern: &str) -> Result<Matcher, ParseError> {
    let nfa = compile_nfa(pattern)?;
    let dfa = Dfa::from_nfa(&nfa);

    Ok(Matcher::new(nfa, dfa))
}

#[cfg(test)]
mod tests;
