use super::super::automaton::closure::{contains_accepting, eclose, eclose_set, step};
use super::super::automaton::Nfa;

/// Decide if `nfa` accepts `input` by following all of its runs at once.
///
/// The set of active states is the DFA state that subset construction would
/// reach on the same prefix, it is computed on the fly instead of being
/// materialized.
pub fn is_match(nfa: &Nfa, input: &str) -> bool {
    let mut curr_states = eclose(nfa, nfa.start());

    for (pos, symbol) in input.chars().enumerate() {
        let reached = step(nfa, &curr_states, symbol);

        // No run can be resumed once every run died
        if reached.is_empty() {
            trace!("all runs died at position {} ({:?})", pos, symbol);
            return false;
        }

        curr_states = eclose_set(nfa, reached.iter());
        trace!("{} active states after position {}", curr_states.len(), pos);
    }

    contains_accepting(nfa, &curr_states)
}
