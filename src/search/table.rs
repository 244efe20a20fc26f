use super::super::automaton::dfa::Dfa;

/// Decide if `dfa` accepts `input` by following its transition table, a
/// missing transition rejects immediately.
pub fn is_match(dfa: &Dfa, input: &str) -> bool {
    let mut state = dfa.start();

    for symbol in input.chars() {
        match dfa.next(state, symbol) {
            Some(next) => state = next,
            None => return false,
        }
    }

    dfa.state(state).is_accepting()
}
