use bit_set::BitSet;

use super::super::automaton::{Nfa, StateId};

/// Decide if `nfa` accepts `input` with a depth-first search over its runs.
///
/// Symbol transitions are followed eagerly, ε-transitions are only tried
/// from states with no transition on the current symbol. States already
/// explored at the current input position are not explored again, which is
/// enough to break ε-cycles: the visited set is only reset when a symbol is
/// consumed.
///
/// ** There is no memoization across branches, the worst case runtime is
/// exponential in the length of the input. **
pub fn is_match(nfa: &Nfa, input: &str) -> bool {
    let word: Vec<char> = input.chars().collect();
    let mut visited = vec![BitSet::with_capacity(nfa.nb_states()); word.len() + 1];
    search(nfa, &word, &mut visited)
}

/// Run the search with one visited set per input position.
///
/// Consuming a symbol pushes a single branch one position further, so the
/// pending branches are always sorted by position and the one being explored
/// is the deepest. Whenever a symbol leads into `pos + 1`, nothing else is
/// pending at `pos + 1` and its set can be reused for the new branch.
fn search(nfa: &Nfa, word: &[char], visited: &mut [BitSet]) -> bool {
    debug_assert_eq!(visited.len(), word.len() + 1);
    visited[0].clear();

    // Holds pending branches of the search as a stack of:
    //  - current state on the automaton
    //  - current index on the word
    let mut curr_state: Vec<(StateId, usize)> = vec![(nfa.start(), 0)];

    while let Some((state, pos)) = curr_state.pop() {
        if !visited[pos].insert(state) {
            continue;
        }

        let current = nfa.state(state);

        match word.get(pos) {
            None if current.is_accepting() => return true,
            None => {}
            Some(&symbol) => {
                if let Some(target) = current.transition(symbol) {
                    visited[pos + 1].clear();
                    curr_state.push((target, pos + 1));
                    continue;
                }
            }
        }

        // Pushed in reverse so that the first ε-transition is explored first
        for &target in current.epsilon().iter().rev() {
            curr_state.push((target, pos));
        }
    }

    false
}
