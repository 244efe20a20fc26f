use std::collections::BTreeMap;
use std::iter;

use bit_set::BitSet;

use super::{Nfa, StateId};

/// Set of states reachable from `state` through ε-transitions only, `state`
/// included.
pub fn eclose(nfa: &Nfa, state: StateId) -> BitSet {
    eclose_set(nfa, iter::once(state))
}

/// Union of the ε-closures of a collection of states.
///
/// Kleene star introduces ε-cycles, the traversal stops on states that are
/// already part of the closure.
pub fn eclose_set<T>(nfa: &Nfa, states: T) -> BitSet
where
    T: IntoIterator<Item = StateId>,
{
    let mut closure = BitSet::with_capacity(nfa.nb_states());
    let mut stack: Vec<StateId> = states.into_iter().collect();

    while let Some(state) = stack.pop() {
        if !closure.insert(state) {
            continue;
        }

        for &target in nfa.state(state).epsilon() {
            if !closure.contains(target) {
                stack.push(target);
            }
        }
    }

    closure
}

/// States reached from `states` by reading `symbol`, without closing the
/// result under ε-transitions.
pub fn step(nfa: &Nfa, states: &BitSet, symbol: char) -> BitSet {
    states
        .iter()
        .filter_map(|state| nfa.state(state).transition(symbol))
        .collect()
}

/// For every symbol readable from a set of states, the ε-closure of the
/// states it leads to.
pub fn successors(nfa: &Nfa, states: &BitSet) -> BTreeMap<char, BitSet> {
    let mut targets: BTreeMap<char, BitSet> = BTreeMap::new();

    for state in states {
        for (&symbol, &target) in nfa.state(state).transitions() {
            targets
                .entry(symbol)
                .or_insert_with(|| BitSet::with_capacity(nfa.nb_states()))
                .insert(target);
        }
    }

    for set in targets.values_mut() {
        *set = eclose_set(nfa, set.iter());
    }

    targets
}

pub fn contains_accepting(nfa: &Nfa, states: &BitSet) -> bool {
    states.iter().any(|state| nfa.is_accepting(state))
}

#[cfg(test)]
mod tests {
    use super::super::NfaBuilder;
    use super::*;

    #[test]
    fn test_eclose_follows_chains() {
        // 0 -ε-> 1 -ε-> 2 -a-> 3
        let mut builder = NfaBuilder::new();
        let states: Vec<_> = (0..4).map(|i| builder.add_state(i == 3)).collect();
        builder.add_epsilon(states[0], states[1]);
        builder.add_epsilon(states[1], states[2]);
        builder.add_transition(states[2], 'a', states[3]);
        let nfa = builder.build(0, 3);

        let closure = eclose(&nfa, 0);
        assert_eq!(closure.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(eclose(&nfa, 3).len(), 1);
    }

    #[test]
    fn test_eclose_terminates_on_cycles() {
        // 0 -ε-> 1 -ε-> 0, 1 -ε-> 1
        let mut builder = NfaBuilder::new();
        builder.add_state(false);
        builder.add_state(true);
        builder.add_epsilon(0, 1);
        builder.add_epsilon(1, 0);
        builder.add_epsilon(1, 1);
        let nfa = builder.build(0, 1);

        assert_eq!(eclose(&nfa, 1).iter().collect::<Vec<_>>(), vec![0, 1]);
        assert!(contains_accepting(&nfa, &eclose(&nfa, 0)));
    }

    #[test]
    fn test_successors_are_closed() {
        // 0 -a-> 1 -ε-> 2, 0 -b-> 2
        let mut builder = NfaBuilder::new();
        for _ in 0..3 {
            builder.add_state(false);
        }
        builder.add_transition(0, 'a', 1);
        builder.add_transition(0, 'b', 2);
        builder.add_epsilon(1, 2);
        let nfa = builder.build(0, 2);

        let start = eclose(&nfa, 0);
        let succ = successors(&nfa, &start);

        assert_eq!(succ.keys().copied().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(succ[&'a'].iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(succ[&'b'].iter().collect::<Vec<_>>(), vec![2]);
        assert!(step(&nfa, &start, 'c').is_empty());
    }
}
