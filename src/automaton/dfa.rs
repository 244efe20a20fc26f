//! Subset construction of a DFA from an ε-NFA.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::prelude::*;

use bit_set::BitSet;

use super::closure::{contains_accepting, eclose, successors};
use super::dot::Dot;
use super::{Nfa, StateId};
use crate::utils::map_values;

pub type DfaStateId = usize;

/// A deterministic state, standing for an ε-closed set of NFA states.
#[derive(Clone, Debug)]
pub struct DfaState {
    nfa_states:  BitSet,
    transitions: BTreeMap<char, DfaStateId>,
    accepting:   bool,
}

impl DfaState {
    pub fn nfa_states(&self) -> &BitSet {
        &self.nfa_states
    }

    pub fn transitions(&self) -> &BTreeMap<char, DfaStateId> {
        &self.transitions
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

//  ____  _____ _
// |  _ \|  ___/ \
// | | | | |_ / _ \
// | |_| |  _/ ___ \
// |____/|_|/_/   \_\
//

/// A DFA, owned independently of the NFA it was derived from.
#[derive(Clone, Debug)]
pub struct Dfa {
    states: Vec<DfaState>,
    start:  DfaStateId,
}

impl Dfa {
    /// Build the DFA of all the subsets of `nfa` reachable from the closure
    /// of its start state.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        let mut builder = SubsetBuilder::new(nfa);
        let start = builder.intern(eclose(nfa, nfa.start()));

        while let Some(id) = builder.pending.pop() {
            let targets = successors(nfa, &builder.states[id].nfa_states);
            let transitions = map_values(targets, |subset| builder.intern(subset));
            builder.states[id].transitions = transitions;
        }

        debug!("subset construction gave {} DFA states", builder.states.len());

        Dfa {
            states: builder.states,
            start,
        }
    }

    pub fn nb_states(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> DfaStateId {
        self.start
    }

    pub fn state(&self, id: DfaStateId) -> &DfaState {
        &self.states[id]
    }

    pub fn states(&self) -> impl Iterator<Item = (DfaStateId, &DfaState)> {
        self.states.iter().enumerate()
    }

    pub fn next(&self, state: DfaStateId, symbol: char) -> Option<DfaStateId> {
        self.states[state].transitions.get(&symbol).copied()
    }

    /// Graphviz representation of the automaton.
    pub fn to_dot(&self) -> String {
        let mut dot = Dot::new("dfa");

        for (id, state) in self.states() {
            dot.node(id, state.accepting);
        }

        dot.start(self.start);

        for (id, state) in self.states() {
            for (symbol, &target) in &state.transitions {
                dot.edge(id, target, &symbol.to_string());
            }
        }

        dot.finish()
    }

    /// Write the Graphviz representation of the automaton in a file.
    pub fn render(&self, filename: &str) -> std::io::Result<()> {
        let mut file = File::create(filename)?;
        file.write_all(self.to_dot().as_bytes())
    }
}

//  ____        _               _
// / ___| _   _| |__  ___  ___| |_ ___
// \___ \| | | | '_ \/ __|/ _ \ __/ __|
//  ___) | |_| | |_) \__ \  __/ |_\__ \
// |____/ \__,_|_.__/|___/\___|\__|___/
//

/// Bookkeeping of the subset construction.
struct SubsetBuilder<'n> {
    nfa:     &'n Nfa,
    states:  Vec<DfaState>,
    /// Index subsets by their members, two equal subsets must collapse into a
    /// single DFA state for the construction to terminate on cyclic NFAs.
    index:   HashMap<Vec<StateId>, DfaStateId>,
    /// States whose transitions are still to be computed.
    pending: Vec<DfaStateId>,
}

impl<'n> SubsetBuilder<'n> {
    fn new(nfa: &'n Nfa) -> SubsetBuilder<'n> {
        SubsetBuilder {
            nfa,
            states: Vec::new(),
            index: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Get the DFA state of an ε-closed subset, creating it on first
    /// discovery.
    fn intern(&mut self, subset: BitSet) -> DfaStateId {
        let key: Vec<StateId> = subset.iter().collect();

        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = self.states.len();
        self.states.push(DfaState {
            accepting: contains_accepting(self.nfa, &subset),
            nfa_states: subset,
            transitions: BTreeMap::new(),
        });

        self.index.insert(key, id);
        self.pending.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::compile_nfa;

    #[test]
    fn test_single_symbol() {
        let dfa = Dfa::from_nfa(&compile_nfa("a").unwrap());

        assert_eq!(dfa.nb_states(), 2);
        assert!(!dfa.state(dfa.start()).is_accepting());

        let next = dfa.next(dfa.start(), 'a').unwrap();
        assert!(dfa.state(next).is_accepting());
        assert!(dfa.state(next).transitions().is_empty());
        assert_eq!(dfa.next(dfa.start(), 'b'), None);
    }

    #[test]
    fn test_star_loops_on_itself() {
        let dfa = Dfa::from_nfa(&compile_nfa("a*").unwrap());

        // {start closure} -a-> {closure after a} -a-> (same subset)
        assert_eq!(dfa.nb_states(), 2);
        assert!(dfa.state(dfa.start()).is_accepting());

        let looped = dfa.next(dfa.start(), 'a').unwrap();
        assert_ne!(looped, dfa.start());
        assert_eq!(dfa.next(looped, 'a'), Some(looped));
        assert!(dfa.state(looped).is_accepting());
    }

    #[test]
    fn test_empty_pattern() {
        let dfa = Dfa::from_nfa(&compile_nfa("").unwrap());

        assert_eq!(dfa.nb_states(), 1);
        assert!(dfa.state(dfa.start()).is_accepting());
        assert!(dfa.state(dfa.start()).transitions().is_empty());
    }

    #[test]
    fn test_subsets_are_unique_and_closed() {
        let nfa = compile_nfa("(a|b)*abb").unwrap();
        let dfa = Dfa::from_nfa(&nfa);

        for (id, state) in dfa.states() {
            let closed = crate::automaton::closure::eclose_set(&nfa, state.nfa_states().iter());
            assert_eq!(&closed, state.nfa_states());

            for (other_id, other) in dfa.states() {
                if id != other_id {
                    assert_ne!(state.nfa_states(), other.nfa_states());
                }
            }
        }

        // Textbook result for this language: 5 subsets are reachable
        assert_eq!(dfa.nb_states(), 5);
    }

    #[test]
    fn test_nested_stars_terminate() {
        let dfa = Dfa::from_nfa(&compile_nfa("((a*)*|(b*)*)*").unwrap());
        assert!(dfa.state(dfa.start()).is_accepting());
        assert!(dfa.states().all(|(_, state)| state.is_accepting()));
    }

    #[test]
    fn test_to_dot() {
        let dot = Dfa::from_nfa(&compile_nfa("ab").unwrap()).to_dot();

        assert!(dot.starts_with("digraph dfa {"));
        assert!(dot.contains("doublecircle"));
        assert!(dot.contains("[label = \"a\"]"));
        assert!(dot.contains("[label = \"b\"]"));
    }
}
