pub mod closure;
pub mod dfa;
mod dot;

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::prelude::*;

use self::dot::Dot;

/// States are referred to by their index in the automaton that owns them.
pub type StateId = usize;

//  ____  _        _
// / ___|| |_ __ _| |_ ___
// \___ \| __/ _` | __/ _ \
//  ___) | || (_| | ||  __/
// |____/ \__\__,_|\__\___|
//

/// A node of an ε-NFA.
///
/// Thompson's construction never leaves two transitions on the same symbol
/// out of a state, thus symbol transitions are stored as a map even though
/// the automaton is non-deterministic.
#[derive(Clone, Debug, Default)]
pub struct State {
    accepting:   bool,
    transitions: BTreeMap<char, StateId>,
    epsilon:     Vec<StateId>,
}

impl State {
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn transition(&self, symbol: char) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    pub fn transitions(&self) -> &BTreeMap<char, StateId> {
        &self.transitions
    }

    pub fn epsilon(&self) -> &[StateId] {
        &self.epsilon
    }
}

//  _   _ _____ _
// | \ | |  ___/ \
// |  \| | |_ / _ \
// | |\  |  _/ ___ \
// |_| \_|_|/_/   \_\
//

/// An immutable ε-NFA, delimited by its start state and its end state.
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<State>,
    start:  StateId,
    end:    StateId,
}

impl Nfa {
    pub fn nb_states(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.states[id].accepting
    }

    /// Symbols labelling at least one transition.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.states
            .iter()
            .flat_map(|state| state.transitions.keys().copied())
            .collect()
    }

    /// Graphviz representation of the automaton.
    pub fn to_dot(&self) -> String {
        let mut dot = Dot::new("nfa");

        for (id, state) in self.states() {
            dot.node(id, state.accepting);
        }

        dot.start(self.start);

        for (id, state) in self.states() {
            for (symbol, &target) in &state.transitions {
                dot.edge(id, target, &symbol.to_string());
            }

            for &target in &state.epsilon {
                dot.edge(id, target, "ε");
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

//  ____        _ _     _
// | __ ) _   _(_) | __| | ___ _ __
// |  _ \| | | | | |/ _` |/ _ \ '__|
// | |_) | |_| | | | (_| |  __/ |
// |____/ \__,_|_|_|\__,_|\___|_|
//

/// Mutable arena of states, only available while an automaton is being
/// built. Freezing it into an [`Nfa`] forbids any further edit.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> NfaBuilder {
        NfaBuilder::default()
    }

    pub fn add_state(&mut self, accepting: bool) -> StateId {
        self.states.push(State {
            accepting,
            ..State::default()
        });

        self.states.len() - 1
    }

    pub fn set_accepting(&mut self, state: StateId, accepting: bool) {
        self.states[state].accepting = accepting;
    }

    pub fn add_transition(&mut self, source: StateId, symbol: char, target: StateId) {
        debug_assert!(target < self.states.len());
        let previous = self.states[source].transitions.insert(symbol, target);
        debug_assert!(previous.is_none(), "two transitions on {:?}", symbol);
    }

    pub fn add_epsilon(&mut self, source: StateId, target: StateId) {
        debug_assert!(target < self.states.len());
        self.states[source].epsilon.push(target);
    }

    pub fn build(self, start: StateId, end: StateId) -> Nfa {
        debug_assert!(start < self.states.len() && end < self.states.len());

        Nfa {
            states: self.states,
            start,
            end,
        }
    }
}
