//! Thompson's construction: structural induction over a postfix expression,
//! each operator combining the fragments on top of an operand stack.
//!
//! Every fragment has exactly one accepting state, its `end`, until it is
//! composed into a bigger fragment which takes the flag away.

use super::super::automaton::{Nfa, NfaBuilder, StateId};
use super::parse::{Expr, Token};
use super::ParseError;

/// A piece of automaton under construction, delimited by its entry and its
/// (accepting) exit.
#[derive(Clone, Copy, Debug)]
struct Fragment {
    start: StateId,
    end:   StateId,
}

/// Build the ε-NFA of an expression given in postfix order.
///
/// The empty expression gives an automaton that only accepts the empty word.
pub fn to_nfa(postfix: &Expr) -> Result<Nfa, ParseError> {
    let mut builder = NfaBuilder::new();

    if postfix.is_empty() {
        let fragment = epsilon(&mut builder);
        return Ok(builder.build(fragment.start, fragment.end));
    }

    let mut stack: Vec<Fragment> = Vec::new();

    for (position, &token) in postfix.tokens().iter().enumerate() {
        let fragment = match token {
            Token::Symbol(c) => symbol(&mut builder, c),
            Token::Star => {
                let inner = pop_operand(&mut stack, token)?;
                closure(&mut builder, inner)
            }
            Token::Union => {
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                union(&mut builder, left, right)
            }
            Token::Concat => {
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                concat(&mut builder, left, right)
            }
            Token::Open => return Err(ParseError::UnbalancedOpen),
            Token::Close => return Err(ParseError::UnbalancedClose { position }),
        };

        stack.push(fragment);
    }

    match stack.as_slice() {
        [fragment] => Ok(builder.build(fragment.start, fragment.end)),
        _ => Err(ParseError::DanglingOperands { count: stack.len() }),
    }
}

fn pop_operand(stack: &mut Vec<Fragment>, operator: Token) -> Result<Fragment, ParseError> {
    stack.pop().ok_or(ParseError::MissingOperand { operator })
}

fn epsilon(builder: &mut NfaBuilder) -> Fragment {
    let start = builder.add_state(false);
    let end = builder.add_state(true);
    builder.add_epsilon(start, end);
    Fragment { start, end }
}

fn symbol(builder: &mut NfaBuilder, symbol: char) -> Fragment {
    let start = builder.add_state(false);
    let end = builder.add_state(true);
    builder.add_transition(start, symbol, end);
    Fragment { start, end }
}

fn concat(builder: &mut NfaBuilder, left: Fragment, right: Fragment) -> Fragment {
    builder.add_epsilon(left.end, right.start);
    builder.set_accepting(left.end, false);

    Fragment {
        start: left.start,
        end:   right.end,
    }
}

fn union(builder: &mut NfaBuilder, left: Fragment, right: Fragment) -> Fragment {
    let start = builder.add_state(false);
    builder.add_epsilon(start, left.start);
    builder.add_epsilon(start, right.start);

    let end = builder.add_state(true);

    for old_end in [left.end, right.end].iter().copied() {
        builder.add_epsilon(old_end, end);
        builder.set_accepting(old_end, false);
    }

    Fragment { start, end }
}

fn closure(builder: &mut NfaBuilder, inner: Fragment) -> Fragment {
    let start = builder.add_state(false);
    let end = builder.add_state(true);

    // Zero repetition, then entry into a first repetition
    builder.add_epsilon(start, end);
    builder.add_epsilon(start, inner.start);

    // Leave, or loop back for one more repetition
    builder.add_epsilon(inner.end, end);
    builder.add_epsilon(inner.end, inner.start);
    builder.set_accepting(inner.end, false);

    Fragment { start, end }
}
