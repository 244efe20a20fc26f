use pretty_assertions::assert_eq;

use super::super::automaton::Nfa;
use super::*;

fn with_concat(pattern: &str) -> String {
    add_concat_operator(pattern).to_string()
}

fn postfix_of(pattern: &str) -> String {
    postfix(pattern).unwrap().to_string()
}

#[test]
fn test_add_concat_operator() {
    assert_eq!(with_concat("(a|b)*c"), "(a|b)*.c");
    assert_eq!(with_concat("abc"), "a.b.c");
    assert_eq!(with_concat("a*b*"), "a*.b*");
    assert_eq!(with_concat("(a)(b)"), "(a).(b)");
    assert_eq!(with_concat("a|bc"), "a|b.c");
    assert_eq!(with_concat("a"), "a");
    assert_eq!(with_concat(""), "");
}

#[test]
fn test_dot_is_a_literal() {
    let expr = add_concat_operator("a.b");

    assert_eq!(
        expr.tokens(),
        &[
            Token::Symbol('a'),
            Token::Concat,
            Token::Symbol('.'),
            Token::Concat,
            Token::Symbol('b'),
        ][..]
    );
}

#[test]
fn test_to_postfix() {
    let infix = add_concat_operator("(a|b)*c");
    assert_eq!(to_postfix(&infix).unwrap().to_string(), "ab|*c.");

    assert_eq!(postfix_of("a*b"), "a*b.");
    assert_eq!(postfix_of("a|b|c"), "ab|c|");
    assert_eq!(postfix_of("abc"), "ab.c.");
    assert_eq!(postfix_of("a|bc*"), "abc*.|");
    assert_eq!(postfix_of("(a|b)(c|d)"), "ab|cd|.");
    assert_eq!(postfix_of(""), "");
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(postfix("(a"), Err(ParseError::UnbalancedOpen));
    assert_eq!(postfix("a("), Err(ParseError::UnbalancedOpen));
    assert_eq!(
        postfix("a)"),
        Err(ParseError::UnbalancedClose { position: 1 })
    );
    assert!(compile(")(").is_err());
}

#[test]
fn test_missing_operands() {
    assert_eq!(
        compile_nfa("*").unwrap_err(),
        ParseError::MissingOperand {
            operator: Token::Star
        }
    );
    assert_eq!(
        compile_nfa("a|").unwrap_err(),
        ParseError::MissingOperand {
            operator: Token::Union
        }
    );
    assert!(compile_nfa("|a").is_err());
}

#[test]
fn test_dangling_operands() {
    let expr: Expr = vec![Token::Symbol('a'), Token::Symbol('b')].into_iter().collect();
    assert_eq!(
        to_nfa(&expr).unwrap_err(),
        ParseError::DanglingOperands { count: 2 }
    );
}

#[test]
fn test_error_messages() {
    let err = compile_nfa("a|").unwrap_err();
    assert_eq!(err.to_string(), "operator `|` is missing an operand");
}

//  _____ _
// |_   _| |__   ___  _ __ ___  _ __  ___  ___  _ __
//   | | | '_ \ / _ \| '_ ` _ \| '_ \/ __|/ _ \| '_ \
//   | | | | | | (_) | | | | | | |_) \__ \ (_) | | | |
//   |_| |_| |_|\___/|_| |_| |_| .__/|___/\___/|_| |_|
//                             |_|

fn accepting_states(nfa: &Nfa) -> Vec<usize> {
    nfa.states()
        .filter(|(_, state)| state.is_accepting())
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn test_nfa_of_empty_pattern() {
    let nfa = compile_nfa("").unwrap();

    assert_eq!(nfa.nb_states(), 2);
    assert_eq!(nfa.state(nfa.start()).epsilon(), &[nfa.end()]);
    assert_eq!(accepting_states(&nfa), vec![nfa.end()]);
}

#[test]
fn test_nfa_of_symbol() {
    let nfa = compile_nfa("a").unwrap();

    assert_eq!(nfa.nb_states(), 2);
    assert_eq!(nfa.state(nfa.start()).transition('a'), Some(nfa.end()));
    assert!(nfa.state(nfa.start()).epsilon().is_empty());
}

#[test]
fn test_single_accepting_state() {
    for pattern in &["a*b", "(a|b)*c", "ab|cd", "((a|b)*)*", "a(b(c|d)*)*e"] {
        let nfa = compile_nfa(pattern).unwrap();
        assert_eq!(accepting_states(&nfa), vec![nfa.end()], "{}", pattern);
    }
}

#[test]
fn test_nfa_sizes() {
    // Each symbol and each of `|` and `*` allocate 2 states, `.` allocates none
    assert_eq!(compile_nfa("a*b").unwrap().nb_states(), 6);
    assert_eq!(compile_nfa("a|b").unwrap().nb_states(), 6);
    assert_eq!(compile_nfa("ab").unwrap().nb_states(), 4);
    assert_eq!(compile_nfa("(a|b)*c").unwrap().nb_states(), 10);
}

#[test]
fn test_closure_shape() {
    let nfa = compile_nfa("a*").unwrap();
    let start = nfa.state(nfa.start());

    // Zero repetition, or entry in the repeated fragment
    assert_eq!(start.epsilon().len(), 2);
    assert_eq!(start.epsilon()[0], nfa.end());

    let inner_start = start.epsilon()[1];
    let inner_end = nfa.state(inner_start).transition('a').unwrap();
    assert_eq!(nfa.state(inner_end).epsilon(), &[nfa.end(), inner_start]);
    assert!(!nfa.is_accepting(inner_end));
}

#[test]
fn test_alphabet() {
    let nfa = compile_nfa("(a|b)*a.c").unwrap();
    assert_eq!(nfa.alphabet().into_iter().collect::<String>(), ".abc");
}
