use std::fmt;
use std::iter::FromIterator;

use super::ParseError;

/// A lexical unit of an expression.
///
/// Concatenation has no textual form in a pattern, it is inserted as a token
/// by [`add_concat_operator`] so that any non-reserved `char` (even `.`) stays
/// usable as a literal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// A literal symbol, matching exactly one `char` of the input
    Symbol(char),
    /// Explicit concatenation of the two previous operands
    Concat,
    /// `|`
    Union,
    /// `*`, Kleene closure of the previous operand
    Star,
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    fn from_char(c: char) -> Token {
        match c {
            '|' => Token::Union,
            '*' => Token::Star,
            '(' => Token::Open,
            ')' => Token::Close,
            c => Token::Symbol(c),
        }
    }

    /// Binding power of an operator, higher binds tighter.
    fn precedence(self) -> Option<u8> {
        match self {
            Token::Union => Some(0),
            Token::Concat => Some(1),
            Token::Star => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Concat => write!(f, "."),
            Token::Union => write!(f, "|"),
            Token::Star => write!(f, "*"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

//  _____
// | ____|_  ___ __  _ __
// |  _| \ \/ / '_ \| '__|
// | |___ >  <| |_) | |
// |_____/_/\_\ .__/|_|
//            |_|

/// A sequence of tokens, either in infix or in postfix order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Expr {
    tokens: Vec<Token>,
}

impl Expr {
    /// Split a raw pattern into tokens, without inserting any concatenation.
    pub fn tokenize(pattern: &str) -> Expr {
        pattern.chars().map(Token::from_char).collect()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Expr {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Expr {
        Expr {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }

        Ok(())
    }
}

//  ____                       _ _
// |  _ \ _____      ___ __(_) |_ ___
// | |_) / _ \ \ /\ / / '__| | __/ _ \
// |  _ <  __/\ V  V /| |  | | ||  __/
// |_| \_\___| \_/\_/ |_|  |_|\__\___|
//

/// Make concatenation explicit: `(a|b)*c` becomes `(a|b)*.c`.
///
/// A concatenation is inserted after every token that is neither `(` nor
/// `|`, unless the following token is `*`, `|` or `)`.
pub fn add_concat_operator(pattern: &str) -> Expr {
    let tokens = Expr::tokenize(pattern).tokens;
    let mut output = Vec::with_capacity(2 * tokens.len());

    for (i, &token) in tokens.iter().enumerate() {
        output.push(token);

        if token == Token::Open || token == Token::Union {
            continue;
        }

        match tokens.get(i + 1) {
            None | Some(Token::Star) | Some(Token::Union) | Some(Token::Close) => {}
            Some(_) => output.push(Token::Concat),
        }
    }

    Expr { tokens: output }
}

/// Convert an infix expression with explicit concatenations into postfix
/// order: `(a|b)*.c` becomes `ab|*c.`.
///
/// Operators of equal precedence associate to the left.
pub fn to_postfix(infix: &Expr) -> Result<Expr, ParseError> {
    let mut postfix = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    for (position, &token) in infix.tokens.iter().enumerate() {
        match token {
            Token::Symbol(_) => postfix.push(token),
            Token::Open => stack.push(token),
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(operator) => postfix.push(operator),
                    None => return Err(ParseError::UnbalancedClose { position }),
                }
            },
            operator => {
                // Only operators are ever pushed along with `(`
                let precedence = operator.precedence();

                while let Some(&top) = stack.last() {
                    if top == Token::Open || top.precedence() < precedence {
                        break;
                    }

                    postfix.push(top);
                    stack.pop();
                }

                stack.push(operator);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::Open {
            return Err(ParseError::UnbalancedOpen);
        }

        postfix.push(token);
    }

    Ok(Expr { tokens: postfix })
}
