//! Building expression trees from infix strings.
//!
//! The tree is built top-down: each subexpression is stripped of enclosing brackets,
//! split at its lowest-priority operator (see [`find_pivot`]), and both halves are parsed the same way.
//! A subexpression without any operator outside of brackets becomes a term.
//!
//! # Examples
//!
//! ```
//! use polish_rs::parser::parse;
//!
//! let tree = parse("2+3*4").unwrap();
//! assert_eq!(tree.to_postfix(), "2 3 4 * +");
//! assert_eq!(tree.to_prefix(), "+ 2 * 3 4");
//! assert_eq!(tree.to_infix(), "(2 + (3 * 4))");
//! ```

use log::debug;

use crate::bracket::{remove_outermost_bracket, validate_bracket_balance};
use crate::config::ParseConfig;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{find_pivot, Operator};

/// Removes all whitespace from raw user input.
///
/// The parser itself treats whitespace as an ordinary term character,
/// so callers are expected to run their input through this first.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses `expr` with the default [`ParseConfig`].
pub fn parse(expr: &str) -> Result<Node, ParseError> {
    parse_with_config(expr, &ParseConfig::default())
}

/// Parses `expr` into an expression tree.
///
/// Bracket balance is checked once over the whole input before splitting starts.
///
/// # Errors
///
/// * [`ParseError::EmptyExpression`] if `expr` is empty
/// * [`ParseError::UnbalancedBracket`] if brackets do not match up
/// * [`ParseError::EmptyBracket`] for a `()` pair
/// * [`ParseError::InvalidExpression`] if an operator lacks an operand, e.g. `1+` or `*2`
/// * [`ParseError::TooDeep`] if the tree would be deeper than [`ParseConfig::depth_limit`]
pub fn parse_with_config(expr: &str, config: &ParseConfig) -> Result<Node, ParseError> {
    debug!("parse(expr = {:?}, config = {:?})", expr, config);

    if expr.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    validate_bracket_balance(expr)?;

    build(expr, config, config.depth_limit(), 1)
}

fn build(expr: &str, config: &ParseConfig, limit: usize, depth: usize) -> Result<Node, ParseError> {
    if depth > limit {
        return Err(ParseError::TooDeep { limit });
    }

    let expr = remove_outermost_bracket(expr)?;

    let Some(pos) = find_pivot(expr, config.associativity) else {
        debug!("build: term {:?}", expr);
        return Ok(Node::Term(expr.to_string()));
    };

    if pos == 0 || pos == expr.len() - 1 {
        return Err(ParseError::InvalidExpression(expr.to_string()));
    }

    // Pivots are always single-byte ASCII operators.
    let op = match Operator::from_char(expr.as_bytes()[pos] as char) {
        Some(op) => op,
        None => return Err(ParseError::InvalidExpression(expr.to_string())),
    };
    let (lhs, rhs) = (&expr[..pos], &expr[pos + 1..]);
    debug!("build: split {:?} into {:?} {} {:?}", expr, lhs, op, rhs);

    let left = build(lhs, config, limit, depth + 1)?;
    let right = build(rhs, config, limit, depth + 1)?;

    Ok(Node::binary(op, left, right))
}
