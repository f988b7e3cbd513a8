//! Parse errors.

use thiserror::Error;

/// Structural failure raised while building an expression tree.
///
/// Every variant aborts the whole parse: there is no partial tree on failure.
/// Evaluation never produces a `ParseError`; a tree that cannot be folded
/// completely is a normal outcome (see [`Node::calculate`][crate::node::Node::calculate]).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("empty expression")]
    EmptyExpression,

    /// Open and close brackets do not match up.
    #[error("unbalanced bracket: {0}")]
    UnbalancedBracket(String),

    /// A bracket pair with no content, i.e. `()`.
    #[error("empty bracket: {0}")]
    EmptyBracket(String),

    /// An operator is missing one of its operands.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    /// The expression nests deeper than [`ParseConfig::depth_limit`][crate::config::ParseConfig::depth_limit].
    #[error("expression too deep: nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

impl ParseError {
    /// Process exit code reported by command-line callers on parse failure.
    pub const EXIT_CODE: i32 = 1;
}
