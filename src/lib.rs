//! # polish-rs: Expression Trees in Rust
//!
//! **`polish-rs`** turns flat infix arithmetic expressions into binary expression trees,
//! renders them in Polish, reverse Polish and infix notation, and folds them into numbers.
//!
//! ## How it works
//!
//! An expression is split at its *lowest-priority* operator outside of any brackets:
//! that operator becomes the root, the text on either side becomes the two subtrees,
//! and both are split again until only terms remain.
//! Priorities are `=` < `+`, `-` < `*`, `/`; operators of equal priority group left to right
//! (configurable, see [`config::Associativity`]).
//!
//! Walking the finished tree in postorder, inorder or preorder yields the three notations.
//! Calculation is a postorder fold: any node whose operands are both numbers is replaced by
//! the result, everything else stays symbolic.
//!
//! ## Basic Usage
//!
//! ```rust
//! use polish_rs::parser::parse;
//!
//! // 1. Build the tree
//! let mut tree = parse("2+3*4").unwrap();
//!
//! // 2. Render notations
//! assert_eq!(tree.to_postfix(), "2 3 4 * +");
//! assert_eq!(tree.to_infix(), "(2 + (3 * 4))");
//! assert_eq!(tree.to_prefix(), "+ 2 * 3 4");
//!
//! // 3. Calculate
//! assert_eq!(tree.calculate(), Some(14.0));
//! ```
//!
//! Symbolic terms are carried through, and the result is a partially calculated expression:
//!
//! ```rust
//! use polish_rs::parser::parse;
//!
//! let mut tree = parse("x=(1+2)*a").unwrap();
//! assert_eq!(tree.calculate(), None);
//! assert_eq!(tree.to_infix(), "(x = (3 * a))");
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: Builds a [`Node`][crate::node::Node] tree from a string.
//! - **[`traverse`]**: The generic tree walk and the notation renderers.
//! - **[`eval`]**: Folding a tree into a number.
//! - **[`report`]**: All of the above in one call, as command-line front ends need it.
//! - **[`dot`]**: Utilities for visualizing trees using Graphviz.

pub mod bracket;
pub mod config;
pub mod dot;
pub mod error;
pub mod eval;
pub mod node;
pub mod number;
pub mod operator;
pub mod parser;
pub mod report;
pub mod traverse;
