//! Folding expression trees into numbers.
//!
//! Evaluation runs bottom-up (postorder). Each inner node whose operands are both numbers
//! is replaced by a term holding the result. An inner node that cannot be reduced, because an
//! operand is symbolic or the operator is `=`, is replaced by an opaque term holding its infix
//! notation, so that the nodes above it can still try their own reduction.
//!
//! ```
//! use polish_rs::parser::parse;
//!
//! let mut tree = parse("x=1+2").unwrap();
//! assert_eq!(tree.calculate(), None);
//! assert_eq!(tree.to_infix(), "(x = 3)");
//!
//! let mut tree = parse("(1+2)*(3+4)").unwrap();
//! assert_eq!(tree.calculate(), Some(21.0));
//! ```

use log::debug;

use crate::node::Node;
use crate::number::{format_exact, parse_number};
use crate::operator::Operator;

/// A single reduction performed during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Both operands were numbers and the node became a numeric term.
    Reduced {
        operator: Operator,
        left: f64,
        right: f64,
        result: f64,
    },
    /// The node could not be reduced and became an opaque term.
    Deferred { expression: String },
}

enum Frame {
    Enter(Node),
    Combine(Operator),
}

impl Node {
    /// Folds the tree in place.
    ///
    /// Returns the value of the whole expression when every node could be reduced.
    /// Otherwise returns `None`, and the tree is left as a partially calculated
    /// expression, available through [`to_infix`][Node::to_infix].
    pub fn calculate(&mut self) -> Option<f64> {
        self.calculate_with(|_| {})
    }

    /// Like [`calculate`][Node::calculate], reporting every reduction to `observer` in postorder.
    pub fn calculate_with<F>(&mut self, mut observer: F) -> Option<f64>
    where
        F: FnMut(&Step),
    {
        let root = std::mem::replace(self, Node::Term(String::new()));
        *self = fold(root, &mut observer);

        match self {
            Node::Term(text) => parse_number(text),
            Node::Binary(..) => None,
        }
    }
}

fn fold<F>(root: Node, observer: &mut F) -> Node
where
    F: FnMut(&Step),
{
    let mut work = vec![Frame::Enter(root)];
    let mut done: Vec<Node> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Enter(node) => match node.into_parts() {
                Ok((op, left, right)) => {
                    work.push(Frame::Combine(op));
                    work.push(Frame::Enter(right));
                    work.push(Frame::Enter(left));
                }
                Err(term) => done.push(term),
            },
            Frame::Combine(op) => {
                let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                    unreachable!("fold: operator {} without operands", op);
                };
                done.push(reduce(op, left, right, observer));
            }
        }
    }

    match done.pop() {
        Some(node) => node,
        None => unreachable!("fold: no result"),
    }
}

fn reduce<F>(op: Operator, left: Node, right: Node, observer: &mut F) -> Node
where
    F: FnMut(&Step),
{
    if let (Some(a), Some(b)) = (parse_number(left.text()), parse_number(right.text())) {
        if let Some(value) = op.apply(a, b) {
            debug!("reduce: {} {} {} => {}", a, op, b, value);
            observer(&Step::Reduced {
                operator: op,
                left: a,
                right: b,
                result: value,
            });
            return Node::Term(format_exact(value));
        }
    }

    let expression = Node::binary(op, left, right).to_infix();
    debug!("reduce: deferred {}", expression);
    observer(&Step::Deferred {
        expression: expression.clone(),
    });
    Node::Term(expression)
}
