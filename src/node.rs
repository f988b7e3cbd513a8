//! Expression tree nodes.

use std::fmt::{Display, Formatter};

use crate::operator::Operator;

/// A node of a binary expression tree.
///
/// A tree owns its subtrees exclusively. Leaves hold a term: a numeric literal,
/// a symbolic atom, or an opaque subexpression left over from partial evaluation.
/// Inner nodes hold an operator and always have exactly two children.
///
/// Dropping, cloning and comparing trees use explicit stacks, so arbitrarily deep
/// trees built by hand are safe to handle.
#[derive(Debug)]
pub enum Node {
    Term(String),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    pub fn term(text: impl Into<String>) -> Self {
        Node::Term(text.into())
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    /// Splits an inner node into its operator and children.
    ///
    /// A term is handed back unchanged as the error.
    pub fn into_parts(mut self) -> Result<(Operator, Node, Node), Node> {
        if let Node::Binary(op, left, right) = &mut self {
            return Ok((*op, Node::take(left), Node::take(right)));
        }
        Err(self)
    }

    /// Moves the node out, leaving an empty term in its place.
    fn take(&mut self) -> Node {
        std::mem::replace(self, Node::Term(String::new()))
    }

    /// Term text for a leaf, or the operator symbol for an inner node.
    pub fn text(&self) -> &str {
        match self {
            Node::Term(text) => text.as_str(),
            Node::Binary(op, _, _) => op.as_str(),
        }
    }

    pub fn is_term(&self) -> bool {
        matches!(self, Node::Term(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Term(_) => None,
            Node::Binary(op, _, _) => Some(*op),
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Term(_) => None,
            Node::Binary(_, left, _) => Some(left.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Term(_) => None,
            Node::Binary(_, _, right) => Some(right.as_ref()),
        }
    }

    /// Both children of an inner node.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Term(_) => None,
            Node::Binary(_, left, right) => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some((left, right)) = node.children() {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Number of levels in the tree; a single term has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            if let Some((left, right)) = node.children() {
                stack.push((left, level + 1));
                stack.push((right, level + 1));
            }
        }
        max
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Node::Binary(_, left, right) = self {
            stack.push(Node::take(left));
            stack.push(Node::take(right));
        }
        while let Some(mut node) = stack.pop() {
            if let Node::Binary(_, left, right) = &mut node {
                stack.push(Node::take(left));
                stack.push(Node::take(right));
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Frame<'a> {
            Enter(&'a Node),
            Combine(Operator),
        }

        let mut work = vec![Frame::Enter(self)];
        let mut done: Vec<Node> = Vec::new();
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Enter(Node::Term(text)) => done.push(Node::Term(text.clone())),
                Frame::Enter(Node::Binary(op, left, right)) => {
                    work.push(Frame::Combine(*op));
                    work.push(Frame::Enter(right.as_ref()));
                    work.push(Frame::Enter(left.as_ref()));
                }
                Frame::Combine(op) => {
                    let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                        unreachable!("clone: operator {} without operands", op);
                    };
                    done.push(Node::binary(op, left, right));
                }
            }
        }

        match done.pop() {
            Some(node) => node,
            None => unreachable!("clone: no result"),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Node::Term(a), Node::Term(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Node::Binary(op_a, left_a, right_a), Node::Binary(op_b, left_b, right_b)) => {
                    if op_a != op_b {
                        return false;
                    }
                    stack.push((right_a.as_ref(), right_b.as_ref()));
                    stack.push((left_a.as_ref(), left_b.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Display for Node {
    /// Writes the fully parenthesized infix notation.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_infix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn sample() -> Node {
        // 2 + 3 * 4
        Node::binary(
            Operator::Add,
            Node::term("2"),
            Node::binary(Operator::Mul, Node::term("3"), Node::term("4")),
        )
    }

    #[test]
    fn test_term_view() {
        let node = Node::term("a");
        assert!(node.is_term());
        assert_eq!(node.text(), "a");
        assert_eq!(node.operator(), None);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.size(), 1);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn test_binary_view() {
        let node = sample();
        assert!(!node.is_term());
        assert_eq!(node.text(), "+");
        assert_eq!(node.operator(), Some(Operator::Add));
        assert_eq!(node.left().map(Node::text), Some("2"));
        assert_eq!(node.right().map(Node::text), Some("*"));
        assert_eq!(node.size(), 5);
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn test_display_is_infix() {
        assert_eq!(sample().to_string(), "(2 + (3 * 4))");
    }

    #[test]
    fn test_into_parts() {
        let (op, left, right) = sample().into_parts().unwrap();
        assert_eq!(op, Operator::Add);
        assert_eq!(left, Node::term("2"));
        assert_eq!(right.to_string(), "(3 * 4)");
        assert_eq!(Node::term("a").into_parts(), Err(Node::term("a")));
    }

    #[test]
    fn test_clone_and_eq() {
        let node = sample();
        let copy = node.clone();
        assert_eq!(node, copy);
        assert_ne!(node, Node::binary(Operator::Add, Node::term("2"), Node::term("3")));
        assert_ne!(node, Node::binary(Operator::Sub, Node::term("2"), node.right().unwrap().clone()));
        assert_ne!(Node::term("a"), Node::term("b"));
    }

    fn chain(levels: usize) -> Node {
        let mut tree = Node::term("0");
        for _ in 1..levels {
            tree = Node::binary(Operator::Mul, tree, Node::term("1"));
        }
        tree
    }

    #[test]
    fn test_deep_tree_drop_clone_eq() {
        let tree = chain(200_000);
        let copy = tree.clone();
        assert_eq!(copy.depth(), 200_000);
        assert!(tree == copy);
        drop(copy);
        drop(tree);
    }
}
