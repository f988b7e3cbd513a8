//! Tree walks and the three notations derived from them.
//!
//! A single depth-first walk, [`Node::traverse`], drives everything here.
//! It calls back into a [`Visitor`] at three points for every node:
//!
//! - **visit**: before descending into the left subtree (preorder position)
//! - **transit**: between the left and the right subtree (inorder position)
//! - **leave**: after the right subtree (postorder position)
//!
//! Terms get all three callbacks too, back to back.
//! The walk keeps its own stack, so arbitrarily deep trees never overflow the call stack.
//!
//! # Notations
//!
//! | Walk      | Notation                       | `2+3*4`         |
//! |-----------|--------------------------------|-----------------|
//! | postorder | reverse Polish (postfix)       | `2 3 4 * +`     |
//! | inorder   | infix, fully parenthesized     | `(2 + (3 * 4))` |
//! | preorder  | Polish (prefix)                | `+ 2 * 3 4`     |

use crate::node::Node;

/// Callbacks for [`Node::traverse`]. Every hook defaults to doing nothing.
pub trait Visitor<'a> {
    fn on_visit(&mut self, _node: &'a Node) {}
    fn on_transit(&mut self, _node: &'a Node) {}
    fn on_leave(&mut self, _node: &'a Node) {}
}

/// The position at which a walk reports a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Order {
    Preorder,
    Inorder,
    Postorder,
}

#[derive(Debug, Copy, Clone)]
enum Stage {
    Visit,
    Transit,
    Leave,
}

/// Collects nodes in the order they are reached at one of the three positions.
struct Path<'a> {
    order: Order,
    nodes: Vec<&'a Node>,
}

impl<'a> Visitor<'a> for Path<'a> {
    fn on_visit(&mut self, node: &'a Node) {
        if self.order == Order::Preorder {
            self.nodes.push(node);
        }
    }

    fn on_transit(&mut self, node: &'a Node) {
        if self.order == Order::Inorder {
            self.nodes.push(node);
        }
    }

    fn on_leave(&mut self, node: &'a Node) {
        if self.order == Order::Postorder {
            self.nodes.push(node);
        }
    }
}

/// Writes infix notation with a bracket pair around every inner node.
#[derive(Default)]
struct InfixWriter {
    out: String,
}

impl<'a> Visitor<'a> for InfixWriter {
    fn on_visit(&mut self, node: &'a Node) {
        if !node.is_term() {
            self.out.push('(');
        }
    }

    fn on_transit(&mut self, node: &'a Node) {
        if node.left().is_some() {
            self.out.push(' ');
        }
        self.out.push_str(node.text());
        if node.right().is_some() {
            self.out.push(' ');
        }
    }

    fn on_leave(&mut self, node: &'a Node) {
        if !node.is_term() {
            self.out.push(')');
        }
    }
}

impl Node {
    /// Walks the tree depth-first, left before right, calling `visitor` at each position.
    pub fn traverse<'a, V>(&'a self, visitor: &mut V)
    where
        V: Visitor<'a> + ?Sized,
    {
        let mut stack: Vec<(&'a Node, Stage)> = vec![(self, Stage::Visit)];

        while let Some((node, stage)) = stack.pop() {
            match stage {
                Stage::Visit => {
                    visitor.on_visit(node);
                    stack.push((node, Stage::Transit));
                    if let Some(left) = node.left() {
                        stack.push((left, Stage::Visit));
                    }
                }
                Stage::Transit => {
                    visitor.on_transit(node);
                    stack.push((node, Stage::Leave));
                    if let Some(right) = node.right() {
                        stack.push((right, Stage::Visit));
                    }
                }
                Stage::Leave => {
                    visitor.on_leave(node);
                }
            }
        }
    }

    /// Nodes in the given walk order.
    pub fn walk(&self, order: Order) -> Vec<&Node> {
        let mut path = Path {
            order,
            nodes: Vec::with_capacity(self.size()),
        };
        self.traverse(&mut path);
        path.nodes
    }

    pub fn preorder(&self) -> Vec<&Node> {
        self.walk(Order::Preorder)
    }

    pub fn inorder(&self) -> Vec<&Node> {
        self.walk(Order::Inorder)
    }

    pub fn postorder(&self) -> Vec<&Node> {
        self.walk(Order::Postorder)
    }

    /// Reverse Polish notation, e.g. `2 3 4 * +`.
    pub fn to_postfix(&self) -> String {
        join_tokens(&self.postorder())
    }

    /// Polish notation, e.g. `+ 2 * 3 4`.
    pub fn to_prefix(&self) -> String {
        join_tokens(&self.preorder())
    }

    /// Fully parenthesized infix notation, e.g. `(2 + (3 * 4))`.
    pub fn to_infix(&self) -> String {
        let mut writer = InfixWriter::default();
        self.traverse(&mut writer);
        writer.out
    }
}

fn join_tokens(nodes: &[&Node]) -> String {
    nodes.iter().map(|node| node.text()).collect::<Vec<_>>().join(" ")
}
