//! Expression tree to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - **Operator nodes** are circles labelled with the operator symbol
//! - **Terms** are boxes labelled with the term text
//! - **Edges** point from a node to its children, left child first (`ordering=out`)
//!
//! # Examples
//!
//! ```
//! use polish_rs::parser::parse;
//!
//! let tree = parse("2+3*4").unwrap();
//! let dot = tree.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;

use crate::node::Node;

/// Configuration options for DOT output generation.
///
/// ```
/// use polish_rs::dot::DotConfig;
/// use polish_rs::parser::parse;
///
/// let tree = parse("a*(b+c)").unwrap();
/// let config = DotConfig {
///     term_shape: "plaintext",
///     label_edges: true,
///     ..DotConfig::default()
/// };
///
/// let dot = tree.to_dot_with_config(&config).unwrap();
/// assert!(dot.contains("label=\"L\""));
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for terms (default: "box")
    pub term_shape: &'static str,
    /// Whether to label edges with `L` and `R` (default: false)
    pub label_edges: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            term_shape: "box",
            label_edges: false,
        }
    }
}

impl Node {
    /// Converts the tree to DOT format with the default [`DotConfig`].
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the tree to DOT format.
    ///
    /// Nodes are named `n0`, `n1`, ... with `n0` being the root.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "ordering=out;")?;

        let mut next_id = 1;
        let mut stack = vec![(self, 0usize)];

        while let Some((node, id)) = stack.pop() {
            let shape = if node.is_term() {
                config.term_shape
            } else {
                config.operator_shape
            };
            writeln!(dot, "n{} [shape={}, label=\"{}\"];", id, shape, escape(node.text()))?;

            if let Some((left, right)) = node.children() {
                let (left_id, right_id) = (next_id, next_id + 1);
                next_id += 2;

                if config.label_edges {
                    writeln!(dot, "n{} -> n{} [label=\"L\"];", id, left_id)?;
                    writeln!(dot, "n{} -> n{} [label=\"R\"];", id, right_id)?;
                } else {
                    writeln!(dot, "n{} -> n{};", id, left_id)?;
                    writeln!(dot, "n{} -> n{};", id, right_id)?;
                }

                stack.push((right, right_id));
                stack.push((left, left_id));
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::parse;

    #[test]
    fn test_to_dot_basic() {
        let tree = parse("2+3*4").unwrap();
        let dot = tree.to_dot().unwrap();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("n0 [shape=circle, label=\"+\"];"));
        assert!(dot.contains("n1 [shape=box, label=\"2\"];"));
        assert!(dot.contains("n0 -> n1;"));
        assert!(dot.contains("n0 -> n2;"));
        assert!(dot.contains("n2 -> n3;"));
        assert!(dot.contains("n2 -> n4;"));
    }

    #[test]
    fn test_to_dot_single_term() {
        let tree = parse("x").unwrap();
        let dot = tree.to_dot().unwrap();
        assert_eq!(dot, "digraph {\nordering=out;\nn0 [shape=box, label=\"x\"];\n}\n");
    }

    #[test]
    fn test_to_dot_with_config() {
        let tree = parse("a-b").unwrap();
        let config = DotConfig {
            operator_shape: "ellipse",
            label_edges: true,
            ..DotConfig::default()
        };
        let dot = tree.to_dot_with_config(&config).unwrap();
        assert!(dot.contains("n0 [shape=ellipse, label=\"-\"];"));
        assert!(dot.contains("n0 -> n1 [label=\"L\"];"));
        assert!(dot.contains("n0 -> n2 [label=\"R\"];"));
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("a\\b"), "a\\\\b");
    }
}
