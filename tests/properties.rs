//! Property-based tests for parsing, notations and calculation.

use polish_rs::node::Node;
use polish_rs::operator::Operator;
use polish_rs::parser::{parse, strip_whitespace};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Expr {
    Num(u32),
    /// `whole.frac`, with two fraction digits.
    Dec(u32, u32),
    Var(char),
    Bin(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Renders with as few brackets as left-to-right grouping allows.
    fn render(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Dec(whole, frac) => format!("{}.{:02}", whole, frac),
            Expr::Var(c) => c.to_string(),
            Expr::Bin(op, left, right) => {
                let l = left.render_operand(*op, false);
                let r = right.render_operand(*op, true);
                format!("{}{}{}", l, op, r)
            }
        }
    }

    fn render_operand(&self, parent: Operator, is_right: bool) -> String {
        let text = self.render();
        match self {
            Expr::Bin(op, _, _)
                if op.priority() < parent.priority() || (is_right && op.priority() == parent.priority()) =>
            {
                format!("({})", text)
            }
            _ => text,
        }
    }

    fn to_node(&self) -> Node {
        match self {
            Expr::Num(_) | Expr::Dec(_, _) | Expr::Var(_) => Node::term(self.render()),
            Expr::Bin(op, left, right) => Node::binary(*op, left.to_node(), right.to_node()),
        }
    }

    fn value(&self) -> Option<f64> {
        match self {
            Expr::Num(n) => Some(*n as f64),
            Expr::Dec(_, _) => self.render().parse().ok(),
            Expr::Var(_) => None,
            Expr::Bin(op, left, right) => op.apply(left.value()?, right.value()?),
        }
    }
}

fn arb_symbolic() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0u32..100).prop_map(Expr::Num),
        prop::sample::select(vec!['a', 'b', 'x', 'y']).prop_map(Expr::Var),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (prop::sample::select(Operator::ALL.to_vec()), inner.clone(), inner)
            .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r)))
    })
}

fn arb_numeric() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0u32..10).prop_map(Expr::Num),
        (0u32..10, 1u32..100).prop_map(|(whole, frac)| Expr::Dec(whole, frac)),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (
            prop::sample::select(vec![Operator::Add, Operator::Sub, Operator::Mul, Operator::Div]),
            inner.clone(),
            inner,
        )
            .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r)))
    })
}

/// Equal bit for bit, or both NaN.
fn same_value(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn parse_recovers_grouping(expr in arb_symbolic()) {
        let tree = parse(&expr.render()).unwrap();
        prop_assert_eq!(tree, expr.to_node());
    }

    #[test]
    fn infix_is_idempotent(expr in arb_symbolic()) {
        let tree = parse(&expr.render()).unwrap();
        let infix = tree.to_infix();
        let again = parse(&strip_whitespace(&infix)).unwrap();
        prop_assert_eq!(again.to_postfix(), tree.to_postfix());
        prop_assert_eq!(again.to_prefix(), tree.to_prefix());
        prop_assert_eq!(again.to_infix(), infix);
    }

    #[test]
    fn notations_list_every_node_once(expr in arb_symbolic()) {
        let tree = parse(&expr.render()).unwrap();
        let size = tree.size();
        prop_assert_eq!(tree.to_postfix().split(' ').count(), size);
        prop_assert_eq!(tree.to_prefix().split(' ').count(), size);
    }

    #[test]
    fn calculation_matches_reference(expr in arb_numeric()) {
        let mut tree = parse(&expr.render()).unwrap();
        let (actual, expected) = (tree.calculate(), expr.value());
        prop_assert!(expected.is_some());
        prop_assert!(same_value(actual, expected), "{:?} != {:?}", actual, expected);
        prop_assert!(tree.is_term());
    }
}
