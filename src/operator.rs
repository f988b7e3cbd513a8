//! Binary operators and the pivot search.

use std::fmt::{Display, Formatter};

use log::trace;

use crate::config::Associativity;

/// The operator set understood by the parser.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Assign,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Operator::Assign),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Assign => '=',
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Binding priority: the lower the value, the later the operator is applied.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Assign => 1,
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 3,
        }
    }

    /// Applies the operator using IEEE-754 double arithmetic.
    ///
    /// Division by zero yields an infinity or NaN, never an error.
    /// Returns `None` for [`Operator::Assign`], which has no numeric meaning.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Assign => None,
            Operator::Add => Some(lhs + rhs),
            Operator::Sub => Some(lhs - rhs),
            Operator::Mul => Some(lhs * rhs),
            Operator::Div => Some(lhs / rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds the byte position of the operator that should become the root of `expr`.
///
/// Only operators outside of any brackets are candidates.
/// Among them, the one with the lowest [priority][Operator::priority] wins;
/// ties are broken according to `associativity`.
/// Returns `None` when `expr` contains no such operator, i.e. it is a term.
///
/// ```
/// use polish_rs::config::Associativity;
/// use polish_rs::operator::find_pivot;
///
/// assert_eq!(find_pivot("1-2-3", Associativity::Left), Some(3));
/// assert_eq!(find_pivot("1-2-3", Associativity::Right), Some(1));
/// assert_eq!(find_pivot("2*(3+4)", Associativity::Left), Some(1));
/// assert_eq!(find_pivot("(1+2)", Associativity::Left), None);
/// ```
pub fn find_pivot(expr: &str, associativity: Associativity) -> Option<usize> {
    let mut pivot: Option<(usize, u8)> = None;
    let mut depth: i32 = 0;

    for (i, c) in expr.char_indices() {
        let op = match c {
            '(' => {
                depth += 1;
                continue;
            }
            ')' => {
                depth -= 1;
                continue;
            }
            _ => match Operator::from_char(c) {
                Some(op) => op,
                None => continue,
            },
        };

        if depth != 0 {
            continue;
        }

        let priority = op.priority();
        let better = match pivot {
            None => true,
            Some((_, current)) => match associativity {
                Associativity::Left => priority <= current,
                Associativity::Right => priority < current,
            },
        };
        if better {
            trace!("find_pivot: candidate '{}' at {}", c, i);
            pivot = Some((i, priority));
        }
    }

    pivot.map(|(i, _)| i)
}
