//! One-shot conversion of an input line into all notations and a calculation result.

use std::fmt::{Display, Formatter};

use log::info;

use crate::config::ParseConfig;
use crate::error::ParseError;
use crate::number::format_number;
use crate::parser::{parse_with_config, strip_whitespace};

/// Result of calculating an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The whole expression folded into a single value.
    Evaluated(f64),
    /// Some part could not be folded; holds the partially calculated infix expression.
    Partial(String),
}

impl Outcome {
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Outcome::Evaluated(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Evaluated(value) => Some(*value),
            Outcome::Partial(_) => None,
        }
    }

    /// Process exit code: 0 when fully evaluated, 2 when only partially.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Evaluated(_) => 0,
            Outcome::Partial(_) => 2,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Evaluated(value) => write!(f, "calculated result: {}", format_number(*value)),
            Outcome::Partial(expression) => write!(f, "calculated expression: {}", expression),
        }
    }
}

/// Everything derived from one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The input with whitespace removed.
    pub expression: String,
    pub postfix: String,
    pub infix: String,
    pub prefix: String,
    pub outcome: Outcome,
}

impl Report {
    /// Strips whitespace from `input`, parses it, renders the three notations and calculates it.
    ///
    /// ```
    /// use polish_rs::config::ParseConfig;
    /// use polish_rs::report::{Outcome, Report};
    ///
    /// let report = Report::generate("2 + 3 * 4", &ParseConfig::default()).unwrap();
    /// assert_eq!(report.postfix, "2 3 4 * +");
    /// assert_eq!(report.infix, "(2 + (3 * 4))");
    /// assert_eq!(report.prefix, "+ 2 * 3 4");
    /// assert_eq!(report.outcome, Outcome::Evaluated(14.0));
    /// ```
    pub fn generate(input: &str, config: &ParseConfig) -> Result<Self, ParseError> {
        let expression = strip_whitespace(input);
        let mut tree = parse_with_config(&expression, config)?;

        let postfix = tree.to_postfix();
        let infix = tree.to_infix();
        let prefix = tree.to_prefix();

        let outcome = match tree.calculate() {
            Some(value) => Outcome::Evaluated(value),
            None => Outcome::Partial(tree.to_infix()),
        };
        info!("{} => {:?}", expression, outcome);

        Ok(Self {
            expression,
            postfix,
            infix,
            prefix,
            outcome,
        })
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "expression: {}", self.expression)?;
        writeln!(f, "reverse polish notation: {}", self.postfix)?;
        writeln!(f, "infix notation: {}", self.infix)?;
        writeln!(f, "polish notation: {}", self.prefix)?;
        writeln!(f, "{}", self.outcome)
    }
}
