//! Bracket validation and stripping.
//!
//! Both functions are pure: they take a string slice and either borrow a part of it back or fail.

use log::trace;

use crate::error::ParseError;

/// Checks that every `(` in `expr` has a matching `)` and vice versa.
///
/// ```
/// use polish_rs::bracket::validate_bracket_balance;
///
/// assert!(validate_bracket_balance("(1+2)*(3+4)").is_ok());
/// assert!(validate_bracket_balance("(1+2").is_err());
/// assert!(validate_bracket_balance("1+2)").is_err());
/// ```
pub fn validate_bracket_balance(expr: &str) -> Result<(), ParseError> {
    let mut depth: i32 = 0;

    for c in expr.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                // A close bracket with nothing open, e.g. "(1+2))"
                if depth < 0 {
                    break;
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedBracket(expr.to_string()));
    }
    Ok(())
}

/// Removes brackets that enclose the whole of `expr`, however many layers there are.
///
/// `(1+2)+(3+4)` is returned unchanged, since its first bracket closes before the end.
///
/// ```
/// use polish_rs::bracket::remove_outermost_bracket;
///
/// assert_eq!(remove_outermost_bracket("((1+2))").unwrap(), "1+2");
/// assert_eq!(remove_outermost_bracket("(1+2)+(3+4)").unwrap(), "(1+2)+(3+4)");
/// assert_eq!(remove_outermost_bracket("1+2").unwrap(), "1+2");
/// assert!(remove_outermost_bracket("()").is_err());
/// ```
pub fn remove_outermost_bracket(expr: &str) -> Result<&str, ParseError> {
    let mut expr = expr;

    while expr.starts_with('(') {
        let mut depth: i32 = 0;
        let mut close = None;
        for (i, c) in expr.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }

        match close {
            None => return Err(ParseError::UnbalancedBracket(expr.to_string())),
            Some(i) if i + 1 < expr.len() => break,
            Some(_) => {
                if expr.len() <= 2 {
                    return Err(ParseError::EmptyBracket(expr.to_string()));
                }
                expr = &expr[1..expr.len() - 1];
                trace!("remove_outermost_bracket: peeled to {:?}", expr);
            }
        }
    }

    Ok(expr)
}
