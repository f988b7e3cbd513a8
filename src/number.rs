//! Numeric terms: recognising them and writing folded values back as text.
//!
//! Folded values are stored with [`format_exact`], which reads back to the same `f64`.
//! [`format_number`] rounds for display only.

/// Significant digits shown by [`format_number`].
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Parses `text` as a number, if the whole of it is one.
///
/// Anything the standard float parser accepts counts, including `inf` and `NaN`,
/// so a folded infinity keeps folding further up the tree.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Writes `value` as the shortest text that parses back to exactly the same `f64`.
///
/// Very large and very small magnitudes use exponent form without a sign on
/// positive exponents, so the text never contains a `+`.
///
/// ```
/// use polish_rs::number::{format_exact, parse_number};
///
/// assert_eq!(format_exact(14.0), "14");
/// assert_eq!(format_exact(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(format_exact(1e16), "1e16");
/// assert_eq!(parse_number(&format_exact(0.1 + 0.2)), Some(0.1 + 0.2));
/// ```
pub fn format_exact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

/// Formats `value` like C's `%.15g`, for display.
///
/// ```
/// use polish_rs::number::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333333333333");
/// assert_eq!(format_number(1e16), "1e+16");
/// assert_eq!(format_number(1.5e16), "1.5e+16");
/// assert_eq!(format_number(1e-16), "1e-16");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Scientific form first: it rounds to the right number of digits and tells us the exponent.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let precision = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", precision, value);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
