//! # Number Formatting
//!
//! Display helpers used when building [`Report`](crate::report::Report)s.
//! Results keep full `f64` precision in JSON; only the human text is rounded.

/// Fixed number of decimal places, never printing `-0`
///
/// ```rust
/// use calc_core::format::fixed;
/// assert_eq!(fixed(53.130102354, 4), "53.1301");
/// assert_eq!(fixed(-0.00001, 2), "0.00");
/// ```
pub fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Fixed decimals with thousands separators
///
/// ```rust
/// use calc_core::format::grouped;
/// assert_eq!(grouped(1234567.891, 2), "1,234,567.89");
/// ```
pub fn grouped(value: f64, decimals: usize) -> String {
    let text = fixed(value, decimals);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, out, frac),
        None => format!("{}{}", sign, out),
    }
}

/// Money with a currency symbol, two decimals and separators
///
/// ```rust
/// use calc_core::format::currency;
/// assert_eq!(currency(-1500.0, "$"), "-$1,500.00");
/// ```
pub fn currency(value: f64, symbol: &str) -> String {
    let text = grouped(value, 2);
    match text.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, text),
    }
}

/// Percentage with a trailing `%`
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{}%", fixed(value, decimals))
}

/// General-purpose number display: up to `max_decimals` places with
/// trailing zeros removed, scientific notation for very large or very
/// small magnitudes.
///
/// ```rust
/// use calc_core::format::compact;
/// assert_eq!(compact(2.50, 4), "2.5");
/// assert_eq!(compact(3.0, 4), "3");
/// assert_eq!(compact(6.02e23, 4), "6.0200e23");
/// ```
pub fn compact(value: f64, max_decimals: usize) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        return format!("{:.*e}", max_decimals, value);
    }
    let text = fixed(value, max_decimals);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
