//! Lenient integer query parameters
//!
//! Listing endpoints read `page` and `limit` by their leading integer and
//! never reject a request over them.

/// What a parsed `0` stands for in [`positive_int`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroAs {
    /// Same as a missing value
    Default,
    /// Clamped up to 1 like any other value below 1
    One,
}

/// Leading integer of a string: `"2"`, `" 12abc"` and `"3.9"` give 2, 12
/// and 3; no leading digits gives `None`. Overlong digit runs saturate.
pub fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// A parameter that must be at least 1
///
/// Missing or non-numeric values give `default`, negatives give 1, and
/// `0` follows `zero`.
pub fn positive_int(value: Option<&str>, default: u64, zero: ZeroAs) -> u64 {
    match value.and_then(leading_int) {
        None => default,
        Some(0) if zero == ZeroAs::Default => default,
        Some(n) => u64::try_from(n).ok().filter(|n| *n >= 1).unwrap_or(1),
    }
}
