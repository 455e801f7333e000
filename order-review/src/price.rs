//! Price coercion and display
//!
//! Basket prices and counts arrive as numbers or numeric text. They are read
//! as integers the lenient way: leading digits count, the rest is ignored,
//! and anything unreadable counts as zero.

use shared::models::Numeric;

/// Default thousands separator for totals
pub const DEFAULT_SEPARATOR: char = ' ';

/// Parse the leading integer of `text` (after whitespace and an optional
/// sign). A `0x`/`0X` prefix switches to base 16. `None` when no digit
/// follows.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    seen.then_some(if negative { -value } else { value })
}

/// Integer value of a numeric field, zero when unreadable
pub fn to_int(value: &Numeric) -> i64 {
    match value {
        Numeric::Int(v) => *v,
        // `as` saturates and maps NaN to 0
        Numeric::Float(v) => v.trunc() as i64,
        Numeric::Text(text) => parse_leading_int(text).unwrap_or(0),
        Numeric::Other(_) => 0,
    }
}

/// `price * count` for one basket line
pub fn line_total(price: &Numeric, count: &Numeric) -> i64 {
    to_int(price).saturating_mul(to_int(count))
}

/// Group thousands with `separator`, no decimals: `1234567` -> `1 234 567`
pub fn format_grouped(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
