//! Lenient number parsing for values typed into table inputs.
//!
//! Users type prices with a decimal comma (`19,90`) as often as with a dot.
//! Only the first comma is treated as the decimal separator, and only the
//! leading numeric part of the text is considered (`"12abc"` parses as 12),
//! the same way the browser's `parseFloat`/`parseInt` read a field.

/// Replace the first decimal comma with a dot.
pub fn normalize_decimal_comma(raw: &str) -> String {
    raw.replacen(',', ".", 1)
}

/// Parse a decimal number from the beginning of `raw`.
///
/// Returns `None` when the text has no numeric prefix at all.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = normalize_decimal_comma(raw);
    let s = normalized.trim();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // "5." is fine, a lone "." is not a number
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse an integer from the beginning of `raw`, truncating any fraction.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let normalized = normalize_decimal_comma(raw);
    let s = normalized.trim();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_and_dot_parse_identically() {
        assert_eq!(parse_decimal("10,50"), Some(10.5));
        assert_eq!(parse_decimal("10.50"), Some(10.5));
        assert_eq!(parse_decimal(" 19,90 "), Some(19.9));
    }

    #[test]
    fn test_leading_numeric_prefix() {
        assert_eq!(parse_decimal("12abc"), Some(12.0));
        assert_eq!(parse_decimal("-3.5kg"), Some(-3.5));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
    }

    #[test]
    fn test_only_first_comma_is_a_separator() {
        // "1,234,56" -> "1.234,56" -> 1.234
        assert_eq!(parse_decimal("1,234,56"), Some(1.234));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-"), None);
    }

    #[test]
    fn test_parse_integer_truncates() {
        assert_eq!(parse_integer("10"), Some(10));
        assert_eq!(parse_integer("10,9"), Some(10));
        assert_eq!(parse_integer("-7 un"), Some(-7));
        assert_eq!(parse_integer("x10"), None);
        assert_eq!(parse_integer(""), None);
    }
}
