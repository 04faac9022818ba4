//! Display formatting for amounts.
//!
//! Kept out of the domain model; front-ends call these when rendering
//! balances, rows, and chart labels.

/// Formats a value with thousands separators and a fixed number of fraction
/// digits, e.g. `1234567.5` with two digits becomes `"1,234,567.50"`.
pub fn format_amount(value: f64, fraction_digits: usize) -> String {
    let rendered = format!("{:.*}", fraction_digits, value);
    let (number, negative) = match rendered.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (rendered.as_str(), false),
    };
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (number, None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(rendered.len() + digits / 3);
    if negative {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Prefixes a formatted amount with a currency symbol.
pub fn format_currency(value: f64, symbol: &str, fraction_digits: usize) -> String {
    format!("{}{}", symbol, format_amount(value, fraction_digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(1234567.5, 2), "1,234,567.50");
        assert_eq!(format_amount(1000.0, 0), "1,000");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(0.0, 2), "0.00");
    }

    #[test]
    fn keeps_sign_ahead_of_grouping() {
        assert_eq!(format_amount(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(format_amount(2.345, 2), "2.35");
        assert_eq!(format_amount(2.0, 3), "2.000");
    }

    #[test]
    fn currency_prefixes_symbol() {
        assert_eq!(format_currency(1500.0, "$", 2), "$1,500.00");
        assert_eq!(format_currency(-20.0, "$", 2), "$-20.00");
    }
}
