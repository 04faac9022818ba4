//! Entry-form validation performed before input reaches the service layer.

use crate::CoreError;

/// Validates raw form input for an add or update call.
///
/// Returns the trimmed title and the parsed amount. Rejects empty titles,
/// unparseable amount text, and amounts that are not positive finite
/// numbers. The service layer assumes its callers went through this.
pub fn validate_entry(title: &str, raw_amount: &str) -> Result<(String, f64), CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    let amount: f64 = raw_amount
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("amount `{raw_amount}` is not a number")))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be a positive number".into(),
        ));
    }
    Ok((title.to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_title_and_decimal_amount() {
        let (title, amount) = validate_entry("  Coffee ", " 3.50 ").unwrap();
        assert_eq!(title, "Coffee");
        assert_eq!(amount, 3.5);
    }

    #[test]
    fn rejects_empty_title() {
        let err = validate_entry("   ", "10").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = validate_entry("Coffee", "ten").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(validate_entry("Coffee", "0").is_err());
        assert!(validate_entry("Coffee", "-5").is_err());
        assert!(validate_entry("Coffee", "NaN").is_err());
        assert!(validate_entry("Coffee", "inf").is_err());
    }
}
