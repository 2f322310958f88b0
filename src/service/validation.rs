//! Request validation against column widths.

use crate::error::AppError;
use crate::models::Writable;
use crate::sql::SqlValue;
use crate::tables::Table;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate an input shape against the widths of its table.
    pub fn validate_input<W: Writable>(input: &W) -> Result<(), AppError> {
        Self::validate(W::TABLE, &input.values())
    }

    /// Reject any text value longer than its column allows. Lengths count characters, not bytes.
    pub fn validate(table: &Table, values: &[(&str, SqlValue)]) -> Result<(), AppError> {
        for (col, v) in values {
            let Some(max) = table.column(col).and_then(|c| c.max_length()) else {
                continue;
            };
            if let Some(s) = v.as_text() {
                if s.chars().count() > max as usize {
                    return Err(AppError::Validation(format!(
                        "{} must be at most {} characters",
                        col, max
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderIn, ProductIn, UserIn};
    use rstest::rstest;

    fn user(name: &str, second_name: &str, email: &str, password: &str) -> UserIn {
        UserIn {
            name: name.into(),
            second_name: second_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_values_at_the_limit() {
        let u = user(&"a".repeat(32), &"b".repeat(60), &"c".repeat(128), &"d".repeat(50));
        assert!(RequestValidator::validate_input(&u).is_ok());
    }

    #[rstest]
    #[case::name(user(&"a".repeat(33), "Lee", "a@x.com", "pw"), "name")]
    #[case::second_name(user("Ann", &"b".repeat(61), "a@x.com", "pw"), "second_name")]
    #[case::email(user("Ann", "Lee", &"c".repeat(129), "pw"), "email")]
    #[case::password(user("Ann", "Lee", "a@x.com", &"d".repeat(51)), "password")]
    fn rejects_over_long_user_fields(#[case] input: UserIn, #[case] field: &str) {
        match RequestValidator::validate_input(&input) {
            Err(AppError::Validation(msg)) => assert!(msg.starts_with(field), "{}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let u = user(&"é".repeat(32), "Lee", "a@x.com", "pw");
        assert!(RequestValidator::validate_input(&u).is_ok());
    }

    #[test]
    fn free_text_is_unbounded() {
        let p = ProductIn {
            name: "Lamp".into(),
            description: "x".repeat(10_000),
        };
        assert!(RequestValidator::validate_input(&p).is_ok());
    }

    #[test]
    fn order_date_is_bounded_by_its_column() {
        let o = OrderIn {
            user_id: 1,
            product_id: 1,
            date: "2020-01-01T00:00".into(),
            description: String::new(),
            price: 1.0,
        };
        assert!(matches!(
            RequestValidator::validate_input(&o),
            Err(AppError::Validation(_))
        ));
    }
}
