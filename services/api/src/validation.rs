//! Input validation utilities

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ApiError, ApiResult};

/// Collect every failed check into a single validation error
pub fn check<I>(results: I) -> ApiResult<()>
where
    I: IntoIterator<Item = Result<(), String>>,
{
    let messages: Vec<String> = results.into_iter().filter_map(Result::err).collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(messages))
    }
}

/// Validate a required free-text field such as a name
pub fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(format!("{} is required", field));
    }

    if value.chars().count() > max_len {
        return Err(format!("{} must be at most {} characters long", field, max_len));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate phone number: optional leading `+`, then 6 to 15 digits
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.is_empty() {
        return Err("Phone is required".to_string());
    }

    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9]{6,15}$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone) {
        return Err("Phone must contain 6 to 15 digits, optionally prefixed by +".to_string());
    }

    Ok(())
}

/// Validate a money amount
pub fn validate_amount(field: &str, amount: i64, allow_zero: bool) -> Result<(), String> {
    match (amount, allow_zero) {
        (a, true) if a < 0 => Err(format!("{} must not be negative", field)),
        (a, false) if a <= 0 => Err(format!("{} must be greater than zero", field)),
        _ => Ok(()),
    }
}

/// `from` must not come after `to` when both bounds are given
pub fn validate_date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), String> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => Err("From must not be after to".to_string()),
        _ => Ok(()),
    }
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }
    }

    if !has_upper {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lower {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    if !has_special {
        return Err("Password must contain at least one special character".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("owner@kost.id").is_ok());
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
        assert_eq!(validate_email("owner@").unwrap_err(), "Invalid email format");
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+6281234567890").is_ok());
        assert!(validate_phone("081234567").is_ok());
        assert!(validate_phone("12-34").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_password_strength() {
        assert!(validate_password("Str0ng!pass").is_ok());
        assert!(validate_password("short1!").is_err());
        assert!(validate_password("alllowercase1!").is_err());
        assert!(validate_password("NoDigits!!").is_err());
        assert!(validate_password("NoSpecial123").is_err());
    }

    #[test]
    fn test_validate_required_trims_and_limits() {
        assert_eq!(validate_required("Name", "   ", 10).unwrap_err(), "Name is required");
        assert!(validate_required("Name", "Budi", 10).is_ok());
        assert!(validate_required("Name", "abcdefghijk", 10).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("Amount", 0, true).is_ok());
        assert!(validate_amount("Amount", 0, false).is_err());
        assert!(validate_amount("Amount", -5, true).is_err());
        assert!(validate_amount("Amount", 1_500_000, false).is_ok());
    }

    #[test]
    fn test_validate_date_range() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1);
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1);
        assert!(validate_date_range(jan, feb).is_ok());
        assert!(validate_date_range(jan, jan).is_ok());
        assert!(validate_date_range(None, jan).is_ok());
        assert!(validate_date_range(feb, jan).is_err());
    }

    #[test]
    fn test_check_collects_all_failures() {
        let result = check([
            validate_email("bad"),
            validate_required("Name", "", 100),
            validate_phone("+628123456"),
        ]);

        match result {
            Err(ApiError::Validation(messages)) => {
                assert_eq!(messages, vec!["Invalid email format", "Name is required"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
