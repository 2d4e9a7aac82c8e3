//! Input validation rules
//!
//! Each rule is a whole-string regex match. `ValidationError` displays as the
//! exact message shown next to the offending field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `+` followed by 6-15 digits
static RECHARGE_MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{6,15}$").expect("recharge mobile regex"));

/// 10-100 as plain decimal text, no leading zero
static RECHARGE_AMOUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(10|[1-9][0-9]|100)$").expect("recharge amount regex"));

/// Optional `+`, then 10-15 digits
static PROFILE_MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]{10,15}$|^[0-9]{10,15}$").expect("profile mobile regex")
});

/// 1-100 ASCII letters
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,100}$").expect("name regex"));

/// local@domain.tld with no whitespace and no extra `@`
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Client-detected input error. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter valid mobile number with country code (e.g. +353...)")]
    RechargeMobile,
    #[error("Amount must be between 10 and 100")]
    RechargeAmount,
    #[error("Please enter both username and password.")]
    MissingCredentials,
    #[error("Enter a valid mobile number")]
    ProfileMobile,
    #[error("All fields are required")]
    MissingProfileFields,
    #[error("Invalid first name")]
    FirstName,
    #[error("Invalid last name")]
    LastName,
    #[error("Invalid email address")]
    Email,
}

pub fn is_valid_recharge_mobile(value: &str) -> bool {
    RECHARGE_MOBILE_REGEX.is_match(value)
}

pub fn is_valid_recharge_amount(value: &str) -> bool {
    RECHARGE_AMOUNT_REGEX.is_match(value)
}

pub fn is_valid_profile_mobile(value: &str) -> bool {
    PROFILE_MOBILE_REGEX.is_match(value)
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate a live input field: `None` while empty, otherwise the rule's verdict
pub fn check_live(
    value: &str,
    rule: fn(&str) -> bool,
    error: ValidationError,
) -> Option<Result<(), ValidationError>> {
    if value.is_empty() {
        None
    } else if rule(value) {
        Some(Ok(()))
    } else {
        Some(Err(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod recharge_mobile {
        use super::*;

        #[test]
        fn test_accepts_plus_and_6_to_15_digits() {
            assert!(is_valid_recharge_mobile("+123456"));
            assert!(is_valid_recharge_mobile("+35312345678"));
            assert!(is_valid_recharge_mobile("+123456789012345"));
        }

        #[test]
        fn test_rejects_wrong_lengths() {
            assert!(!is_valid_recharge_mobile("+12345"));
            assert!(!is_valid_recharge_mobile("+1234567890123456"));
            assert!(!is_valid_recharge_mobile("+"));
        }

        #[test]
        fn test_rejects_missing_plus_or_extra_chars() {
            assert!(!is_valid_recharge_mobile("35312345678"));
            assert!(!is_valid_recharge_mobile("+353 1234567"));
            assert!(!is_valid_recharge_mobile(" +35312345678"));
            assert!(!is_valid_recharge_mobile("+35312345678\n"));
            assert!(!is_valid_recharge_mobile("++35312345678"));
            assert!(!is_valid_recharge_mobile("+3531234567a"));
        }

        #[test]
        fn test_rejects_non_ascii_digits() {
            assert!(!is_valid_recharge_mobile("+٣٥٣١٢٣٤٥٦٧٨"));
        }
    }

    mod recharge_amount {
        use super::*;

        #[test]
        fn test_accepts_exactly_10_to_100() {
            for n in 10..=100 {
                assert!(is_valid_recharge_amount(&n.to_string()), "{n} should pass");
            }
        }

        #[test]
        fn test_rejects_out_of_range() {
            for value in ["0", "1", "9", "101", "200", "1000"] {
                assert!(!is_valid_recharge_amount(value), "{value} should fail");
            }
        }

        #[test]
        fn test_rejects_leading_zeros_and_noise() {
            for value in ["007", "010", "050", "0100", " 50", "50 ", "50.0", "+50", "-50", ""] {
                assert!(!is_valid_recharge_amount(value), "{value:?} should fail");
            }
        }
    }

    mod profile_mobile {
        use super::*;

        #[test]
        fn test_accepts_with_or_without_plus() {
            assert!(is_valid_profile_mobile("0871234567"));
            assert!(is_valid_profile_mobile("+353871234567"));
            assert!(is_valid_profile_mobile("123456789012345"));
        }

        #[test]
        fn test_rejects_short_long_and_mixed() {
            assert!(!is_valid_profile_mobile("087123456"));
            assert!(!is_valid_profile_mobile("+1234567890123456"));
            assert!(!is_valid_profile_mobile("087-123-4567"));
            assert!(!is_valid_profile_mobile("++0871234567"));
        }
    }

    mod names_and_email {
        use super::*;

        #[test]
        fn test_name_letters_only() {
            assert!(is_valid_name("John"));
            assert!(is_valid_name("a"));
            assert!(is_valid_name(&"x".repeat(100)));
            assert!(!is_valid_name(&"x".repeat(101)));
            assert!(!is_valid_name(""));
            assert!(!is_valid_name("O'Brien"));
            assert!(!is_valid_name("Anne Marie"));
            assert!(!is_valid_name("Zoë"));
        }

        #[test]
        fn test_email_shape() {
            assert!(is_valid_email("j@d.com"));
            assert!(is_valid_email("john.doe@mail.example.ie"));
            assert!(!is_valid_email("bad@@x"));
            assert!(!is_valid_email("no-at-sign.com"));
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a b@c.com"));
            assert!(!is_valid_email("a@b@c.com"));
        }
    }

    #[test]
    fn test_check_live_distinguishes_empty_from_invalid() {
        let rule = is_valid_recharge_amount;
        assert_eq!(check_live("", rule, ValidationError::RechargeAmount), None);
        assert_eq!(
            check_live("5", rule, ValidationError::RechargeAmount),
            Some(Err(ValidationError::RechargeAmount))
        );
        assert_eq!(check_live("50", rule, ValidationError::RechargeAmount), Some(Ok(())));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingCredentials.to_string(),
            "Please enter both username and password."
        );
        assert_eq!(ValidationError::Email.to_string(), "Invalid email address");
        assert_eq!(
            ValidationError::ProfileMobile.to_string(),
            "Enter a valid mobile number"
        );
    }
}
