//! Cosmetic form validators shared by the auth widgets.
//!
//! Nothing here is security-relevant; results only drive inline styling
//! and error rows.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Four independent password rules plus their conjunction.
///
/// Derived on every render from the current password string; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub is_valid: bool,
}

/// Minimal structural email check: one or more non-whitespace/non-`@`
/// characters, `@`, more of the same, `.`, more of the same. Not
/// RFC-complete.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    fn part_ok(part: &str) -> bool {
        !part.is_empty() && part.chars().all(|c| !c.is_whitespace() && c != '@')
    }

    let Some((local, host)) = email.split_once('@') else {
        return false;
    };
    let Some((domain, tld)) = host.rsplit_once('.') else {
        return false;
    };
    part_ok(local) && part_ok(domain) && part_ok(tld)
}

/// Evaluate the four password rules against `password`.
///
/// Thresholds: byte length >= 8, plus at least one ASCII uppercase letter,
/// one ASCII lowercase letter, and one ASCII digit.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let min_length = password.len() >= 8;
    let has_upper_case = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower_case = password.chars().any(|c| c.is_ascii_lowercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());

    PasswordStrength {
        min_length,
        has_upper_case,
        has_lower_case,
        has_number,
        is_valid: min_length && has_upper_case && has_lower_case && has_number,
    }
}
