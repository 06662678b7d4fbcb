use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn accepts_dotted_subdomains() {
    assert!(is_valid_email("user@mail.example.com"));
}

#[test]
fn rejects_plain_text() {
    assert!(!is_valid_email("not-an-email"));
}

#[test]
fn rejects_empty_string() {
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email("user@host"));
    assert!(!is_valid_email("user@host."));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("@host.com"));
}

#[test]
fn rejects_whitespace_and_extra_at_signs() {
    assert!(!is_valid_email("us er@host.com"));
    assert!(!is_valid_email("user@ho st.com"));
    assert!(!is_valid_email("user@@host.com"));
    assert!(!is_valid_email("user@host@x.com"));
}

// =============================================================
// password_strength
// =============================================================

#[test]
fn strong_password_passes_every_rule() {
    let strength = password_strength("Abcdefg1");
    assert!(strength.min_length);
    assert!(strength.has_upper_case);
    assert!(strength.has_lower_case);
    assert!(strength.has_number);
    assert!(strength.is_valid);
}

#[test]
fn short_lowercase_password_fails_most_rules() {
    let strength = password_strength("abc");
    assert!(!strength.min_length);
    assert!(!strength.has_upper_case);
    assert!(strength.has_lower_case);
    assert!(!strength.has_number);
    assert!(!strength.is_valid);
}

#[test]
fn empty_password_fails_every_rule() {
    let strength = password_strength("");
    assert!(!strength.min_length);
    assert!(!strength.has_upper_case);
    assert!(!strength.has_lower_case);
    assert!(!strength.has_number);
    assert!(!strength.is_valid);
}

#[test]
fn each_rule_is_checked_independently() {
    assert!(!password_strength("abcdefg1").is_valid); // no uppercase
    assert!(!password_strength("ABCDEFG1").is_valid); // no lowercase
    assert!(!password_strength("Abcdefgh").is_valid); // no digit
    assert!(!password_strength("Abc1").is_valid); // too short
}
