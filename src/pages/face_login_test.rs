use super::*;

#[test]
fn submit_label_follows_mode() {
    assert_eq!(submit_label(AuthMode::Login), "Login");
    assert_eq!(submit_label(AuthMode::Signup), "Sign Up");
}

#[test]
fn switch_prompt_follows_mode() {
    assert_eq!(switch_prompt(AuthMode::Login), "Don't have an account?");
    assert_eq!(switch_prompt(AuthMode::Signup), "Already have an account?");
}

#[test]
fn switch_label_names_the_other_mode() {
    assert_eq!(switch_label(AuthMode::Login), "Sign Up");
    assert_eq!(switch_label(AuthMode::Signup), "Login");
}
