//! Auth form state: mode, field values, errors, and submit semantics.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validate::{is_valid_email, password_strength};

pub const ERR_EMAIL: &str = "Valid email required";
pub const ERR_PASSWORD_REQUIRED: &str = "Password required";
pub const ERR_NAME_REQUIRED: &str = "Name required";
pub const ERR_WEAK_PASSWORD: &str = "Weak password";
pub const ERR_PASSWORD_MISMATCH: &str = "Passwords do not match";

pub const MSG_LOGIN_SUCCESS: &str = "Login successful!";
pub const MSG_SIGNUP_SUCCESS: &str = "Account created successfully!";

/// Which of the two form variants is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field error messages. Replaced wholesale on every submit attempt,
/// never merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// State for the primary auth widget.
///
/// Both form variants keep their field values across mode switches; only
/// errors, the success message, and the visibility toggles reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub errors: FormErrors,
    pub success: Option<&'static str>,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl AuthFormState {
    /// Validate the login form. Sets either field errors or the success
    /// message; nothing is submitted anywhere.
    pub fn submit_login(&mut self) {
        let mut errors = FormErrors::default();
        if !is_valid_email(&self.login.email) {
            errors.email = Some(ERR_EMAIL);
        }
        if self.login.password.is_empty() {
            errors.password = Some(ERR_PASSWORD_REQUIRED);
        }
        self.finish_submit(errors, MSG_LOGIN_SUCCESS);
    }

    /// Validate the signup form. All four rules run independently, so
    /// several fields can fail at once. On success the widget switches
    /// back to login mode.
    pub fn submit_signup(&mut self) {
        let mut errors = FormErrors::default();
        if self.signup.name.is_empty() {
            errors.name = Some(ERR_NAME_REQUIRED);
        }
        if !is_valid_email(&self.signup.email) {
            errors.email = Some(ERR_EMAIL);
        }
        if !password_strength(&self.signup.password).is_valid {
            errors.password = Some(ERR_WEAK_PASSWORD);
        }
        if self.signup.password != self.signup.confirm_password {
            errors.confirm_password = Some(ERR_PASSWORD_MISMATCH);
        }

        let succeeded = errors.is_empty();
        self.finish_submit(errors, MSG_SIGNUP_SUCCESS);
        if succeeded {
            // Mode flips directly: the success banner must survive into
            // the login view, and set_mode would clear it.
            self.mode = AuthMode::Login;
        }
    }

    /// Switch to `mode`, clearing errors, the success message, and both
    /// visibility toggles. Field values are kept.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.errors = FormErrors::default();
        self.success = None;
        self.show_password = false;
        self.show_confirm_password = false;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    fn finish_submit(&mut self, errors: FormErrors, success_message: &'static str) {
        let succeeded = errors.is_empty();
        self.errors = errors;
        if succeeded {
            self.success = Some(success_message);
        }
    }
}
