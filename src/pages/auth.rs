//! Primary auth widget: login/signup card with inline validation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::components::password_checklist::PasswordChecklist;
use crate::state::form::{AuthFormState, AuthMode};

#[must_use]
pub fn header_title(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Welcome Back",
        AuthMode::Signup => "Create Account",
    }
}

#[must_use]
pub fn switch_prompt(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "No account?",
        AuthMode::Signup => "Already have an account?",
    }
}

#[must_use]
pub fn switch_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign Up",
        AuthMode::Signup => "Sign In",
    }
}

/// The validated auth card.
///
/// One `AuthFormState` signal holds both form variants, so field values
/// survive mode switches while errors and toggles reset.
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = RwSignal::new(AuthFormState::default());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1 class="auth-card__title">{move || header_title(state.get().mode)}</h1>
                </header>

                <Show when=move || state.get().success.is_some()>
                    <div class="auth-card__banner">
                        <span class="auth-card__banner-icon" aria-hidden="true">"✓"</span>
                        <p class="auth-card__banner-text">{move || state.get().success.unwrap_or_default()}</p>
                    </div>
                </Show>

                <div class="auth-card__body">
                    {move || match state.get().mode {
                        AuthMode::Login => view! { <LoginFields state=state/> }.into_any(),
                        AuthMode::Signup => view! { <SignupFields state=state/> }.into_any(),
                    }}

                    <p class="auth-card__switch">
                        {move || switch_prompt(state.get().mode)}
                        " "
                        <button
                            class="auth-card__switch-button"
                            on:click=move |_| state.update(AuthFormState::toggle_mode)
                        >
                            {move || switch_label(state.get().mode)}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoginFields(state: RwSignal<AuthFormState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(AuthFormState::submit_login);
        #[cfg(feature = "hydrate")]
        log::debug!("login submit: accepted={}", state.with_untracked(|s| s.errors.is_empty()));
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <InputField
                label="Email"
                input_type="email"
                placeholder="you@email.com"
                icon="mail"
                value=Signal::derive(move || state.with(|s| s.login.email.clone()))
                on_input=move |v| state.update(|s| s.login.email = v)
                error=Signal::derive(move || state.with(|s| s.errors.email))
            />

            <InputField
                label="Password"
                input_type="password"
                placeholder="••••••••"
                icon="lock"
                value=Signal::derive(move || state.with(|s| s.login.password.clone()))
                on_input=move |v| state.update(|s| s.login.password = v)
                error=Signal::derive(move || state.with(|s| s.errors.password))
                visible=Signal::derive(move || state.with(|s| s.show_password))
                on_toggle=Callback::new(move |()| state.update(|s| s.show_password = !s.show_password))
            />

            <button class="auth-form__submit" type="submit">"Sign In"</button>
        </form>
    }
}

#[component]
fn SignupFields(state: RwSignal<AuthFormState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(AuthFormState::submit_signup);
        #[cfg(feature = "hydrate")]
        log::debug!("signup submit: accepted={}", state.with_untracked(|s| s.errors.is_empty()));
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <InputField
                label="Name"
                input_type="text"
                placeholder="John Doe"
                icon="user"
                value=Signal::derive(move || state.with(|s| s.signup.name.clone()))
                on_input=move |v| state.update(|s| s.signup.name = v)
                error=Signal::derive(move || state.with(|s| s.errors.name))
            />

            <InputField
                label="Email"
                input_type="email"
                placeholder="you@email.com"
                icon="mail"
                value=Signal::derive(move || state.with(|s| s.signup.email.clone()))
                on_input=move |v| state.update(|s| s.signup.email = v)
                error=Signal::derive(move || state.with(|s| s.errors.email))
            />

            <InputField
                label="Password"
                input_type="password"
                placeholder="••••••••"
                icon="lock"
                value=Signal::derive(move || state.with(|s| s.signup.password.clone()))
                on_input=move |v| state.update(|s| s.signup.password = v)
                error=Signal::derive(move || state.with(|s| s.errors.password))
                visible=Signal::derive(move || state.with(|s| s.show_password))
                on_toggle=Callback::new(move |()| state.update(|s| s.show_password = !s.show_password))
            />

            <Show when=move || !state.with(|s| s.signup.password.is_empty())>
                <PasswordChecklist password=Signal::derive(move || state.with(|s| s.signup.password.clone()))/>
            </Show>

            <InputField
                label="Confirm Password"
                input_type="password"
                placeholder="••••••••"
                icon="lock"
                value=Signal::derive(move || state.with(|s| s.signup.confirm_password.clone()))
                on_input=move |v| state.update(|s| s.signup.confirm_password = v)
                error=Signal::derive(move || state.with(|s| s.errors.confirm_password))
                visible=Signal::derive(move || state.with(|s| s.show_confirm_password))
                on_toggle=Callback::new(move |()| {
                    state.update(|s| s.show_confirm_password = !s.show_confirm_password);
                })
            />

            <button class="auth-form__submit" type="submit">"Create Account"</button>
        </form>
    }
}
