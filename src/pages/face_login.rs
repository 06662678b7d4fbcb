//! Decorative login/signup page with the pointer-tracking face.
//!
//! Unlike the primary widget this form validates nothing: fields are
//! uncontrolled, submit is prevented and logged, and the only live state
//! is the mode toggle and the face.

#[cfg(test)]
#[path = "face_login_test.rs"]
mod face_login_test;

use leptos::prelude::*;

use crate::components::tracking_face::TrackingFace;
use crate::state::face::FaceState;
use crate::state::form::AuthMode;

#[must_use]
pub fn submit_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Signup => "Sign Up",
    }
}

#[must_use]
pub fn switch_prompt(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Don't have an account?",
        AuthMode::Signup => "Already have an account?",
    }
}

#[must_use]
pub fn switch_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Sign Up",
        AuthMode::Signup => "Login",
    }
}

/// The decorative widget: face, pill toggle, and a form that goes nowhere.
#[component]
pub fn FaceLoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);
    let face = RwSignal::new(FaceState::default());

    let on_password_focus = move |_ev: leptos::ev::FocusEvent| face.update(FaceState::shield);
    let on_password_blur = move |_ev: leptos::ev::FocusEvent| face.update(FaceState::unshield);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        log::debug!("decorative form submitted in {:?} mode", mode.get());
    };

    view! {
        <div class="face-login">
            <div class="face-login__card">
                <TrackingFace face=face/>

                <div class="face-login__toggle">
                    <button
                        class="face-login__toggle-button"
                        class:face-login__toggle-button--active=move || mode.get() == AuthMode::Login
                        on:click=move |_| mode.set(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class="face-login__toggle-button"
                        class:face-login__toggle-button--active=move || mode.get() == AuthMode::Signup
                        on:click=move |_| mode.set(AuthMode::Signup)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="face-login__form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <div class="face-login__field">
                            <label class="face-login__label">"Full Name"</label>
                            <input class="face-login__input" type="text" placeholder="John Doe"/>
                        </div>
                    </Show>

                    <div class="face-login__field">
                        <label class="face-login__label">"Email"</label>
                        <input class="face-login__input" type="email" placeholder="you@example.com"/>
                    </div>

                    <div class="face-login__field">
                        <label class="face-login__label">"Password"</label>
                        <input
                            class="face-login__input"
                            type="password"
                            placeholder="••••••••"
                            on:focus=on_password_focus
                            on:blur=on_password_blur
                        />
                    </div>

                    <Show when=move || mode.get() == AuthMode::Login>
                        <div class="face-login__options">
                            <label class="face-login__remember">
                                <input class="face-login__checkbox" type="checkbox"/>
                                <span>"Remember me"</span>
                            </label>
                            <a class="face-login__forgot" href="#">"Forgot password?"</a>
                        </div>
                    </Show>

                    <button class="face-login__submit" type="submit">
                        {move || submit_label(mode.get())}
                    </button>
                </form>

                <p class="face-login__switch">
                    {move || switch_prompt(mode.get())}
                    " "
                    <button
                        class="face-login__switch-button"
                        on:click=move |_| mode.update(|m| *m = m.toggled())
                    >
                        {move || switch_label(mode.get())}
                    </button>
                </p>
            </div>
        </div>
    }
}
