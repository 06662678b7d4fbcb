//! Checklist of the four password strength rules.

use leptos::prelude::*;

use crate::util::validate::password_strength;

/// Live breakdown of the password strength rules.
///
/// Strength is recomputed from the current string on every change; it is
/// never cached or stored.
#[component]
pub fn PasswordChecklist(password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| password_strength(&password.get()));

    view! {
        <div class="password-checklist">
            <p class="password-checklist__heading">"Password must contain:"</p>
            {requirement_row(Signal::derive(move || strength.get().min_length), "At least 8 characters")}
            {requirement_row(Signal::derive(move || strength.get().has_upper_case), "One uppercase letter")}
            {requirement_row(Signal::derive(move || strength.get().has_lower_case), "One lowercase letter")}
            {requirement_row(Signal::derive(move || strength.get().has_number), "One number")}
        </div>
    }
}

fn requirement_row(met: Signal<bool>, text: &'static str) -> impl IntoView {
    view! {
        <div class="password-checklist__row" class:password-checklist__row--met=move || met.get()>
            <span class="password-checklist__mark" aria-hidden="true">
                {move || if met.get() { "✓" } else { "○" }}
            </span>
            <span class="password-checklist__text">{text}</span>
        </div>
    }
}
