//! Labeled form input with icon, optional visibility toggle, and inline
//! error row.

use leptos::prelude::*;

/// A labeled input with a left icon glyph and an inline error row.
///
/// Holds no state of its own: the value, the error, and (for password
/// fields) the visibility flag all live in the parent. Pass both
/// `visible` and `on_toggle` to get a show/hide button that swaps the
/// input's effective type between the configured one and `"text"`.
#[component]
pub fn InputField<OnInput>(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] icon: String,
    value: Signal<String>,
    on_input: OnInput,
    error: Signal<Option<&'static str>>,
    #[prop(optional)] visible: Option<Signal<bool>>,
    #[prop(optional)] on_toggle: Option<Callback<()>>,
) -> impl IntoView
where
    OnInput: Fn(String) + Clone + 'static,
{
    let has_toggle = visible.is_some() && on_toggle.is_some();

    let effective_type = move || match visible {
        Some(visible) if visible.get() => "text".to_owned(),
        _ => input_type.clone(),
    };

    let toggle_label = move || {
        if visible.is_some_and(|visible| visible.get()) {
            "Hide"
        } else {
            "Show"
        }
    };

    view! {
        <div class="input-field">
            <label class="input-field__label">{label}</label>

            <div class="input-field__control" class:input-field__control--toggle=has_toggle>
                <span class=format!("input-field__icon input-field__icon--{icon}") aria-hidden="true"></span>
                <input
                    class="input-field__input"
                    class:input-field__input--invalid=move || error.get().is_some()
                    type=effective_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <Show when=move || has_toggle>
                    <button
                        class="input-field__toggle"
                        type="button"
                        on:click=move |_| {
                            if let Some(on_toggle) = on_toggle {
                                on_toggle.run(());
                            }
                        }
                    >
                        {toggle_label}
                    </button>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="input-field__error">
                    <span class="input-field__error-icon" aria-hidden="true">"!"</span>
                    <p class="input-field__error-text">{move || error.get().unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}
