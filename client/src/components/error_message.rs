//! Inline error text.

use leptos::prelude::*;

/// Renders `message` in bold danger text, or nothing when it is empty.
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty())>
            <p class="has-text-weight-bold has-text-danger">{move || message.get()}</p>
        </Show>
    }
}
