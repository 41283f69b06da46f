//! Page header with the backend banner and a logout action.

use leptos::prelude::*;

use crate::state::session::{SessionWriter, use_session};

pub const DEFAULT_TITLE: &str = "Lead Manager";

#[component]
pub fn Header(#[prop(into)] title: Signal<Option<String>>, writer: SessionWriter) -> impl IntoView {
    let session = use_session();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!("signing out");
        writer.sign_out();
    };

    view! {
        <div class="has-text-centered m-6">
            <h1 class="title">{move || title.get().unwrap_or_else(|| DEFAULT_TITLE.to_owned())}</h1>
            <Show when=move || session.is_authenticated()>
                <button class="button" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
