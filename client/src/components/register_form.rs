//! Account registration form.
//!
//! Passwords are checked locally first; a failing check never reaches the
//! network. A successful `POST /api/users` signs the session in, which swaps
//! the root view to the leads table.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::net::types::Credentials;
use crate::state::session::SessionWriter;

pub const PASSWORD_RULE_MESSAGE: &str = "Ensure that the passwords match and greater than 3";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

/// Local checks run before any request: the passwords must match and be
/// longer than three characters.
pub(crate) fn validate_registration(email: &str, password: &str, confirmation: &str) -> Result<Credentials, &'static str> {
    if password != confirmation || password.chars().count() <= 3 {
        return Err(PASSWORD_RULE_MESSAGE);
    }
    Ok(Credentials { email: email.trim().to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterForm(writer: SessionWriter) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error_message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error_message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&credentials).await {
                Ok(grant) => {
                    log::info!("registered {}", credentials.email);
                    writer.sign_in(grant);
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    error_message.set(e.detail_or(REGISTER_FAILED_MESSAGE));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, writer);
    };

    view! {
        <div class="column">
            <form class="box" on:submit=on_submit>
                <h1 class="title has-text-centered">"Register"</h1>
                <div class="field">
                    <label class="label">"Email Address"</label>
                    <div class="control">
                        <input
                            type="email"
                            placeholder="Email..."
                            class="input"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label class="label">"Password"</label>
                    <div class="control">
                        <input
                            type="password"
                            placeholder="Password..."
                            class="input"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label class="label">"Confirm Password"</label>
                    <div class="control">
                        <input
                            type="password"
                            placeholder="Confirm Password..."
                            class="input"
                            required
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <ErrorMessage message=error_message/>
                <br/>
                <button class="button is-primary" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
        </div>
    }
}
