//! Sign-in form for existing accounts.
//!
//! Same submit contract as registration: the token from `POST /api/token`
//! goes into the session, and a failure shows the backend detail inline.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::state::session::SessionWriter;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

pub(crate) fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginForm(writer: SessionWriter) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(msg) => {
                error_message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error_message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(grant) => writer.sign_in(grant),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error_message.set(e.detail_or(LOGIN_FAILED_MESSAGE));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, writer);
    };

    view! {
        <div class="column">
            <form class="box" on:submit=on_submit>
                <h1 class="title has-text-centered">"Login"</h1>
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
                <ErrorMessage message=error_message/>
                <br/>
                <button class="button is-primary" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
        </div>
    }
}
