//! Root application component, session provider, and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, leads_table::LeadsTable, login_form::LoginForm, register_form::RegisterForm};
use crate::state::session::{SessionWriter, provide_session, use_session};

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the lifetime of the app and hands its write handle
/// to the root view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let writer = provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/lead-manager.css"/>
        <Link rel="stylesheet" href=BULMA_CSS/>
        <Title text="Lead Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <RootView writer/> }/>
            </Routes>
        </Router>
    }
}

/// Header plus either the auth forms or the leads table, depending on
/// whether the session holds a token.
///
/// On mount it calls `GET /api` once and shows the returned `message` in the
/// header whenever the body carries one, whatever the status.
#[component]
fn RootView(writer: SessionWriter) -> impl IntoView {
    let session = use_session();
    let banner = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let message = crate::net::api::fetch_api_message().await;
        if message.is_none() {
            log::warn!("GET /api returned no message");
        }
        banner.set(message);
    });

    view! {
        <Header title=banner writer/>
        <div class="columns">
            <div class="column"></div>
            <div class="column m-5 is-two-thirds">
                <Show
                    when=move || session.is_authenticated()
                    fallback=move || {
                        view! {
                            <div class="columns">
                                <RegisterForm writer/>
                                <LoginForm writer/>
                            </div>
                        }
                    }
                >
                    <LeadsTable/>
                </Show>
            </div>
            <div class="column"></div>
        </div>
    }
}
