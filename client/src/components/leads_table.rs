//! Authenticated leads view: list, create, update, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! One effect owns list fetching. It fires whenever `LeadsTableState` is
//! stale and no fetch is in flight, so mount, delete, and modal close all
//! funnel into the same single request path.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::components::lead_modal::LeadModal;
use crate::state::leads::{LeadRow, LeadsTableState};
use crate::state::session::use_session;

#[component]
pub fn LeadsTable() -> impl IntoView {
    let session = use_session();
    let table = RwSignal::new(LeadsTableState::default());

    // Fetch-on-stale.
    Effect::new(move || {
        if !table.with(LeadsTableState::needs_fetch) {
            return;
        }
        let Some(token) = session.token_untracked() else {
            return;
        };
        let mut start = false;
        table.update(|t| start = t.begin_fetch());
        if !start {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_leads(&token).await {
                Ok(leads) => {
                    log::debug!("fetched {} leads", leads.len());
                    table.update(|t| t.fetch_succeeded(leads));
                }
                Err(e) => {
                    log::warn!("GET /api/leads failed: {e}");
                    table.update(|t| t.fetch_failed(crate::state::leads::LIST_FAILED_MESSAGE));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_delete = move |lead_id: i64| {
        let Some(token) = session.token_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_lead(&token, lead_id).await {
                Ok(()) => table.update(LeadsTableState::delete_succeeded),
                Err(e) => {
                    log::warn!("DELETE lead {lead_id} failed: {e}");
                    table.update(LeadsTableState::delete_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, lead_id);
    };

    let handle_modal = Callback::new(move |()| table.update(LeadsTableState::close_modal));
    let set_error_message = Callback::new(move |message: String| table.update(|t| t.set_error(message)));
    let modal_active = Signal::derive(move || table.with(|t| t.modal().active));
    let modal_id = Signal::derive(move || table.with(|t| t.modal().id));
    let token = Signal::derive(move || session.token());
    let error = Signal::derive(move || table.with(|t| t.error().to_owned()));

    view! {
        <LeadModal
            active=modal_active
            handle_modal=handle_modal
            token=token
            id=modal_id
            set_error_message=set_error_message
        />
        <button class="button is-fullwidth mb-5 is-primary" on:click=move |_| table.update(LeadsTableState::open_create)>
            "Create Lead"
        </button>
        <ErrorMessage message=error/>
        <Show
            when=move || table.with(LeadsTableState::loaded)
            fallback=|| view! { <p>"Loading"</p> }
        >
            <table class="table is-fullwidth">
                <thead>
                    <tr>
                        <th>"First Name"</th>
                        <th>"Last Name"</th>
                        <th>"Company"</th>
                        <th>"Email"</th>
                        <th>"Note"</th>
                        <th>"Last Updated"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    // Identity is the lead id, unique per row. The rest of the row is in
                    // the key only so an edited lead re-renders after the refetch.
                    <For
                        each=move || table.with(LeadsTableState::rows)
                        key=|row: &LeadRow| row.clone()
                        children=move |row: LeadRow| {
                            let id = row.id;
                            view! {
                                <tr>
                                    <td>{row.first_name}</td>
                                    <td>{row.last_name}</td>
                                    <td>{row.company}</td>
                                    <td>{row.email}</td>
                                    <td>{row.note}</td>
                                    <td>{row.last_updated}</td>
                                    <td>
                                        <button
                                            class="button mr-2 is-info is-light"
                                            on:click=move |_| table.update(|t| t.open_update(id))
                                        >
                                            "Update"
                                        </button>
                                        <button class="button mr-2 is-danger is-light" on:click=move |_| on_delete(id)>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
