//! Create/update dialog for a single lead.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `LeadsTable`. `id == None` opens in create mode; `Some(id)`
//! prefills from `GET /api/leads/{id}` and saves with `PUT`. Save and cancel
//! both end in `handle_modal`, which is where the table invalidates its list.
//! Request failures go to the table's error line via `set_error_message`;
//! local validation failures stay inside the dialog.
//!
//! Responses can land after the dialog has been closed or reopened for a
//! different lead. Each request carries a `ModalEpoch` ticket and is dropped
//! on arrival unless the dialog is still in the state that issued it.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::state::lead_form::{LeadField, LeadForm, ModalEpoch, ModalMode};

#[component]
pub fn LeadModal(
    #[prop(into)] active: Signal<bool>,
    handle_modal: Callback<()>,
    #[prop(into)] token: Signal<Option<String>>,
    #[prop(into)] id: Signal<Option<i64>>,
    set_error_message: Callback<String>,
) -> impl IntoView {
    let form = RwSignal::new(LeadForm::default());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let epoch = StoredValue::new(ModalEpoch::default());
    let mode = move || ModalMode::from_id(id.get());

    // Prefill when opened for an existing lead.
    Effect::new(move || {
        let is_active = active.get();
        let target = id.get();
        epoch.update_value(ModalEpoch::advance);
        if !is_active {
            return;
        }
        let ModalMode::Update(lead_id) = ModalMode::from_id(target) else {
            return;
        };
        let Some(token) = token.get_untracked() else {
            return;
        };
        let ticket = epoch.with_value(ModalEpoch::ticket);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_lead(&token, lead_id).await;
            if !epoch.with_value(|e| e.is_current(ticket)) {
                log::debug!("dropping stale prefill for lead {lead_id}");
                return;
            }
            match result {
                Ok(lead) => form.set(LeadForm::from_lead(&lead)),
                Err(e) => {
                    log::warn!("GET lead {lead_id} failed: {e}");
                    set_error_message.run(crate::state::lead_form::PREFILL_FAILED_MESSAGE.to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, lead_id, ticket, set_error_message);
    });

    // A save in flight owns the dialog until it resolves.
    let on_cancel = move |_| {
        if busy.get_untracked() {
            return;
        }
        epoch.update_value(ModalEpoch::advance);
        form.update(LeadForm::reset);
        form_error.set(String::new());
        handle_modal.run(());
    };

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(LeadForm::validate) {
            Ok(draft) => draft,
            Err(msg) => {
                form_error.set(msg.to_owned());
                return;
            }
        };
        let Some(token) = token.get_untracked() else {
            return;
        };
        let mode = ModalMode::from_id(id.get_untracked());
        let ticket = epoch.with_value(ModalEpoch::ticket);
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match mode {
                ModalMode::Create => crate::net::api::create_lead(&token, &draft).await,
                ModalMode::Update(lead_id) => crate::net::api::update_lead(&token, lead_id, &draft).await,
            };
            busy.set(false);
            if !epoch.with_value(|e| e.is_current(ticket)) {
                log::debug!("dropping stale save result");
                return;
            }
            match result {
                Ok(()) => {
                    epoch.update_value(ModalEpoch::advance);
                    form.update(LeadForm::reset);
                    handle_modal.run(());
                }
                Err(e) => {
                    log::warn!("saving lead failed: {e}");
                    set_error_message.run(mode.failure_message().to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, draft, mode, ticket);
    };

    let fields = LeadField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="field">
                    <label class="label">{field.label()}</label>
                    <div class="control">
                        <input
                            type=field.input_type()
                            placeholder=format!("Enter {}", field.label().to_lowercase())
                            class="input"
                            prop:value=move || form.with(|f| f.field(field).to_owned())
                            on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                        />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=move || if active.get() { "modal is-active" } else { "modal" }>
            <div class="modal-background" on:click=on_cancel></div>
            <div class="modal-card">
                <header class="modal-card-head has-background-primary-light">
                    <h1 class="modal-card-title">{move || mode().title()}</h1>
                </header>
                <section class="modal-card-body">
                    <form on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>{fields}</form>
                    <ErrorMessage message=form_error/>
                </section>
                <footer class="modal-card-foot has-background-primary-light">
                    <button class="button is-primary mr-2" on:click=on_save disabled=move || busy.get()>
                        {move || mode().submit_label()}
                    </button>
                    <button class="button" on:click=on_cancel disabled=move || busy.get()>
                        "Cancel"
                    </button>
                </footer>
            </div>
        </div>
    }
}
