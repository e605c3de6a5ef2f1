use leptos::*;
use leptos_router::use_navigate;

use crate::actions::{submit_new, SubmitOutcome};
use crate::api::ApiClient;
use crate::models::{EmployeeRecord, Field};
use crate::notice::{Flash, FlashBanner};
use crate::pages::{paths, FieldInput};
use crate::validation::today;

/// Form for adding a single employee.
#[component]
pub fn AddEmployee() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let draft = create_rw_signal(EmployeeRecord::default());
    let pending = create_rw_signal(false);
    let flash = Flash::new();
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let record = draft.get_untracked();
        pending.set(true);
        spawn_local(async move {
            let outcome = submit_new(&api.get_value(), &record, today()).await;
            flash.show(outcome.notice());
            if let SubmitOutcome::Created { reset, .. } = outcome {
                let _ = draft.try_set(reset);
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="form-container">
            <h2>"Add Employee"</h2>
            <form on:submit=on_submit>
                {Field::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput field=field draft=draft/> })
                    .collect_view()}
                <FlashBanner flash=flash/>
                <button type="submit" disabled=move || pending.get()>
                    "Submit"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        draft.set(EmployeeRecord::default());
                        flash.dismiss();
                    }
                >
                    "Reset"
                </button>
                <button type="button" on:click=move |_| navigate(paths::LIST, Default::default())>
                    "Details"
                </button>
            </form>
        </div>
    }
}
