use leptos::*;
use leptos_router::use_navigate;
use tracing::{debug, info, warn};

use crate::actions::{delete_record, save_edit, SaveOutcome};
use crate::api::{ApiClient, LIST_FAILED};
use crate::models::{format_join_date, EmployeeRecord, Field};
use crate::notice::{Flash, FlashBanner};
use crate::pages::{paths, FieldInput};
use crate::roster::{EditPanel, ListingDisplay, LoadState, Roster};
use crate::validation::today;

/// Table of all employees with inline edit and delete.
#[component]
pub fn EmployeeDetails() -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let load = create_rw_signal(LoadState::Loading);
    let roster = create_rw_signal(Roster::default());
    let editing = create_rw_signal(EditPanel::default());
    let edit_draft = create_rw_signal(EmployeeRecord::default());
    let pending = create_rw_signal(false);
    let flash = Flash::new();
    let navigate = use_navigate();

    spawn_local(async move {
        match api.get_value().list_employees().await {
            Ok(records) => {
                let loaded = Roster::from(records);
                info!(count = loaded.len(), "employee list loaded");
                let _ = roster.try_set(loaded);
                let _ = load.try_set(LoadState::Loaded);
            }
            Err(err) => {
                warn!(%err, "employee list failed to load");
                let _ = load.try_set(LoadState::Failed(err.message_or(LIST_FAILED)));
            }
        }
    });

    let is_empty = create_memo(move |_| roster.with(Roster::is_empty));
    let display = create_memo(move |_| load.with(|l| ListingDisplay::resolve(l, is_empty.get())));

    let start_edit = move |employee_id: String| {
        let Some(record) = roster.with_untracked(|r| r.get(&employee_id).cloned()) else {
            return;
        };
        debug!(%employee_id, "editing employee");
        edit_draft.set(record.for_editing());
        editing.update(|p| p.open(employee_id));
    };

    let save = move || {
        if pending.get_untracked() {
            return;
        }
        let Some(employee_id) = editing.with_untracked(|p| p.employee_id().map(str::to_string)) else {
            return;
        };
        let record = edit_draft.get_untracked();

        pending.set(true);
        spawn_local(async move {
            match save_edit(&api.get_value(), &employee_id, &record, today()).await {
                SaveOutcome::Saved(saved) => {
                    let _ = roster.try_update(|r| r.replace(&saved));
                    let _ = editing.try_update(|p| p.close_if_showing(&employee_id));
                }
                SaveOutcome::Rejected(err) => flash.error(err.to_string()),
                SaveOutcome::Failed(message) => flash.error(message),
            }
            let _ = pending.try_set(false);
        });
    };

    let delete = move |employee_id: String| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        spawn_local(async move {
            match delete_record(&api.get_value(), &employee_id).await {
                Ok(()) => {
                    let _ = roster.try_update(|r| r.remove(&employee_id));
                    let _ = editing.try_update(|p| p.close_if_showing(&employee_id));
                }
                Err(message) => flash.error(message),
            }
            let _ = pending.try_set(false);
        });
    };

    let row = move |record: EmployeeRecord| {
        let edit_id = record.employee_id.clone();
        let delete_id = record.employee_id.clone();
        view! {
            <tr>
                <td>{record.name}</td>
                <td>{record.employee_id}</td>
                <td>{record.email}</td>
                <td>{record.phone}</td>
                <td>{record.department}</td>
                <td>{format_join_date(&record.date_of_joining)}</td>
                <td>{record.role}</td>
                <td>
                    <button on:click=move |_| start_edit(edit_id.clone())>"Edit"</button>
                    <button
                        on:click=move |_| delete(delete_id.clone())
                        disabled=move || pending.get()
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    let table = move || {
        view! {
            <table class="employee-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Employee ID"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Department"</th>
                        <th>"Date of Joining"</th>
                        <th>"Role"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    // Keyed on the whole record so an edited row is redrawn.
                    <For
                        each=move || roster.with(|r| r.records().to_vec())
                        key=|record| record.clone()
                        children=row
                    />
                </tbody>
            </table>
        }
    };

    let edit_panel = move || {
        editing.with(|p| p.employee_id().map(str::to_string)).map(|employee_id| {
            view! {
                <div class="edit-modal">
                    <h3>"Edit Employee"</h3>
                    <p class="read-only">"Employee ID: "{employee_id}</p>
                    {Field::EDITABLE
                        .into_iter()
                        .map(|field| view! { <FieldInput field=field draft=edit_draft/> })
                        .collect_view()}
                    <button on:click=move |_| save() disabled=move || pending.get()>
                        "Save"
                    </button>
                    <button on:click=move |_| editing.update(EditPanel::close)>"Cancel"</button>
                </div>
            }
        })
    };

    view! {
        <div class="employee-details-container">
            <h2>"Employee Details"</h2>
            <FlashBanner flash=flash/>
            {move || match display.get() {
                ListingDisplay::Loading => view! { <p>"Loading..."</p> }.into_view(),
                ListingDisplay::Failed(message) => view! { <p class="error">{message}</p> }.into_view(),
                ListingDisplay::Empty => view! { <p>"No employees found."</p> }.into_view(),
                ListingDisplay::Table => table().into_view(),
            }}
            {edit_panel}
            <button on:click=move |_| navigate(paths::CREATE, Default::default())>"Add employee"</button>
        </div>
    }
}
