use leptos::*;

use crate::models::{Control, Department, EmployeeRecord, Field};

/// One labelled control bound to a single field of `draft`.
#[component]
pub fn FieldInput(field: Field, draft: RwSignal<EmployeeRecord>) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        draft.update(|r| field.assign(r, value));
    };

    let control = match field.control() {
        Control::DepartmentSelect => view! {
            <select name=field.name() on:change=on_change required=true>
                <option value="" prop:selected=move || draft.with(|r| field.value(r).is_empty())>
                    "Select Department"
                </option>
                {Department::ALL
                    .into_iter()
                    .map(|d| {
                        view! {
                            <option
                                value=d.as_str()
                                prop:selected=move || draft.with(|r| field.value(r) == d.as_str())
                            >
                                {d.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
        Control::Input(kind) => view! {
            <input
                type=kind
                name=field.name()
                maxlength=field.max_len().map(|n| n.to_string())
                prop:value=move || draft.with(|r| field.value(r).to_string())
                on:input=on_change
                required=true
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-field">
            <label>{field.label()}":"</label>
            {control}
        </div>
    }
}
