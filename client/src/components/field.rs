//! Labeled inputs bound to the lead form.
//!
//! Each field reads its value from, and writes every keystroke back to, the
//! page's `RwSignal<LeadFormState>` through `FormField`.

use leptos::prelude::*;

use crate::state::lead_form::{FormField, LeadFormState};

fn input_id(field: FormField) -> String {
    format!("lead-{}", field.key())
}

/// Single-line input.
#[component]
pub fn TextField(
    form: RwSignal<LeadFormState>,
    field: FormField,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] autocomplete: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = input_id(field);
    let label_for = id.clone();

    view! {
        <label class="field" for=label_for>
            <span class="field__label">{label} {required.then_some(" *")}</span>
            <input
                id=id
                class="field__input"
                type=input_type
                name=field.key()
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || form.with(|s| s.values.get(field).to_owned())
                on:input=move |ev| form.update(|s| s.values.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField(
    form: RwSignal<LeadFormState>,
    field: FormField,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let id = input_id(field);
    let label_for = id.clone();

    view! {
        <label class="field" for=label_for>
            <span class="field__label">{label}</span>
            <textarea
                id=id
                class="field__input field__input--multiline"
                name=field.key()
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || form.with(|s| s.values.get(field).to_owned())
                on:input=move |ev| form.update(|s| s.values.set(field, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

/// Dropdown over fixed `(value, label)` options.
#[component]
pub fn SelectField(
    form: RwSignal<LeadFormState>,
    field: FormField,
    #[prop(into)] label: String,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let id = input_id(field);
    let label_for = id.clone();

    view! {
        <label class="field" for=label_for>
            <span class="field__label">{label}</span>
            <select
                id=id
                class="field__input"
                name=field.key()
                prop:value=move || form.with(|s| s.values.get(field).to_owned())
                on:change=move |ev| form.update(|s| s.values.set(field, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Honeypot input: off-screen, out of the tab order, never autofilled.
/// People leave it empty; form-filling bots usually do not.
#[component]
pub fn HoneypotField(form: RwSignal<LeadFormState>) -> impl IntoView {
    let field = FormField::Website;

    view! {
        <div class="field field--honeypot" aria-hidden="true">
            <label for=input_id(field)>"Website"</label>
            <input
                id=input_id(field)
                type="text"
                name=field.key()
                tabindex="-1"
                autocomplete="off"
                prop:value=move || form.with(|s| s.values.get(field).to_owned())
                on:input=move |ev| form.update(|s| s.values.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
