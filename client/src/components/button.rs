//! Form submit button.

use leptos::prelude::*;

/// Submit button with disabled and loading states.
///
/// While `disabled` is true the button is muted and ignores clicks. While
/// `loading` is true the label is replaced by `loading_label`.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] loading_label: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="submit-button"
            class:submit-button--disabled=move || disabled.get()
            class:submit-button--loading=move || loading.get()
            disabled=move || disabled.get()
            aria-busy=move || if loading.get() { "true" } else { "false" }
        >
            {move || if loading.get() { loading_label.clone() } else { label.clone() }}
        </button>
    }
}
