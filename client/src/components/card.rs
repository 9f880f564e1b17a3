//! Bordered content container.

use leptos::prelude::*;

/// Card wrapper. A non-empty `modifier` adds a `card--{modifier}` class.
#[component]
pub fn Card(#[prop(optional)] modifier: &'static str, children: Children) -> impl IntoView {
    let class = if modifier.is_empty() { "card".to_owned() } else { format!("card card--{modifier}") };

    view! { <div class=class>{children()}</div> }
}
