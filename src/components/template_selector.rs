//! Template Selector Component
//!
//! Buttons for picking the invoice template, bound to the editing store.

use leptos::prelude::*;

use crate::models::TEMPLATES;
use crate::store::{use_editing_store, EditingSession, EditingStateStoreFields};

#[component]
pub fn TemplateSelector() -> impl IntoView {
    let store = use_editing_store();

    view! {
        <div class="template-selector">
            {TEMPLATES.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || store.selected_template().get() == val;
                view! {
                    <button
                        class=move || if is_selected() { "template-btn active" } else { "template-btn" }
                        on:click=move |_| store.set_selected_template(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
