//! Editor Page
//!
//! Landing page for "Create New". Reads the editing session on mount and
//! lets the user switch template before previewing.

use leptos::prelude::*;

use crate::components::{InvoiceDetails, TemplateSelector};
use crate::navigation::{use_navigator, AppRoute, Navigator};
use crate::store::{use_editing_store, EditingSession, EditingStateStoreFields};

#[component]
pub fn EditorPage() -> impl IntoView {
    let store = use_editing_store();
    let navigator = use_navigator();
    let invoice = store.current_invoice();

    let to_preview = {
        let navigator = navigator.clone();
        move |_: web_sys::MouseEvent| navigator.navigate(AppRoute::Preview)
    };
    let to_dashboard = move |_: web_sys::MouseEvent| navigator.navigate(AppRoute::Dashboard);

    view! {
        <div class="editor-page">
            <header class="page-header">
                <h2>{move || store.invoice_title().get()}</h2>
                <div class="page-actions">
                    <button class="secondary-btn" on:click=to_dashboard>"Back"</button>
                    <button class="primary-btn" on:click=to_preview>"Preview"</button>
                </div>
            </header>
            <TemplateSelector />
            <InvoiceDetails invoice=invoice />
        </div>
    }
}
