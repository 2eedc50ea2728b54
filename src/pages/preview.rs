//! Preview Page
//!
//! Shows the invoice picked on the dashboard with its template.

use leptos::prelude::*;

use crate::components::InvoiceDetails;
use crate::models::template_label;
use crate::navigation::{use_navigator, AppRoute, Navigator};
use crate::store::{use_editing_store, EditingSession};

#[component]
pub fn PreviewPage() -> impl IntoView {
    let store = use_editing_store();
    let navigator = use_navigator();

    // Snapshot on mount
    let invoice = store.current_invoice();
    let title = store.current_title();
    let template = store.current_template();
    let thumbnail = invoice.thumbnail().map(|url| {
        view! { <img class="preview-thumbnail" src=url.to_string() alt="Invoice Thumbnail" /> }
    });

    let to_editor = {
        let navigator = navigator.clone();
        move |_: web_sys::MouseEvent| navigator.navigate(AppRoute::Editor)
    };
    let to_dashboard = move |_: web_sys::MouseEvent| navigator.navigate(AppRoute::Dashboard);

    view! {
        <div class=format!("preview-page {}", template)>
            <header class="page-header">
                <h2>{title}</h2>
                <span class="template-badge">{template_label(&template).to_string()}</span>
                <div class="page-actions">
                    <button class="secondary-btn" on:click=to_dashboard>"Back"</button>
                    <button class="primary-btn" on:click=to_editor>"Edit"</button>
                </div>
            </header>
            {thumbnail}
            <InvoiceDetails invoice=invoice />
        </div>
    }
}
