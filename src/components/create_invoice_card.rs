//! Create Invoice Card Component
//!
//! First tile of the dashboard grid.

use leptos::prelude::*;

use crate::dashboard::CREATE_LABEL;

#[component]
pub fn CreateInvoiceCard() -> impl IntoView {
    view! {
        <div class="card create-card">
            <span class="create-icon">"+"</span>
            <p class="create-label">{CREATE_LABEL}</p>
        </div>
    }
}
