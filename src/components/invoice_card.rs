//! Invoice Card Component
//!
//! Summary tile for one saved invoice.

use leptos::prelude::*;

use crate::dashboard::InvoiceSummary;

/// Thumbnail (if any), title and last-updated line
#[component]
pub fn InvoiceCard(summary: InvoiceSummary) -> impl IntoView {
    let thumbnail = summary.thumbnail_url.map(|url| {
        view! { <img class="card-thumbnail" src=url alt="Invoice Thumbnail" /> }
    });

    view! {
        <div class="card invoice-card">
            {thumbnail}
            <div class="card-body">
                <h6 class="card-title">{summary.title}</h6>
                <small class="card-subtitle">{summary.subtitle}</small>
            </div>
        </div>
    }
}
