//! Invoice Details Component
//!
//! Read-only dump of the active invoice for the editor and preview pages.

use leptos::prelude::*;

use crate::format::format_date;
use crate::models::Invoice;

#[component]
pub fn InvoiceDetails(invoice: Invoice) -> impl IntoView {
    let last_updated = format_date(invoice.last_updated_at.as_ref());
    let line_items = invoice
        .extra
        .get("items")
        .and_then(|items| items.as_array())
        .map(Vec::len)
        .unwrap_or(0);
    let payload = serde_json::to_string_pretty(&invoice).unwrap_or_else(|e| {
        log::warn!("Could not render invoice payload: {}", e);
        String::new()
    });

    view! {
        <section class="invoice-details">
            <dl>
                <dt>"Last Updated"</dt>
                <dd>{last_updated}</dd>
                <dt>"Line items"</dt>
                <dd>{line_items}</dd>
            </dl>
            <pre class="invoice-payload">{payload}</pre>
        </section>
    }
}
