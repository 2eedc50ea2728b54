//! UI Components
//!
//! Reusable Leptos components.

mod create_invoice_card;
mod invoice_card;
mod invoice_details;
mod template_selector;

pub use create_invoice_card::CreateInvoiceCard;
pub use invoice_card::InvoiceCard;
pub use invoice_details::InvoiceDetails;
pub use template_selector::TemplateSelector;
