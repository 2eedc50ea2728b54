//! Editing Session Store
//!
//! The invoice currently being created or viewed, shared between the
//! dashboard and the editor/preview pages.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{blank_invoice, Invoice, DEFAULT_TEMPLATE};

/// Title used when starting a new invoice
pub const CREATE_TITLE: &str = "Create Invoice";

/// Active invoice, template and title with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct EditingState {
    pub invoice_data: Invoice,
    pub selected_template: String,
    pub invoice_title: String,
}

impl Default for EditingState {
    fn default() -> Self {
        Self {
            invoice_data: blank_invoice(),
            selected_template: DEFAULT_TEMPLATE.to_string(),
            invoice_title: CREATE_TITLE.to_string(),
        }
    }
}

/// Session-scoped access to the active invoice.
///
/// No validation, last write wins. Getters are untracked snapshots for
/// consumers reading on mount; views wanting updates use the store fields.
pub trait EditingSession {
    fn set_invoice_data(&self, invoice: Invoice);
    fn set_selected_template(&self, template: String);
    fn set_invoice_title(&self, title: String);

    fn current_invoice(&self) -> Invoice;
    fn current_template(&self) -> String;
    fn current_title(&self) -> String;
}

/// Type alias for the store
pub type EditingStore = Store<EditingState>;

impl EditingSession for EditingStore {
    fn set_invoice_data(&self, invoice: Invoice) {
        *self.invoice_data().write() = invoice;
    }

    fn set_selected_template(&self, template: String) {
        *self.selected_template().write() = template;
    }

    fn set_invoice_title(&self, title: String) {
        *self.invoice_title().write() = title;
    }

    fn current_invoice(&self) -> Invoice {
        self.invoice_data().get_untracked()
    }

    fn current_template(&self) -> String {
        self.selected_template().get_untracked()
    }

    fn current_title(&self) -> String {
        self.invoice_title().get_untracked()
    }
}

/// Get the editing store from context
pub fn use_editing_store() -> EditingStore {
    expect_context::<EditingStore>()
}
