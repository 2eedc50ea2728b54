//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::api::{ClerkTokenProvider, HttpInvoiceService, InvoiceService, TokenProvider};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Invoice service base address (tracked by the dashboard fetch)
    pub base_url: ReadSignal<String>,
}

impl AppContext {
    pub fn new(base_url: ReadSignal<String>) -> Self {
        Self { base_url }
    }
}

/// Remote collaborators used by the dashboard
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<dyn TokenProvider>,
    pub invoices: Rc<dyn InvoiceService>,
}

impl Services {
    /// Clerk auth + HTTP invoice service
    pub fn browser() -> Self {
        Self {
            auth: Rc::new(ClerkTokenProvider),
            invoices: Rc::new(HttpInvoiceService::new()),
        }
    }
}

/// `Services` are `!Send`, so they live in local storage
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

pub fn provide_services(services: Services) {
    provide_context::<ServicesHandle>(StoredValue::new_local(services));
}

/// Get the services from context
pub fn use_services() -> Services {
    expect_context::<ServicesHandle>().get_value()
}
