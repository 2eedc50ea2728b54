//! Dashboard Controller
//!
//! Loads the invoice collection, lays out the summary cards and hands the
//! chosen invoice to the editing session before navigating.
//! Kept free of view code so it can be driven from tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos_toast::Toasts;

use crate::api::{FetchError, InvoiceService, TokenProvider};
use crate::format::format_date;
use crate::models::{blank_invoice, Invoice, DEFAULT_TEMPLATE};
use crate::navigation::{AppRoute, Navigator};
use crate::store::{EditingSession, CREATE_TITLE};

pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong. Unable to load invoices";
pub const EMPTY_MESSAGE: &str = "No invoices found. Create one to get started!";
pub const LOADING_MESSAGE: &str = "Loading invoices...";
pub const CREATE_LABEL: &str = "Create New Invoice";
/// Session title for an opened invoice without one
pub const VIEW_TITLE_FALLBACK: &str = "View Invoice";

/// User-facing error sink, called once per failed load
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

impl Notifier for Toasts {
    fn notify_error(&self, message: &str) {
        self.error(message);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Collection not arrived yet
    Loading,
    Idle,
}

/// View state of the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub invoices: Vec<Invoice>,
    pub phase: LoadPhase,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            invoices: Vec::new(),
            phase: LoadPhase::Loading,
        }
    }
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// `None` (failed load) keeps the previous list
    pub fn finish_load(&mut self, outcome: Option<Vec<Invoice>>) {
        if let Some(invoices) = outcome {
            self.invoices = invoices;
        }
        self.phase = LoadPhase::Idle;
    }

    /// Cards in render order: "Create New" always first
    pub fn cards(&self) -> Vec<DashboardCard> {
        let mut cards = vec![DashboardCard::CreateNew];
        if self.invoices.is_empty() {
            cards.push(match self.phase {
                LoadPhase::Loading => DashboardCard::Loading,
                LoadPhase::Idle => DashboardCard::Empty,
            });
        } else {
            cards.extend(
                self.invoices
                    .iter()
                    .enumerate()
                    .map(|(index, invoice)| DashboardCard::Invoice(InvoiceSummary::new(index, invoice))),
            );
        }
        cards
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardCard {
    CreateNew,
    Invoice(InvoiceSummary),
    Loading,
    Empty,
}

/// What an invoice card shows
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceSummary {
    /// Position in the collection
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub thumbnail_url: Option<String>,
}

impl InvoiceSummary {
    pub fn new(index: usize, invoice: &Invoice) -> Self {
        Self {
            index,
            title: invoice.display_title().to_string(),
            subtitle: format!("Last Updated: {}", format_date(invoice.last_updated_at.as_ref())),
            thumbnail_url: invoice.thumbnail().map(str::to_string),
        }
    }
}

/// Seed the session with a blank invoice and open the editor
pub fn create_new<S, N>(session: &S, navigator: &N)
where
    S: EditingSession + ?Sized,
    N: Navigator + ?Sized,
{
    session.set_invoice_title(CREATE_TITLE.to_string());
    session.set_selected_template(DEFAULT_TEMPLATE.to_string());
    session.set_invoice_data(blank_invoice());
    navigator.navigate(AppRoute::Editor);
}

/// Seed the session with `invoice` and open the preview
pub fn view_invoice<S, N>(invoice: &Invoice, session: &S, navigator: &N)
where
    S: EditingSession + ?Sized,
    N: Navigator + ?Sized,
{
    session.set_invoice_data(invoice.clone());
    session.set_selected_template(invoice.template_or_default().to_string());
    session.set_invoice_title(invoice.title_or(VIEW_TITLE_FALLBACK).to_string());
    navigator.navigate(AppRoute::Preview);
}

/// Fresh token, then one read of the collection
pub async fn fetch_invoices(
    auth: &dyn TokenProvider,
    service: &dyn InvoiceService,
    base_url: &str,
) -> Result<Vec<Invoice>, FetchError> {
    let token = auth.get_token().await?;
    let response = service.list_invoices(base_url, &token).await?;
    Ok(response.into_invoices())
}

/// Fetch the collection. Failures are logged and notified, never returned.
pub async fn load_invoices<N>(
    auth: &dyn TokenProvider,
    service: &dyn InvoiceService,
    notifier: &N,
    base_url: &str,
) -> Option<Vec<Invoice>>
where
    N: Notifier + ?Sized,
{
    match fetch_invoices(auth, service, base_url).await {
        Ok(invoices) => {
            log::info!("Loaded {} invoices", invoices.len());
            Some(invoices)
        }
        Err(e) => {
            log::error!("Failed to load invoices: {}", e);
            notifier.notify_error(LOAD_ERROR_MESSAGE);
            None
        }
    }
}

/// Generation counter guarding async completions against unmount
#[derive(Clone, Debug, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadGeneration {
    /// Start a load; earlier tickets go stale
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Drop every outstanding ticket (view torn down)
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

/// Run one load for `ticket` and pass the outcome to `apply` only if the
/// ticket is still current. Returns whether `apply` ran.
pub async fn refresh<N, F>(
    generation: &LoadGeneration,
    ticket: LoadTicket,
    auth: &dyn TokenProvider,
    service: &dyn InvoiceService,
    notifier: &N,
    base_url: &str,
    apply: F,
) -> bool
where
    N: Notifier + ?Sized,
    F: FnOnce(Option<Vec<Invoice>>),
{
    let outcome = load_invoices(auth, service, notifier, base_url).await;
    if !generation.is_current(ticket) {
        log::debug!("Dropping stale invoice load");
        return false;
    }
    apply(outcome);
    true
}
