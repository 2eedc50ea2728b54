//! Remote API Clients
//!
//! Invoice service and auth token provider. Both sit behind traits so the
//! dashboard can be driven without a browser.

mod auth;
mod invoices;

pub use auth::*;
pub use invoices::*;

/// Failure while loading the invoice collection
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no active session")]
    Unauthenticated,
    #[error("auth provider failed: {0}")]
    Auth(String),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
