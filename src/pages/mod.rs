//! Pages
//!
//! One component per route.

mod dashboard;
mod editor;
mod preview;

pub use dashboard::DashboardPage;
pub use editor::EditorPage;
pub use preview::PreviewPage;
