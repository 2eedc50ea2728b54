//! Invoice Dashboard App
//!
//! Root component: provides context and routes between pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use leptos_toast::ToastProvider;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::context::{provide_services, AppContext, Services};
use crate::pages::{DashboardPage, EditorPage, PreviewPage};
use crate::store::EditingState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let base_url = RwSignal::new(config.api_base_url).read_only();

    // Provide context to all children
    provide_context(AppContext::new(base_url));
    provide_context(Store::new(EditingState::default()));
    provide_services(Services::browser());

    view! {
        <ToastProvider>
            <Router>
                <main class="container">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/generate") view=EditorPage />
                        <Route path=path!("/preview") view=PreviewPage />
                    </Routes>
                </main>
            </Router>
        </ToastProvider>
    }
}
