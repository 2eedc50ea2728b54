//! Dashboard Page
//!
//! Lists the user's invoices and starts the create/view flows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::use_toasts;

use crate::components::{CreateInvoiceCard, InvoiceCard};
use crate::context::{use_services, AppContext};
use crate::dashboard::{
    create_new, refresh, view_invoice, DashboardCard, DashboardState, LoadGeneration,
    EMPTY_MESSAGE, LOADING_MESSAGE,
};
use crate::navigation::use_navigator;
use crate::store::use_editing_store;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = use_editing_store();
    let toasts = use_toasts();
    let services = use_services();
    let navigator = use_navigator();

    let state = RwSignal::new(DashboardState::default());
    let generation = LoadGeneration::default();

    // Results landing after unmount are dropped
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    // Load invoices on mount and whenever the service address changes
    Effect::new(move |_| {
        let base_url = ctx.base_url.get();
        let ticket = generation.begin();
        let generation = generation.clone();
        let services = services.clone();
        state.update(|s| s.begin_load());

        spawn_local(async move {
            refresh(
                &generation,
                ticket,
                services.auth.as_ref(),
                services.invoices.as_ref(),
                &toasts,
                &base_url,
                |outcome| state.update(|s| s.finish_load(outcome)),
            )
            .await;
        });
    });

    let cards = move || {
        state.with(DashboardState::cards).into_iter().map(|card| match card {
            DashboardCard::CreateNew => {
                let navigator = navigator.clone();
                view! {
                    <div class="grid-cell" on:click=move |_| create_new(&session, &navigator)>
                        <CreateInvoiceCard />
                    </div>
                }.into_any()
            }
            DashboardCard::Invoice(summary) => {
                let navigator = navigator.clone();
                let index = summary.index;
                let open = move |_: web_sys::MouseEvent| {
                    if let Some(invoice) = state.with_untracked(|s| s.invoices.get(index).cloned()) {
                        view_invoice(&invoice, &session, &navigator);
                    }
                };
                view! {
                    <div class="grid-cell" on:click=open>
                        <InvoiceCard summary=summary />
                    </div>
                }.into_any()
            }
            DashboardCard::Loading => view! {
                <p class="grid-message loading">{LOADING_MESSAGE}</p>
            }.into_any(),
            DashboardCard::Empty => view! {
                <p class="grid-message empty">{EMPTY_MESSAGE}</p>
            }.into_any(),
        }).collect_view()
    };

    view! {
        <div class="dashboard">
            <div class="invoice-grid">
                {cards}
            </div>
        </div>
    }
}
