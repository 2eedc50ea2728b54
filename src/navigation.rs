//! Navigation
//!
//! App routes and the `Navigator` seam over leptos_router.

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Pages of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    /// Invoice editor ("/generate")
    Editor,
    Preview,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/",
            AppRoute::Editor => "/generate",
            AppRoute::Preview => "/preview",
        }
    }
}

pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

/// Navigator wrapping the closure returned by `use_navigate()`
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: AppRoute) {
        log::debug!("navigate to {}", route.path());
        (self.0)(route.path(), NavigateOptions::default());
    }
}

/// Must be called inside `<Router>`
pub fn use_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator(use_navigate())
}
