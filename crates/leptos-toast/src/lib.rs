//! Leptos Toast Notifications
//!
//! Fire-and-forget toasts for Leptos, dismissed automatically after a timeout.
//! Wrap the app in `<ToastProvider>` and grab the handle with `use_toasts()`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen (ms)
pub const DEFAULT_TIMEOUT_MS: u32 = 4000;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// A single toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered queue of visible toasts
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl Toasts {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout_ms,
        }
    }

    /// Show a toast; it is removed again once the timeout fires
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let mut id = 0;
        let message = message.into();
        self.queue.update(|queue| id = queue.push(level, message));

        let queue = self.queue;
        Timeout::new(self.timeout_ms, move || {
            // The provider may already be gone
            let _ = queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    /// Snapshot of the visible toasts (tracked)
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }
}

/// Get the toast handle from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Provides `Toasts` to its children and renders the toast stack
#[component]
pub fn ToastProvider(
    #[prop(default = DEFAULT_TIMEOUT_MS)] timeout_ms: u32,
    children: Children,
) -> impl IntoView {
    let toasts = Toasts::new(timeout_ms);
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.level.class()
                            role="alert"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
