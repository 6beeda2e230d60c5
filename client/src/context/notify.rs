//! Toast notification triggers.
//!
//! `Notifier` is provided by the root layout; any routed page can raise a
//! success or error toast without knowing where the toaster is mounted. In the
//! browser each toast dismisses itself after its kind's duration.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::toast::{ToastId, ToastKind, ToastState};

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(ToastState::default()) }
    }

    /// Toast queue rendered by the toaster.
    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    pub fn notify_success(&self, message: impl Into<String>) -> Option<ToastId> {
        self.notify(ToastKind::Success, message)
    }

    pub fn notify_error(&self, message: impl Into<String>) -> Option<ToastId> {
        self.notify(ToastKind::Error, message)
    }

    /// Queue a toast; `None` if the queue has been disposed.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> Option<ToastId> {
        let message = message.into();
        let id = self.toasts.try_update(|t| t.push(kind, message))?;
        #[cfg(feature = "hydrate")]
        self.schedule_dismiss(id, kind.duration_ms());
        Some(id)
    }

    pub fn dismiss(&self, id: ToastId) {
        let _ = self.toasts.try_update(|t| t.dismiss(id));
    }

    #[cfg(feature = "hydrate")]
    fn schedule_dismiss(&self, id: ToastId, delay_ms: u64) {
        let notifier = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            notifier.dismiss(id);
        });
    }
}

/// Fetch the [`Notifier`] provided by the root layout.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
