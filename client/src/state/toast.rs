//! Toast notification queue and the login flow's notification sink.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastNotifier` is handed to the login controller; the `Toaster` component
//! renders whatever is in the queue. Each toast removes itself after its
//! configured duration in browser builds.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use storefront::{Notifier, ToastOptions};

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub options: ToastOptions,
}

impl Toast {
    /// Icon shown before the message: the configured one or a kind default.
    #[must_use]
    pub fn icon(&self) -> &str {
        match (&self.options.icon, self.kind) {
            (Some(icon), _) => icon.as_str(),
            (None, ToastKind::Success) => "✔",
            (None, ToastKind::Error) => "✖",
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: &str, options: ToastOptions) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.to_owned(), options });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// [`Notifier`] that pushes into the toast context.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    queue: RwSignal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(queue: RwSignal<ToastQueue>) -> Self {
        Self { queue }
    }

    fn show(&self, kind: ToastKind, message: &str, options: ToastOptions) {
        let duration = options.duration;
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message, options));
        schedule_dismiss(self.queue, id, duration);
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str, options: &ToastOptions) {
        self.show(ToastKind::Success, message, options.clone());
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message, ToastOptions::default());
    }
}

fn schedule_dismiss(queue: RwSignal<ToastQueue>, id: u64, duration: std::time::Duration) {
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || {
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (queue, id, duration);
    }
}
