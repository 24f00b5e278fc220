//! Delayed navigation and timed messages.
//!
//! Both run as tasks spawned in the calling component's scope, so unmounting the
//! page cancels them. Scheduling again cancels the previous task first.

use std::time::Duration;

use dioxus::prelude::*;

use crate::use_services;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Handle for one pending redirect. See [`use_delayed_redirect`].
#[derive(Clone, Copy)]
pub struct DelayedRedirect {
    task: Signal<Option<Task>>,
    nav: Navigator,
}

impl DelayedRedirect {
    /// Navigate to `route` after `delay`, replacing any redirect already pending.
    pub fn schedule<R: Routable>(&mut self, route: R, delay: Duration) {
        self.schedule_path(route.to_string(), delay);
    }

    pub fn schedule_path(&mut self, path: impl Into<String>, delay: Duration) {
        self.cancel();
        let path = path.into();
        let nav = self.nav;
        let task = spawn(async move {
            sleep(delay).await;
            tracing::debug!("Redirecting to {}", path);
            nav.push(path);
        });
        self.task.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task.read().is_some()
    }
}

pub fn use_delayed_redirect() -> DelayedRedirect {
    let task = use_signal(|| None);
    let nav = use_navigator();
    DelayedRedirect { task, nav }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

/// A success or error line that hides itself after the configured timeout.
#[derive(Clone, Copy)]
pub struct Flash {
    message: Signal<Option<FlashMessage>>,
    task: Signal<Option<Task>>,
    timeout: Duration,
}

impl Flash {
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(FlashKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(FlashKind::Error, text.into());
    }

    fn show(&mut self, kind: FlashKind, text: String) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.message.set(Some(FlashMessage { kind, text }));

        let mut message = self.message;
        let timeout = self.timeout;
        let task = spawn(async move {
            sleep(timeout).await;
            message.set(None);
        });
        self.task.set(Some(task));
    }

    pub fn clear(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.message.set(None);
    }

    pub fn current(&self) -> Option<FlashMessage> {
        self.message.read().clone()
    }
}

pub fn use_flash() -> Flash {
    let timeout = use_services().config.ui.flash_timeout();
    Flash {
        message: use_signal(|| None),
        task: use_signal(|| None),
        timeout,
    }
}

/// Renders a [`Flash`] if it holds a message.
#[component]
pub fn FlashBanner(message: Option<FlashMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    let class = match message.kind {
        FlashKind::Success => "flash success",
        FlashKind::Error => "flash error",
    };
    rsx! {
        div { class, "{message.text}" }
    }
}
