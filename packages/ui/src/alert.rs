//! One modal notice at a time, shown over the whole app.
//!
//! Views report failures through [`Alerts`] instead of rendering their own error
//! banners. A failed call leaves the view as it was; the notice is the only
//! visible effect.

use api::ApiError;
use dioxus::prelude::*;

use crate::ModalOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Handle for raising notices, from [`use_alerts`].
#[derive(Clone, Copy)]
pub struct Alerts {
    current: Signal<Option<Notice>>,
}

impl Alerts {
    fn show(&self, kind: NoticeKind, title: &str, message: &str) {
        let mut current = self.current;
        current.set(Some(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }));
    }

    pub fn success(&self, title: &str, message: &str) {
        self.show(NoticeKind::Success, title, message);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.show(NoticeKind::Info, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(NoticeKind::Error, title, message);
    }

    /// Log a failed call and show the server's message, or `fallback`.
    pub fn api_error(&self, operation: &str, err: &ApiError, fallback: &str) {
        tracing::error!("{} failed: {}", operation, err);
        self.error("Error", &err.user_message(fallback));
    }

    pub fn dismiss(&self) {
        let mut current = self.current;
        current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.read().clone()
    }
}

pub fn use_alerts() -> Alerts {
    use_context::<Alerts>()
}

/// Provides [`Alerts`] and renders the active notice above `children`.
#[component]
pub fn AlertHost(children: Element) -> Element {
    let current = use_signal(|| Option::<Notice>::None);
    let alerts = use_context_provider(|| Alerts { current });

    rsx! {
        {children}
        if let Some(notice) = alerts.current() {
            ModalOverlay {
                title: notice.title.clone(),
                class: match notice.kind {
                    NoticeKind::Success => "notice-success",
                    NoticeKind::Info => "notice-info",
                    NoticeKind::Error => "notice-error",
                },
                on_close: move |_| alerts.dismiss(),
                p { class: "modal-message", "{notice.message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| alerts.dismiss(),
                        "OK"
                    }
                }
            }
        }
    }
}
