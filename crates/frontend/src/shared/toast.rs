//! Toast notifications.
//!
//! A `ToastService` lives in context; sections push messages into it and the
//! single `Toaster` mounted at the app root renders them. Each toast removes
//! itself after `TOAST_LIFETIME_MS`.

use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    pub fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        log::debug!("toast {:?}: {}", kind, message);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let svc = *self;
        Timeout::new(TOAST_LIFETIME_MS, move || svc.dismiss(id)).forget();
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the toast service.
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found. Provide it in the app root.")
}

/// Renders active toasts at the top center of the viewport.
///
/// Must be mounted exactly once.
#[component]
pub fn Toaster() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            {icon(toast.kind.icon_name())}
                            <span class="toast__message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
