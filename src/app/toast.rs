#[cfg(feature = "hydrate")]
use std::time::Duration;

use leptos::*;

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.0.update(|queue| id = queue.push(kind, message));

        // timers only exist in the browser
        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|queue| queue.dismiss(id));
    }

    /// Toasts currently on screen, oldest first.
    pub fn items(&self) -> Vec<Toast> {
        self.0.with(|queue| queue.items().to_vec())
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(create_rw_signal(ToastQueue::default()));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = provide_toasts();

    view! {
        {children()}
        <div class="toasts" role="status">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;
