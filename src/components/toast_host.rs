//! Toast Host
//!
//! Bottom-right stack rendering the toast queue.

use leptos::prelude::*;

use crate::toast::{Toast, ToastQueue};

#[component]
pub fn ToastHost(queue: ToastQueue) -> impl IntoView {
    let toasts = queue.signal();
    let queue = StoredValue::new_local(queue);

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div role="alert" class=t.kind.css_class()>
                            <span class="toast-message">{t.message}</span>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| queue.with_value(|q| q.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
