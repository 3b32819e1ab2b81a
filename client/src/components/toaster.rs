//! Toast stack rendered above every route.

use leptos::prelude::*;

use crate::state::toast::ToastQueue;

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() style=toast.options.css()>
                            <span class="toast__icon">{toast.icon().to_owned()}</span>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| queue.update(|q| q.dismiss(id))
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
