//! Toast rendering for the current `UiState` notice.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dismiss = move |_| ui.update(|u| u.notice = None);

    move || {
        ui.get().notice.map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast toast--success",
                NoticeKind::Error => "toast toast--error",
            };
            view! {
                <div class=class role="status">
                    <div class="toast__body">
                        <strong class="toast__title">{notice.title}</strong>
                        <p class="toast__description">{notice.description}</p>
                    </div>
                    <button class="toast__close" on:click=dismiss title="Dismiss">
                        "×"
                    </button>
                </div>
            }
        })
    }
}
