//! Admin control that deletes one celebrity after confirmation.
//!
//! The anti-forgery token is re-read from the page's meta tag on every click
//! and attached as `X-CSRFToken`; without a token nothing is sent.

use leptos::prelude::*;

use crate::state::deletion::DeletionStatus;

#[component]
pub fn DeleteCelebrityButton(id: String) -> impl IntoView {
    let status = RwSignal::new(DeletionStatus::default());

    let on_click = {
        let id = id.clone();
        move |_| {
            if status.get_untracked().is_settled() {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                use crate::net::api::{ApiError, delete_celebrity};
                use crate::state::deletion::confirm_prompt;
                use crate::util::csrf::read_meta_token;

                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message(&confirm_prompt(&id)).ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                let Some(token) = read_meta_token() else {
                    status.set(DeletionStatus::from_result(&Err(ApiError::MissingCsrfToken)));
                    return;
                };
                status.set(DeletionStatus::Deleting);

                let id = id.clone();
                leptos::task::spawn_local(async move {
                    let result = delete_celebrity(&id, &token).await;
                    if let Err(e) = &result {
                        leptos::logging::warn!("delete celebrity {id} failed: {e}");
                    }
                    status.set(DeletionStatus::from_result(&result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &id;
        }
    };

    view! {
        <div class="delete-action">
            <button
                class="btn btn--danger delete-action__button"
                type="button"
                on:click=on_click
                disabled=move || status.get().is_settled()
                title=format!("Delete celebrity {id}")
            >
                "Delete"
            </button>
            <Show when=move || status.get() != DeletionStatus::Idle>
                <p class="delete-action__message" role="status">{move || status.get().message()}</p>
            </Show>
        </div>
    }
}
