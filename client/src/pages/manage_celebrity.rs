//! Admin page for a single celebrity record.

#[cfg(test)]
#[path = "manage_celebrity_test.rs"]
mod manage_celebrity_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::delete_celebrity_button::DeleteCelebrityButton;

/// Identifiers are interpolated into the delete path, so only path-safe
/// characters are accepted.
fn is_valid_celebrity_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[component]
pub fn ManageCelebrityPage() -> impl IntoView {
    let params = use_params_map();
    let celebrity_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <main class="manage-page">
            {move || {
                let id = celebrity_id();
                if is_valid_celebrity_id(&id) {
                    view! {
                        <section class="manage-card">
                            <h1>"Celebrity " {id.clone()}</h1>
                            <DeleteCelebrityButton id=id/>
                        </section>
                    }
                        .into_any()
                } else {
                    view! { <p class="manage-page__error">"Unknown celebrity."</p> }.into_any()
                }
            }}
        </main>
    }
}
