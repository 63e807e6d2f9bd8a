//! Dark/light theme toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single owner of the theme concern: it resolves the initial theme once
//! the app hydrates, and every click flips the `<html>` class and the stored
//! preference together through `util::theme`.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Effects only run in the browser, so SSR keeps rendering the default.
    Effect::new(move || {
        let initial = theme::read_preference();
        theme::apply(initial);
        ui.update(|u| u.theme = initial);
    });

    let on_click = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            id="modeToggle"
            class="btn theme-toggle"
            type="button"
            on:click=on_click
            title=move || ui.get().toggle_title()
        >
            {move || ui.get().toggle_glyph()}
        </button>
    }
}
