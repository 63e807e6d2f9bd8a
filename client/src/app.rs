//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::config::CSRF_META_NAME;
use crate::pages::{featured::FeaturedPage, manage_celebrity::ManageCelebrityPage};
use crate::state::ui::UiState;
use crate::util::csrf;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Emits the `csrf-token` meta tag when the incoming request carries the
/// backend's token cookie.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let csrf_token = csrf::token_for_render();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {csrf_token.map(|token| view! { <meta name=CSRF_META_NAME content=token/> })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/celebhub.css"/>
        <Title text="CelebHub"/>

        <header class="site-header">
            <a class="site-header__brand" href="/">"CelebHub"</a>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FeaturedPage/>
                <Route path=StaticSegment("featured") view=FeaturedPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("celebrity"), ParamSegment("id"))
                    view=ManageCelebrityPage
                />
            </Routes>
        </Router>
    }
}
