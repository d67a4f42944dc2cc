//! Root application component and HTML shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the theme. On the client it resolves the stored (or system)
//! preference once after hydration, then commits that value and every toggle:
//! persisted first, `<html>` marker second. Server rendering always produces
//! the light theme; an inline script in the shell's `<head>` sets the marker
//! before first paint.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{POSTS, PROFILE, PROJECTS};
use crate::pages::home::HomePage;
use crate::state::theme::Theme;
use crate::util::dark_mode::DocumentRoot;
use crate::util::preference::{PreferenceStore, theme_boot_script};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=theme_boot_script()></script>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let prefs = PreferenceStore::browser();
    let theme = RwSignal::new(Theme::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let initial = prefs.load_theme();
        log::info!("initial theme: {}", initial.as_str());
        prefs.commit_theme(&mut DocumentRoot, initial);
        theme.set(initial);
    });

    let on_toggle = Callback::new(move |()| {
        let next = theme.get_untracked().toggled();
        prefs.commit_theme(&mut DocumentRoot, next);
        theme.set(next);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=PROFILE.name/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! {
                            <HomePage
                                profile=&PROFILE
                                projects=PROJECTS
                                posts=POSTS
                                theme=theme
                                on_toggle=on_toggle
                            />
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
