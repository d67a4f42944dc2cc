//! Sticky page header: name, section anchors, clock, location, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the only place the theme can be changed. It receives the
//! theme as a read-only signal and reports clicks through `on_toggle`; the
//! root component owns the state and its persistence.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::theme::Theme;

/// Seconds between header clock refreshes.
#[cfg(feature = "hydrate")]
const CLOCK_REFRESH_SECS: u64 = 30;

/// Icon shown on the toggle: the theme a click switches to.
pub fn toggle_icon(theme: Theme) -> IconKind {
    if theme.is_dark() { IconKind::Sun } else { IconKind::Moon }
}

/// Tooltip for the toggle button.
pub fn toggle_title(theme: Theme) -> &'static str {
    if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
}

/// Page header bar.
#[component]
pub fn SiteHeader(
    name: &'static str,
    location: &'static str,
    #[prop(into)] theme: Signal<Theme>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    // Filled in after hydration so server and client markup agree.
    let clock = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                clock.set(crate::util::clock::local_clock());
                gloo_timers::future::sleep(std::time::Duration::from_secs(CLOCK_REFRESH_SECS)).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <h1 class="site-header__name">{name}</h1>
                    <nav class="site-header__nav">
                        <a class="site-header__nav-link" href="#writing">"writing"</a>
                        <a class="site-header__nav-link" href="#projects">"projects"</a>
                    </nav>
                </div>

                <div class="site-header__meta">
                    <span class="site-header__clock">
                        <Icon kind=IconKind::Clock/>
                        <span>{move || clock.get()}</span>
                    </span>
                    <span class="site-header__location">
                        <Icon kind=IconKind::MapPin/>
                        <span>{location}</span>
                    </span>
                </div>

                <ThemeToggle theme=theme on_toggle=on_toggle/>
            </div>
        </header>
    }
}

/// Sun/moon button flipping the theme.
#[component]
fn ThemeToggle(theme: Signal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn site-header__theme-toggle"
            on:click=move |_| on_toggle.run(())
            title=move || toggle_title(theme.get())
            aria-label="Toggle dark mode"
        >
            {move || view! { <Icon kind=toggle_icon(theme.get())/> }}
        </button>
    }
}
