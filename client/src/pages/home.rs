//! The portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the whole document body from the current theme and the two static
//! record lists. Lists keep their authored order; nothing is sorted, filtered
//! or paginated. The only branch of substance is the empty writing list, which
//! shows a placeholder instead of an empty region.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::post_card::PostCard;
use crate::components::project_card::ProjectCard;
use crate::components::site_header::SiteHeader;
use crate::content::{PostRecord, Profile, ProjectRecord};
use crate::state::theme::Theme;

/// Message shown in place of an empty writing list.
pub const EMPTY_WRITING_MESSAGE: &str = "I am too lazy to write :')";

/// What the writing section shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritingContent {
    Posts(&'static [PostRecord]),
    Placeholder(&'static str),
}

pub fn writing_content(posts: &'static [PostRecord]) -> WritingContent {
    if posts.is_empty() {
        WritingContent::Placeholder(EMPTY_WRITING_MESSAGE)
    } else {
        WritingContent::Posts(posts)
    }
}

/// Full page for `profile`, `projects` and `posts` under `theme`.
#[component]
pub fn HomePage(
    profile: &'static Profile,
    projects: &'static [ProjectRecord],
    posts: &'static [PostRecord],
    #[prop(into)] theme: Signal<Theme>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader
                name=profile.name
                location=profile.location
                theme=theme
                on_toggle=on_toggle
            />

            <main class="page__main">
                <Hero profile=profile/>

                <div class="page__columns">
                    <section id="projects" class="page__section" aria-labelledby="projects-heading">
                        <h3 id="projects-heading" class="section-heading">"Projects"</h3>
                        <div class="card-list">
                            {projects
                                .iter()
                                .map(|project| view! { <ProjectCard project=*project/> })
                                .collect_view()}
                        </div>
                    </section>

                    <section id="writing" class="page__section" aria-labelledby="writing-heading">
                        <h3 id="writing-heading" class="section-heading">"Writing"</h3>
                        <WritingList content=writing_content(posts)/>
                    </section>
                </div>
            </main>
        </div>
    }
}

#[component]
fn WritingList(content: WritingContent) -> impl IntoView {
    match content {
        WritingContent::Posts(posts) => view! {
            <div class="card-list">
                {posts.iter().map(|post| view! { <PostCard post=*post/> }).collect_view()}
            </div>
        }
        .into_any(),
        WritingContent::Placeholder(message) => view! {
            <div class="card card--placeholder">
                <p class="card__text">{message}</p>
            </div>
        }
        .into_any(),
    }
}
