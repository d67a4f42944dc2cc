//! Project list card.
//!
//! DESIGN
//! ======
//! Optional record fields map to optional affordances: no status means no
//! badge, no link means no external-link marker and an anchor without `href`.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{ProjectRecord, ProjectStatus};

/// Visual tone of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Live,
    Building,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Live => "badge badge--live",
            Self::Building => "badge badge--building",
        }
    }
}

/// Badge contents for a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Badge to render for `project`, if any.
pub fn status_badge(project: &ProjectRecord) -> Option<StatusBadge> {
    project.status.map(|status| StatusBadge {
        label: status.label(),
        tone: match status {
            ProjectStatus::Live => BadgeTone::Live,
            ProjectStatus::Building => BadgeTone::Building,
        },
    })
}

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let badge = status_badge(&project);

    view! {
        <a
            class="card project-card"
            href=project.link
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="project-card__icon">{project.icon}</div>
            <div class="project-card__body">
                <div class="project-card__title-row">
                    <h4 class="card__title">{project.title}</h4>
                    {badge.map(|b| view! { <span class=b.tone.class()>{b.label}</span> })}
                    {project
                        .link
                        .map(|_| view! { <Icon kind=IconKind::ExternalLink class="icon--small card__external"/> })}
                </div>
                <p class="card__text">{project.description}</p>
            </div>
        </a>
    }
}
