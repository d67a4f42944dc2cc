//! Author-supplied page content.
//!
//! DESIGN
//! ======
//! Everything here is fixed at build time. Records carry no computed fields
//! and are never validated; identifiers are unique per list by convention
//! only. Optional fields simply omit their affordance when rendered.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

mod posts;
mod profile;
mod projects;

pub use posts::POSTS;
pub use profile::PROFILE;
pub use projects::PROJECTS;

/// Lifecycle label shown as a badge on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Building,
    Live,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Live => "Live",
        }
    }
}

/// One entry in the projects list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: Option<ProjectStatus>,
    /// Single glyph shown in the card's icon tile.
    pub icon: &'static str,
    pub link: Option<&'static str>,
}

/// One entry in the writing list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Publish date as authored, `YYYY-MM-DD`.
    pub date: &'static str,
    /// Pre-formatted estimate, e.g. `12 min read`.
    pub read_time: &'static str,
    pub link: Option<&'static str>,
}

/// Outbound contact channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Email,
    Twitter,
    GitHub,
    LinkedIn,
    Telegram,
}

impl ContactKind {
    /// Accessible name for the icon-only anchor.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Twitter => "Twitter",
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Telegram => "Telegram",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
}

/// Labelled external link embedded at the end of a summary bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InlineLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryItem {
    pub text: &'static str,
    pub link: Option<InlineLink>,
}

/// Bio and contact details shown in the header and hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub avatar_url: &'static str,
    pub summary: &'static [SummaryItem],
    pub contacts: &'static [ContactLink],
}
