use super::*;
use crate::util::clock::format_post_date;

#[test]
fn projects_keep_authored_order() {
    let ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn some_projects_have_no_status() {
    assert!(PROJECTS.iter().any(|p| p.status.is_none()));
    assert!(PROJECTS.iter().any(|p| p.status == Some(ProjectStatus::Live)));
}

#[test]
fn post_dates_are_in_authored_format() {
    for post in POSTS {
        assert_ne!(format_post_date(post.date), post.date, "post {} date {}", post.id, post.date);
    }
}

#[test]
fn profile_lists_every_contact_channel_once() {
    let kinds: Vec<_> = PROFILE.contacts.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [ContactKind::Email, ContactKind::Twitter, ContactKind::GitHub, ContactKind::LinkedIn, ContactKind::Telegram]
    );
    assert!(PROFILE.contacts[0].href.starts_with("mailto:"));
}

#[test]
fn status_labels() {
    assert_eq!(ProjectStatus::Building.label(), "Building");
    assert_eq!(ProjectStatus::Live.label(), "Live");
}
