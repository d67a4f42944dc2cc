use super::*;
use crate::content::POSTS;

static NO_POSTS: &[PostRecord] = &[];

#[test]
fn writing_content_uses_placeholder_for_empty_list() {
    assert_eq!(writing_content(NO_POSTS), WritingContent::Placeholder(EMPTY_WRITING_MESSAGE));
}

#[test]
fn writing_content_lists_posts_in_authored_order() {
    let WritingContent::Posts(posts) = writing_content(POSTS) else {
        panic!("expected posts");
    };
    assert_eq!(posts.len(), POSTS.len());
    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn placeholder_message_text() {
    assert_eq!(EMPTY_WRITING_MESSAGE, "I am too lazy to write :')");
}
