//! Writing list card.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::PostRecord;
use crate::util::clock::format_post_date;

#[component]
pub fn PostCard(post: PostRecord) -> impl IntoView {
    view! {
        <a
            class="card post-card"
            href=post.link
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="post-card__title-row">
                <h4 class="card__title">{post.title}</h4>
                {post
                    .link
                    .map(|_| view! { <Icon kind=IconKind::ExternalLink class="icon--small card__external"/> })}
            </div>
            <p class="card__text">{post.excerpt}</p>
            <div class="post-card__meta">
                <time datetime=post.date>{format_post_date(post.date)}</time>
                <span aria-hidden="true">"•"</span>
                <span>{post.read_time}</span>
            </div>
        </a>
    }
}
