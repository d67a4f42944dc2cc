//! Introduction block: greeting, tagline, summary bullets, contact links and
//! profile picture.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Profile, SummaryItem};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__intro">
                <div>
                    <h2 class="hero__greeting">{profile.greeting}</h2>
                    <p class="hero__tagline">{profile.tagline}</p>
                </div>

                <div>
                    <h3 class="section-heading">"Summary"</h3>
                    <ul class="hero__summary">
                        {profile.summary.iter().map(|item| view! { <SummaryBullet item=*item/> }).collect_view()}
                    </ul>
                </div>

                <div class="hero__contacts">
                    {profile
                        .contacts
                        .iter()
                        .map(|contact| {
                            view! {
                                <a
                                    class="hero__contact"
                                    href=contact.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=contact.kind.label()
                                    title=contact.kind.label()
                                >
                                    <Icon kind=IconKind::for_contact(contact.kind)/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="hero__portrait">
                <img class="hero__avatar" src=profile.avatar_url alt="Profile"/>
            </div>
        </section>
    }
}

#[component]
fn SummaryBullet(item: SummaryItem) -> impl IntoView {
    view! {
        <li class="hero__summary-item">
            <span class="hero__bullet" aria-hidden="true">"•"</span>
            <span>
                {item.text}
                {item
                    .link
                    .map(|link| {
                        view! {
                            " "
                            <a
                                class="inline-link"
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <span>{link.label}</span>
                                <Icon kind=IconKind::ExternalLink class="icon--small"/>
                            </a>
                        }
                    })}
            </span>
        </li>
    }
}
