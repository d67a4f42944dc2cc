use super::{ContactKind, ContactLink, InlineLink, Profile, SummaryItem};

pub static PROFILE: Profile = Profile {
    name: "Abhishek Yadav",
    location: "Kolkata, West Bengal",
    greeting: "Yo! I'm Abhishek.",
    tagline: "I think some crazy ideas and build them. Sometimes when I get bored, I write some random stuffs.",
    avatar_url: "https://raw.githubusercontent.com/Abhishekyadav26/profiles/main/assets/Abhi.png",
    summary: &[
        SummaryItem {
            text: "Currently I'm building amazing products on",
            link: Some(InlineLink { label: "Github", href: "https://github.com/Abhishekyadav26" }),
        },
        SummaryItem { text: "I've participated in 15+ hackathons and won 1", link: None },
        SummaryItem {
            text: "In my free time, I like to contribute to the community: Hackquest, Superteam ❤️",
            link: None,
        },
        SummaryItem { text: "20 years old, based in Kolkata", link: None },
    ],
    contacts: &[
        ContactLink { kind: ContactKind::Email, href: "mailto:aky732244@gmail.com" },
        ContactLink { kind: ContactKind::Twitter, href: "https://x.com/26Abhishekyadav" },
        ContactLink { kind: ContactKind::GitHub, href: "https://github.com/Abhishekyadav26/" },
        ContactLink { kind: ContactKind::LinkedIn, href: "https://www.linkedin.com/in/abhishekkumaryadav26/" },
        ContactLink { kind: ContactKind::Telegram, href: "https://t.me/abhisheyadav26" },
    ],
};
