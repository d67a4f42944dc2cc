use super::PostRecord;

pub static POSTS: &[PostRecord] = &[
    PostRecord {
        id: "1",
        title: "Developer Tooling on Solana",
        excerpt: "Deep Dive into Developer Tooling on Solana: Strengths, Gaps, and Opportunities",
        date: "2025-07-14",
        read_time: "12 min read",
        link: Some(
            "https://medium.com/@aky732244/deep-dive-into-developer-tooling-on-solana-strengths-gaps-and-opportunities-cb52a8622f3e",
        ),
    },
    PostRecord {
        id: "2",
        title: "Unpacking RWAs on Solana",
        excerpt: "Unpacking RWAs on Solana: A Deep Dive into Real-World Assets on the Fastest Chain",
        date: "2025-07-06",
        read_time: "12 min read",
        link: Some(
            "https://medium.com/@aky732244/unpacking-rwas-on-solana-a-deep-dive-into-real-world-assets-on-the-fastest-chain-bdb3d3a6aced",
        ),
    },
    PostRecord {
        id: "3",
        title: "Builders of Bharat",
        excerpt: "The Builders of Bharat: India Impact on the Solana Breakout Hackathon",
        date: "2025-06-10",
        read_time: "12 min read",
        link: Some(
            "https://medium.com/@aky732244/the-builders-of-bharat-indias-impact-on-the-solana-breakout-hackathon-101fd3b9b822",
        ),
    },
    PostRecord {
        id: "4",
        title: "State of Stablecoins on Solana",
        excerpt: "Stablecoins are quietly becoming the backbone of crypto adoption, both on-chain and off-chain",
        date: "2025-06-29",
        read_time: "11 min read",
        link: Some("https://medium.com/@aky732244/deep-dive-on-the-state-of-stablecoins-on-solana-506c0ca764db"),
    },
];
