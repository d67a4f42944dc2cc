use super::{ProjectRecord, ProjectStatus};

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        title: "Vocalis",
        description: "Vocalis is a next-generation platform that lets you control your entire DevOps and productivity workflow using just your voice",
        status: Some(ProjectStatus::Building),
        icon: "🚀",
        link: Some("https://vocalis-new.onrender.com/"),
    },
    ProjectRecord {
        id: "2",
        title: "ReEstate",
        description: "ReEstate is a decentralized platform that enables tokenization of real estate assets using blockchain technology",
        status: Some(ProjectStatus::Live),
        icon: "💻",
        link: Some("https://real-estate-tau-taupe-76.vercel.app/"),
    },
    ProjectRecord {
        id: "3",
        title: "MultiChain NFT app",
        description: "MultiChain NFT Claimable app empowers users to seamlessly claim NFTs across multiple blockchain networks",
        status: None,
        icon: "📊",
        link: Some("https://multi-chain-nf-ts-app-n97z.vercel.app/"),
    },
    ProjectRecord {
        id: "4",
        title: "Aia Stake",
        description: "Designed to provide users with secure, scalable, and efficient staking opportunities. The app allows users to stake their AIA tokens and other supported assets",
        status: None,
        icon: "🧠",
        link: Some("https://aia-stake.vercel.app/"),
    },
];
