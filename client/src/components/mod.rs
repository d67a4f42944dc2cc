//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content cards. None of them own state;
//! the theme arrives as a signal and a callback from the root.

pub mod hero;
pub mod icons;
pub mod post_card;
pub mod project_card;
pub mod site_header;
