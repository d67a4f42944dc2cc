//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns layout and delegates rendering
//! details to `components`.

pub mod home;
