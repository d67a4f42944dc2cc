//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The page has exactly one piece of mutable state, the theme. It is owned
//! by the root `App` component and handed to descendants as a read-only
//! signal plus a toggle callback.

pub mod theme;
