//! Document-level theme marker.
//!
//! Adds or removes the `dark` class on the `<html>` element so the stylesheet
//! can react to the current theme. [`DocumentRoot`] needs a browser; on the
//! server it has no classes and ignores writes.
//!
//! TRADE-OFFS
//! ==========
//! The marker is written but never read back by theme logic. The class list is
//! only touched when it disagrees with the theme, so repeated applications do
//! not churn the DOM.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Something carrying a set of CSS classes.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// Bring `target`'s dark marker in line with `theme`.
pub fn apply_marker<T: ClassTarget + ?Sized>(target: &mut T, theme: Theme) {
    let present = target.has_class(DARK_CLASS);
    match (theme.is_dark(), present) {
        (true, false) => target.add_class(DARK_CLASS),
        (false, true) => target.remove_class(DARK_CLASS),
        _ => {}
    }
}

/// The `<html>` element's class list. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn root_classes() -> Option<web_sys::DomTokenList> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .map(|el| el.class_list())
}

impl ClassTarget for DocumentRoot {
    fn has_class(&self, class: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            root_classes().is_some_and(|list| list.contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            false
        }
    }

    fn add_class(&mut self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = root_classes() {
                let _ = list.add_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }

    fn remove_class(&mut self, class: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = root_classes() {
                let _ = list.remove_1(class);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
        }
    }
}
