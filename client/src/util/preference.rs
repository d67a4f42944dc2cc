//! Durable dark-mode preference.
//!
//! Reads the user's last choice from storage under [`STORAGE_KEY`] and falls
//! back to the system `prefers-color-scheme` answer when nothing is stored.
//! Neither loading nor saving ever fails outwardly: a malformed entry counts
//! as absent and an unwritable store leaves the in-memory theme authoritative.
//!
//! Every theme the page settles on, the resolved startup value included, goes
//! through [`PreferenceStore::commit_theme`]: storage first, document marker
//! second.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::state::theme::{Theme, resolve_initial_theme};
use crate::util::dark_mode::{ClassTarget, DARK_CLASS, apply_marker};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Storage key holding the JSON-encoded `dark` flag.
pub const STORAGE_KEY: &str = "darkMode";

/// Media query answering whether the system prefers dark mode.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// A stored value that is not a JSON boolean.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("stored preference is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("stored preference is not a boolean: {0}")]
    NotBoolean(String),
}

/// Decode a raw stored entry as a JSON boolean.
///
/// # Errors
///
/// Returns [`PreferenceError`] for invalid JSON or any non-boolean JSON value.
pub fn decode_preference(raw: &str) -> Result<bool, PreferenceError> {
    match serde_json::from_str::<serde_json::Value>(raw.trim())? {
        serde_json::Value::Bool(dark) => Ok(dark),
        other => Err(PreferenceError::NotBoolean(other.to_string())),
    }
}

/// JSON encoding of the `dark` flag (`true` / `false`).
pub fn encode_preference(dark: bool) -> String {
    serde_json::Value::Bool(dark).to_string()
}

/// Source of the host's system-wide dark-mode preference.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// `matchMedia("(prefers-color-scheme: dark)")`; `false` outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemColorScheme;

impl ColorSchemeProbe for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Probe with a fixed answer.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub bool);

#[cfg(test)]
impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Load/save access to the persisted theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceStore<S, P> {
    storage: S,
    probe: P,
}

impl PreferenceStore<BrowserStorage, SystemColorScheme> {
    /// Store backed by `localStorage` and `matchMedia`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage, SystemColorScheme)
    }
}

impl<S: KeyValueStore, P: ColorSchemeProbe> PreferenceStore<S, P> {
    pub fn new(storage: S, probe: P) -> Self {
        Self { storage, probe }
    }

    /// Stored `dark` flag, `None` when absent, unreadable or malformed.
    pub fn stored(&self) -> Option<bool> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("theme preference unreadable: {e}");
                return None;
            }
        };
        match decode_preference(&raw) {
            Ok(dark) => Some(dark),
            Err(e) => {
                log::warn!("ignoring malformed theme preference: {e}");
                None
            }
        }
    }

    /// Initial `dark` flag for a new page view.
    pub fn load_initial(&self) -> bool {
        let stored = self.stored();
        let os_preference = stored.is_none() && self.probe.prefers_dark();
        resolve_initial_theme(stored, os_preference)
    }

    pub fn load_theme(&self) -> Theme {
        Theme::from_dark(self.load_initial())
    }

    /// Persist the `dark` flag, overwriting any previous value.
    pub fn save(&self, dark: bool) {
        if let Err(e) = self.storage.set(STORAGE_KEY, &encode_preference(dark)) {
            log::debug!("theme preference not persisted: {e}");
        }
    }

    /// Persist `theme`, then bring `target`'s dark marker in line with it.
    pub fn commit_theme<T: ClassTarget + ?Sized>(&self, target: &mut T, theme: Theme) {
        self.save(theme.is_dark());
        apply_marker(target, theme);
    }
}

/// Inline `<head>` script that sets the dark marker before first paint.
///
/// Resolves the same way as [`PreferenceStore::load_initial`]: a stored JSON
/// boolean wins, anything else defers to the system preference. It only ever
/// adds the marker; the hydrated app takes over from there.
pub fn theme_boot_script() -> String {
    format!(
        "(function(){{var d=null;\
try{{var v=JSON.parse(localStorage.getItem({key:?}));if(typeof v===\"boolean\")d=v}}catch(e){{}}\
if(d===null)try{{d=window.matchMedia({query:?}).matches}}catch(e){{d=false}}\
if(d)document.documentElement.classList.add({marker:?})}})();",
        key = STORAGE_KEY,
        query = DARK_SCHEME_QUERY,
        marker = DARK_CLASS,
    )
}
