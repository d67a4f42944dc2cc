use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::util::storage::{MemoryStorage, StorageError};

/// Storage writes and marker changes, in call order.
type Journal = Rc<RefCell<Vec<String>>>;

/// Memory store that journals every write.
struct JournalStorage {
    inner: MemoryStorage,
    journal: Journal,
}

impl KeyValueStore for JournalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.journal.borrow_mut().push(format!("set {key}={value}"));
        self.inner.set(key, value)
    }
}

/// Class list that journals every change.
struct JournalClassList {
    classes: Vec<String>,
    journal: Journal,
}

impl ClassTarget for JournalClassList {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        self.journal.borrow_mut().push(format!("add {class}"));
        self.classes.push(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.journal.borrow_mut().push(format!("remove {class}"));
        self.classes.retain(|c| c != class);
    }
}

type JournaledStore = PreferenceStore<JournalStorage, FixedColorScheme>;

fn journaled(storage: &MemoryStorage, os_dark: bool) -> (JournaledStore, JournalClassList, Journal) {
    let journal = Journal::default();
    let prefs = PreferenceStore::new(
        JournalStorage { inner: storage.clone(), journal: journal.clone() },
        FixedColorScheme(os_dark),
    );
    let root = JournalClassList { classes: Vec::new(), journal: journal.clone() };
    (prefs, root, journal)
}

/// Store that rejects every operation, like blocked `localStorage`.
struct BlockedStorage;

impl KeyValueStore for BlockedStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }
}

/// Probe that records how often it was asked.
struct CountingProbe {
    dark: bool,
    calls: Cell<usize>,
}

impl ColorSchemeProbe for CountingProbe {
    fn prefers_dark(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.dark
    }
}

fn store(storage: &MemoryStorage, os_dark: bool) -> PreferenceStore<MemoryStorage, FixedColorScheme> {
    PreferenceStore::new(storage.clone(), FixedColorScheme(os_dark))
}

// =============================================================
// decode / encode
// =============================================================

#[test]
fn decode_preference_accepts_json_booleans() {
    assert!(decode_preference("true").unwrap());
    assert!(!decode_preference("false").unwrap());
    assert!(decode_preference("  true\n").unwrap());
}

#[test]
fn decode_preference_rejects_non_boolean_json() {
    assert!(matches!(decode_preference("1"), Err(PreferenceError::NotBoolean(_))));
    assert!(matches!(decode_preference("\"true\""), Err(PreferenceError::NotBoolean(_))));
    assert!(matches!(decode_preference("null"), Err(PreferenceError::NotBoolean(_))));
}

#[test]
fn decode_preference_rejects_invalid_json() {
    assert!(matches!(decode_preference("yes"), Err(PreferenceError::Decode(_))));
    assert!(matches!(decode_preference("{"), Err(PreferenceError::Decode(_))));
    assert!(matches!(decode_preference(""), Err(PreferenceError::Decode(_))));
}

#[test]
fn encode_preference_is_json_boolean() {
    assert_eq!(encode_preference(true), "true");
    assert_eq!(encode_preference(false), "false");
}

// =============================================================
// load_initial / save
// =============================================================

#[test]
fn save_then_fresh_load_returns_saved_value() {
    for value in [false, true] {
        for os_dark in [false, true] {
            let storage = MemoryStorage::new();
            store(&storage, os_dark).save(value);
            // A new store over the same entries simulates the next visit.
            assert_eq!(store(&storage, os_dark).load_initial(), value);
        }
    }
}

#[test]
fn load_initial_without_entry_returns_os_preference() {
    let storage = MemoryStorage::new();
    assert!(store(&storage, true).load_initial());
    assert!(!store(&storage, false).load_initial());
}

#[test]
fn load_initial_does_not_write_storage() {
    let storage = MemoryStorage::new();
    let _ = store(&storage, true).load_initial();
    assert!(storage.is_empty());
}

#[test]
fn load_initial_treats_malformed_entry_as_absent() {
    for raw in ["yes", "1", "{", "\"dark\""] {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, raw);
        assert!(store(&storage, true).load_initial(), "raw={raw}");
        assert!(!store(&storage, false).load_initial(), "raw={raw}");
    }
}

#[test]
fn load_initial_consults_os_only_when_entry_absent() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, "false");
    let probe = CountingProbe { dark: true, calls: Cell::new(0) };
    let prefs = PreferenceStore::new(storage, probe);
    assert!(!prefs.load_initial());
    assert_eq!(prefs.probe.calls.get(), 0);

    let probe = CountingProbe { dark: true, calls: Cell::new(0) };
    let prefs = PreferenceStore::new(MemoryStorage::new(), probe);
    assert!(prefs.load_initial());
    assert_eq!(prefs.probe.calls.get(), 1);
}

#[test]
fn save_writes_json_boolean_under_dark_mode_key() {
    let storage = MemoryStorage::new();
    store(&storage, false).save(true);
    assert_eq!(storage.raw("darkMode").as_deref(), Some("true"));
    store(&storage, false).save(false);
    assert_eq!(storage.raw("darkMode").as_deref(), Some("false"));
}

#[test]
fn blocked_storage_degrades_to_os_preference() {
    let prefs = PreferenceStore::new(BlockedStorage, FixedColorScheme(true));
    prefs.save(false);
    assert!(prefs.load_initial());
}

// =============================================================
// commit_theme
// =============================================================

#[test]
fn commit_theme_persists_before_marking() {
    let storage = MemoryStorage::new();
    let (prefs, mut root, journal) = journaled(&storage, true);

    let initial = prefs.load_theme();
    prefs.commit_theme(&mut root, initial);

    assert_eq!(*journal.borrow(), vec!["set darkMode=true".to_owned(), "add dark".to_owned()]);
    assert!(root.has_class(DARK_CLASS));
}

#[test]
fn commit_theme_keeps_storage_and_marker_in_step_across_toggles() {
    let storage = MemoryStorage::new();
    let (prefs, mut root, journal) = journaled(&storage, false);

    let mut theme = prefs.load_theme();
    prefs.commit_theme(&mut root, theme);
    for _ in 0..4 {
        theme = theme.toggled();
        journal.borrow_mut().clear();
        prefs.commit_theme(&mut root, theme);

        let value = encode_preference(theme.is_dark());
        assert_eq!(storage.raw(STORAGE_KEY), Some(value.clone()));
        assert_eq!(root.has_class(DARK_CLASS), theme.is_dark());
        let marker = if theme.is_dark() { "add dark" } else { "remove dark" };
        assert_eq!(*journal.borrow(), vec![format!("set darkMode={value}"), marker.to_owned()]);
    }
}

#[test]
fn commit_theme_with_blocked_storage_still_marks() {
    let prefs = PreferenceStore::new(BlockedStorage, FixedColorScheme(false));
    let journal = Journal::default();
    let mut root = JournalClassList { classes: Vec::new(), journal };
    prefs.commit_theme(&mut root, Theme::Dark);
    assert!(root.has_class(DARK_CLASS));
}

// =============================================================
// Theme scenario
// =============================================================

#[test]
fn dark_os_toggle_persists_light_and_survives_reload() {
    let storage = MemoryStorage::new();
    let (first_visit, mut root, _) = journaled(&storage, true);

    let theme = first_visit.load_theme();
    first_visit.commit_theme(&mut root, theme);
    assert_eq!(theme, Theme::Dark);
    assert!(root.has_class(DARK_CLASS));

    let theme = theme.toggled();
    first_visit.commit_theme(&mut root, theme);
    assert_eq!(theme, Theme::Light);
    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some("false"));
    assert!(!root.has_class(DARK_CLASS));

    let reload = store(&storage, true);
    assert_eq!(reload.load_theme(), Theme::Light);
}

#[test]
fn untoggled_first_visit_pins_os_preference_for_next_visit() {
    let storage = MemoryStorage::new();
    let (first_visit, mut root, _) = journaled(&storage, true);
    first_visit.commit_theme(&mut root, first_visit.load_theme());
    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some("true"));

    // The system switched to light between visits.
    assert_eq!(store(&storage, false).load_theme(), Theme::Dark);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_outside_browser_defaults_to_light() {
    let prefs = PreferenceStore::browser();
    prefs.save(true);
    assert_eq!(prefs.load_theme(), Theme::Light);
}

// =============================================================
// theme_boot_script
// =============================================================

#[test]
fn boot_script_reads_same_key_query_and_marker() {
    let script = theme_boot_script();
    assert!(script.contains("localStorage.getItem(\"darkMode\")"), "{script}");
    assert!(script.contains("matchMedia(\"(prefers-color-scheme: dark)\")"), "{script}");
    assert!(script.contains("classList.add(\"dark\")"), "{script}");
    assert!(script.contains("typeof v===\"boolean\""), "{script}");
}

#[test]
fn boot_script_never_removes_the_marker() {
    assert!(!theme_boot_script().contains("remove"));
}
