//! Language state and string lookup for the widget.
//!
//! The catalog itself is static, embedded data (see [`catalog`]); this module
//! owns the active-language state, its persistence, and the explicit
//! observer/hook registrations that replace the web version's ambient
//! global-function probing.

mod catalog;

pub use catalog::{Lang, tree};

use std::cell::{Cell, RefCell};

use tracing::warn;

use crate::storage::LanguageStore;
use crate::view::TextSink;

/// Knobs for a language switch.
#[derive(Debug, Clone, Copy)]
pub struct SwitchOptions {
    /// Write the choice through the language store.
    pub persist: bool,
    /// Call the registered change observers.
    pub notify: bool,
    /// Invoke the registered reload hook (the full-page-reload analog).
    pub reload: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            persist: true,
            notify: true,
            reload: false,
        }
    }
}

type ChangeObserver = Box<dyn Fn(Lang)>;
type RerenderHook = Box<dyn Fn(Lang)>;

/// Active-language state plus accessors over the static catalog.
pub struct I18n {
    store: Box<dyn LanguageStore>,
    active: Cell<Lang>,
    observers: RefCell<Vec<ChangeObserver>>,
    rerender_hooks: RefCell<Vec<RerenderHook>>,
    reload_hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl I18n {
    /// Reads the persisted choice once; unset, unreadable, or unrecognized
    /// codes silently degrade to English.
    pub fn new(store: Box<dyn LanguageStore>) -> Self {
        let active = store
            .load()
            .as_deref()
            .and_then(Lang::from_code)
            .unwrap_or_default();
        Self {
            store,
            active: Cell::new(active),
            observers: RefCell::new(Vec::new()),
            rerender_hooks: RefCell::new(Vec::new()),
            reload_hook: RefCell::new(None),
        }
    }

    pub fn active_language(&self) -> Lang {
        self.active.get()
    }

    /// Dotted-key lookup in the active language's tree. Any missing path
    /// segment or non-string leaf yields `fallback`.
    pub fn lookup(&self, key: &str, fallback: &str) -> String {
        lookup_in(self.active.get(), key, fallback)
    }

    /// Switch the active language. Unrecognized codes normalize to English.
    /// Persistence failures are swallowed (logged at warn).
    pub fn set_active_language(&self, code: &str, opts: SwitchOptions) -> Lang {
        let lang = Lang::from_code(code).unwrap_or_default();
        self.active.set(lang);

        if opts.persist {
            if let Err(error) = self.store.save(lang.code()) {
                warn!(%error, lang = lang.code(), "failed to persist language choice");
            }
        }
        if opts.notify {
            self.broadcast(lang);
        }
        if opts.reload {
            if let Some(reload) = self.reload_hook.borrow().as_ref() {
                reload();
            }
        }
        lang
    }

    /// Switch the language, patch every registered text slot through `sink`,
    /// run the re-render hooks, then broadcast the change — in that order.
    pub fn apply_translations(&self, code: &str, sink: &dyn TextSink) -> Lang {
        let lang = self.set_active_language(
            code,
            SwitchOptions {
                persist: true,
                notify: false,
                reload: false,
            },
        );
        for (slot, key, fallback) in TRANSLATED_SLOTS {
            sink.set_text(slot, &self.lookup(key, fallback));
        }
        for hook in self.rerender_hooks.borrow().iter() {
            hook(lang);
        }
        self.broadcast(lang);
        lang
    }

    pub fn on_change(&self, observer: impl Fn(Lang) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn on_rerender(&self, hook: impl Fn(Lang) + 'static) {
        self.rerender_hooks.borrow_mut().push(Box::new(hook));
    }

    pub fn set_reload_hook(&self, hook: impl Fn() + 'static) {
        *self.reload_hook.borrow_mut() = Some(Box::new(hook));
    }

    fn broadcast(&self, lang: Lang) {
        for observer in self.observers.borrow().iter() {
            observer(lang);
        }
    }
}

/// Tree walk behind [`I18n::lookup`], usable with an explicit language.
pub fn lookup_in(lang: Lang, key: &str, fallback: &str) -> String {
    let mut node = tree(lang);
    for segment in key.split('.') {
        match node.get(segment) {
            Some(child) => node = child,
            None => return fallback.to_owned(),
        }
    }
    node.as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Text slots patched on every language switch:
/// (slot id, catalog key, fallback when the key is missing).
pub const TRANSLATED_SLOTS: &[(&str, &str, &str)] = &[
    ("navHome", "ui.navbar.home", "Home"),
    ("navAttendance", "ui.navbar.attendance", "Attendance"),
    ("navHistory", "ui.navbar.history", "Attendance history"),
    ("navProfile", "ui.navbar.profile", "Profile"),
    ("navLogout", "ui.navbar.logout", "Log out"),
    ("attendanceTitle", "attendance.title", "Timekeeping"),
    ("checkInBtn", "attendance.actions.check_in", "Check in"),
    ("checkOutBtn", "attendance.actions.check_out", "Check out"),
    ("filterBtn", "attendance.actions.filter", "View history"),
    ("checkInLabel", "attendance.info.check_in", "Check-in time"),
    ("checkOutLabel", "attendance.info.check_out", "Check-out time"),
    ("totalDaysLabel", "attendance.summary.total_days", "Total days"),
    ("totalHoursLabel", "attendance.summary.total_hours", "Total hours"),
    ("presentDaysLabel", "attendance.summary.present_days", "Days present"),
    ("absentDaysLabel", "attendance.summary.absent_days", "Days absent"),
    ("historyTitle", "attendance.history.title", "Attendance history"),
    ("noData", "attendance.history.empty", "No attendance data for this period"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLanguageStore;
    use std::rc::Rc;

    struct RecordingSink {
        texts: RefCell<Vec<(String, String)>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                texts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextSink for RecordingSink {
        fn set_text(&self, slot: &str, text: &str) {
            self.texts.borrow_mut().push((slot.into(), text.into()));
        }
    }

    fn i18n_with(store: MemoryLanguageStore) -> I18n {
        I18n::new(Box::new(store))
    }

    #[test]
    fn lookup_resolves_navbar_label_per_language() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        assert_eq!(i18n.lookup("ui.navbar.home", "X"), "Home");

        i18n.set_active_language("vi", SwitchOptions::default());
        assert_eq!(i18n.lookup("ui.navbar.home", "X"), "Trang chủ");
    }

    #[test]
    fn lookup_falls_back_on_missing_segment() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        assert_eq!(i18n.lookup("ui.navbar.nope", "X"), "X");
        assert_eq!(i18n.lookup("totally.unknown", "X"), "X");
    }

    #[test]
    fn lookup_falls_back_on_non_string_leaf() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        // "ui.navbar" resolves to an object, not text.
        assert_eq!(i18n.lookup("ui.navbar", "X"), "X");
    }

    #[test]
    fn unknown_codes_normalize_to_english() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        assert_eq!(i18n.set_active_language("fr", SwitchOptions::default()), Lang::En);
        assert_eq!(i18n.active_language(), Lang::En);
    }

    #[test]
    fn unrecognized_persisted_code_degrades_to_english() {
        let i18n = i18n_with(MemoryLanguageStore::with_value("de"));
        assert_eq!(i18n.active_language(), Lang::En);
    }

    #[test]
    fn persisted_choice_is_picked_up() {
        let i18n = i18n_with(MemoryLanguageStore::with_value("vi"));
        assert_eq!(i18n.active_language(), Lang::Vi);
    }

    #[test]
    fn switch_broadcasts_new_language() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        let seen = Rc::new(Cell::new(None));
        let seen_in_observer = Rc::clone(&seen);
        i18n.on_change(move |lang| seen_in_observer.set(Some(lang)));

        i18n.set_active_language("vi", SwitchOptions::default());
        assert_eq!(i18n.active_language(), Lang::Vi);
        assert_eq!(seen.get(), Some(Lang::Vi));
    }

    #[test]
    fn persistence_failure_is_swallowed() {
        let store = MemoryLanguageStore::default();
        store.fail_saves.set(true);
        let i18n = i18n_with(store);

        i18n.set_active_language("vi", SwitchOptions::default());
        assert_eq!(i18n.active_language(), Lang::Vi);
    }

    #[test]
    fn apply_translations_patches_hooks_then_broadcasts() {
        let i18n = i18n_with(MemoryLanguageStore::default());
        let order = Rc::new(RefCell::new(Vec::new()));

        let hook_order = Rc::clone(&order);
        i18n.on_rerender(move |_| hook_order.borrow_mut().push("rerender"));
        let observer_order = Rc::clone(&order);
        i18n.on_change(move |_| observer_order.borrow_mut().push("broadcast"));

        let sink = RecordingSink::new();
        i18n.apply_translations("vi", &sink);

        let texts = sink.texts.borrow();
        assert_eq!(texts.len(), TRANSLATED_SLOTS.len());
        assert!(
            texts
                .iter()
                .any(|(slot, text)| slot == "checkInBtn" && text == "Chấm công vào")
        );
        assert_eq!(*order.borrow(), vec!["rerender", "broadcast"]);
    }
}
