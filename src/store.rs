//! Shared locale state and change notification.
//!
//! [`LocaleStore`] is the one mutable piece of the crate: the active language
//! plus its derived layout direction, behind an `Arc` so every screen holds
//! the same state. It is an explicit collaborator handed to whoever needs it,
//! not a module-level global.
//!
//! Switching is serialized: a switch updates language and direction together,
//! then notifies subscribers synchronously, in subscription order, with the
//! new snapshot, before `set_language` returns. Readers are never blocked by
//! a notification pass, and callbacks receive the snapshot by reference so
//! they do not have to touch the store at all.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, Weak};

use tracing::{debug, warn};

use crate::language::Language;
use crate::resolver::resolve_initial_language;
use crate::settings::SettingsStore;

/// Snapshot of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    pub language: Language,
    /// True exactly while the active language is right-to-left.
    pub is_rtl: bool,
}

impl LocaleState {
    fn for_language(language: Language) -> Self {
        LocaleState {
            language,
            is_rtl: language.is_rtl(),
        }
    }
}

type Callback = Arc<dyn Fn(&LocaleState) + Send + Sync>;

struct Inner {
    /// Serializes switches so two concurrent `set_language` calls cannot
    /// interleave their update and notification phases.
    switch: Mutex<()>,
    state: RwLock<LocaleState>,
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_id: AtomicU64,
    settings: Option<Box<dyn SettingsStore>>,
}

/// The injectable language-switch broadcaster.
///
/// Cheap to clone; clones share state and subscribers. `Send + Sync`, so a
/// background refresher can hold one alongside the UI.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Arc<Inner>,
}

impl LocaleStore {
    /// Store starting at an explicit language, with no persistence.
    pub fn new(initial: Language) -> Self {
        Self::build(initial, None)
    }

    /// Store starting from the device locale list.
    pub fn from_device_locales<S: AsRef<str>>(device_locales: &[S]) -> Self {
        Self::build(resolve_initial_language(device_locales), None)
    }

    /// Store backed by a settings store.
    ///
    /// Startup chain: the saved language if the settings hold a usable one,
    /// else the resolved device locale, else the default. Every successful
    /// switch is written back through the settings store.
    pub fn persistent<T, S>(settings: T, device_locales: &[S]) -> Self
    where
        T: SettingsStore + 'static,
        S: AsRef<str>,
    {
        let initial = match settings.load_language() {
            Some(language) => {
                debug!("Restored language {} from settings", language.code());
                language
            }
            None => resolve_initial_language(device_locales),
        };
        Self::build(initial, Some(Box::new(settings)))
    }

    fn build(initial: Language, settings: Option<Box<dyn SettingsStore>>) -> Self {
        LocaleStore {
            inner: Arc::new(Inner {
                switch: Mutex::new(()),
                state: RwLock::new(LocaleState::for_language(initial)),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                settings,
            }),
        }
    }

    /// Current snapshot: language plus direction, read atomically.
    pub fn snapshot(&self) -> LocaleState {
        *read_unpoisoned(&self.inner.state)
    }

    pub fn language(&self) -> Language {
        self.snapshot().language
    }

    /// True while the active language is right-to-left (Arabic).
    pub fn is_rtl(&self) -> bool {
        self.snapshot().is_rtl
    }

    /// Switches the active language.
    ///
    /// Updates language and direction together, notifies subscribers
    /// synchronously in subscription order with the new snapshot, then
    /// persists the choice if a settings store is attached. Setting the
    /// already-active language does nothing.
    pub fn set_language(&self, language: Language) {
        let _switching = lock_unpoisoned(&self.inner.switch);

        {
            let mut state = write_unpoisoned(&self.inner.state);
            if state.language == language {
                debug!("Language {} already active, nothing to do", language.code());
                return;
            }
            *state = LocaleState::for_language(language);
        }
        debug!("Switched language to {}", language.code());

        let snapshot = self.snapshot();
        self.notify(&snapshot);

        if let Some(settings) = &self.inner.settings {
            if let Err(e) = settings.save_language(language) {
                warn!("Failed to persist language selection: {}", e);
            }
        }
    }

    /// Switches by raw code, the shape language selectors deliver.
    ///
    /// Unknown codes log a warning and change nothing; this call never
    /// fails.
    pub fn set_language_code(&self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_language(language),
            None => warn!(
                "Language {:?} is not supported, keeping {}",
                code,
                self.language().code()
            ),
        }
    }

    /// Registers a callback for language switches.
    ///
    /// The callback runs synchronously on the switching thread, after the
    /// state is fully updated. Dropping the returned [`Subscription`] removes
    /// the callback; call [`Subscription::detach`] to keep it for the
    /// store's lifetime.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&LocaleState) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        lock_unpoisoned(&self.inner.subscribers).push((id, Arc::new(callback)));
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Invokes subscribers in subscription order.
    ///
    /// The list lock is released around each call, so a callback may
    /// subscribe or unsubscribe without deadlocking; a subscription removed
    /// mid-pass is skipped when its turn comes.
    fn notify(&self, snapshot: &LocaleState) {
        let ids: Vec<u64> = lock_unpoisoned(&self.inner.subscribers)
            .iter()
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            let callback = lock_unpoisoned(&self.inner.subscribers)
                .iter()
                .find(|(subscriber_id, _)| *subscriber_id == id)
                .map(|(_, callback)| Arc::clone(callback));
            if let Some(callback) = callback {
                callback(snapshot);
            }
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        lock_unpoisoned(&self.inner.subscribers).len()
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

/// Handle to a registered language-switch callback.
///
/// Dropping it removes the callback. [`detach`](Subscription::detach) keeps
/// the callback registered for the store's lifetime instead.
#[must_use = "dropping a Subscription immediately removes the callback"]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
    active: bool,
}

impl Subscription {
    /// Removes the callback now.
    pub fn cancel(mut self) {
        self.remove();
    }

    /// Keeps the callback registered for as long as the store lives.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn remove(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.store.upgrade() {
            lock_unpoisoned(&inner.subscribers).retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

// Lock helpers that shrug off poisoning: the guarded state is plain `Copy`
// data and a subscriber list, both valid even if a callback panicked.

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn read_unpoisoned<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_unpoisoned<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;

    fn log_handle() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str)) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let log = Arc::clone(&log);
            move |entry: &str| log.lock().unwrap().push(entry.to_string())
        };
        (log, writer)
    }

    // ==================== Switch Tests ====================

    #[test]
    fn test_switch_updates_language_and_direction() {
        let store = LocaleStore::new(Language::Ja);
        assert!(!store.is_rtl());

        store.set_language(Language::Ar);
        assert_eq!(store.language(), Language::Ar);
        assert!(store.is_rtl());

        store.set_language(Language::En);
        assert_eq!(store.language(), Language::En);
        assert!(!store.is_rtl());
    }

    #[test]
    fn test_snapshot_is_coherent() {
        let store = LocaleStore::new(Language::Ja);
        store.set_language(Language::Ar);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.language, Language::Ar);
        assert_eq!(snapshot.is_rtl, snapshot.language.is_rtl());
    }

    #[test]
    fn test_same_language_switch_is_silent() {
        let store = LocaleStore::new(Language::En);
        let (log, writer) = log_handle();
        let _sub = store.subscribe(move |state| writer(state.language.code()));

        store.set_language(Language::En);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_code_is_a_warned_noop() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        let _sub = store.subscribe(move |state| writer(state.language.code()));

        store.set_language_code("xx");
        assert_eq!(store.language(), Language::Ja);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_known_code_switches() {
        let store = LocaleStore::new(Language::Ja);
        store.set_language_code("ko");
        assert_eq!(store.language(), Language::Ko);
    }

    #[test]
    fn test_clones_share_state() {
        let store = LocaleStore::new(Language::Ja);
        let clone = store.clone();
        clone.set_language(Language::De);
        assert_eq!(store.language(), Language::De);
    }

    // ==================== Notification Tests ====================

    #[test]
    fn test_subscribers_see_the_new_snapshot() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        let _sub = store.subscribe(move |state| {
            writer(&format!("{}:{}", state.language.code(), state.is_rtl))
        });

        store.set_language(Language::Ar);
        assert_eq!(log.lock().unwrap().as_slice(), ["ar:true"]);
    }

    #[test]
    fn test_subscribers_run_in_subscription_order() {
        let store = LocaleStore::new(Language::Ja);
        let (log, _) = log_handle();

        let _subs: Vec<Subscription> = ["first", "second", "third"]
            .into_iter()
            .map(|name| {
                let log = Arc::clone(&log);
                store.subscribe(move |_| log.lock().unwrap().push(name.to_string()))
            })
            .collect();

        store.set_language(Language::En);
        assert_eq!(log.lock().unwrap().as_slice(), ["first", "second", "third"]);
    }

    #[test]
    fn test_notification_happens_after_full_update() {
        let store = LocaleStore::new(Language::Ja);
        let probe = store.clone();
        let (log, _) = log_handle();
        let sink = Arc::clone(&log);
        let _sub = store.subscribe(move |state| {
            // The store must already report the new state while we run.
            assert_eq!(probe.language(), state.language);
            assert_eq!(probe.is_rtl(), state.is_rtl);
            sink.lock().unwrap().push(state.language.code().to_string());
        });

        store.set_language(Language::Ar);
        assert_eq!(log.lock().unwrap().as_slice(), ["ar"]);
    }

    #[test]
    fn test_dropped_subscription_stops_firing() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        let sub = store.subscribe(move |state| writer(state.language.code()));

        store.set_language(Language::En);
        drop(sub);
        store.set_language(Language::Fr);

        assert_eq!(log.lock().unwrap().as_slice(), ["en"]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_remaining_subscribers_keep_order_after_drop() {
        let store = LocaleStore::new(Language::Ja);
        let (log, _) = log_handle();

        let make = |name: &'static str| {
            let log = Arc::clone(&log);
            store.subscribe(move |_| log.lock().unwrap().push(name.to_string()))
        };
        let a = make("a");
        let _b = make("b");
        let _c = make("c");
        drop(a);

        store.set_language(Language::En);
        assert_eq!(log.lock().unwrap().as_slice(), ["b", "c"]);
    }

    #[test]
    fn test_cancel_removes_immediately() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        let sub = store.subscribe(move |state| writer(state.language.code()));
        sub.cancel();
        store.set_language(Language::En);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_detach_keeps_the_callback_alive() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        store
            .subscribe(move |state| writer(state.language.code()))
            .detach();

        store.set_language(Language::En);
        store.set_language(Language::Fr);
        assert_eq!(log.lock().unwrap().as_slice(), ["en", "fr"]);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_another_mid_pass() {
        let store = LocaleStore::new(Language::Ja);
        let (log, _) = log_handle();

        let victim = store.subscribe({
            let log = Arc::clone(&log);
            move |_| log.lock().unwrap().push("victim".to_string())
        });
        let held = Arc::new(Mutex::new(Some(victim)));
        let _canceller = store.subscribe({
            let log = Arc::clone(&log);
            let held = Arc::clone(&held);
            move |_| {
                log.lock().unwrap().push("canceller".to_string());
                if let Some(sub) = held.lock().unwrap().take() {
                    sub.cancel();
                }
            }
        });

        store.set_language(Language::En);
        store.set_language(Language::Fr);
        // The victim fires once; from the second switch on it is gone.
        assert_eq!(
            log.lock().unwrap().as_slice(),
            ["victim", "canceller", "canceller"]
        );
    }

    #[test]
    fn test_notification_from_another_thread() {
        let store = LocaleStore::new(Language::Ja);
        let (log, writer) = log_handle();
        let _sub = store.subscribe(move |state| writer(state.language.code()));

        let remote = store.clone();
        std::thread::spawn(move || remote.set_language(Language::Hi))
            .join()
            .unwrap();

        assert_eq!(store.language(), Language::Hi);
        assert_eq!(log.lock().unwrap().as_slice(), ["hi"]);
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_persistent_prefers_saved_language() {
        let settings = MemorySettings::with_language(Language::Fr);
        let store = LocaleStore::persistent(settings, &["en-US"]);
        assert_eq!(store.language(), Language::Fr);
    }

    #[test]
    fn test_persistent_falls_back_to_device_locales() {
        let settings = MemorySettings::new();
        let store = LocaleStore::persistent(settings, &["en-US"]);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_persistent_falls_back_to_default() {
        let settings = MemorySettings::new();
        let none: [&str; 0] = [];
        let store = LocaleStore::persistent(settings, &none);
        assert_eq!(store.language(), Language::Ja);
    }

    #[test]
    fn test_switch_writes_through_settings() {
        let settings = MemorySettings::new();
        let inspect = settings.clone();
        let store = LocaleStore::persistent(settings, &["en-US"]);

        store.set_language(Language::Zh);
        assert_eq!(inspect.saved(), Some(Language::Zh));
    }

    #[test]
    fn test_noop_switch_does_not_write_settings() {
        let settings = MemorySettings::with_language(Language::Ko);
        let inspect = settings.clone();
        let store = LocaleStore::persistent(settings, &["en-US"]);

        inspect.clear();
        store.set_language(Language::Ko);
        assert_eq!(inspect.saved(), None);
    }

    #[test]
    fn test_failed_settings_write_does_not_disturb_switch() {
        struct FailingSettings;
        impl SettingsStore for FailingSettings {
            fn load_language(&self) -> Option<Language> {
                None
            }
            fn save_language(&self, _: Language) -> crate::error::Result<()> {
                Err(crate::error::I18nError::UnsupportedLanguage("boom".into()))
            }
        }

        let store = LocaleStore::persistent(FailingSettings, &["en-US"]);
        let (log, writer) = log_handle();
        let _sub = store.subscribe(move |state| writer(state.language.code()));

        store.set_language(Language::De);
        assert_eq!(store.language(), Language::De);
        assert_eq!(log.lock().unwrap().as_slice(), ["de"]);
    }
}
