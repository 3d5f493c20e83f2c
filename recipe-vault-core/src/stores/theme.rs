//! Dark/light display preference.
//!
//! Precedence: an explicit stored choice, then the OS-level preference,
//! then light. Once the user toggles, the stored value exists and OS
//! changes are ignored until the entry is removed from storage.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::storage::{KeyValueStore, StorageKey};

pub type ListenerId = u64;
pub type ColorSchemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// The OS-level "prefers dark" signal.
pub trait ColorSchemeSource: Send + Sync {
    fn prefers_dark(&self) -> bool;

    /// Registers a listener called with the new value on every change.
    fn subscribe(&self, listener: ColorSchemeListener) -> ListenerId;

    fn unsubscribe(&self, id: ListenerId);
}

/// The global presentation marker the theme is reflected into.
pub trait DisplayMarker: Send + Sync {
    /// Set (`true`) or clear (`false`) the dark marker.
    fn set_dark(&self, dark: bool);
}

/// Stored form of an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Only the literal `dark` is dark; any other stored text is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

impl From<bool> for ThemePreference {
    fn from(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

struct ThemeShared {
    is_dark: AtomicBool,
    storage: Arc<dyn KeyValueStore>,
    marker: Arc<dyn DisplayMarker>,
}

impl ThemeShared {
    fn stored_preference(&self) -> Option<ThemePreference> {
        match self.storage.get(StorageKey::Theme) {
            Ok(value) => value.as_deref().map(ThemePreference::from_stored),
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                None
            }
        }
    }

    fn set_dark(&self, dark: bool) {
        let previous = self.is_dark.swap(dark, Ordering::SeqCst);
        if previous != dark {
            tracing::debug!("Theme changed to {}", ThemePreference::from(dark).as_str());
            self.marker.set_dark(dark);
        }
    }
}

/// Tracks whether the dark theme is active.
pub struct ThemeStore {
    shared: Arc<ThemeShared>,
    subscription: Option<(Arc<dyn ColorSchemeSource>, ListenerId)>,
}

impl ThemeStore {
    /// Starts light and clears the marker. Call [`mount`](Self::mount) to
    /// pick up the stored or OS preference.
    pub fn new(storage: Arc<dyn KeyValueStore>, marker: Arc<dyn DisplayMarker>) -> Self {
        marker.set_dark(false);
        Self {
            shared: Arc::new(ThemeShared {
                is_dark: AtomicBool::new(false),
                storage,
                marker,
            }),
            subscription: None,
        }
    }

    /// Applies the stored choice, or the OS preference if there is none,
    /// and starts listening for OS changes.
    pub fn mount(&mut self, source: Arc<dyn ColorSchemeSource>) {
        self.unmount();

        let dark = match self.shared.stored_preference() {
            Some(preference) => preference.is_dark(),
            None => source.prefers_dark(),
        };
        self.shared.set_dark(dark);

        let weak: Weak<ThemeShared> = Arc::downgrade(&self.shared);
        let id = source.subscribe(Box::new(move |prefers_dark| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if shared.stored_preference().is_none() {
                shared.set_dark(prefers_dark);
            }
        }));
        self.subscription = Some((source, id));
    }

    /// Stops listening for OS changes. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if let Some((source, id)) = self.subscription.take() {
            source.unsubscribe(id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_dark(&self) -> bool {
        self.shared.is_dark.load(Ordering::SeqCst)
    }

    /// True once a choice has been stored.
    pub fn has_explicit_preference(&self) -> bool {
        self.shared.stored_preference().is_some()
    }

    /// Flips the theme and stores the new choice.
    pub fn toggle_theme(&self) -> bool {
        let dark = !self.is_dark();
        self.shared.set_dark(dark);

        let preference = ThemePreference::from(dark);
        if let Err(e) = self.shared.storage.set(StorageKey::Theme, preference.as_str()) {
            tracing::error!("Failed to save theme: {}", e);
        }
        dark
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// A [`ColorSchemeSource`] driven by hand, for hosts without a live OS
/// signal and for tests.
pub struct ManualColorScheme {
    prefers_dark: AtomicBool,
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, ColorSchemeListener)>>,
}

impl ManualColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Updates the preference and notifies every listener.
    ///
    /// Listeners must not subscribe or unsubscribe from inside the callback.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.store(prefers_dark, Ordering::SeqCst);
        if let Ok(listeners) = self.listeners.lock() {
            for (_, listener) in listeners.iter() {
                listener(prefers_dark);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, listener));
        }
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

/// A [`DisplayMarker`] that records the marker in a flag.
#[derive(Debug, Default)]
pub struct DisplayModeFlag {
    dark: AtomicBool,
}

impl DisplayModeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }
}

impl DisplayMarker for DisplayModeFlag {
    fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}
