use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write rejected for {0}")]
    WriteRejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Synchronous string key-value persistence.
pub trait PreferencePort {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferencePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferencePort for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| PreferenceError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| PreferenceError::WriteRejected(key.to_string()))
    }
}

pub struct PreferenceStore<P> {
    port: P,
}

impl<P: PreferencePort> PreferenceStore<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Resolves the session theme and writes it back to storage.
    pub fn initialize_theme(&self, system_prefers_dark: bool) -> Theme {
        let saved = match self.port.get(THEME_KEY) {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!("theme read failed: {err}");
                None
            }
        };
        let theme = resolve_theme(saved.as_deref(), system_prefers_dark);
        if let Err(err) = self.port.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("theme write failed: {err}");
        }
        theme
    }

    #[cfg(test)]
    pub fn port(&self) -> &P {
        &self.port
    }
}

fn resolve_theme(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    match saved {
        Some(value) if !value.is_empty() => {
            if value == Theme::Dark.as_str() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        // The system signal is OR'd with a constant `true`: dark wins regardless.
        _ => {
            tracing::debug!("no saved theme, system prefers dark: {system_prefers_dark}");
            Theme::Dark
        }
    }
}

/// Reads, persists and applies the theme. Called once from `main`, before launch.
pub fn bootstrap_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    let store = PreferenceStore::new(BrowserStorage);
    #[cfg(not(target_arch = "wasm32"))]
    let store = PreferenceStore::new(MemoryStore::default());
    let theme = store.initialize_theme(system_prefers_dark());
    apply_theme(theme);
    theme
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        tracing::warn!("theme not applied: document unavailable");
        return;
    };
    if root
        .class_list()
        .toggle_with_force("dark", theme.is_dark())
        .is_err()
    {
        tracing::warn!("theme not applied: class toggle failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme(theme: Theme) {
    tracing::debug!("theme resolved to {}, dark: {}", theme.as_str(), theme.is_dark());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct BrokenStorage;

    impl PreferencePort for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::WriteRejected(key.to_string()))
        }
    }

    fn saved_theme(store: &PreferenceStore<MemoryStore>) -> Option<String> {
        store.port().get(THEME_KEY).unwrap()
    }

    #[test]
    fn defaults_to_dark_even_when_system_prefers_light() {
        let store = PreferenceStore::new(MemoryStore::default());
        assert_eq!(store.initialize_theme(false), Theme::Dark);
        assert_eq!(saved_theme(&store).as_deref(), Some("dark"));
    }

    #[test]
    fn explicit_light_is_respected_and_rewritten() {
        let store = PreferenceStore::new(MemoryStore::with_value(THEME_KEY, "light"));
        assert_eq!(store.initialize_theme(true), Theme::Light);
        assert_eq!(saved_theme(&store).as_deref(), Some("light"));
    }

    #[test]
    fn empty_saved_value_counts_as_absent() {
        let store = PreferenceStore::new(MemoryStore::with_value(THEME_KEY, ""));
        assert_eq!(store.initialize_theme(false), Theme::Dark);
    }

    #[test]
    fn unknown_saved_value_is_not_dark() {
        let store = PreferenceStore::new(MemoryStore::with_value(THEME_KEY, "sepia"));
        assert_eq!(store.initialize_theme(true), Theme::Light);
        assert_eq!(saved_theme(&store).as_deref(), Some("light"));
    }

    #[test]
    fn storage_failures_fall_back_to_dark() {
        let store = PreferenceStore::new(BrokenStorage);
        assert_eq!(store.initialize_theme(false), Theme::Dark);
    }
}
