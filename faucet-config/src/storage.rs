//! Storage backend selection for persisted wallet state.
//!
//! The backend is picked once, from an explicit [`ExecutionContext`], when the
//! wallet configuration is built. Server rendering always gets [`NoopStorage`]
//! so it never touches cookie state that only exists in a browser.

use serde::{Deserialize, Serialize};

/// Default key prefix for persisted wallet state.
pub const DEFAULT_STORAGE_KEY: &str = "wagmi";

/// Where the configuration is being constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    /// A browser document is available.
    Browser,
    /// Server-side rendering or static generation.
    Server,
}

/// Key-value persistence used by the wallet client.
pub trait Storage {
    /// Reads the value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn set_item(&mut self, key: &str, value: &str);
    /// Deletes `key`.
    fn remove_item(&mut self, key: &str);
}

/// Cookie-backed storage.
///
/// Reads come from the current `Cookie` header string; writes append the
/// `Set-Cookie` strings a browser would assign to `document.cookie`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieStorage {
    cookie: String,
    pending: Vec<String>,
}

impl CookieStorage {
    /// Creates storage over an existing `Cookie` header value.
    pub fn with_cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            pending: Vec::new(),
        }
    }

    /// Cookie strings written since construction, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    fn write(&mut self, key: &str, value: Option<&str>) {
        let mut pairs: Vec<String> = self
            .cookie
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter(|part| part.split_once('=').map_or(*part, |(k, _)| k) != key)
            .map(str::to_owned)
            .collect();
        let set_cookie = match value {
            Some(value) => {
                pairs.push(format!("{key}={value}"));
                format!("{key}={value};path=/;samesite=Lax")
            }
            None => format!("{key}=;max-age=-1;path=/"),
        };
        self.cookie = pairs.join("; ");
        self.pending.push(set_cookie);
    }
}

impl Storage for CookieStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        parse_cookie(&self.cookie, key).map(str::to_owned)
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.write(key, Some(value));
    }

    fn remove_item(&mut self, key: &str) {
        self.write(key, None);
    }
}

/// Storage that drops writes and never returns values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&mut self, _key: &str, _value: &str) {}

    fn remove_item(&mut self, _key: &str) {}
}

/// Backend chosen by [`select_storage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Persistent cookie-backed store (browser).
    Cookie(CookieStorage),
    /// No-op store (server).
    Noop(NoopStorage),
}

impl StorageBackend {
    /// Backend name as reported in serialised configuration.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cookie(_) => "cookie",
            Self::Noop(_) => "noop",
        }
    }
}

impl Storage for StorageBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            Self::Cookie(storage) => storage.get_item(key),
            Self::Noop(storage) => storage.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) {
        match self {
            Self::Cookie(storage) => storage.set_item(key, value),
            Self::Noop(storage) => storage.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) {
        match self {
            Self::Cookie(storage) => storage.remove_item(key),
            Self::Noop(storage) => storage.remove_item(key),
        }
    }
}

/// Picks the backend for `context`.
#[must_use]
pub fn select_storage(context: ExecutionContext) -> StorageBackend {
    match context {
        ExecutionContext::Browser => StorageBackend::Cookie(CookieStorage::default()),
        ExecutionContext::Server => StorageBackend::Noop(NoopStorage),
    }
}

/// Backend plus a key prefix; every key is stored as `<prefix>.<key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedStorage {
    key: String,
    backend: StorageBackend,
}

impl PrefixedStorage {
    /// Key prefix.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    /// Full storage key for `name`.
    #[must_use]
    pub fn storage_key(&self, name: &str) -> String {
        format!("{}.{name}", self.key)
    }
}

impl Storage for PrefixedStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.backend.get_item(&self.storage_key(key))
    }

    fn set_item(&mut self, key: &str, value: &str) {
        let key = self.storage_key(key);
        self.backend.set_item(&key, value);
    }

    fn remove_item(&mut self, key: &str) {
        let key = self.storage_key(key);
        self.backend.remove_item(&key);
    }
}

/// Wraps `backend` with the `key` prefix.
pub fn create_storage(backend: StorageBackend, key: impl Into<String>) -> PrefixedStorage {
    PrefixedStorage {
        key: key.into(),
        backend,
    }
}

fn parse_cookie_pairs(cookie: &str) -> impl Iterator<Item = (&str, &str)> {
    cookie
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
}

/// Returns the value of `key` in a `Cookie` header string.
#[must_use]
pub fn parse_cookie<'a>(cookie: &'a str, key: &str) -> Option<&'a str> {
    parse_cookie_pairs(cookie)
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_context_selects_noop() {
        assert_eq!(
            select_storage(ExecutionContext::Server),
            StorageBackend::Noop(NoopStorage)
        );
    }

    #[test]
    fn browser_context_selects_cookie() {
        let backend = select_storage(ExecutionContext::Browser);
        assert!(matches!(backend, StorageBackend::Cookie(_)));
        assert_eq!(backend.kind(), "cookie");
    }

    #[test]
    fn noop_storage_drops_writes() {
        let mut storage = create_storage(select_storage(ExecutionContext::Server), DEFAULT_STORAGE_KEY);
        storage.set_item("recentConnectorId", "injected");
        assert_eq!(storage.get_item("recentConnectorId"), None);
    }

    #[test]
    fn cookie_storage_prefixes_keys() {
        let mut storage = create_storage(select_storage(ExecutionContext::Browser), DEFAULT_STORAGE_KEY);
        storage.set_item("recentConnectorId", "injected");
        assert_eq!(
            storage.get_item("recentConnectorId").as_deref(),
            Some("injected")
        );
        let StorageBackend::Cookie(cookie) = storage.backend() else {
            panic!("expected cookie backend");
        };
        assert_eq!(
            cookie.pending(),
            ["wagmi.recentConnectorId=injected;path=/;samesite=Lax"]
        );
    }

    #[test]
    fn cookie_remove_expires_the_key() {
        let mut storage = CookieStorage::with_cookie("wagmi.store=abc; theme=dark");
        assert_eq!(storage.get_item("wagmi.store").as_deref(), Some("abc"));
        storage.remove_item("wagmi.store");
        assert_eq!(storage.get_item("wagmi.store"), None);
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(storage.pending(), ["wagmi.store=;max-age=-1;path=/"]);
    }

    #[test]
    fn cookie_write_keeps_valueless_entries() {
        let mut storage = CookieStorage::with_cookie("flag; theme=dark");
        storage.set_item("wagmi.store", "x");
        assert_eq!(storage.cookie, "flag; theme=dark; wagmi.store=x");
        storage.remove_item("wagmi.store");
        assert_eq!(storage.cookie, "flag; theme=dark");
    }

    #[test]
    fn parse_cookie_handles_spacing_and_missing_keys() {
        let header = "a=1;  wagmi.store={\"chainId\":1} ;b=2";
        assert_eq!(parse_cookie(header, "wagmi.store"), Some("{\"chainId\":1}"));
        assert_eq!(parse_cookie(header, "b"), Some("2"));
        assert_eq!(parse_cookie(header, "c"), None);
    }
}
