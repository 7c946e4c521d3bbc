//! File-backed key-value cache with per-entry expiry.
//!
//! Each key maps to one JSON file holding a `{value, expires_at}` envelope.
//! Persistence is an optimization, never a correctness requirement: every
//! failure mode (unwritable directory, corrupt payload, IO error) degrades to
//! a cache miss and is logged at debug level rather than propagated. Entries
//! survive process restarts on the same machine; nothing is synchronized
//! across machines.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use parkscout_core::{Theme, UserLocation};

use crate::keys;

/// Default TTL for a cached user location.
pub const DEFAULT_LOCATION_TTL: Duration = Duration::from_secs(60 * 60);

/// On-disk wrapper around a stored value. `expires_at: None` means the entry
/// never expires.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    value: serde_json::Value,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

/// Best-effort persistent cache keyed by short string names.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Opens a store rooted at `dir`, creating the directory if possible.
    ///
    /// A directory that cannot be created is not an error: reads will miss
    /// and writes will be dropped, both logged at debug level.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::debug!(dir = %dir.display(), error = %e, "failed to create cache directory");
        }
        Self { dir }
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// Returns `None` when the key is absent, the envelope is corrupt (the
    /// entry is removed as a side effect), the stored value does not match
    /// `T` (also removed), or the entry has expired (also removed).
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, Utc::now())
    }

    /// Stores `value` under `key`, expiring `ttl` from now when given.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        self.set_at(key, value, ttl, Utc::now());
    }

    /// Best-effort removal of the entry under `key`.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(key, error = %e, "failed to remove cache entry");
            }
        }
    }

    /// The cached user location, if present and unexpired.
    pub fn location(&self) -> Option<UserLocation> {
        self.get(keys::USER_LOCATION)
    }

    /// Caches `location` for `ttl` (callers usually pass
    /// [`DEFAULT_LOCATION_TTL`] or the configured equivalent).
    pub fn set_location(&self, location: &UserLocation, ttl: Duration) {
        self.set(keys::USER_LOCATION, location, Some(ttl));
    }

    /// Drops the cached user location.
    pub fn clear_location(&self) {
        self.remove(keys::USER_LOCATION);
    }

    /// The persisted theme preference, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.get(keys::THEME)
    }

    /// Persists the theme preference. Theme entries never expire.
    pub fn set_theme(&self, theme: Theme) {
        self.set(keys::THEME, &theme, None);
    }

    fn get_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let path = self.path_for(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::debug!(key, error = %e, "failed to read cache entry");
                return None;
            }
        };

        let envelope: Envelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                // Corrupt payload: self-heal by dropping the entry.
                tracing::debug!(key, error = %e, "removing corrupt cache entry");
                self.remove(key);
                return None;
            }
        };

        if envelope.expires_at.is_some_and(|expires_at| now > expires_at) {
            tracing::debug!(key, "evicting expired cache entry");
            self.remove(key);
            return None;
        }

        match serde_json::from_value(envelope.value) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "removing cache entry of unexpected shape");
                self.remove(key);
                None
            }
        }
    }

    fn set_at<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "failed to serialize cache value");
                return;
            }
        };

        let expires_at = ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .map(|ttl| now + ttl);

        let envelope = Envelope { value, expires_at };
        let serialized = match serde_json::to_string(&envelope) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::debug!(key, error = %e, "failed to serialize cache envelope");
                return;
            }
        };

        if let Err(e) = std::fs::write(self.path_for(key), serialized) {
            tracing::debug!(key, error = %e, "failed to write cache entry");
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
