// Manages on-device storage for user-submitted events.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the persisted Event shape require incrementing
// LOCAL_STORAGE_VERSION below so stale data is invalidated deliberately
// instead of being misread.
use crate::context::AppContext;
use crate::model::Event;
use anyhow::Result;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Version history:
// - v1: initial format (events serialized with camelCase keys)
const LOCAL_STORAGE_VERSION: u32 = 1;

/// Wrapper struct for versioned local storage
#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    events: Vec<Event>,
}

/// The local store: one versioned JSON file under the app data dir.
///
/// The load contract never surfaces corruption to the caller: missing
/// file, unreadable JSON, or a version mismatch all resolve to an empty
/// list (logged, not raised).
pub struct LocalStore;

impl LocalStore {
    fn get_path(ctx: &dyn AppContext) -> Option<PathBuf> {
        ctx.get_local_events_path()
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp sibling then rename.
    fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the persisted local events. Always succeeds; anything wrong
    /// with the data yields an empty list.
    pub fn load(ctx: &dyn AppContext) -> Vec<Event> {
        let Some(path) = Self::get_path(ctx) else {
            return vec![];
        };
        if !path.exists() {
            return vec![];
        }
        let read = Self::with_lock(&path, || Ok(fs::read_to_string(&path)?));
        let Ok(json) = read else {
            log::warn!("Local event store unreadable; starting empty");
            return vec![];
        };
        match serde_json::from_str::<LocalStorageData>(&json) {
            Ok(data) if data.version == LOCAL_STORAGE_VERSION => data.events,
            Ok(data) => {
                log::warn!(
                    "Local event store is v{} (expected v{}); ignoring it",
                    data.version,
                    LOCAL_STORAGE_VERSION
                );
                vec![]
            }
            Err(e) => {
                log::warn!("Local event store corrupt ({}); starting empty", e);
                vec![]
            }
        }
    }

    /// Overwrites the entire persisted collection.
    pub fn save(ctx: &dyn AppContext, events: &[Event]) -> Result<()> {
        let Some(path) = Self::get_path(ctx) else {
            anyhow::bail!("No data directory available");
        };
        Self::with_lock(&path, || {
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                events: events.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(&path, json)?;
            Ok(())
        })
    }

    /// Removes all persisted local events.
    pub fn clear(ctx: &dyn AppContext) -> Result<()> {
        let Some(path) = Self::get_path(ctx) else {
            return Ok(());
        };
        if path.exists() {
            Self::with_lock(&path, || {
                fs::remove_file(&path)?;
                Ok(())
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use crate::model::normalize::{RawEvent, normalize};
    use serial_test::serial;

    fn sample_event(title: &str) -> Event {
        normalize(vec![RawEvent {
            title: Some(title.to_string()),
            start: Some("2026-03-04T12:00:00Z".to_string()),
            ..Default::default()
        }])
        .remove(0)
    }

    #[test]
    #[serial]
    fn test_roundtrip() {
        let ctx = TestContext::new();
        let events = vec![sample_event("Bagels"), sample_event("Soup")];
        LocalStore::save(&ctx, &events).unwrap();

        let loaded = LocalStore::load(&ctx);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "Bagels");
    }

    #[test]
    #[serial]
    fn test_corrupt_data_resolves_to_empty() {
        let ctx = TestContext::new();
        let path = ctx.get_local_events_path().unwrap();
        fs::write(&path, "{ not json at all").unwrap();
        assert!(LocalStore::load(&ctx).is_empty());
    }

    #[test]
    #[serial]
    fn test_version_mismatch_resolves_to_empty() {
        let ctx = TestContext::new();
        let path = ctx.get_local_events_path().unwrap();
        fs::write(&path, r#"{"version": 99, "events": []}"#).unwrap();
        assert!(LocalStore::load(&ctx).is_empty());
    }

    #[test]
    #[serial]
    fn test_clear_removes_everything() {
        let ctx = TestContext::new();
        LocalStore::save(&ctx, &[sample_event("Donuts")]).unwrap();
        LocalStore::clear(&ctx).unwrap();
        assert!(LocalStore::load(&ctx).is_empty());
    }
}
