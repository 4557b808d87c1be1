//! Persistent extension to referral server database
//!
//! The whole mapping is rewritten on every change (temp file, then rename) so
//! the file on disk always reflects every entry applied so far.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::error::{ReferralError, Result};
use crate::types::{ApplyOutcome, Resolution};

/// Extension to referral server mapping backed by a JSON file.
///
/// Share it behind an `Arc`; all reads see updates applied during a pass.
#[derive(Debug)]
pub struct ReferralStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    writes: AtomicU64,
}

impl ReferralStore {
    /// Load the database at `path`, or start empty when the file is missing.
    ///
    /// `null` and empty values left by older databases are dropped.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.is_file() {
            read_entries(&path)?
        } else {
            tracing::debug!(path = %path.display(), "No referral database yet, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
            writes: AtomicU64::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored referral server for an extension
    pub fn get(&self, extension: &str) -> Option<String> {
        self.entries.lock().get(&normalize(extension)).cloned()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.entries.lock().contains_key(&normalize(extension))
    }

    /// Referral server responsible for a domain, keyed by its last label
    pub fn referral_for_domain(&self, domain: &str) -> Option<String> {
        let domain = domain.trim().trim_end_matches('.');
        let extension = domain.rsplit('.').next()?;
        if extension.is_empty() {
            return None;
        }
        self.get(extension)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Copy of the current mapping
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().clone()
    }

    /// Number of times the database was persisted by this instance
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Record a resolution and persist when it changes the mapping.
    ///
    /// Unresolved results never touch the store. On a persistence failure the
    /// in-memory mapping is rolled back and the error returned.
    pub fn apply(&self, extension: &str, resolution: &Resolution) -> Result<ApplyOutcome> {
        let server = match resolution.server() {
            Some(server) if !server.is_empty() => server,
            _ => return Ok(ApplyOutcome::Skipped),
        };
        let extension = normalize(extension);

        let mut entries = self.entries.lock();
        let previous = match entries.get(&extension) {
            Some(current) if current == server => return Ok(ApplyOutcome::Unchanged),
            Some(current) => Some(current.clone()),
            None => None,
        };

        entries.insert(extension.clone(), server.to_string());
        if let Err(e) = self.persist(&entries) {
            match previous {
                Some(old) => entries.insert(extension, old),
                None => entries.remove(&extension),
            };
            return Err(e);
        }

        let outcome = if previous.is_some() {
            ApplyOutcome::Updated
        } else {
            ApplyOutcome::Inserted
        };
        tracing::debug!(extension = %extension, server = %server, outcome = %outcome, "Referral stored");
        Ok(outcome)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReferralError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            ReferralError::internal(format!("Failed to serialize referral database: {}", e))
        })?;

        let tmp = temp_path(&self.path);
        std::fs::write(&tmp, content).map_err(|e| {
            ReferralError::io(e.to_string(), Some(tmp.to_string_lossy().to_string()))
        })?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(ReferralError::io(
                e.to_string(),
                Some(self.path.to_string_lossy().to_string()),
            ));
        }

        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ReferralError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let raw: BTreeMap<String, Option<String>> = serde_json::from_str(&content).map_err(|e| {
        ReferralError::parse(
            format!("{}: {}", path.display(), e),
            Some(content.chars().take(200).collect()),
        )
    })?;

    let total = raw.len();
    let entries: BTreeMap<String, String> = raw
        .into_iter()
        .filter_map(|(extension, server)| {
            let server = server.filter(|s| !s.is_empty())?;
            Some((normalize(&extension), server))
        })
        .collect();

    if entries.len() < total {
        tracing::debug!(
            path = %path.display(),
            dropped = total - entries.len(),
            "Dropped entries without a referral server"
        );
    }
    Ok(entries)
}

fn normalize(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dynamic(server: &str) -> Resolution {
        Resolution::Dynamic(server.to_string())
    }

    fn read_file(path: &Path) -> BTreeMap<String, String> {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = ReferralStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.writes(), 0);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_insert_persists_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = ReferralStore::load(&path).unwrap();

        let outcome = store.apply("example", &dynamic("whois.nic.example")).unwrap();

        assert_eq!(outcome, ApplyOutcome::Inserted);
        assert_eq!(store.writes(), 1);
        let on_disk = read_file(&path);
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk["example"], "whois.nic.example");
    }

    #[test]
    fn test_unchanged_does_not_write() {
        let dir = TempDir::new().unwrap();
        let store = ReferralStore::load(dir.path().join("db.json")).unwrap();

        store.apply("io", &dynamic("whois.nic.io")).unwrap();
        let outcome = store.apply("io", &Resolution::Manual("whois.nic.io".into())).unwrap();

        assert_eq!(outcome, ApplyOutcome::Unchanged);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_changed_value_updates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = ReferralStore::load(&path).unwrap();

        store.apply("io", &dynamic("whois.nic.io")).unwrap();
        let outcome = store.apply("io", &dynamic("whois.identity.io")).unwrap();

        assert_eq!(outcome, ApplyOutcome::Updated);
        assert_eq!(store.writes(), 2);
        assert_eq!(read_file(&path)["io"], "whois.identity.io");
    }

    #[test]
    fn test_unresolved_keeps_existing_entry() {
        let dir = TempDir::new().unwrap();
        let store = ReferralStore::load(dir.path().join("db.json")).unwrap();

        store.apply("io", &dynamic("whois.nic.io")).unwrap();
        let outcome = store.apply("io", &Resolution::Unresolved).unwrap();

        assert_eq!(outcome, ApplyOutcome::Skipped);
        assert_eq!(store.get("io").as_deref(), Some("whois.nic.io"));
        assert_eq!(store.apply("zzz", &Resolution::Unresolved).unwrap(), ApplyOutcome::Skipped);
        assert!(!store.contains("zzz"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_empty_server_is_skipped() {
        let dir = TempDir::new().unwrap();
        let store = ReferralStore::load(dir.path().join("db.json")).unwrap();
        assert_eq!(store.apply("io", &dynamic("")).unwrap(), ApplyOutcome::Skipped);
        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("db.json");
        {
            let store = ReferralStore::load(&path).unwrap();
            store.apply("Example", &dynamic("Whois.Nic.Example")).unwrap();
        }

        let store = ReferralStore::load(&path).unwrap();
        assert_eq!(store.get("example").as_deref(), Some("Whois.Nic.Example"));
        assert_eq!(store.get("EXAMPLE").as_deref(), Some("Whois.Nic.Example"));
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_load_drops_null_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{"com": "whois.verisign-grs.com", "zzz": null, "yy": ""}"#).unwrap();

        let store = ReferralStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.contains("zzz"));
        assert!(!store.contains("yy"));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = ReferralStore::load(&path).unwrap_err();
        assert!(matches!(err, ReferralError::Parse { .. }));
    }

    #[test]
    fn test_persist_failure_rolls_back() {
        let dir = TempDir::new().unwrap();
        // The destination is a directory, so the final rename fails.
        let path = dir.path().join("db.json");
        std::fs::create_dir(&path).unwrap();
        let store = ReferralStore {
            path: path.clone(),
            entries: Mutex::new(BTreeMap::new()),
            writes: AtomicU64::new(0),
        };

        let err = store.apply("io", &dynamic("whois.nic.io")).unwrap_err();
        assert!(matches!(err, ReferralError::Io { .. }));
        assert!(!store.contains("io"));
        assert_eq!(store.writes(), 0);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_referral_for_domain() {
        let dir = TempDir::new().unwrap();
        let store = ReferralStore::load(dir.path().join("db.json")).unwrap();
        store.apply("com", &dynamic("whois.verisign-grs.com")).unwrap();

        assert_eq!(store.referral_for_domain("www.Example.COM.").as_deref(), Some("whois.verisign-grs.com"));
        assert_eq!(store.referral_for_domain("com").as_deref(), Some("whois.verisign-grs.com"));
        assert_eq!(store.referral_for_domain("example.org"), None);
        assert_eq!(store.referral_for_domain(""), None);
    }
}
