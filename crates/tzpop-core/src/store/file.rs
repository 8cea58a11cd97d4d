// crates/tzpop-core/src/store/file.rs
use crate::error::{Result, TzError};
use crate::traits::PopularityStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

type Counts = BTreeMap<String, u64>;

/// Counter store persisted as a flat JSON object: `{ "Region/City": count }`.
///
/// All access is serialised through one mutex and every increment is written
/// through to disk (temp file + rename), so the file always holds a complete
/// map. Meant for a single process; two processes sharing one file will
/// overwrite each other.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    counts: Mutex<Counts>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let counts = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Counts::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                TzError::StoreUnavailable(format!("{} is not a count map: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Counts::new(),
            Err(e) => {
                return Err(TzError::StoreUnavailable(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };
        debug!(path = %path.display(), keys = counts.len(), "opened json file store");
        Ok(Self {
            path,
            counts: Mutex::new(counts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Counts>> {
        self.counts
            .lock()
            .map_err(|_| TzError::StoreUnavailable("store lock poisoned".into()))
    }

    fn persist(&self, counts: &Counts) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(counts)
            .map_err(|e| TzError::StoreUnavailable(e.to_string()))?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, bytes)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                TzError::StoreUnavailable(format!("cannot write {}: {e}", self.path.display()))
            })
    }
}

/// Sibling of `path` with `.tmp` appended to the full file name.
fn temp_path(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!("{name}.tmp"))
}

impl PopularityStore for JsonFileStore {
    fn increment(&self, key: &str) -> Result<u64> {
        let mut counts = self.lock()?;
        let count = counts.entry(key.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        let new = *count;
        if let Err(e) = self.persist(&counts) {
            // Keep memory and disk in step.
            match counts.get_mut(key) {
                Some(c) if *c > 1 => *c -= 1,
                _ => {
                    counts.remove(key);
                }
            }
            return Err(e);
        }
        debug!(key, count = new, "json file store increment");
        Ok(new)
    }

    fn get(&self, key: &str) -> Result<u64> {
        Ok(self.lock()?.get(key).copied().unwrap_or(0))
    }
}
