use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};
use tokio::{
    fs,
    io::AsyncWriteExt,
    sync::{RwLock, RwLockWriteGuard},
};
use tracing::{debug, warn};

use models::record::{new_id, Record};

use crate::errors::ServiceError;

/// A named, ordered collection of records persisted as a JSON array.
///
/// Readers share the lock and always see the state of the last successful
/// write. Every mutation holds the write lock across the whole
/// read-modify-write cycle: the change is applied to a copy, the copy is
/// written to `<file>.tmp`, fsynced and renamed over the target, and only
/// then swapped into memory. A failed write leaves both the file and the
/// in-memory sequence as they were.
pub struct JsonCollection<R> {
    records: RwLock<Vec<R>>,
    file_path: PathBuf,
}

impl<R: Record> JsonCollection<R> {
    /// Open the collection at `path`. If no file exists yet, `defaults` is
    /// written as the initial state; otherwise the file wins and `defaults`
    /// is ignored.
    pub async fn load<P: Into<PathBuf>>(path: P, defaults: Vec<R>) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::storage(parent.display(), e))?;
        }

        let records = match fs::read(&file_path).await {
            Ok(bytes) => {
                let records: Vec<R> = serde_json::from_slice(&bytes)
                    .map_err(|e| ServiceError::storage(file_path.display(), e))?;
                ensure_unique(&records).map_err(|e| ServiceError::storage(file_path.display(), e))?;
                debug!(collection = R::COLLECTION, records = records.len(), "loaded collection");
                records
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut defaults = defaults;
                for rec in defaults.iter_mut().filter(|r| r.id().is_empty()) {
                    rec.set_id(new_id());
                }
                ensure_unique(&defaults)?;
                write_atomic::<R>(&file_path, &defaults).await?;
                debug!(collection = R::COLLECTION, records = defaults.len(), "bootstrapped collection");
                defaults
            }
            Err(e) => return Err(ServiceError::storage(file_path.display(), e)),
        };

        Ok(Self { records: RwLock::new(records), file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<R, ServiceError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("{} '{}' not found", R::COLLECTION, id)))
    }

    /// Linear scan; matches come back in collection order.
    pub async fn find_by<F>(&self, pred: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        self.records.read().await.iter().filter(|r| pred(r)).cloned().collect()
    }

    pub async fn find_first<F>(&self, pred: F) -> Option<R>
    where
        F: Fn(&R) -> bool,
    {
        self.records.read().await.iter().find(|r| pred(r)).cloned()
    }

    /// Add a record at the tail and persist. An empty id is replaced with a
    /// fresh one; a colliding id or secondary key fails with `DuplicateKey`.
    pub async fn append(&self, mut record: R) -> Result<R, ServiceError> {
        let guard = self.records.write().await;
        if record.id().is_empty() {
            let mut id = new_id();
            while guard.iter().any(|r| r.id() == id) {
                id = new_id();
            }
            record.set_id(id);
        }
        let mut next = guard.clone();
        next.push(record.clone());
        ensure_unique(&next)?;
        self.commit(guard, next).await?;
        Ok(record)
    }

    /// Apply `f` to the record with `id` and persist. The id itself cannot
    /// change. A mutation that leaves the record equal to what it was does
    /// not touch the file.
    pub async fn update<F>(&self, id: &str, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut R) -> Result<(), ServiceError>,
    {
        let guard = self.records.write().await;
        let idx = guard
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::NotFound(format!("{} '{}' not found", R::COLLECTION, id)))?;

        let mut updated = guard[idx].clone();
        f(&mut updated)?;
        if updated.id() != id {
            return Err(ServiceError::Validation("id cannot be changed".into()));
        }
        if updated == guard[idx] {
            return Ok(updated);
        }

        let mut next = guard.clone();
        next[idx] = updated.clone();
        ensure_unique(&next)?;
        self.commit(guard, next).await?;
        Ok(updated)
    }

    /// Apply a mutation to the whole sequence and persist it as one write.
    /// Used when several records must change together.
    pub async fn update_all<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T, ServiceError>,
    {
        let guard = self.records.write().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        if next == *guard {
            return Ok(out);
        }
        ensure_unique(&next)?;
        self.commit(guard, next).await?;
        Ok(out)
    }

    /// Rewrite the backing file from the in-memory sequence.
    pub async fn persist(&self) -> Result<(), ServiceError> {
        let guard = self.records.write().await;
        write_atomic::<R>(&self.file_path, &guard).await
    }

    async fn commit(&self, mut guard: RwLockWriteGuard<'_, Vec<R>>, next: Vec<R>) -> Result<(), ServiceError> {
        write_atomic::<R>(&self.file_path, &next).await?;
        *guard = next;
        Ok(())
    }
}

/// Ids must be present and unique, and so must every secondary key.
fn ensure_unique<R: Record>(records: &[R]) -> Result<(), ServiceError> {
    let mut seen: HashSet<(&'static str, &str)> = HashSet::with_capacity(records.len());
    for rec in records {
        if rec.id().is_empty() {
            return Err(ServiceError::Validation(format!("{} record without id", R::COLLECTION)));
        }
        let keys = std::iter::once(("id", rec.id())).chain(rec.unique_keys());
        for (field, value) in keys {
            if !seen.insert((field, value)) {
                return Err(ServiceError::DuplicateKey {
                    collection: R::COLLECTION,
                    field,
                    value: value.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn write_atomic<R: Record>(path: &Path, records: &[R]) -> Result<(), ServiceError> {
    let result = try_write_atomic(path, records).await;
    match &result {
        Ok(()) => {
            common::metrics::record_write(R::COLLECTION);
            debug!(collection = R::COLLECTION, records = records.len(), "persisted collection");
        }
        Err(_) => {
            common::metrics::record_write_failure(R::COLLECTION);
            let _ = fs::remove_file(tmp_path(path)).await;
        }
    }
    result
}

async fn try_write_atomic<R: Record>(path: &Path, records: &[R]) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(records).map_err(|e| ServiceError::storage(R::COLLECTION, e))?;
    let tmp = tmp_path(path);

    let mut file = fs::File::create(&tmp).await.map_err(|e| ServiceError::storage(tmp.display(), e))?;
    file.write_all(&data).await.map_err(|e| ServiceError::storage(tmp.display(), e))?;
    file.sync_all().await.map_err(|e| ServiceError::storage(tmp.display(), e))?;
    drop(file);

    fs::rename(&tmp, path).await.map_err(|e| ServiceError::storage(path.display(), e))?;

    sync_parent::<R>(path).await;
    Ok(())
}

/// The new content is already visible at this point; a failed directory
/// sync only weakens durability across power loss, so it is not an error.
#[cfg(unix)]
async fn sync_parent<R: Record>(path: &Path) {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return;
    };
    let synced = match fs::File::open(parent).await {
        Ok(dir) => dir.sync_all().await,
        Err(e) => Err(e),
    };
    if let Err(e) = synced {
        warn!(collection = R::COLLECTION, dir = %parent.display(), error = %e, "directory fsync failed");
    }
}

#[cfg(not(unix))]
async fn sync_parent<R: Record>(_path: &Path) {}
