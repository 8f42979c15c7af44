use error_stack::{Report, ResultExt};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

mod error;
pub use error::*;

/// A whole-document JSON store.
///
/// Every collection this service persists lives in a single JSON file
/// that is read and rewritten as one unit. The handle is constructed
/// once at startup and shared through [`App`](crate::App); mutations go
/// through [`JsonStore::begin`], which holds the store's mutex for the
/// entire read-modify-write cycle so two concurrent writers cannot
/// interleave between reading the document and persisting it back.
///
/// Writes land in a temporary file first and are renamed over the
/// store path, so a crash mid-write leaves the previous document
/// intact.
pub struct JsonStore<D> {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for JsonStore<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            write_lock: Arc::clone(&self.write_lock),
            _document: PhantomData,
        }
    }
}

impl<D> std::fmt::Debug for JsonStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore")
            .field("path", &self.path)
            .finish()
    }
}

impl<D> JsonStore<D>
where
    D: Default + DeserializeOwned + Serialize,
{
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
            _document: PhantomData,
        }
    }

    /// Reads the whole document. A store file that does not exist yet
    /// reads as the empty document.
    #[tracing::instrument(name = "store.read", skip(self), fields(path = %self.path.display()))]
    pub async fn read(&self) -> Result<D> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .change_context(Error::Corrupted)
                .attach_printable_lazy(|| format!("in {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(D::default()),
            Err(e) => Err(Report::new(Error::Io(e))),
        }
    }

    /// Starts a read-modify-write cycle. The returned transaction
    /// holds the store's write lock until it is committed or dropped;
    /// dropping without [`Transaction::commit`] discards the changes.
    #[tracing::instrument(name = "store.begin", skip(self), fields(path = %self.path.display()))]
    pub async fn begin(&self) -> Result<Transaction<'_, D>> {
        let guard = self.write_lock.lock().await;
        let document = self.read().await?;
        Ok(Transaction {
            path: &self.path,
            document,
            _guard: guard,
        })
    }
}

/// An exclusive view over one store's document.
pub struct Transaction<'a, D: Serialize> {
    path: &'a Path,
    document: D,
    _guard: MutexGuard<'a, ()>,
}

impl<D: Serialize> Deref for Transaction<'_, D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.document
    }
}

impl<D: Serialize> DerefMut for Transaction<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.document
    }
}

impl<D: Serialize> Transaction<'_, D> {
    /// Persists the document by writing a sibling temp file and
    /// renaming it over the store path.
    #[tracing::instrument(name = "store.commit", skip(self), fields(path = %self.path.display()))]
    pub async fn commit(self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.document).change_context(Error::Encode)?;

        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, &bytes).await.into_store_error()?;
        tokio::fs::rename(&staging, self.path).await.into_store_error()?;

        Ok(())
    }
}
