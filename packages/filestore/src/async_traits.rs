//! Async storage trait.
//!
//! An async version of [`Storage`](crate::Storage) for callers running on an
//! async runtime like Tokio.
//!
//! Enable the `async` feature to use it:
//!
//! ```toml
//! [dependencies]
//! filestore = { version = "0.1", features = ["async"] }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{Result, Storage, StorageError};

/// Async version of `Storage`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AsyncStorage>`.
#[async_trait]
pub trait AsyncStorage: Send + Sync {
    /// Read the full contents of the file at `name`.
    async fn read(&self, name: &Path) -> Result<Bytes>;

    /// Write `data` to `name`, creating parent directories as needed.
    async fn write(&self, name: &Path, data: Bytes) -> Result<()>;

    /// Whether something is present at `name`. Errors read as `false`.
    async fn exists(&self, name: &Path) -> bool;
}

// Blanket implementations for references, boxes and shared handles

#[async_trait]
impl<T: AsyncStorage + ?Sized> AsyncStorage for &T {
    async fn read(&self, name: &Path) -> Result<Bytes> {
        (**self).read(name).await
    }

    async fn write(&self, name: &Path, data: Bytes) -> Result<()> {
        (**self).write(name, data).await
    }

    async fn exists(&self, name: &Path) -> bool {
        (**self).exists(name).await
    }
}

#[async_trait]
impl<T: AsyncStorage + ?Sized> AsyncStorage for Box<T> {
    async fn read(&self, name: &Path) -> Result<Bytes> {
        self.as_ref().read(name).await
    }

    async fn write(&self, name: &Path, data: Bytes) -> Result<()> {
        self.as_ref().write(name, data).await
    }

    async fn exists(&self, name: &Path) -> bool {
        self.as_ref().exists(name).await
    }
}

#[async_trait]
impl<T: AsyncStorage + ?Sized> AsyncStorage for Arc<T> {
    async fn read(&self, name: &Path) -> Result<Bytes> {
        self.as_ref().read(name).await
    }

    async fn write(&self, name: &Path, data: Bytes) -> Result<()> {
        self.as_ref().write(name, data).await
    }

    async fn exists(&self, name: &Path) -> bool {
        self.as_ref().exists(name).await
    }
}

/// Adapter that exposes a sync `Storage` through `AsyncStorage`.
///
/// Each call runs on Tokio's blocking thread pool via `spawn_blocking`, so
/// it is suitable for stores that do blocking file I/O. Must be used from
/// within a Tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// use filestore::{AsyncStorage, Blocking};
///
/// let store = Blocking::new(DiskStore::new());
/// store.write(Path::new("a/b/c.txt"), Bytes::from_static(b"hello")).await?;
/// ```
pub struct Blocking<S> {
    inner: Arc<S>,
}

impl<S> Blocking<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Get a reference to the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S> Clone for Blocking<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

fn join_failure(path: PathBuf, error: tokio::task::JoinError) -> StorageError {
    log::warn!("Blocking storage task for {} failed: {}", path.display(), error);
    StorageError::Io {
        path,
        source: io::Error::other(error),
    }
}

#[async_trait]
impl<S: Storage + 'static> AsyncStorage for Blocking<S> {
    async fn read(&self, name: &Path) -> Result<Bytes> {
        let inner = self.inner.clone();
        let path = name.to_path_buf();
        let task_path = path.clone();

        tokio::task::spawn_blocking(move || inner.read(&task_path))
            .await
            .map_err(|e| join_failure(path, e))?
    }

    async fn write(&self, name: &Path, data: Bytes) -> Result<()> {
        let inner = self.inner.clone();
        let path = name.to_path_buf();
        let task_path = path.clone();

        tokio::task::spawn_blocking(move || inner.write(&task_path, &data))
            .await
            .map_err(|e| join_failure(path, e))?
    }

    async fn exists(&self, name: &Path) -> bool {
        let inner = self.inner.clone();
        let path = name.to_path_buf();
        let task_path = path.clone();

        match tokio::task::spawn_blocking(move || inner.exists(&task_path)).await {
            Ok(present) => present,
            Err(e) => {
                log::warn!("Blocking storage task for {} failed: {}", path.display(), e);
                false
            }
        }
    }
}
