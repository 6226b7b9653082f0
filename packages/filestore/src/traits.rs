//! Core storage trait.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Result, StorageError};

/// Read, write and check for files by name.
///
/// Implementations are stateless from the caller's point of view: every
/// method takes `&self`, so a single store can be shared across threads and
/// called concurrently for different names. Concurrent writes to the same
/// name are not coordinated; whichever finishes last wins.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Storage>`.
pub trait Storage: Send + Sync {
    /// Read the full contents of the file at `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(bytes)` - The file contents.
    /// * `Err(StorageError::NotFound)` - There is no file at `name`.
    /// * `Err(StorageError::Io)` - The file exists but could not be read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filestore::{Storage, Result};
    /// use bytes::Bytes;
    /// use std::path::Path;
    ///
    /// fn load_cassette(store: &dyn Storage, name: &str) -> Result<Bytes> {
    ///     store.read(Path::new("cassettes").join(name).as_path())
    /// }
    /// ```
    fn read(&self, name: &Path) -> Result<Bytes>;

    /// Write `data` to `name`, replacing anything already there.
    ///
    /// Missing parent directories are created first. Fails with
    /// `StorageError::Io` if any step (directory creation, file creation,
    /// the write itself) fails.
    fn write(&self, name: &Path, data: &[u8]) -> Result<()>;

    /// Whether something is present at `name`.
    ///
    /// This check is best-effort: any failure to stat the name, not only
    /// "not found", is reported as `false`.
    fn exists(&self, name: &Path) -> bool;

    /// Read `name`, mapping a missing file to `Ok(None)`.
    fn read_optional(&self, name: &Path) -> Result<Option<Bytes>> {
        match self.read(name) {
            Ok(data) => Ok(Some(data)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementations for references, boxes and shared handles

impl<T: Storage + ?Sized> Storage for &T {
    fn read(&self, name: &Path) -> Result<Bytes> {
        (**self).read(name)
    }

    fn write(&self, name: &Path, data: &[u8]) -> Result<()> {
        (**self).write(name, data)
    }

    fn exists(&self, name: &Path) -> bool {
        (**self).exists(name)
    }
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn read(&self, name: &Path) -> Result<Bytes> {
        self.as_ref().read(name)
    }

    fn write(&self, name: &Path, data: &[u8]) -> Result<()> {
        self.as_ref().write(name, data)
    }

    fn exists(&self, name: &Path) -> bool {
        self.as_ref().exists(name)
    }
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn read(&self, name: &Path) -> Result<Bytes> {
        self.as_ref().read(name)
    }

    fn write(&self, name: &Path, data: &[u8]) -> Result<()> {
        self.as_ref().write(name, data)
    }

    fn exists(&self, name: &Path) -> bool {
        self.as_ref().exists(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// A simple in-memory store for testing.
    struct TestStore {
        data: Mutex<HashMap<PathBuf, Bytes>>,
    }

    impl TestStore {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    impl Storage for TestStore {
        fn read(&self, name: &Path) -> Result<Bytes> {
            self.data
                .lock()
                .unwrap()
                .get(name)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    path: name.to_path_buf(),
                })
        }

        fn write(&self, name: &Path, data: &[u8]) -> Result<()> {
            self.data
                .lock()
                .unwrap()
                .insert(name.to_path_buf(), Bytes::copy_from_slice(data));
            Ok(())
        }

        fn exists(&self, name: &Path) -> bool {
            self.data.lock().unwrap().contains_key(name)
        }
    }

    /// Always fails with a permission error.
    struct DeniedStore;

    impl Storage for DeniedStore {
        fn read(&self, name: &Path) -> Result<Bytes> {
            Err(StorageError::from_read(
                name,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ))
        }

        fn write(&self, name: &Path, _data: &[u8]) -> Result<()> {
            Err(StorageError::from_write(
                name,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ))
        }

        fn exists(&self, _name: &Path) -> bool {
            false
        }
    }

    #[test]
    fn basic_read_write_works() {
        let store = TestStore::new();

        let name = Path::new("users/123");
        store.write(name, b"hello world").unwrap();

        assert_eq!(store.read(name).unwrap(), Bytes::from_static(b"hello world"));
        assert!(store.read(Path::new("nonexistent")).unwrap_err().is_not_found());
    }

    #[test]
    fn read_optional_maps_missing_to_none() {
        let store = TestStore::new();
        assert_eq!(store.read_optional(Path::new("missing")).unwrap(), None);

        store.write(Path::new("present"), b"data").unwrap();
        assert_eq!(
            store.read_optional(Path::new("present")).unwrap(),
            Some(Bytes::from_static(b"data"))
        );
    }

    #[test]
    fn read_optional_propagates_other_errors() {
        let err = DeniedStore.read_optional(Path::new("locked")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn in_memory_store_conforms() {
        crate::trait_test_suite::all(TestStore::new);
    }

    #[test]
    fn object_safety_works() {
        let store = TestStore::new();
        let dyn_store: &dyn Storage = &store;

        dyn_store.write(Path::new("test"), b"data").unwrap();
        assert!(dyn_store.exists(Path::new("test")));
        assert_eq!(
            dyn_store.read(Path::new("test")).unwrap(),
            Bytes::from_static(b"data")
        );
    }

    #[test]
    fn ref_blanket_impl_works() {
        let store = TestStore::new();
        let store_ref: &TestStore = &store;

        store_ref.write(Path::new("ref_test"), b"ref_data").unwrap();
        assert_eq!(
            Storage::read(&store_ref, Path::new("ref_test")).unwrap(),
            Bytes::from_static(b"ref_data")
        );
    }

    #[test]
    fn box_dyn_works() {
        let boxed: Box<dyn Storage> = Box::new(TestStore::new());

        boxed.write(Path::new("dyn_test"), b"dyn_data").unwrap();
        assert_eq!(
            boxed.read(Path::new("dyn_test")).unwrap(),
            Bytes::from_static(b"dyn_data")
        );
    }

    #[test]
    fn arc_is_shareable_across_threads() {
        let store: Arc<dyn Storage> = Arc::new(TestStore::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let name = PathBuf::from(format!("thread/{}", i));
                    store.write(&name, format!("{}", i).as_bytes()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for i in 0..4 {
            let name = PathBuf::from(format!("thread/{}", i));
            assert_eq!(store.read(&name).unwrap(), Bytes::from(format!("{}", i)));
        }
    }
}
