//! filestore: a storage capability over named files.
//!
//! Three operations, nothing more: read a file's bytes, write bytes to a file
//! (creating parent directories on the way), and check whether a file is
//! there. Callers program against [`Storage`]; the backend behind it can be
//! swapped without touching them.
//!
//! # Example
//!
//! ```rust
//! use filestore::{Storage, StorageError, Result};
//! use bytes::Bytes;
//! use std::collections::HashMap;
//! use std::path::{Path, PathBuf};
//! use std::sync::Mutex;
//!
//! struct InMemoryStore {
//!     data: Mutex<HashMap<PathBuf, Bytes>>,
//! }
//!
//! impl Storage for InMemoryStore {
//!     fn read(&self, name: &Path) -> Result<Bytes> {
//!         self.data.lock().unwrap().get(name).cloned().ok_or_else(|| {
//!             StorageError::NotFound { path: name.to_path_buf() }
//!         })
//!     }
//!
//!     fn write(&self, name: &Path, data: &[u8]) -> Result<()> {
//!         self.data
//!             .lock()
//!             .unwrap()
//!             .insert(name.to_path_buf(), Bytes::copy_from_slice(data));
//!         Ok(())
//!     }
//!
//!     fn exists(&self, name: &Path) -> bool {
//!         self.data.lock().unwrap().contains_key(name)
//!     }
//! }
//! ```
//!
//! # Async Support
//!
//! Enable the `async` feature for [`AsyncStorage`] and the [`Blocking`]
//! adapter, which runs any sync `Storage` on Tokio's blocking pool.
//!
//! ```toml
//! [dependencies]
//! filestore = { version = "0.1", features = ["async"] }
//! ```

pub use bytes::Bytes;

mod error;
mod traits;

pub use error::{Result, StorageError};
pub use traits::Storage;

#[cfg(feature = "async")]
mod async_traits;

#[cfg(feature = "async")]
pub use async_traits::{AsyncStorage, Blocking};

#[cfg(any(test, feature = "test-utils"))]
pub mod trait_test_suite;
