//! Local disk backend for the `filestore` capability.
//!
//! ```rust,no_run
//! use filestore::Storage;
//! use filestore_disk::DiskStore;
//! use std::path::Path;
//!
//! let store = DiskStore::new();
//! store.write(Path::new("cassettes/login.yaml"), b"interactions: []")?;
//! assert!(store.exists(Path::new("cassettes/login.yaml")));
//! # Ok::<(), filestore::StorageError>(())
//! ```

pub mod config;
pub mod error;
pub mod local_disk;

pub use filestore::{Result, Storage, StorageError};

pub use config::{ConfigError, DiskStoreConfig};
pub use error::LocalStoreError;
pub use local_disk::{DiskStore, DEFAULT_DIR_MODE};
