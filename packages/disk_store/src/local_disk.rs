use std::{fs, io, path};

use bytes::Bytes;

use crate::config::DiskStoreConfig;
use crate::error::LocalStoreError;
use filestore::{Storage, StorageError};

/// Mode given to directories created on the way to a written file.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// `Storage` backed by the local filesystem.
///
/// Holds no open handles between calls; every operation goes straight to the
/// OS. Errors report the name the caller passed, while log lines show the
/// resolved file path.
#[derive(Debug, Clone, Default)]
pub struct DiskStore {
    root: Option<path::PathBuf>,
}

impl DiskStore {
    /// A store that uses names exactly as given.
    pub fn new() -> DiskStore {
        DiskStore { root: None }
    }

    /// A store that resolves relative names beneath `root`.
    ///
    /// `root` must already exist and be a directory. Names containing a `..`
    /// component are refused so they cannot climb out of it; absolute names
    /// are used as given.
    pub fn with_root(root: impl Into<path::PathBuf>) -> Result<DiskStore, LocalStoreError> {
        let root = root.into();
        let attr = fs::metadata(&root).map_err(|error| LocalStoreError::RootPathInvalid {
            path: root.clone(),
            error,
        })?;

        if !attr.is_dir() {
            return Err(LocalStoreError::RootPathInvalid {
                path: root,
                error: io::Error::other("Root path must be a directory."),
            });
        }

        Ok(DiskStore { root: Some(root) })
    }

    pub fn from_config(config: &DiskStoreConfig) -> Result<DiskStore, LocalStoreError> {
        match &config.root {
            Some(root) => DiskStore::with_root(root.clone()),
            None => Ok(DiskStore::new()),
        }
    }

    pub fn root(&self) -> Option<&path::Path> {
        self.root.as_deref()
    }

    fn name_to_file_path(&self, name: &path::Path) -> io::Result<path::PathBuf> {
        let Some(root) = &self.root else {
            return Ok(name.to_path_buf());
        };

        if name
            .components()
            .any(|c| matches!(c, path::Component::ParentDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Name ({}) may not leave the store root ({}).",
                    name.display(),
                    root.display()
                ),
            ));
        }

        Ok(root.join(name))
    }

    fn ensure_parent_directory(file_path: &path::Path) -> io::Result<()> {
        let parent = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };

        match fs::metadata(parent) {
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::debug!("Creating directory {}...", parent.display());

                let mut builder = fs::DirBuilder::new();
                builder.recursive(true);
                #[cfg(unix)]
                {
                    use std::os::unix::fs::DirBuilderExt;
                    builder.mode(DEFAULT_DIR_MODE);
                }
                builder.create(parent)
            }
            // Anything else is left for the file creation below to report.
            _ => Ok(()),
        }
    }
}

impl Storage for DiskStore {
    fn read(&self, name: &path::Path) -> filestore::Result<Bytes> {
        let file_path = self
            .name_to_file_path(name)
            .map_err(|error| StorageError::from_read(name, error))?;
        log::debug!("Reading {}...", file_path.display());

        fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|error| StorageError::from_read(name, error))
    }

    fn write(&self, name: &path::Path, data: &[u8]) -> filestore::Result<()> {
        use io::Write;

        let file_path = self
            .name_to_file_path(name)
            .map_err(|error| StorageError::from_write(name, error))?;
        Self::ensure_parent_directory(&file_path)
            .map_err(|error| StorageError::from_write(name, error))?;

        log::debug!("Writing {} bytes to {}...", data.len(), file_path.display());

        let mut f =
            fs::File::create(&file_path).map_err(|error| StorageError::from_write(name, error))?;
        f.write_all(data)
            .map_err(|error| StorageError::from_write(name, error))
    }

    fn exists(&self, name: &path::Path) -> bool {
        let file_path = match self.name_to_file_path(name) {
            Ok(file_path) => file_path,
            Err(error) => {
                log::debug!("Treating {} as absent: {}", name.display(), error);
                return false;
            }
        };

        match fs::metadata(&file_path) {
            Ok(_) => true,
            Err(error) if error.kind() == io::ErrorKind::NotFound => false,
            Err(error) => {
                log::debug!(
                    "Treating {} as absent after stat error: {}",
                    file_path.display(),
                    error
                );
                false
            }
        }
    }
}
