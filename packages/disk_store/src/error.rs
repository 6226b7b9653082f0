use std::{io, path};

/// Errors raised while setting up a [`DiskStore`](crate::DiskStore).
///
/// Failures of the storage operations themselves are
/// [`StorageError`](filestore::StorageError)s.
#[derive(thiserror::Error, Debug)]
pub enum LocalStoreError {
    #[error("An error occurred trying to read the root path {}: {error}", .path.display())]
    RootPathInvalid {
        path: path::PathBuf,
        #[source]
        error: io::Error,
    },
}

impl LocalStoreError {
    pub fn path(&self) -> &path::Path {
        match self {
            LocalStoreError::RootPathInvalid { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_invalid_display() {
        let e = LocalStoreError::RootPathInvalid {
            path: path::PathBuf::from("/no/such/root"),
            error: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(format!("{}", e).contains("/no/such/root"));
        assert_eq!(e.path(), path::Path::new("/no/such/root"));
    }
}
