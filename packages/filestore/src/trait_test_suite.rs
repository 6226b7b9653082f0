//! Conformance checks any `Storage` backend should pass.
//!
//! Each function takes a factory producing a fresh, empty store. Backends
//! that need scratch space (a temporary directory, say) should return a
//! wrapper that owns it, so it is cleaned up when the store is dropped.

use std::path::Path;

use bytes::Bytes;

use crate::{Storage, StorageError};

pub fn round_trip_works<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("round_trip.bin");
    let payload: Vec<u8> = (0..=255u8).collect();

    store.write(name, &payload).unwrap();
    assert_eq!(store.read(name).unwrap(), Bytes::from(payload));
}

pub fn empty_payload_works<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("empty");

    store.write(name, b"").unwrap();
    assert!(store.exists(name));
    assert!(store.read(name).unwrap().is_empty());
}

pub fn nested_write_works<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("a/b/c.txt");

    store.write(name, b"hello").unwrap();
    assert!(store.exists(name));
    assert_eq!(store.read(name).unwrap(), Bytes::from_static(b"hello"));
}

pub fn exists_tracks_writes<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("tracked/file");

    assert!(!store.exists(name));
    store.write(name, b"now you see me").unwrap();
    assert!(store.exists(name));
}

pub fn missing_read_is_not_found<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("never/written");

    match store.read(name) {
        Err(StorageError::NotFound { path }) => assert_eq!(path.as_path(), name),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(store.read_optional(name).unwrap(), None);
}

pub fn overwrite_replaces<S: Storage>(store_factory: fn() -> S) {
    let store = store_factory();
    let name = Path::new("overwrite/me");

    store.write(name, b"a much longer first payload").unwrap();
    store.write(name, b"second").unwrap();
    assert_eq!(store.read(name).unwrap(), Bytes::from_static(b"second"));
}

/// Run every check above against `store_factory`.
pub fn all<S: Storage>(store_factory: fn() -> S) {
    round_trip_works(store_factory);
    empty_payload_works(store_factory);
    nested_write_works(store_factory);
    exists_tracks_writes(store_factory);
    missing_read_is_not_found(store_factory);
    overwrite_replaces(store_factory);
}
