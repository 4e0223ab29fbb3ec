//! On-disk blob store backing product image uploads.
//!
//! A `BlobKey` maps onto a relative path below the storage root. Uploads are
//! written to a temporary file in `INCOMING_DIR` and persisted under their key
//! once complete. Keys cannot start a segment with a dot, so nothing in
//! `INCOMING_DIR` is ever reachable as a blob.

use common::gateway::BlobKey;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::ApiError;

/// Public path prefix under which stored blobs are served.
pub const MEDIA_PREFIX: &str = "/media";

/// Directory below the storage root holding uploads in progress.
const INCOMING_DIR: &str = ".incoming";

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
    limit_bytes: usize,
}

impl BlobStore {
    pub fn new(root: impl AsRef<Path>, limit_bytes: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            limit_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    pub fn path_for(&self, key: &BlobKey) -> PathBuf {
        key.segments()
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    pub fn exists(&self, key: &BlobKey) -> bool {
        self.path_for(key).is_file()
    }

    pub fn public_url(&self, key: &BlobKey) -> String {
        format!("{}/{}", MEDIA_PREFIX, key)
    }

    /// Starts writing the blob stored under `key`.
    pub fn writer(&self, key: &BlobKey) -> Result<BlobWriter, ApiError> {
        let target = self.path_for(key);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let incoming = self.root.join(INCOMING_DIR);
        fs::create_dir_all(&incoming)?;
        Ok(BlobWriter {
            writer: BufWriter::new(NamedTempFile::new_in(incoming)?),
            target,
            written: 0,
            limit: self.limit_bytes,
        })
    }
}

/// An upload in progress. Dropping it without `finish` discards the data.
pub struct BlobWriter {
    writer: BufWriter<NamedTempFile>,
    target: PathBuf,
    written: usize,
    limit: usize,
}

impl BlobWriter {
    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), ApiError> {
        self.written = self.written.saturating_add(chunk.len());
        if self.written > self.limit {
            return Err(ApiError::TooLarge { limit: self.limit });
        }
        self.writer.write_all(chunk)?;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes the data and moves it under its final key, replacing any
    /// previous blob there.
    pub fn finish(self) -> Result<(), ApiError> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.persist(&self.target).map_err(|e| e.error)?;
        Ok(())
    }

    /// Discards the partial upload.
    pub fn abort(self) {
        drop(self.writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> BlobKey {
        BlobKey::parse(raw).unwrap()
    }

    #[test]
    fn writes_and_publishes_a_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path(), 1024);
        let key = key("products/1_photo.png");

        let mut writer = store.writer(&key).unwrap();
        writer.write_chunk(b"hello ").unwrap();
        writer.write_chunk(b"world").unwrap();
        assert!(!store.exists(&key));
        writer.finish().unwrap();

        assert!(store.exists(&key));
        assert_eq!(fs::read(store.path_for(&key)).unwrap(), b"hello world");
        assert_eq!(store.public_url(&key), "/media/products/1_photo.png");
    }

    #[test]
    fn refuses_blobs_over_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path(), 4);
        let key = key("big.bin");

        let mut writer = store.writer(&key).unwrap();
        let result = writer.write_chunk(b"12345");
        assert!(matches!(result, Err(ApiError::TooLarge { limit: 4 })));
        writer.abort();

        assert!(!store.exists(&key));
        assert!(!dir.path().join("big.bin").exists());
        assert_eq!(incoming_files(&store), 0);
    }

    #[test]
    fn unfinished_upload_is_not_reachable_by_any_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path(), 1024);
        let key = key("products/1_a.png");

        let mut writer = store.writer(&key).unwrap();
        writer.write_chunk(b"half").unwrap();

        assert!(!store.exists(&key));
        assert!(BlobKey::parse("products/1_a.png.part").is_ok_and(|k| !store.exists(&k)));
        assert_eq!(fs::read_dir(dir.path().join("products")).unwrap().count(), 0);
        assert!(BlobKey::parse(&format!("{INCOMING_DIR}/x")).is_err());
        assert_eq!(incoming_files(&store), 1);

        drop(writer);
        assert_eq!(incoming_files(&store), 0);
    }

    #[test]
    fn concurrent_uploads_to_one_key_do_not_clobber_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let store = BlobStore::new(dir.path(), 1024);
        let key = key("products/2_b.png");

        let mut first = store.writer(&key).unwrap();
        let mut second = store.writer(&key).unwrap();
        first.write_chunk(b"first").unwrap();
        second.write_chunk(b"second").unwrap();
        first.finish().unwrap();
        assert_eq!(fs::read(store.path_for(&key)).unwrap(), b"first");

        second.finish().unwrap();
        assert_eq!(fs::read(store.path_for(&key)).unwrap(), b"second");
    }

    fn incoming_files(store: &BlobStore) -> usize {
        fs::read_dir(store.root().join(INCOMING_DIR))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
