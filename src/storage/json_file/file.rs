//! Record store backed by a single pretty-printed JSON file.

use crate::domain::error::{StoreError, StoreResult};
use crate::storage::json_file::store::RecordStore;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A JSON file holding one whole collection of type `C`.
///
/// Writes go to `<file>.tmp` first and are renamed over the target, so a
/// reader sees either the previous or the new contents, never a torn file.
/// A crash between the two steps can leave the temp file behind; it is
/// overwritten by the next save.
///
/// The temp name is derived from the target, so two stores must never share
/// a path (`infra::config::collection_files` rejects that configuration).
pub struct JsonFileStore<C> {
    path: PathBuf,
    _collection: PhantomData<fn() -> C>,
}

impl<C> JsonFileStore<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _collection: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Four-space indentation, stable across saves.
fn encode_pretty<C: Serialize>(collection: &C) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    collection.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

#[async_trait]
impl<C> RecordStore<C> for JsonFileStore<C>
where
    C: Serialize + DeserializeOwned + Default + Send + Sync + 'static,
{
    async fn load(&self) -> StoreResult<C> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "collection file absent, using empty collection");
                return Ok(C::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(C::default());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, collection: &C) -> StoreResult<()> {
        let bytes = encode_pretty(collection).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "collection saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
