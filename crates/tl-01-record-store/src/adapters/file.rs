use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed key-value store.
///
/// Keeps the full map in memory and rewrites a snapshot file after every
/// write. The snapshot is written to a temp file and renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
///
/// Snapshot format: repeated `[key_len:u32 LE][key][value_len:u32 LE][value]`.
pub struct FileBackedKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, loading an existing snapshot if present.
    ///
    /// # Errors
    ///
    /// `CorruptionError` if the snapshot is truncated, `IOError` if it
    /// cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).map_err(|e| KVStoreError::IOError {
                    message: e.to_string(),
                })?;
                let data = Self::decode_snapshot(&bytes)?;
                info!(
                    "[tl-01] 💾 Loaded {} keys from {} ({} bytes)",
                    data.len(),
                    path.display(),
                    bytes.len()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("[tl-01] 📁 No existing storage file at {}", path.display());
                HashMap::new()
            }
            Err(e) => {
                return Err(KVStoreError::IOError {
                    message: e.to_string(),
                })
            }
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode_snapshot(bytes: &[u8]) -> Result<HashMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut data = HashMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let key = Self::read_chunk(bytes, &mut cursor)?;
            let value = Self::read_chunk(bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn read_chunk(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
        let truncated = |at: usize| KVStoreError::CorruptionError {
            message: format!("snapshot truncated at byte {}", at),
        };

        let len_end = cursor.checked_add(4).ok_or_else(|| truncated(*cursor))?;
        let len_bytes: [u8; 4] = bytes
            .get(*cursor..len_end)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| truncated(*cursor))?;
        let len = u32::from_le_bytes(len_bytes) as usize;

        let end = len_end.checked_add(len).ok_or_else(|| truncated(len_end))?;
        let chunk = bytes.get(len_end..end).ok_or_else(|| truncated(len_end))?;

        *cursor = end;
        Ok(chunk.to_vec())
    }

    fn encode_snapshot(&self) -> Result<Vec<u8>, KVStoreError> {
        let mut bytes = Vec::new();
        for (key, value) in &self.data {
            for chunk in [key, value] {
                let len = u32::try_from(chunk.len()).map_err(|_| KVStoreError::IOError {
                    message: format!("entry of {} bytes exceeds snapshot limit", chunk.len()),
                })?;
                bytes.extend_from_slice(&len.to_le_bytes());
                bytes.extend_from_slice(chunk);
            }
        }
        Ok(bytes)
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        let io_err = |e: std::io::Error| KVStoreError::IOError {
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let bytes = self.encode_snapshot()?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;

        debug!(keys = self.data.len(), bytes = bytes.len(), "[tl-01] Snapshot written");
        Ok(())
    }

    /// Apply `operations` to a copy, persist it, then swap it in.
    fn commit(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let previous = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }

        if let Err(e) = self.save_to_file() {
            self.data = previous;
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.commit(vec![BatchOperation::put(key, value)])
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.commit(vec![BatchOperation::delete(key)])
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.commit(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }
}
