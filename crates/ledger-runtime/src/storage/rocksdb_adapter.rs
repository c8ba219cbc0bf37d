//! RocksDB backend. One `WriteBatch` per ledger write, so a record and its
//! index entry land together or not at all.

use rocksdb::{BlockBasedOptions, Cache, DBCompressionType, Options, WriteBatch, WriteOptions, DB};
use std::path::Path;
use tl_01_record_store::{BatchOperation, KVStoreError, KeyValueStore};

const BLOCK_CACHE_BYTES: usize = 32 * 1024 * 1024;
const WRITE_BUFFER_BYTES: usize = 8 * 1024 * 1024;

pub struct RocksDbStore {
    db: DB,
    sync_writes: bool,
}

fn rocks_failure(op: &str) -> impl FnOnce(rocksdb::Error) -> KVStoreError + '_ {
    move |e| KVStoreError::IOError {
        message: format!("RocksDB {op} failed: {e}"),
    }
}

impl RocksDbStore {
    /// Open or create the database at `path`. With `sync_writes` every write
    /// is fsynced before it returns.
    pub fn open(path: impl AsRef<Path>, sync_writes: bool) -> Result<Self, KVStoreError> {
        let mut table = BlockBasedOptions::default();
        table.set_bloom_filter(10.0, false);
        table.set_block_cache(&Cache::new_lru_cache(BLOCK_CACHE_BYTES));

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_write_buffer_size(WRITE_BUFFER_BYTES);
        opts.set_compression_type(DBCompressionType::Snappy);
        opts.set_block_based_table_factory(&table);

        let db = DB::open(&opts, path.as_ref()).map_err(rocks_failure("open"))?;
        Ok(Self { db, sync_writes })
    }

    fn write(&self, batch: WriteBatch, op: &str) -> Result<(), KVStoreError> {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.sync_writes);
        self.db.write_opt(batch, &opts).map_err(rocks_failure(op))
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.db.get(key).map_err(rocks_failure("get"))
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let mut batch = WriteBatch::default();
        batch.put(key, value);
        self.write(batch, "put")
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let mut batch = WriteBatch::default();
        batch.delete(key);
        self.write(batch, "delete")
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut batch = WriteBatch::default();
        for op in &operations {
            match op {
                BatchOperation::Put { key, value } => batch.put(key, value),
                BatchOperation::Delete { key } => batch.delete(key),
            }
        }
        self.write(batch, "batch write")
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        let pinned = self.db.get_pinned(key).map_err(rocks_failure("lookup"))?;
        Ok(pinned.is_some())
    }
}
