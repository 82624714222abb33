use crate::errors::{BattleEngineError, EngineResult};
use async_trait::async_trait;
use log::{debug, warn};
use schema::BattleResult;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Write-once storage for finished battles.
#[async_trait]
pub trait BattleStore: Send + Sync {
    /// Stores the result of `battle_id`. A second save for the same battle
    /// fails with [`BattleEngineError::AlreadyStored`].
    async fn save(&self, battle_id: &str, result: &BattleResult) -> EngineResult<()>;

    /// Reads back exactly what was saved, or `None` if nothing was.
    async fn load(&self, battle_id: &str) -> EngineResult<Option<BattleResult>>;
}

/// Keeps encoded results in memory.
///
/// Results are stored as bytes, so every load decodes a fresh copy of what
/// was written rather than handing out shared state.
#[derive(Debug, Default)]
pub struct MemoryBattleStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBattleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl BattleStore for MemoryBattleStore {
    async fn save(&self, battle_id: &str, result: &BattleResult) -> EngineResult<()> {
        let bytes = result.to_bytes()?;
        let mut records = self.records.write().await;
        match records.entry(battle_id.to_string()) {
            Entry::Occupied(_) => Err(BattleEngineError::AlreadyStored(battle_id.to_string())),
            Entry::Vacant(slot) => {
                debug!("stored battle {battle_id} ({} bytes)", bytes.len());
                slot.insert(bytes);
                Ok(())
            }
        }
    }

    async fn load(&self, battle_id: &str) -> EngineResult<Option<BattleResult>> {
        let records = self.records.read().await;
        match records.get(battle_id) {
            Some(bytes) => Ok(Some(BattleResult::from_bytes(bytes)?)),
            None => Ok(None),
        }
    }
}

/// Tells apart staging files of saves running at the same time.
static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One pretty-printed JSON file per battle in a directory.
///
/// A save writes a hidden staging file first and then hard-links it into
/// place, so readers only ever see complete files and a failed write leaves
/// nothing behind under the battle's name.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding `battle_id`.
    ///
    /// ASCII letters, digits and `-` are kept; every other byte, `_`
    /// included, becomes `_XX` in hex. Distinct ids always get distinct
    /// files and none can escape the directory.
    pub fn path_for(&self, battle_id: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(battle_id.len());
        for byte in battle_id.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_stem.push(char::from(byte));
            } else {
                file_stem.push_str(&format!("_{byte:02X}"));
            }
        }
        self.dir.join(format!("{file_stem}.json"))
    }

    fn staging_path(&self) -> PathBuf {
        let sequence = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!(".staging-{}-{sequence}.tmp", std::process::id()))
    }
}

async fn write_staging(staging: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(staging)
        .await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

#[async_trait]
impl BattleStore for JsonFileStore {
    async fn save(&self, battle_id: &str, result: &BattleResult) -> EngineResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(battle_id);
        let contents = serde_json::to_vec_pretty(result)?;
        let staging = self.staging_path();

        let published = match write_staging(&staging, &contents).await {
            Ok(()) => tokio::fs::hard_link(&staging, &path)
                .await
                .map_err(|err| match err.kind() {
                    ErrorKind::AlreadyExists => {
                        BattleEngineError::AlreadyStored(battle_id.to_string())
                    }
                    _ => err.into(),
                }),
            Err(err) => Err(err.into()),
        };

        if let Err(err) = tokio::fs::remove_file(&staging).await {
            if err.kind() != ErrorKind::NotFound {
                warn!("could not remove staging file {}: {err}", staging.display());
            }
        }

        published?;
        debug!("stored battle {battle_id} at {}", path.display());
        Ok(())
    }

    async fn load(&self, battle_id: &str) -> EngineResult<Option<BattleResult>> {
        match tokio::fs::read(self.path_for(battle_id)).await {
            Ok(contents) => Ok(Some(serde_json::from_slice(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
