use crate::config::ArenaSettings;
use crate::errors::{BattleEngineError, EngineResult};
use async_trait::async_trait;
use log::{debug, warn};
use std::path::PathBuf;

/// Where the configured turn cap comes from.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// The raw configured value; validation is left to the caller.
    async fn max_turns(&self) -> EngineResult<i64>;
}

/// A turn cap known up front.
#[derive(Debug, Clone, Copy)]
pub struct FixedSettings {
    max_turns: i64,
}

impl FixedSettings {
    pub fn new(max_turns: i64) -> Self {
        Self { max_turns }
    }
}

#[async_trait]
impl SettingsSource for FixedSettings {
    async fn max_turns(&self) -> EngineResult<i64> {
        Ok(self.max_turns)
    }
}

/// Reads `max_turns` from an [`ArenaSettings`] RON file on every call, so
/// edits take effect for the next battle without a restart.
#[derive(Debug, Clone)]
pub struct RonSettingsFile {
    path: PathBuf,
}

impl RonSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsSource for RonSettingsFile {
    async fn max_turns(&self) -> EngineResult<i64> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let settings = ArenaSettings::from_ron(&content)?;
        settings.max_turns.ok_or_else(|| {
            BattleEngineError::ExternalDependency(format!(
                "{} does not set max_turns",
                self.path.display()
            ))
        })
    }
}

/// Asks the source for the turn cap, falling back when it cannot answer or
/// answers with something that is not a positive `u32`.
pub async fn resolve_max_turns(source: &dyn SettingsSource, fallback: u32) -> u32 {
    match source.max_turns().await {
        Ok(turns) if turns > 0 => match u32::try_from(turns) {
            Ok(turns) => {
                debug!("configured max turns: {turns}");
                turns
            }
            Err(_) => {
                warn!("max turns {turns} is out of range, using default: {fallback}");
                fallback
            }
        },
        Ok(turns) => {
            warn!("max turns must be positive but is {turns}, using default: {fallback}");
            fallback
        }
        Err(err) => {
            warn!("could not read max turns ({err}), using default: {fallback}");
            fallback
        }
    }
}
