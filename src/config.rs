use crate::battle::damage::DamageFormula;
use crate::battle::turn_order::TurnOrderPolicy;
use crate::errors::EngineResult;
use schema::ParticipantSnapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Turn cap used by quick battles when the settings source fails.
pub const QUICK_BATTLE_FALLBACK_TURNS: u32 = 3;

/// Turn cap used by arena battles when the settings source fails.
pub const ARENA_BATTLE_FALLBACK_TURNS: u32 = 50;

/// How a [`crate::battle::engine::BattleEngine`] is put together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub damage_formula: DamageFormula,
    pub turn_order: TurnOrderPolicy,
    /// Extra random speed per side per turn; only used with speed ordering.
    #[serde(default)]
    pub speed_jitter: f64,
    /// Turn cap used when the configured value cannot be read.
    pub fallback_max_turns: u32,
}

impl EngineConfig {
    /// Level/stat-ratio damage with strict alternation.
    pub fn quick_battle() -> Self {
        Self {
            damage_formula: DamageFormula::LevelRatio,
            turn_order: TurnOrderPolicy::Sequential,
            speed_jitter: 0.0,
            fallback_max_turns: QUICK_BATTLE_FALLBACK_TURNS,
        }
    }

    /// Fractional damage with speed ordering.
    pub fn arena_battle() -> Self {
        Self {
            damage_formula: DamageFormula::Fractional,
            turn_order: TurnOrderPolicy::SpeedOrdered,
            speed_jitter: 0.0,
            fallback_max_turns: ARENA_BATTLE_FALLBACK_TURNS,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::arena_battle()
    }
}

/// Contents of an arena settings file.
///
/// ```ron
/// (
///     max_turns: Some(20),
///     engine: (
///         damage_formula: Fractional,
///         turn_order: SpeedOrdered,
///         speed_jitter: 10.0,
///         fallback_max_turns: 50,
///     ),
///     store_dir: Some("battles"),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSettings {
    /// Turn cap. Kept as a raw integer so bad values can be reported
    /// instead of failing to parse.
    #[serde(default)]
    pub max_turns: Option<i64>,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl ArenaSettings {
    pub fn from_ron(content: &str) -> EngineResult<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}

/// The two sides of a battle as read from a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSetup {
    pub a: ParticipantSnapshot,
    pub b: ParticipantSnapshot,
}

impl BattleSetup {
    pub fn from_ron(content: &str) -> EngineResult<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}
