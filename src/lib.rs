//! Pokemon Arena Battle Engine
//!
//! Turn-based simulation of one-on-one Pokemon battles. Callers resolve
//! configuration and move data up front; the engine then runs synchronously
//! with an injected random source and returns a complete battle record that
//! can be stored and replayed without recomputation.

// --- MODULE DECLARATIONS ---
pub mod arena;
pub mod battle;
pub mod config;
pub mod errors;
pub mod progression;
pub mod replay;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// The persisted data model.
pub use schema::{
    BattleOutcome, BattleResult, ExperienceReward, MoveSnapshot, ParticipantSnapshot,
    PokemonSnapshot, PokemonType, Side, TrainerIdentity, TurnRecord, VictoryCondition,
};

// --- From this crate's modules (`src/`) ---

// Core engine and its pluggable parts.
pub use battle::damage::{DamageFormula, DamageStrategy, FractionalDamage, LevelRatioDamage};
pub use battle::engine::BattleEngine;
pub use battle::rng::{BattleRng, ScriptedRng, SeededRng};
pub use battle::turn_order::{SequentialOrder, SpeedOrder, TurnOrderPolicy, TurnOrderStrategy};

// Orchestration around the engine.
pub use arena::{wait_for_result, BattleArena, BattleStore, PollOutcome, PollPolicy};
pub use config::{ArenaSettings, BattleSetup, EngineConfig};
pub use replay::BattleReplay;

// Crate-specific error and result types.
pub use errors::{BattleEngineError, EngineResult, InvalidInputError};
