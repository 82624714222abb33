//! Everything around the engine that talks to the outside world: turn cap
//! settings, move data, result storage and the orchestrator tying them
//! together.

pub mod move_source;
pub mod service;
pub mod settings;
pub mod store;

pub use move_source::{prefetch_moves, MoveDataSource, StarterMoveCatalog};
pub use service::{wait_for_result, BattleArena, PollOutcome, PollPolicy};
pub use settings::{resolve_max_turns, FixedSettings, RonSettingsFile, SettingsSource};
pub use store::{BattleStore, JsonFileStore, MemoryBattleStore};
