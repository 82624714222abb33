// Pokemon Arena Schema - Shared type definitions
// This crate contains the battle input snapshots and the persisted battle
// record shared between the simulator, the stores and the replay viewer.
// Records use postcard for compact, byte-stable serialization.

// Re-export the main types
pub use battle_data::*;
pub use pokemon_types::*;
pub use snapshot::*;

pub mod battle_data;
pub mod pokemon_types;
pub mod snapshot;
