use schema::Side;
use thiserror::Error;

/// Main error type for the Pokemon Arena battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// The caller handed the engine something it refuses to simulate
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    /// A collaborator (settings, move data) could not be reached or answered garbage
    #[error("external dependency failed: {0}")]
    ExternalDependency(String),
    /// Battle results are written once and never updated
    #[error("a result for battle `{0}` is already stored")]
    AlreadyStored(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("record encoding error: {0}")]
    Encoding(#[from] postcard::Error),
}

/// Errors related to the inputs of a single simulation run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("max turns must be a positive integer, got {0}")]
    NonPositiveMaxTurns(i64),
    #[error("max turns must fit in 32 bits, got {0}")]
    MaxTurnsOutOfRange(i64),
    #[error("side {side}: {pokemon} has no HP to start the battle with")]
    NoStartingHp { side: Side, pokemon: String },
    #[error("side {side}: {pokemon} has {current_hp} HP but only {max_hp} max HP")]
    HpAboveMax {
        side: Side,
        pokemon: String,
        current_hp: u32,
        max_hp: u32,
    },
    #[error("side {side}: {pokemon} must be at least level 1")]
    ZeroLevel { side: Side, pokemon: String },
    #[error("cannot assemble a battle result without any turn records")]
    EmptyTurnList,
}

/// Type alias for Results using BattleEngineError
pub type EngineResult<T> = Result<T, BattleEngineError>;
