use serde::{Deserialize, Serialize};

/// Power used for any move whose data has no power value.
pub const DEFAULT_MOVE_POWER: u32 = 40;

/// Name of the move used when a Pokemon knows nothing else.
pub const DEFAULT_MOVE_NAME: &str = "Tackle";

/// The trainer behind one side of a battle. Only used as a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainerIdentity {
    pub id: String,
    pub name: String,
}

impl TrainerIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A move as it is known at the start of a battle.
///
/// `accuracy` and `pp` are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSnapshot {
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default = "default_move_type")]
    pub move_type: String,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub pp: Option<u8>,
}

fn default_move_type() -> String {
    "normal".to_string()
}

impl MoveSnapshot {
    pub fn new(name: impl Into<String>, power: Option<u32>, move_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power,
            move_type: move_type.into(),
            accuracy: None,
            pp: None,
        }
    }

    /// The nominal move used when a Pokemon has no moves at all.
    pub fn tackle() -> Self {
        Self {
            name: DEFAULT_MOVE_NAME.to_string(),
            power: Some(DEFAULT_MOVE_POWER),
            move_type: default_move_type(),
            accuracy: Some(100),
            pp: Some(35),
        }
    }

    pub fn with_accuracy_and_pp(mut self, accuracy: u8, pp: u8) -> Self {
        self.accuracy = Some(accuracy);
        self.pp = Some(pp);
        self
    }

    /// Power with missing values replaced by [`DEFAULT_MOVE_POWER`].
    pub fn effective_power(&self) -> u32 {
        self.power.unwrap_or(DEFAULT_MOVE_POWER)
    }
}

/// Battle-relevant stats of one Pokemon, frozen at simulation start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSnapshot {
    pub species_id: u32,
    pub name: String,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub moves: Vec<MoveSnapshot>,
}

impl PokemonSnapshot {
    /// The first type tag, which decides starter moves.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

/// One trainer and the Pokemon they send into a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub trainer: TrainerIdentity,
    pub pokemon: PokemonSnapshot,
}

impl ParticipantSnapshot {
    pub fn new(trainer: TrainerIdentity, pokemon: PokemonSnapshot) -> Self {
        Self { trainer, pokemon }
    }
}
