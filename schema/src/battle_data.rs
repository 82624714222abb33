use crate::snapshot::ParticipantSnapshot;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

/// One of the two participants of a battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into the `[_; 2]` arrays of a [`BattleResult`].
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// One action in the battle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn the action belongs to.
    pub turn: u32,
    pub actor: Side,
    pub target: Side,
    pub move_name: String,
    pub move_power: u32,
    pub damage: u32,
    pub target_hp_after: u32,
    pub description: String,
}

/// Why the battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VictoryCondition {
    AllFainted,
    TurnLimitReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Winner {
        side: Side,
        trainer_id: String,
        trainer_name: String,
        pokemon_name: String,
    },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceReward {
    pub side: Side,
    pub experience: u32,
}

/// The complete, immutable record of one simulated battle.
///
/// Built once at the end of a simulation, stored once, and read back as-is
/// for replay. Nothing in here depends on wall-clock time, so two runs with
/// the same inputs and random sequence encode to the same bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub participants: [ParticipantSnapshot; 2],
    pub turns: Vec<TurnRecord>,
    pub outcome: BattleOutcome,
    pub victory_condition: VictoryCondition,
    pub final_hp: [u32; 2],
    pub damage_dealt: [u32; 2],
    pub summary: String,
    pub rewards: [ExperienceReward; 2],
    pub turn_order: String,
    pub damage_formula: String,
    pub seed: Option<u64>,
}

impl BattleResult {
    pub fn participant(&self, side: Side) -> &ParticipantSnapshot {
        &self.participants[side.index()]
    }

    pub fn winner_side(&self) -> Option<Side> {
        match &self.outcome {
            BattleOutcome::Winner { side, .. } => Some(*side),
            BattleOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == BattleOutcome::Draw
    }

    /// Number of turns played, which can be less than the number of records.
    pub fn turns_played(&self) -> u32 {
        self.turns.last().map(|record| record.turn).unwrap_or(0)
    }

    pub fn reward_for(&self, side: Side) -> u32 {
        self.rewards[side.index()].experience
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
