use crate::battle::rng::BattleRng;
use schema::{PokemonSnapshot, Side};
use serde::{Deserialize, Serialize};

/// Decides who acts, and in which order, within one turn.
///
/// An engine keeps one strategy for its whole lifetime, so a run never mixes
/// ordering policies.
pub trait TurnOrderStrategy: Send + Sync {
    /// Stable name recorded in battle results.
    fn name(&self) -> &'static str;

    /// The sides acting in `turn` (1-based), in order. The engine stops the
    /// moment a target faints, so later entries may never get to act.
    fn actors_for_turn(
        &self,
        turn: u32,
        a: &PokemonSnapshot,
        b: &PokemonSnapshot,
        rng: &mut dyn BattleRng,
    ) -> Vec<Side>;
}

/// Side A then side B every turn, regardless of speed. If A's action
/// faints B, B does not act that turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialOrder;

impl TurnOrderStrategy for SequentialOrder {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn actors_for_turn(
        &self,
        _turn: u32,
        _a: &PokemonSnapshot,
        _b: &PokemonSnapshot,
        _rng: &mut dyn BattleRng,
    ) -> Vec<Side> {
        vec![Side::A, Side::B]
    }
}

/// Both sides act every turn, the faster one first. Ties go to side A.
///
/// With a non-zero `jitter`, each side adds `uniform(0, jitter)` to its speed
/// every turn before comparing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedOrder {
    pub jitter: f64,
}

impl SpeedOrder {
    pub fn new(jitter: f64) -> Self {
        Self {
            jitter: jitter.max(0.0),
        }
    }

    fn effective_speed(&self, pokemon: &PokemonSnapshot, rng: &mut dyn BattleRng) -> f64 {
        let base = pokemon.speed as f64;
        if self.jitter > 0.0 {
            base + rng.uniform(0.0, self.jitter, "speed jitter")
        } else {
            base
        }
    }
}

impl TurnOrderStrategy for SpeedOrder {
    fn name(&self) -> &'static str {
        "speed_ordered"
    }

    fn actors_for_turn(
        &self,
        _turn: u32,
        a: &PokemonSnapshot,
        b: &PokemonSnapshot,
        rng: &mut dyn BattleRng,
    ) -> Vec<Side> {
        let a_speed = self.effective_speed(a, rng);
        let b_speed = self.effective_speed(b, rng);

        if a_speed >= b_speed {
            vec![Side::A, Side::B]
        } else {
            vec![Side::B, Side::A]
        }
    }
}

/// Which turn order strategy an engine is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOrderPolicy {
    Sequential,
    SpeedOrdered,
}

impl TurnOrderPolicy {
    pub fn strategy(self, speed_jitter: f64) -> Box<dyn TurnOrderStrategy> {
        match self {
            TurnOrderPolicy::Sequential => Box::new(SequentialOrder),
            TurnOrderPolicy::SpeedOrdered => Box::new(SpeedOrder::new(speed_jitter)),
        }
    }
}
