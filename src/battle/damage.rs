use crate::battle::rng::BattleRng;
use schema::{MoveSnapshot, PokemonSnapshot};
use serde::{Deserialize, Serialize};

// Level/stat-ratio variant
const LEVEL_RATIO_POWER_DIVISOR: f64 = 10.0;
const LEVEL_RATIO_BONUS_MIN: u32 = 1;
const LEVEL_RATIO_BONUS_MAX: u32 = 5;

// Fractional variant
const ATTACK_SHARE: f64 = 0.4;
const DEFENSE_SHARE: f64 = 0.3;
const VARIANCE_LOW: f64 = 0.85;
const VARIANCE_HIGH: f64 = 1.15;

/// A hit can never do less than this.
pub const MIN_DAMAGE: u32 = 1;

/// Computes how much HP a single hit removes.
///
/// No type effectiveness, critical hits or accuracy checks are applied by
/// any strategy.
pub trait DamageStrategy: Send + Sync {
    /// Stable name recorded in battle results.
    fn name(&self) -> &'static str;

    fn damage(
        &self,
        attacker: &PokemonSnapshot,
        defender: &PokemonSnapshot,
        move_used: &MoveSnapshot,
        rng: &mut dyn BattleRng,
    ) -> u32;
}

/// `floor(level * attack / max(defense, 1) * power / 10) + random(1..=5)`
///
/// Used by quick two-Pokemon battles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelRatioDamage;

impl DamageStrategy for LevelRatioDamage {
    fn name(&self) -> &'static str {
        "level_ratio"
    }

    fn damage(
        &self,
        attacker: &PokemonSnapshot,
        defender: &PokemonSnapshot,
        move_used: &MoveSnapshot,
        rng: &mut dyn BattleRng,
    ) -> u32 {
        let defense = defender.defense.max(1) as f64;
        let ratio = attacker.level as f64 * attacker.attack as f64 / defense;
        let power = move_used.effective_power() as f64;
        let scaled = (ratio * power / LEVEL_RATIO_POWER_DIVISOR).floor();
        let bonus =
            rng.roll_inclusive(LEVEL_RATIO_BONUS_MIN, LEVEL_RATIO_BONUS_MAX, "damage bonus");

        (scaled as u32).saturating_add(bonus).max(MIN_DAMAGE)
    }
}

/// `floor(max(1, attack * 0.4 - defense * 0.3) * uniform(0.85, 1.15))`
///
/// Used by arena battles. Move power does not take part.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionalDamage;

impl DamageStrategy for FractionalDamage {
    fn name(&self) -> &'static str {
        "fractional"
    }

    fn damage(
        &self,
        attacker: &PokemonSnapshot,
        defender: &PokemonSnapshot,
        _move_used: &MoveSnapshot,
        rng: &mut dyn BattleRng,
    ) -> u32 {
        let raw = (attacker.attack as f64 * ATTACK_SHARE - defender.defense as f64 * DEFENSE_SHARE)
            .max(MIN_DAMAGE as f64);
        let factor = rng.uniform(VARIANCE_LOW, VARIANCE_HIGH, "damage variance");

        ((raw * factor).floor() as u32).max(MIN_DAMAGE)
    }
}

/// Which damage strategy an engine is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageFormula {
    LevelRatio,
    Fractional,
}

impl DamageFormula {
    pub fn strategy(self) -> Box<dyn DamageStrategy> {
        match self {
            DamageFormula::LevelRatio => Box::new(LevelRatioDamage),
            DamageFormula::Fractional => Box::new(FractionalDamage),
        }
    }
}
