use crate::battle::assembler::{assemble, AssemblyContext};
use crate::battle::damage::DamageStrategy;
use crate::battle::moves::select_move;
use crate::battle::rng::BattleRng;
use crate::battle::turn_order::TurnOrderStrategy;
use crate::config::EngineConfig;
use crate::errors::{EngineResult, InvalidInputError};
use log::{debug, trace};
use schema::{BattleResult, ParticipantSnapshot, Side, TurnRecord};

/// Runs single-Pokemon battles between two participants.
///
/// The engine owns one damage strategy and one turn order strategy for its
/// whole lifetime. It holds no per-battle state, so one engine can serve any
/// number of concurrent simulations as long as each gets its own RNG.
pub struct BattleEngine {
    damage: Box<dyn DamageStrategy>,
    turn_order: Box<dyn TurnOrderStrategy>,
}

impl BattleEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_strategies(
            config.damage_formula.strategy(),
            config.turn_order.strategy(config.speed_jitter),
        )
    }

    pub fn with_strategies(
        damage: Box<dyn DamageStrategy>,
        turn_order: Box<dyn TurnOrderStrategy>,
    ) -> Self {
        Self { damage, turn_order }
    }

    /// Simulates a full battle and returns its record.
    ///
    /// The inputs are never modified. The loop runs at most `max_turns`
    /// turns and stops as soon as either Pokemon faints, without letting the
    /// fainted side act.
    pub fn simulate(
        &self,
        a: &ParticipantSnapshot,
        b: &ParticipantSnapshot,
        max_turns: i64,
        rng: &mut dyn BattleRng,
    ) -> EngineResult<BattleResult> {
        let turn_limit = validate_max_turns(max_turns)?;
        validate_participant(Side::A, a)?;
        validate_participant(Side::B, b)?;

        debug!(
            "simulating {} ({}) vs {} ({}) for up to {} turns [{} / {}]",
            a.pokemon.name,
            a.trainer.name,
            b.pokemon.name,
            b.trainer.name,
            turn_limit,
            self.turn_order.name(),
            self.damage.name(),
        );

        let participants = [a, b];
        let mut hp = [a.pokemon.current_hp, b.pokemon.current_hp];
        let mut turns = Vec::new();

        'battle: for turn in 1..=turn_limit {
            let actors = self
                .turn_order
                .actors_for_turn(turn, &a.pokemon, &b.pokemon, rng);

            for actor in actors {
                let record = self.resolve_action(turn, actor, &participants, &mut hp, rng);
                trace!("turn {}: {}", turn, record.description);

                let target_fainted = record.target_hp_after == 0;
                turns.push(record);
                if target_fainted {
                    break 'battle;
                }
            }
        }

        let result = assemble(
            turns,
            a,
            b,
            AssemblyContext {
                turn_order: self.turn_order.name(),
                damage_formula: self.damage.name(),
                seed: rng.seed(),
            },
        )?;

        debug!(
            "battle finished after {} turn(s): {} ({})",
            result.turns_played(),
            result.summary,
            result.victory_condition
        );
        Ok(result)
    }

    fn resolve_action(
        &self,
        turn: u32,
        actor: Side,
        participants: &[&ParticipantSnapshot; 2],
        hp: &mut [u32; 2],
        rng: &mut dyn BattleRng,
    ) -> TurnRecord {
        let target = actor.opponent();
        let attacker = participants[actor.index()];
        let defender = participants[target.index()];

        let move_used = select_move(&attacker.pokemon.moves, rng);
        let damage = self
            .damage
            .damage(&attacker.pokemon, &defender.pokemon, &move_used, rng);

        let target_hp_after = hp[target.index()].saturating_sub(damage);
        hp[target.index()] = target_hp_after;

        let mut description = format!(
            "{}'s {} used {} and dealt {} damage!",
            attacker.trainer.name, attacker.pokemon.name, move_used.name, damage
        );
        if target_hp_after == 0 {
            description.push_str(&format!(" {} fainted!", defender.pokemon.name));
        }

        TurnRecord {
            turn,
            actor,
            target,
            move_power: move_used.effective_power(),
            move_name: move_used.name,
            damage,
            target_hp_after,
            description,
        }
    }
}

fn validate_max_turns(max_turns: i64) -> Result<u32, InvalidInputError> {
    if max_turns <= 0 {
        return Err(InvalidInputError::NonPositiveMaxTurns(max_turns));
    }
    u32::try_from(max_turns).map_err(|_| InvalidInputError::MaxTurnsOutOfRange(max_turns))
}

fn validate_participant(
    side: Side,
    participant: &ParticipantSnapshot,
) -> Result<(), InvalidInputError> {
    let pokemon = &participant.pokemon;
    if pokemon.current_hp == 0 {
        return Err(InvalidInputError::NoStartingHp {
            side,
            pokemon: pokemon.name.clone(),
        });
    }
    if pokemon.current_hp > pokemon.max_hp {
        return Err(InvalidInputError::HpAboveMax {
            side,
            pokemon: pokemon.name.clone(),
            current_hp: pokemon.current_hp,
            max_hp: pokemon.max_hp,
        });
    }
    if pokemon.level == 0 {
        return Err(InvalidInputError::ZeroLevel {
            side,
            pokemon: pokemon.name.clone(),
        });
    }
    Ok(())
}
