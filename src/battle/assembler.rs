use crate::errors::{EngineResult, InvalidInputError};
use crate::progression::ExperienceCalculator;
use schema::{
    BattleOutcome, BattleResult, ExperienceReward, ParticipantSnapshot, Side, TurnRecord,
    VictoryCondition,
};

/// Literal summary used when nobody wins.
pub const DRAW_SUMMARY: &str = "It's a draw!";

/// Facts about the run that are recorded alongside the turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyContext<'a> {
    pub turn_order: &'a str,
    pub damage_formula: &'a str,
    pub seed: Option<u64>,
}

/// Builds the final [`BattleResult`] from the turn history.
///
/// A side whose HP reached 0 loses with [`VictoryCondition::AllFainted`].
/// Otherwise the turn limit was reached and the side with strictly more HP
/// left wins; equal HP is a draw.
pub fn assemble(
    turns: Vec<TurnRecord>,
    a: &ParticipantSnapshot,
    b: &ParticipantSnapshot,
    context: AssemblyContext<'_>,
) -> EngineResult<BattleResult> {
    if turns.is_empty() {
        return Err(InvalidInputError::EmptyTurnList.into());
    }

    let participants = [a.clone(), b.clone()];
    let starting_hp = [a.pokemon.current_hp, b.pokemon.current_hp];
    let final_hp = [
        final_hp_of(Side::A, &turns, starting_hp[0]),
        final_hp_of(Side::B, &turns, starting_hp[1]),
    ];

    let (victory_condition, winner) = match (final_hp[0], final_hp[1]) {
        (0, 0) => (VictoryCondition::AllFainted, None),
        (0, _) => (VictoryCondition::AllFainted, Some(Side::B)),
        (_, 0) => (VictoryCondition::AllFainted, Some(Side::A)),
        (a_hp, b_hp) if a_hp > b_hp => (VictoryCondition::TurnLimitReached, Some(Side::A)),
        (a_hp, b_hp) if b_hp > a_hp => (VictoryCondition::TurnLimitReached, Some(Side::B)),
        _ => (VictoryCondition::TurnLimitReached, None),
    };

    let (outcome, summary) = match winner {
        Some(side) => {
            let champion = &participants[side.index()];
            (
                BattleOutcome::Winner {
                    side,
                    trainer_id: champion.trainer.id.clone(),
                    trainer_name: champion.trainer.name.clone(),
                    pokemon_name: champion.pokemon.name.clone(),
                },
                format!("{} wins the battle!", champion.pokemon.name),
            )
        }
        None => (BattleOutcome::Draw, DRAW_SUMMARY.to_string()),
    };

    // Each side only ever damages its opponent.
    let damage_dealt = [
        starting_hp[1].saturating_sub(final_hp[1]),
        starting_hp[0].saturating_sub(final_hp[0]),
    ];

    let rewards = [Side::A, Side::B].map(|side| {
        let own = &participants[side.index()].pokemon;
        let opponent = &participants[side.opponent().index()].pokemon;
        ExperienceReward {
            side,
            experience: ExperienceCalculator.experience(
                own.level,
                opponent.level,
                winner == Some(side),
            ),
        }
    });

    Ok(BattleResult {
        participants,
        turns,
        outcome,
        victory_condition,
        final_hp,
        damage_dealt,
        summary,
        rewards,
        turn_order: context.turn_order.to_string(),
        damage_formula: context.damage_formula.to_string(),
        seed: context.seed,
    })
}

fn final_hp_of(side: Side, turns: &[TurnRecord], starting_hp: u32) -> u32 {
    turns
        .iter()
        .rev()
        .find(|record| record.target == side)
        .map(|record| record.target_hp_after)
        .unwrap_or(starting_hp)
}
