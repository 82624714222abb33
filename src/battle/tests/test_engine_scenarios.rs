#[cfg(test)]
mod tests {
    use crate::battle::assembler::DRAW_SUMMARY;
    use crate::battle::damage::LevelRatioDamage;
    use crate::battle::engine::BattleEngine;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::tests::common::{participant, pokemon, PokemonBuilder};
    use crate::battle::turn_order::{SequentialOrder, SpeedOrder};
    use crate::config::EngineConfig;
    use crate::errors::{BattleEngineError, InvalidInputError};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{BattleOutcome, MoveSnapshot, Side, VictoryCondition};

    fn peck() -> MoveSnapshot {
        MoveSnapshot::new("Peck", Some(10), "flying")
    }

    /// Level 1, attack 10 into defense 50 with Peck: the formula part floors
    /// to 0, so every hit deals exactly its bonus roll.
    fn pecker(name: &str) -> PokemonBuilder {
        pokemon(name)
            .level(1)
            .attack(10)
            .defense(50)
            .moves(vec![peck()])
    }

    fn level_ratio_with_speed_order() -> BattleEngine {
        BattleEngine::with_strategies(Box::new(LevelRatioDamage), Box::new(SpeedOrder::new(0.0)))
    }

    #[test]
    fn test_sequential_single_turn_has_both_sides_act() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pecker("Pidgey").hp(10));
        let b = participant("gary", pecker("Spearow").hp(10));
        let mut rng = ScriptedRng::new(vec![0.0]);

        let result = engine
            .simulate(&a, &b, 1, &mut rng)
            .expect("battle should run");

        let actors: Vec<Side> = result.turns.iter().map(|record| record.actor).collect();
        assert_eq!(actors, vec![Side::A, Side::B]);
        assert!(result.turns.iter().all(|record| record.turn == 1));
        assert_eq!(result.final_hp, [9, 9]);
        assert_eq!(result.victory_condition, VictoryCondition::TurnLimitReached);
        assert!(result.is_draw());
        assert_eq!(result.turn_order, "sequential");
    }

    #[test]
    fn test_sequential_faint_on_first_action_skips_second() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Machop").attack(80));
        let b = participant("gary", pecker("Spearow").hp(10));
        let mut rng = ScriptedRng::new(vec![0.0]);

        let result = engine
            .simulate(&a, &b, 1, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 1);
        assert_eq!(result.turns[0].actor, Side::A);
        assert_eq!(result.final_hp, [50, 0]);
        assert_eq!(result.victory_condition, VictoryCondition::AllFainted);
    }

    #[test]
    fn test_sequential_gives_no_first_mover_advantage() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Nidoran").hp(500));
        let b = participant("gary", pokemon("Nidorina").hp(500));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine
            .simulate(&a, &b, 3, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 6);
        // Three Tackles of 43 each way.
        assert_eq!(result.final_hp, [371, 371]);
        assert!(result.is_draw());
    }

    #[test]
    fn test_speed_order_single_turn_produces_two_records() {
        let engine = level_ratio_with_speed_order();
        let a = participant("ash", pecker("Pidgey").speed(30).hp(10));
        let b = participant("gary", pecker("Spearow").speed(70).hp(10));
        let mut rng = ScriptedRng::new(vec![0.0]);

        let result = engine
            .simulate(&a, &b, 1, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 2);
        assert_eq!(result.turns[0].actor, Side::B);
        assert_eq!(result.turns[1].actor, Side::A);
        assert!(result.turns.iter().all(|record| record.turn == 1));
        assert_eq!(result.final_hp, [9, 9]);
        assert!(result.is_draw());
        assert_eq!(result.turn_order, "speed_ordered");
    }

    #[test]
    fn test_overkill_clamps_hp_to_zero() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        // 1 * 10 / 10 * 100 / 10 = 10, plus a bonus roll of 2.
        let slam = MoveSnapshot::new("Slam", Some(100), "normal");
        let a = participant("ash", pokemon("Rattata").level(1).attack(10).moves(vec![slam]));
        let b = participant("gary", pokemon("Caterpie").defense(10).hp(5));
        let mut rng = ScriptedRng::new(vec![0.25]);

        let result = engine
            .simulate(&a, &b, 10, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 1);
        let record = &result.turns[0];
        assert_eq!(record.damage, 12);
        assert_eq!(record.target_hp_after, 0);
        assert_eq!(
            record.description,
            "Trainer ash's Rattata used Slam and dealt 12 damage! Caterpie fainted!"
        );
        assert_eq!(result.final_hp, [50, 0]);
        assert_eq!(result.damage_dealt, [5, 0]);
        assert_eq!(result.victory_condition, VictoryCondition::AllFainted);
        assert_eq!(result.summary, "Rattata wins the battle!");
    }

    #[test]
    fn test_equal_hp_at_turn_limit_is_a_draw() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        // Both sides hit once per turn for one damage.
        let a = participant("ash", pecker("Pidgey").hp(23));
        let b = participant("gary", pecker("Spearow").hp(23));
        let mut rng = ScriptedRng::new(vec![0.0]);

        let result = engine
            .simulate(&a, &b, 3, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 6);
        assert_eq!(result.final_hp, [20, 20]);
        assert_eq!(result.outcome, BattleOutcome::Draw);
        assert_eq!(result.summary, DRAW_SUMMARY);
        assert_eq!(result.victory_condition, VictoryCondition::TurnLimitReached);
        // Neither side won, so both get the consolation multiplier.
        assert_eq!(result.reward_for(Side::A), 25);
        assert_eq!(result.reward_for(Side::B), 25);
    }

    #[test]
    fn test_empty_move_list_uses_tackle() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Magikarp").hp(200));
        let b = participant("gary", pokemon("Goldeen").hp(200));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine
            .simulate(&a, &b, 2, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 4);
        for record in &result.turns {
            assert_eq!(record.move_name, "Tackle");
            assert_eq!(record.move_power, 40);
        }
        // 10 * 50 / 50 * 40 / 10 = 40, plus a bonus roll of 3.
        assert_eq!(result.turns[0].damage, 43);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_non_positive_turn_cap_is_rejected(#[case] max_turns: i64) {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Pikachu"));
        let b = participant("gary", pokemon("Eevee"));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine.simulate(&a, &b, max_turns, &mut rng);

        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidInput(
                InvalidInputError::NonPositiveMaxTurns(value)
            )) if value == max_turns
        ));
        assert_eq!(rng.consumed(), 0);
    }

    #[rstest]
    #[case(i64::from(u32::MAX) + 1)]
    #[case(i64::MAX)]
    fn test_oversized_turn_cap_is_rejected(#[case] max_turns: i64) {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Pikachu"));
        let b = participant("gary", pokemon("Eevee"));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine.simulate(&a, &b, max_turns, &mut rng);

        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidInput(
                InvalidInputError::MaxTurnsOutOfRange(value)
            )) if value == max_turns
        ));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_largest_turn_cap_is_accepted() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Pikachu"));
        let b = participant("gary", pokemon("Eevee"));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine
            .simulate(&a, &b, i64::from(u32::MAX), &mut rng)
            .expect("battle should run");

        assert_eq!(result.victory_condition, VictoryCondition::AllFainted);
    }

    #[test]
    fn test_fainted_participant_is_rejected() {
        let engine = BattleEngine::new(&EngineConfig::quick_battle());
        let a = participant("ash", pokemon("Pikachu"));
        let b = participant("gary", pokemon("Eevee").hp(0));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine.simulate(&a, &b, 5, &mut rng);

        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidInput(
                InvalidInputError::NoStartingHp { side: Side::B, .. }
            ))
        ));
    }

    #[test]
    fn test_hp_above_max_is_rejected() {
        let engine = BattleEngine::new(&EngineConfig::arena_battle());
        let a = participant("ash", pokemon("Pikachu").hp(30).max_hp(20));
        let b = participant("gary", pokemon("Eevee"));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine.simulate(&a, &b, 5, &mut rng);

        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidInput(InvalidInputError::HpAboveMax {
                side: Side::A,
                current_hp: 30,
                max_hp: 20,
                ..
            }))
        ));
    }

    #[test]
    fn test_level_zero_is_rejected() {
        let engine = BattleEngine::new(&EngineConfig::arena_battle());
        let a = participant("ash", pokemon("Pikachu"));
        let b = participant("gary", pokemon("Eevee").level(0));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine.simulate(&a, &b, 5, &mut rng);

        assert!(matches!(
            result,
            Err(BattleEngineError::InvalidInput(
                InvalidInputError::ZeroLevel { side: Side::B, .. }
            ))
        ));
    }

    #[test]
    fn test_fainted_side_never_acts_under_speed_order() {
        let engine = level_ratio_with_speed_order();
        let a = participant("ash", pokemon("Jolteon").speed(130).attack(65));
        let b = participant("gary", pokemon("Slowpoke").speed(15).hp(1));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine
            .simulate(&a, &b, 10, &mut rng)
            .expect("battle should run");

        assert_eq!(result.turns.len(), 1);
        assert_eq!(result.turns[0].actor, Side::A);
        assert_eq!(result.winner_side(), Some(Side::A));
        assert_eq!(result.final_hp, [50, 0]);
    }

    #[test]
    fn test_sequential_order_ignores_speed() {
        let engine =
            BattleEngine::with_strategies(Box::new(LevelRatioDamage), Box::new(SequentialOrder));
        let a = participant("ash", pokemon("Slowpoke").speed(15).hp(300));
        let b = participant("gary", pokemon("Jolteon").speed(130).hp(300));
        let mut rng = ScriptedRng::new(vec![0.5]);

        let result = engine
            .simulate(&a, &b, 4, &mut rng)
            .expect("battle should run");

        let actors: Vec<Side> = result.turns.iter().map(|record| record.actor).collect();
        assert_eq!(actors, [Side::A, Side::B].repeat(4));
        let turns: Vec<u32> = result.turns.iter().map(|record| record.turn).collect();
        assert_eq!(turns, vec![1, 1, 2, 2, 3, 3, 4, 4]);
    }
}
