//! Step-through playback of a stored battle.
//!
//! Replay only reads the recorded turns; nothing is ever re-simulated, so a
//! stored result plays back identically every time it is loaded.

use schema::{BattleResult, Side, TurnRecord, VictoryCondition};

/// Battle state after a number of recorded actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayFrame<'a> {
    /// Number of actions applied, 0 being the starting position.
    pub step: usize,
    pub hp: [u32; 2],
    /// The action that led to this frame.
    pub record: Option<&'a TurnRecord>,
}

impl ReplayFrame<'_> {
    pub fn hp_of(&self, side: Side) -> u32 {
        self.hp[side.index()]
    }
}

#[derive(Debug, Clone)]
pub struct BattleReplay {
    result: BattleResult,
    step: usize,
}

impl BattleReplay {
    pub fn new(result: BattleResult) -> Self {
        Self { result, step: 0 }
    }

    pub fn result(&self) -> &BattleResult {
        &self.result
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.result.turns.len()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.total_steps()
    }

    /// Advances one action. Returns false when already at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Goes back one action. Returns false when already at the start.
    pub fn step_back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    pub fn seek(&mut self, step: usize) {
        self.step = step.min(self.total_steps());
    }

    pub fn current(&self) -> ReplayFrame<'_> {
        self.frame(self.step)
    }

    /// The frame after `step` actions, clamped to the recorded history.
    pub fn frame(&self, step: usize) -> ReplayFrame<'_> {
        let step = step.min(self.total_steps());
        let mut hp = [
            self.result.participants[0].pokemon.current_hp,
            self.result.participants[1].pokemon.current_hp,
        ];
        for record in &self.result.turns[..step] {
            hp[record.target.index()] = record.target_hp_after;
        }

        ReplayFrame {
            step,
            hp,
            record: step.checked_sub(1).map(|index| &self.result.turns[index]),
        }
    }

    /// One line describing the current position.
    pub fn headline(&self) -> String {
        if self.step == 0 {
            return self.opening_line();
        }
        if self.is_finished() {
            return self.result.summary.clone();
        }
        self.current()
            .record
            .map(|record| record.description.clone())
            .unwrap_or_default()
    }

    /// The whole battle as a text log.
    pub fn render_log(&self) -> String {
        let mut lines = vec![self.opening_line()];
        let mut current_turn = 0;

        for record in &self.result.turns {
            if record.turn != current_turn {
                current_turn = record.turn;
                lines.push(format!("--- Turn {} ---", current_turn));
            }
            lines.push(record.description.clone());
        }

        if self.result.victory_condition == VictoryCondition::TurnLimitReached {
            lines.push("Battle reached turn limit!".to_string());
        }
        lines.push(self.result.summary.clone());
        lines.join("\n")
    }

    fn opening_line(&self) -> String {
        let [a, b] = &self.result.participants;
        format!(
            "Battle begins between {}'s {} and {}'s {}!",
            a.trainer.name, a.pokemon.name, b.trainer.name, b.pokemon.name
        )
    }
}
