// Constants for reward calculations
const BASE_EXP: f64 = 50.0;
const WINNER_MULTIPLIER: f64 = 1.5;
const NON_WINNER_MULTIPLIER: f64 = 0.5;
const MIN_LEVEL: u32 = 1;

/// Calculator for the experience each participant earns from a battle
pub struct ExperienceCalculator;

impl ExperienceCalculator {
    /// Experience earned by one participant
    /// Formula: floor(50 × (opponent_level / own_level) × (1.5 if won else 0.5))
    /// - Both sides of a draw count as not having won
    /// - `own_level` below 1 is treated as 1
    pub fn experience(&self, own_level: u32, opponent_level: u32, won: bool) -> u32 {
        let win_multiplier = if won {
            WINNER_MULTIPLIER
        } else {
            NON_WINNER_MULTIPLIER
        };
        // Divided last on purpose: own 30, opponent 10, won gives 25, where
        // scaling by the float ratio 10/30 first would floor to 24.
        let scaled = BASE_EXP * opponent_level as f64 * win_multiplier;

        (scaled / own_level.max(MIN_LEVEL) as f64).floor() as u32
    }
}
