use crate::battle::rng::BattleRng;
use schema::MoveSnapshot;

/// Picks the move for one action, uniformly among the known moves.
///
/// A Pokemon that knows no moves uses Tackle, and no randomness is consumed.
pub fn select_move(moves: &[MoveSnapshot], rng: &mut dyn BattleRng) -> MoveSnapshot {
    if moves.is_empty() {
        return MoveSnapshot::tackle();
    }
    let index = rng.pick_index(moves.len(), "move selection");
    moves[index].clone()
}
