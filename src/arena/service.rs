use crate::arena::move_source::{prefetch_moves, MoveDataSource};
use crate::arena::settings::{resolve_max_turns, SettingsSource};
use crate::arena::store::BattleStore;
use crate::battle::engine::BattleEngine;
use crate::battle::rng::SeededRng;
use crate::config::EngineConfig;
use crate::errors::EngineResult;
use crate::replay::BattleReplay;
use log::{debug, info};
use schema::{BattleResult, ParticipantSnapshot};
use std::sync::Arc;
use std::time::Duration;

/// Runs battles end to end: resolves the turn cap and move lists, simulates,
/// then stores the result once.
///
/// All network-shaped work happens before the engine is called; the
/// simulation itself is synchronous and never waits on a collaborator.
pub struct BattleArena {
    engine: BattleEngine,
    fallback_max_turns: u32,
    settings: Arc<dyn SettingsSource>,
    moves: Arc<dyn MoveDataSource>,
    store: Arc<dyn BattleStore>,
}

impl BattleArena {
    pub fn new(
        config: EngineConfig,
        settings: Arc<dyn SettingsSource>,
        moves: Arc<dyn MoveDataSource>,
        store: Arc<dyn BattleStore>,
    ) -> Self {
        Self {
            engine: BattleEngine::new(&config),
            fallback_max_turns: config.fallback_max_turns,
            settings,
            moves,
            store,
        }
    }

    /// Simulates and stores battle `battle_id`.
    ///
    /// Each call gets its own RNG: seeded with `seed` when given, freshly
    /// seeded otherwise. The seed ends up in the stored result.
    pub async fn run_battle(
        &self,
        battle_id: &str,
        a: ParticipantSnapshot,
        b: ParticipantSnapshot,
        seed: Option<u64>,
    ) -> EngineResult<BattleResult> {
        let max_turns = resolve_max_turns(self.settings.as_ref(), self.fallback_max_turns).await;
        let a = prefetch_moves(self.moves.as_ref(), a).await;
        let b = prefetch_moves(self.moves.as_ref(), b).await;

        let mut rng = SeededRng::new(seed);
        let result = self.engine.simulate(&a, &b, i64::from(max_turns), &mut rng)?;

        self.store.save(battle_id, &result).await?;
        info!(
            "battle {battle_id}: {} after {} turn(s)",
            result.summary,
            result.turns_played()
        );
        Ok(result)
    }

    /// Loads a stored battle for playback.
    pub async fn replay(&self, battle_id: &str) -> EngineResult<Option<BattleReplay>> {
        Ok(self.store.load(battle_id).await?.map(BattleReplay::new))
    }
}

/// How patiently a caller waits for a result to show up in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            attempts: 20,
            interval: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Ready(BattleResult),
    /// Not stored yet; callers show a "not ready" message rather than failing.
    NotReady { attempts: u32 },
}

/// Polls `store` until `battle_id` has a result or the attempts run out.
///
/// Store errors are returned immediately; only absence is retried.
pub async fn wait_for_result(
    store: &dyn BattleStore,
    battle_id: &str,
    policy: PollPolicy,
) -> EngineResult<PollOutcome> {
    for attempt in 1..=policy.attempts {
        if let Some(result) = store.load(battle_id).await? {
            debug!("battle {battle_id} ready after {attempt} attempt(s)");
            return Ok(PollOutcome::Ready(result));
        }
        if attempt < policy.attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }
    Ok(PollOutcome::NotReady {
        attempts: policy.attempts,
    })
}
