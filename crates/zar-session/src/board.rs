//! The dice board: every hosted die's session plus the collaborators.
//!
//! A board owns one [`RollSession`] per hosted die and is the only place
//! sessions live. Single rolls and multi-roll batches both go through it,
//! and may overlap on a single-threaded runtime: a batch simply skips dice
//! that are already rolling.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{sleep, sleep_until};
use tracing::{debug, error, info, warn};
use zar_core::{DiceError, DiceResult, DieType, RandomSource, build};
use zar_stats::{DieStats, StatsStore};

use crate::batch::{BatchCollector, BatchId, BatchSummary};
use crate::config::BoardConfig;
use crate::error::SessionResult;
use crate::render::Renderer;
use crate::session::{PendingRoll, RollSession};
use crate::ui::DiceUi;

/// Hosts the dice and coordinates rolls, batches, and their display.
pub struct DiceBoard {
    sessions: BTreeMap<DieType, RollSession>,
    config: BoardConfig,
    store: Rc<StatsStore>,
    ui: Rc<dyn DiceUi>,
    batch_running: Cell<bool>,
    next_batch: Cell<u64>,
}

impl std::fmt::Debug for DiceBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceBoard")
            .field("sessions", &self.sessions)
            .field("config", &self.config)
            .field("batch_running", &self.batch_running.get())
            .finish_non_exhaustive()
    }
}

impl DiceBoard {
    /// Build a board, seeding each die's random source from the config.
    pub fn new(
        config: BoardConfig,
        store: Rc<StatsStore>,
        renderer: Rc<dyn Renderer>,
        ui: Rc<dyn DiceUi>,
    ) -> Self {
        let seed = config.seed;
        Self::with_sources(config, store, renderer, ui, |die| default_source(seed, die))
    }

    /// Build a board with a caller-chosen random source per die.
    ///
    /// Each die's history is loaded from `store` and its mesh is handed to
    /// `renderer` for display.
    pub fn with_sources(
        config: BoardConfig,
        store: Rc<StatsStore>,
        renderer: Rc<dyn Renderer>,
        ui: Rc<dyn DiceUi>,
        mut source_for: impl FnMut(DieType) -> Box<dyn RandomSource>,
    ) -> Self {
        let mut sessions = BTreeMap::new();
        for &die in &config.dice {
            let stats = store.load_or_default(die);
            let session = RollSession::new(
                die,
                stats,
                source_for(die),
                config.settle_delay,
                Rc::clone(&store),
                Rc::clone(&renderer),
            );
            renderer.display(die, &build(die), session.spec().display_scale);
            sessions.insert(die, session);
        }
        debug!(dice = sessions.len(), "board ready");
        Self {
            sessions,
            config,
            store,
            ui,
            batch_running: Cell::new(false),
            next_batch: Cell::new(1),
        }
    }

    /// The board's configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Hosted dice, ascending.
    pub fn dice(&self) -> impl Iterator<Item = DieType> + '_ {
        self.sessions.keys().copied()
    }

    /// The session for `die`, if hosted.
    pub fn session(&self, die: DieType) -> Option<&RollSession> {
        self.sessions.get(&die)
    }

    /// A copy of `die`'s history, if hosted.
    pub fn stats(&self, die: DieType) -> Option<DieStats> {
        self.session(die).map(RollSession::stats)
    }

    /// Whether a multi-roll is in flight.
    pub fn is_batch_running(&self) -> bool {
        self.batch_running.get()
    }

    fn hosted(&self, die: DieType) -> DiceResult<&RollSession> {
        self.session(die)
            .ok_or(DiceError::NotOnBoard(die))
    }

    /// Roll one die and show the settled result.
    ///
    /// Returns `Ok(None)` if the die was already rolling.
    pub async fn roll(&self, die: DieType) -> DiceResult<Option<u32>> {
        let session = self.hosted(die)?;
        let Some(value) = session.roll().await else {
            return Ok(None);
        };
        self.show_roll(session, value);
        Ok(Some(value))
    }

    /// Roll every selected die at once and report the batch.
    ///
    /// Dice that are already rolling, not hosted, or lack a UI target are
    /// recorded without a result; the rest settle concurrently. The report
    /// goes to the UI once, after the last die settles and the batch settle
    /// delay passes. If the returned future is dropped early, accepted rolls
    /// settle at once and the report is sent immediately.
    pub async fn roll_many(
        &self,
        selection: impl IntoIterator<Item = DieType>,
    ) -> DiceResult<BatchSummary> {
        let selection: BTreeSet<DieType> = selection.into_iter().collect();
        if selection.is_empty() {
            return Err(DiceError::EmptySelection);
        }
        if self.batch_running.replace(true) {
            return Err(DiceError::BatchInProgress);
        }
        let _running = BatchGuard(&self.batch_running);

        let id = BatchId(self.next_batch.get());
        self.next_batch.set(id.0 + 1);
        debug!(batch = %id, dice = selection.len(), "batch started");

        let mut collector = BatchCollector::new(id, selection.clone());
        let mut pending = Vec::with_capacity(selection.len());
        for die in selection {
            if !self.ui.has_target(die) {
                let e = DiceError::MissingUiTarget(die);
                error!(batch = %id, error = %e, "skipping die");
                collector.record(die, None);
                continue;
            }
            let Some(session) = self.session(die) else {
                error!(batch = %id, die = %die, "die is not on this board");
                collector.record(die, None);
                continue;
            };
            match session.start() {
                Ok(roll) => pending.push((session, roll)),
                Err(e) => {
                    debug!(batch = %id, error = %e, "skipping die");
                    collector.record(die, None);
                }
            }
        }

        // Settle in deadline order so each die settles on time.
        pending.sort_by_key(|(_, roll)| roll.settle_at());
        let mut run = BatchRun {
            board: self,
            collector,
            pending: pending.into(),
            reported: false,
        };
        while let Some(settle_at) = run.pending.front().map(|(_, roll)| roll.settle_at()) {
            sleep_until(settle_at).await;
            run.settle_next();
        }

        sleep(self.config.batch_settle_delay).await;
        Ok(run.report())
    }

    /// Forget `die`'s history, in storage and on the board.
    ///
    /// Fails with [`DiceError::AlreadyRolling`] while the die is rolling.
    pub fn reset(&self, die: DieType) -> SessionResult<()> {
        let session = self.hosted(die)?;
        if session.is_rolling() {
            return Err(DiceError::AlreadyRolling(die).into());
        }
        self.store.clear(die)?;
        session.replace_stats(DieStats::new());
        info!(die = %die, "history cleared");
        Ok(())
    }

    fn show_roll(&self, session: &RollSession, value: u32) {
        if let Err(e) = self.ui.show_roll(session.die(), value, &session.stats()) {
            warn!(die = %session.die(), error = %e, "result not shown");
        }
    }
}

/// A batch whose rolls have been accepted.
///
/// Dropping it before [`report`](BatchRun::report) settles every pending
/// roll at once and reports what the batch produced.
struct BatchRun<'a> {
    board: &'a DiceBoard,
    collector: BatchCollector,
    pending: VecDeque<(&'a RollSession, PendingRoll<'a>)>,
    reported: bool,
}

impl BatchRun<'_> {
    fn settle_next(&mut self) {
        if let Some((session, roll)) = self.pending.pop_front() {
            let value = roll.settle_now();
            self.board.show_roll(session, value);
            self.collector.record(session.die(), Some(value));
        }
    }

    fn report(&mut self) -> BatchSummary {
        while !self.pending.is_empty() {
            self.settle_next();
        }
        debug_assert!(self.collector.is_complete());
        self.reported = true;
        let summary = self.collector.finish();
        info!(batch = %summary.id(), total = summary.total(), "batch complete");
        self.board.ui.show_batch(&summary);
        summary
    }
}

impl Drop for BatchRun<'_> {
    fn drop(&mut self) {
        if !self.reported {
            warn!(
                batch = %self.collector.id(),
                pending = self.pending.len(),
                "batch dropped early, reporting now"
            );
            self.report();
        }
    }
}

/// Clears the batch flag when a batch ends, including when it is dropped
/// part-way.
struct BatchGuard<'a>(&'a Cell<bool>);

impl Drop for BatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn default_source(seed: Option<u64>, die: DieType) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(StdRng::from_seed(die_seed(seed, die))),
        None => Box::new(StdRng::from_os_rng()),
    }
}

/// Full-width RNG seed for `die` on a board seeded with `seed`.
///
/// Distinct `(seed, die)` pairs always give distinct seeds.
fn die_seed(seed: u64, die: DieType) -> <StdRng as SeedableRng>::Seed {
    let mut out = [0u8; 32];
    out[..8].copy_from_slice(&seed.to_le_bytes());
    out[8..12].copy_from_slice(&die.faces().to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(seed: u64, die: DieType) -> Vec<f64> {
        let mut source = default_source(Some(seed), die);
        (0..8).map(|_| source.next_unit()).collect()
    }

    #[test]
    fn seeded_sources_repeat() {
        assert_eq!(stream(11, DieType::D8), stream(11, DieType::D8));
    }

    #[test]
    fn dice_and_seeds_do_not_share_streams() {
        assert_ne!(stream(2, DieType::D4), stream(0, DieType::D6));
        assert_ne!(stream(0, DieType::D4), stream(0, DieType::D6));
        assert_ne!(stream(5, DieType::D20), stream(6, DieType::D20));
    }

    #[test]
    fn die_seeds_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for seed in [0, 1, 2, 4, 6, 16, u64::MAX] {
            for die in DieType::ALL {
                assert!(seen.insert(die_seed(seed, die)));
            }
        }
    }
}
