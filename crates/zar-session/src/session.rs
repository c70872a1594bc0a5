//! A single die's roll session.
//!
//! A session is `Idle` until [`RollSession::start`] accepts a roll. The value
//! is chosen right then; the session stays `Rolling` while the renderer
//! spins the die and returns to `Idle` when the returned [`PendingRoll`]
//! settles. Starting again while `Rolling` is rejected and leaves the roll
//! in flight untouched. An accepted roll always settles exactly once, even
//! if its [`PendingRoll`] is dropped before the delay runs out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};
use zar_core::{DiceError, DiceResult, DieSpec, DieType, RandomSource, RollAnimation, roll};
use zar_stats::{DieStats, StatsStore};

use crate::render::Renderer;

/// Whether a die is free to roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollState {
    /// Ready for a new roll.
    Idle,
    /// A roll is in flight and has not settled yet.
    Rolling,
}

/// Roll state, history, and random source for one die.
pub struct RollSession {
    spec: DieSpec,
    state: Cell<RollState>,
    stats: RefCell<DieStats>,
    source: RefCell<Box<dyn RandomSource>>,
    settle_delay: Duration,
    store: Rc<StatsStore>,
    renderer: Rc<dyn Renderer>,
}

impl std::fmt::Debug for RollSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollSession")
            .field("die", &self.spec.die)
            .field("state", &self.state.get())
            .field("rolls", &self.stats.borrow().count())
            .finish()
    }
}

impl RollSession {
    /// Create an idle session with an existing history.
    pub fn new(
        die: DieType,
        stats: DieStats,
        source: Box<dyn RandomSource>,
        settle_delay: Duration,
        store: Rc<StatsStore>,
        renderer: Rc<dyn Renderer>,
    ) -> Self {
        Self {
            spec: die.spec(),
            state: Cell::new(RollState::Idle),
            stats: RefCell::new(stats),
            source: RefCell::new(source),
            settle_delay,
            store,
            renderer,
        }
    }

    /// The die this session rolls.
    pub fn die(&self) -> DieType {
        self.spec.die
    }

    /// Static properties of the die.
    pub fn spec(&self) -> DieSpec {
        self.spec
    }

    /// Current state.
    pub fn state(&self) -> RollState {
        self.state.get()
    }

    /// Whether a roll is in flight.
    pub fn is_rolling(&self) -> bool {
        self.state.get() == RollState::Rolling
    }

    /// A copy of the die's history.
    pub fn stats(&self) -> DieStats {
        self.stats.borrow().clone()
    }

    /// Accept a roll: pick the value, start the animation, and return the
    /// pending result.
    ///
    /// Fails with [`DiceError::AlreadyRolling`] if a roll is in flight.
    pub fn start(&self) -> DiceResult<PendingRoll<'_>> {
        let die = self.die();
        if self.is_rolling() {
            debug!(die = %die, "roll rejected, already rolling");
            return Err(DiceError::AlreadyRolling(die));
        }
        self.state.set(RollState::Rolling);

        let (value, animation) = {
            let mut source = self.source.borrow_mut();
            let value = roll(die, &mut **source);
            (value, RollAnimation::random(&mut **source))
        };
        self.renderer.animate(die, &animation);
        debug!(die = %die, value, "roll started");

        Ok(PendingRoll {
            session: self,
            value,
            settle_at: Instant::now() + self.settle_delay,
            settled: false,
        })
    }

    /// Start a roll and wait for it to settle.
    ///
    /// Returns `None` if the die was already rolling.
    pub async fn roll(&self) -> Option<u32> {
        let pending = self.start().ok()?;
        Some(pending.settled().await)
    }

    /// Replace the history, e.g. after it was cleared in storage.
    pub(crate) fn replace_stats(&self, stats: DieStats) {
        *self.stats.borrow_mut() = stats;
    }

    fn settle(&self, value: u32) {
        let die = self.die();
        {
            let mut stats = self.stats.borrow_mut();
            stats.record(value);
            if let Err(e) = self.store.save(die, &stats) {
                warn!(die = %die, error = %e, "failed to persist stats");
            }
        }
        self.state.set(RollState::Idle);
        info!(die = %die, value, "roll settled");
    }
}

/// A roll whose value is known but which has not settled yet.
///
/// Each accepted roll settles exactly once: when
/// [`settled`](PendingRoll::settled) finishes waiting, on
/// [`settle_now`](PendingRoll::settle_now), or when it is dropped unsettled.
#[must_use = "a roll only settles when awaited"]
#[derive(Debug)]
pub struct PendingRoll<'a> {
    session: &'a RollSession,
    value: u32,
    settle_at: Instant,
    settled: bool,
}

impl PendingRoll<'_> {
    /// The die being rolled.
    pub fn die(&self) -> DieType {
        self.session.die()
    }

    /// The result, fixed when the roll started.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// When the roll settles.
    pub fn settle_at(&self) -> Instant {
        self.settle_at
    }

    /// Wait out the settle delay, then record and persist the result.
    pub async fn settled(mut self) -> u32 {
        sleep_until(self.settle_at).await;
        self.finish()
    }

    /// Record and persist the result without waiting for the delay.
    pub fn settle_now(mut self) -> u32 {
        self.finish()
    }

    fn finish(&mut self) -> u32 {
        if !self.settled {
            self.settled = true;
            self.session.settle(self.value);
        }
        self.value
    }
}

impl Drop for PendingRoll<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(die = %self.die(), value = self.value, "roll dropped before its delay, settling now");
            self.finish();
        }
    }
}
