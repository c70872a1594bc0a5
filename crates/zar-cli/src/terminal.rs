//! Terminal collaborators: the renderer tracks poses, the UI prints results.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::{debug, warn};
use zar_core::{DiceError, DiceResult, DieType, PolyhedronMesh, Pose, RollAnimation};
use zar_session::{BatchSummary, DiceUi, Renderer};
use zar_stats::DieStats;

/// Repaint rate assumed for idle drift.
const FRAME_RATE: f64 = 60.0;

/// Stands in for a 3D view: follows each die's pose and announces spins on
/// stderr.
#[derive(Default)]
pub struct TerminalRenderer {
    dice: RefCell<BTreeMap<DieType, Shown>>,
}

/// A displayed die and the motion it is following.
struct Shown {
    scale: f64,
    from: Pose,
    animation: Option<RollAnimation>,
    since: Instant,
}

impl Shown {
    fn pose(&self, now: Instant) -> Pose {
        let elapsed = now.saturating_duration_since(self.since);
        match &self.animation {
            Some(anim) if !anim.is_finished(elapsed) => anim.sample(&self.from, elapsed),
            Some(anim) => {
                let mut pose = anim.sample(&self.from, anim.duration());
                pose.drift(idle_frames(elapsed.saturating_sub(anim.duration())));
                pose
            }
            None => {
                let mut pose = self.from;
                pose.drift(idle_frames(elapsed));
                pose
            }
        }
    }
}

fn idle_frames(idle: Duration) -> u32 {
    (idle.as_secs_f64() * FRAME_RATE) as u32
}

impl Renderer for TerminalRenderer {
    fn display(&self, die: DieType, mesh: &PolyhedronMesh, scale: f64) {
        debug!(
            die = %die,
            vertices = mesh.vertices().len(),
            faces = mesh.faces().len(),
            scale,
            "die on display"
        );
        self.dice.borrow_mut().insert(
            die,
            Shown {
                scale,
                from: Pose::rest(),
                animation: None,
                since: Instant::now(),
            },
        );
    }

    fn animate(&self, die: DieType, animation: &RollAnimation) {
        let now = Instant::now();
        let mut dice = self.dice.borrow_mut();
        let Some(shown) = dice.get_mut(&die) else {
            warn!(die = %die, "cannot animate a die that is not displayed");
            return;
        };

        shown.from = shown.pose(now);
        shown.animation = Some(*animation);
        shown.since = now;

        let end = animation.sample(&shown.from, animation.duration());
        debug!(
            die = %die,
            ms = animation.duration().as_millis(),
            peak_scale = shown.scale * animation.pulse_from,
            rx = end.rotation.x,
            ry = end.rotation.y,
            rz = end.rotation.z,
            "spinning"
        );
        eprintln!("  {} {}", "rolling".dimmed(), die.label());
    }
}

/// Prints settled results for the dice the user asked about.
pub struct TerminalUi {
    targets: BTreeSet<DieType>,
    echo_rolls: bool,
}

impl TerminalUi {
    /// Print each die's result as it settles.
    pub fn single(targets: impl IntoIterator<Item = DieType>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            echo_rolls: true,
        }
    }

    /// Print only the batch report.
    pub fn batch(targets: impl IntoIterator<Item = DieType>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            echo_rolls: false,
        }
    }
}

impl DiceUi for TerminalUi {
    fn has_target(&self, die: DieType) -> bool {
        self.targets.contains(&die)
    }

    fn show_roll(&self, die: DieType, value: u32, stats: &DieStats) -> DiceResult<()> {
        if !self.has_target(die) {
            return Err(DiceError::MissingUiTarget(die));
        }
        if self.echo_rolls {
            println!("{}: {value}", die.label());
        }
        debug!(die = %die, rolls = stats.count(), "history updated");
        Ok(())
    }

    fn show_batch(&self, summary: &BatchSummary) {
        println!("{summary}");
        let skipped: Vec<String> = summary.skipped().map(|d| d.to_string()).collect();
        if !skipped.is_empty() {
            eprintln!("  {} {}", "skipped:".yellow(), skipped.join(", "));
        }
    }
}
