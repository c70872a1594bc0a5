//! Cosmetic roll animation: spin and scale pulse.
//!
//! Animations never affect a roll's value. A session picks the value first
//! and only then draws the animation parameters from the same source.

use std::time::Duration;

use nalgebra::Vector3;

use crate::roll::RandomSource;

/// Largest extra rotation, in radians, added on each axis by a spin.
pub const MAX_SPIN: f64 = 20.0;
/// Length of the spin.
pub const SPIN_DURATION: Duration = Duration::from_millis(1200);
/// Length of the scale pulse.
pub const PULSE_DURATION: Duration = Duration::from_millis(600);
/// Scale multiplier at the start of the pulse.
pub const PULSE_PEAK: f64 = 1.3;
/// Per-frame idle rotation while the die is at rest.
pub const IDLE_DRIFT: Vector3<f64> = Vector3::new(0.001, 0.002, 0.0);

/// Orientation and relative scale of a displayed die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Euler rotation in radians.
    pub rotation: Vector3<f64>,
    /// Multiplier applied on top of the die's display scale.
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::rest()
    }
}

impl Pose {
    /// Unrotated, unscaled pose.
    pub fn rest() -> Self {
        Self {
            rotation: Vector3::zeros(),
            scale: 1.0,
        }
    }

    /// Advance `frames` idle frames.
    pub fn drift(&mut self, frames: u32) {
        self.rotation += IDLE_DRIFT * f64::from(frames);
    }
}

/// Parameters of one roll's spin and pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAnimation {
    /// Extra rotation added over the spin, per axis.
    pub spin: Vector3<f64>,
    /// How long the spin lasts.
    pub spin_duration: Duration,
    /// Scale multiplier the pulse starts from; it eases back to 1.
    pub pulse_from: f64,
    /// How long the pulse lasts.
    pub pulse_duration: Duration,
}

impl RollAnimation {
    /// Draw a random spin with the standard durations.
    pub fn random<S: RandomSource + ?Sized>(source: &mut S) -> Self {
        let spin = Vector3::new(
            source.next_unit() * MAX_SPIN,
            source.next_unit() * MAX_SPIN,
            source.next_unit() * MAX_SPIN,
        );
        Self {
            spin,
            spin_duration: SPIN_DURATION,
            pulse_from: PULSE_PEAK,
            pulse_duration: PULSE_DURATION,
        }
    }

    /// Total time until both the spin and the pulse have ended.
    pub fn duration(&self) -> Duration {
        self.spin_duration.max(self.pulse_duration)
    }

    /// Whether the animation has ended after `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// The pose `elapsed` into the animation, starting from `from`.
    pub fn sample(&self, from: &Pose, elapsed: Duration) -> Pose {
        let spin_t = progress(elapsed, self.spin_duration);
        let pulse_t = progress(elapsed, self.pulse_duration);
        Pose {
            rotation: from.rotation + self.spin * ease_out_elastic(spin_t, 1.0, 0.7),
            scale: lerp(self.pulse_from, 1.0, ease_out_quad(pulse_t)),
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

/// Quadratic ease-out on `t` in `[0, 1]`.
fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Elastic ease-out on `t` in `[0, 1]`.
///
/// `amplitude` is clamped to `[1, 10]` and `period` to `[0.1, 2]`.
fn ease_out_elastic(t: f64, amplitude: f64, period: f64) -> f64 {
    1.0 - ease_in_elastic(1.0 - t, amplitude, period)
}

fn ease_in_elastic(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t.clamp(0.0, 1.0);
    }
    let a = amplitude.clamp(1.0, 10.0);
    let p = period.clamp(0.1, 2.0);
    let tau = std::f64::consts::TAU;
    let shift = p / tau * (1.0 / a).asin();
    -a * 2f64.powf(10.0 * (t - 1.0)) * (((t - 1.0) - shift) * tau / p).sin()
}
