//! The roll engine: uniform face selection.

use rand::Rng;

use crate::die::DieType;

/// A source of uniform samples in `[0, 1)`.
///
/// Every `rand::Rng` is a source. Tests can supply fixed samples to pin
/// the mapping from sample to face.
pub trait RandomSource {
    /// Returns the next sample, uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Roll a die: returns a value in `1..=die.faces()`.
///
/// The sample `u` maps to `floor(u * faces) + 1`. Samples that fall outside
/// `[0, 1)` are clamped into range so a misbehaving source can never yield an
/// impossible face.
pub fn roll<S: RandomSource + ?Sized>(die: DieType, source: &mut S) -> u32 {
    let faces = die.faces();
    let u = source.next_unit();
    let index = (u * f64::from(faces)).floor();
    if index.is_nan() || index < 0.0 {
        return 1;
    }
    (index as u32).min(faces - 1) + 1
}
