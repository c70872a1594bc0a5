//! Configuration for a dice board.

use std::time::Duration;

use zar_core::{DiceResult, DieType};

/// How long a roll spins before its result settles.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1300);
/// Extra pause after the last die of a batch settles, before the report.
pub const DEFAULT_BATCH_SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Configuration for a [`DiceBoard`](crate::DiceBoard).
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Time from roll start until the result settles.
    pub settle_delay: Duration,
    /// Pause between a batch's last settle and its report.
    pub batch_settle_delay: Duration,
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Dice hosted on the board, ascending and without repeats.
    pub dice: Vec<DieType>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            batch_settle_delay: DEFAULT_BATCH_SETTLE_DELAY,
            seed: None,
            dice: DieType::ALL.to_vec(),
        }
    }
}

impl BoardConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-roll settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the batch report delay.
    pub fn with_batch_settle_delay(mut self, delay: Duration) -> Self {
        self.batch_settle_delay = delay;
        self
    }

    /// Host only the given dice.
    pub fn with_dice(mut self, dice: impl IntoIterator<Item = DieType>) -> Self {
        let mut dice: Vec<DieType> = dice.into_iter().collect();
        dice.sort();
        dice.dedup();
        self.dice = dice;
        self
    }

    /// Host the dice with the given face counts.
    ///
    /// Fails on the first unsupported count.
    pub fn with_faces(self, faces: &[u32]) -> DiceResult<Self> {
        let dice = faces
            .iter()
            .map(|&n| DieType::from_faces(n))
            .collect::<DiceResult<Vec<_>>>()?;
        Ok(self.with_dice(dice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zar_core::DiceError;

    #[test]
    fn default_config() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.settle_delay, Duration::from_millis(1300));
        assert_eq!(cfg.batch_settle_delay, Duration::from_millis(600));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.dice, DieType::ALL.to_vec());
    }

    #[test]
    fn builder_methods() {
        let cfg = BoardConfig::default()
            .with_seed(7)
            .with_settle_delay(Duration::ZERO)
            .with_batch_settle_delay(Duration::from_millis(10));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.settle_delay, Duration::ZERO);
        assert_eq!(cfg.batch_settle_delay, Duration::from_millis(10));
    }

    #[test]
    fn dice_sorted_and_deduped() {
        let cfg = BoardConfig::default().with_dice([DieType::D20, DieType::D4, DieType::D20]);
        assert_eq!(cfg.dice, vec![DieType::D4, DieType::D20]);
    }

    #[test]
    fn faces_must_be_supported() {
        let cfg = BoardConfig::default().with_faces(&[6, 4]).unwrap();
        assert_eq!(cfg.dice, vec![DieType::D4, DieType::D6]);
        assert_eq!(
            BoardConfig::default().with_faces(&[6, 7]),
            Err(DiceError::UnsupportedDieType(7))
        );
    }
}
