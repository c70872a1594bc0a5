pub mod mesh;
pub mod multi;
pub mod reset;
pub mod roll;
pub mod stats;

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use zar_core::DieType;
use zar_session::{BoardConfig, DiceBoard};
use zar_stats::StatsStore;

use crate::terminal::{TerminalRenderer, TerminalUi};

/// Flags shared by every subcommand.
pub struct Options {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub settle_ms: Option<u64>,
    pub batch_delay_ms: Option<u64>,
}

impl Options {
    fn store(&self) -> StatsStore {
        StatsStore::in_dir(&self.data_dir)
    }

    fn board_config(&self, dice: &[DieType]) -> BoardConfig {
        let mut config = BoardConfig::default().with_dice(dice.iter().copied());
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.settle_ms {
            config = config.with_settle_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.batch_delay_ms {
            config = config.with_batch_settle_delay(Duration::from_millis(ms));
        }
        config
    }

    /// A board hosting exactly `dice`, reporting through `ui`.
    fn board(&self, dice: &[DieType], ui: TerminalUi) -> DiceBoard {
        DiceBoard::new(
            self.board_config(dice),
            Rc::new(self.store()),
            Rc::new(TerminalRenderer::default()),
            Rc::new(ui),
        )
    }
}
