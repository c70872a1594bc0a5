//! Roll sessions, multi-roll batches, and the dice board for Zar.
//!
//! Everything here runs on one thread. Sessions keep `Cell`/`RefCell` state
//! and timed waits are `tokio` sleeps; a single roll and a batch may be in
//! flight together on a current-thread runtime.
//!
//! Rendering and result display are collaborators behind the [`Renderer`]
//! and [`DiceUi`] traits.

pub mod batch;
pub mod board;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod ui;

pub use batch::{BatchId, BatchSummary};
pub use board::DiceBoard;
pub use config::BoardConfig;
pub use error::{SessionError, SessionResult};
pub use render::{NullRenderer, Renderer};
pub use session::{PendingRoll, RollSession, RollState};
pub use ui::DiceUi;
