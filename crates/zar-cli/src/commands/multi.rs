use zar_core::DieType;

use super::Options;
use crate::terminal::TerminalUi;

pub async fn run(opts: &Options, dice: &[DieType]) -> Result<(), String> {
    let board = opts.board(dice, TerminalUi::batch(dice.iter().copied()));
    board
        .roll_many(dice.iter().copied())
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
