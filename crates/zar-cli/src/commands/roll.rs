use zar_core::DieType;

use super::Options;
use crate::terminal::TerminalUi;

pub async fn run(opts: &Options, die: DieType) -> Result<(), String> {
    let board = opts.board(&[die], TerminalUi::single([die]));
    match board.roll(die).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(format!("{die} is already rolling")),
        Err(e) => Err(e.to_string()),
    }
}
