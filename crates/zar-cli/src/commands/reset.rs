use zar_core::DieType;

use super::Options;

pub fn run(opts: &Options, die: Option<DieType>) -> Result<(), String> {
    let store = opts.store();
    let dice = match die {
        Some(die) => vec![die],
        None => DieType::ALL.to_vec(),
    };
    for die in dice {
        store
            .clear(die)
            .map_err(|e| format!("cannot clear {die}: {e}"))?;
    }

    match die {
        Some(die) => println!("  Cleared history for {die}"),
        None => println!("  Cleared history for all dice"),
    }
    Ok(())
}
