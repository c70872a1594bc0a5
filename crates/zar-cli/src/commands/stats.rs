use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use zar_core::DieType;
use zar_stats::DieStats;

use super::Options;

pub fn run(opts: &Options, die: Option<DieType>) -> Result<(), String> {
    let store = opts.store();
    let dice = match die {
        Some(die) => vec![die],
        None => DieType::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Rolls", "Last", "Mean"]);

    let mut loaded = Vec::with_capacity(dice.len());
    for die in dice {
        let stats = store
            .load(die)
            .map_err(|e| format!("cannot read {die} history: {e}"))?
            .unwrap_or_default();
        table.add_row(vec![
            die.label(),
            stats.count().to_string(),
            stats
                .last_roll()
                .map_or_else(|| "—".to_string(), |v| v.to_string()),
            stats
                .mean()
                .map_or_else(|| "—".to_string(), |m| format!("{m:.2}")),
        ]);
        loaded.push((die, stats));
    }

    println!("{table}");

    if let [(die, stats)] = loaded.as_slice() {
        print_frequencies(*die, stats);
    }
    Ok(())
}

fn print_frequencies(die: DieType, stats: &DieStats) {
    if stats.is_empty() {
        println!();
        println!("  No {die} rolls recorded.");
        return;
    }

    println!();
    println!("  {}", "Face frequencies".bold().underline());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Count"]);
    for (face, count) in (1..).zip(stats.frequencies(die)) {
        table.add_row(vec![face.to_string(), count.to_string()]);
    }
    println!("{table}");
}
