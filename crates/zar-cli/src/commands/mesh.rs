use colored::Colorize;
use zar_core::{DieType, build};

pub fn run(die: DieType, json: bool) -> Result<(), String> {
    let mesh = build(die);

    if json {
        let out = serde_json::to_string_pretty(&mesh.export())
            .map_err(|e| format!("cannot serialize mesh: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        die.label().bold(),
        format!("({} logical faces)", die.faces()).dimmed()
    );
    println!("  vertices: {}", mesh.vertices().len());
    println!("  triangles: {}", mesh.faces().len());
    println!("  edges: {}", mesh.edge_count());
    println!("  bounding radius: {:.3}", mesh.bounding_radius());
    println!("  display scale: {}", die.spec().display_scale);
    Ok(())
}
