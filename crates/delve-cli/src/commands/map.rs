use colored::Colorize;

/// List every location with the destinations of its exits.
pub fn run() -> Result<(), String> {
    let dungeon = super::load_dungeon()?;

    println!("  {}", dungeon.name.bold());
    println!();
    for (id, location) in dungeon.locations() {
        println!("  {}", location.name().bold());
        for (direction, to) in dungeon.exits(id) {
            let target = dungeon.get(to).map_or("?", |l| l.name());
            println!("    {direction} -> {target}");
        }
    }
    Ok(())
}
