use delve_core::{Dungeon, LocationId};

/// Print one location, or all of them, as seen from the outside.
pub fn run(name: Option<&str>) -> Result<(), String> {
    let dungeon = super::load_dungeon()?;

    let ids: Vec<LocationId> = match name {
        Some(name) => vec![
            dungeon
                .find_id_by_name(name)
                .ok_or_else(|| format!("location not found: \"{name}\""))?,
        ],
        None => dungeon.locations().map(|(id, _)| id).collect(),
    };

    let rendered: Vec<String> = ids
        .into_iter()
        .map(|id| render(&dungeon, id))
        .collect::<Result<_, _>>()?;
    print!("{}", rendered.join("\n"));
    Ok(())
}

fn render(dungeon: &Dungeon, id: LocationId) -> Result<String, String> {
    dungeon
        .snapshot(id)
        .map(|location| location.to_string())
        .map_err(|e| e.to_string())
}
