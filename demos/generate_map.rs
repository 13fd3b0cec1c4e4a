//! Example: Generate a room-and-path map
//!
//! Demonstrates the basic usage of the generation pipeline.

use rust_map_generation::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Map Generation Example");
    println!("======================\n");

    let config = MapConfigBuilder::new()
        .seed(42)
        .point_count(20)
        .unwrap()
        .region_half_extent(1000.0)
        .unwrap()
        .room_cells(true)
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Rooms: {}", config.point_count);
    println!("  Region: +/-{}", config.region_half_extent);
    println!("  Strategy: {}", config.strategy.name());
    println!();

    for strategy in [SpanningTreeStrategy::Kruskal, SpanningTreeStrategy::Prim] {
        let config = MapConfig { strategy, ..config };
        let layout = Layout::generate(config).expect("Failed to generate map");
        println!(
            "{:>8}: {} paths, total length {:.2}",
            strategy.name(),
            layout.path_count(),
            layout.total_length()
        );
    }
    println!();

    let mut generator = MapGenerator::new(config, PlacementRecorder::new());
    let layout = generator.generate_map().expect("Failed to generate map");

    println!("Sample rooms:");
    for (id, room) in layout.points().iter().enumerate().take(5) {
        let cell_area = layout.get_cell(id).map(|c| c.area()).unwrap_or(0.0);
        println!(
            "  Room {}: position=({:.1}, {:.1}), paths={}, cell area={:.0}",
            id,
            room.x,
            room.y,
            layout.get_neighbors(id).len(),
            cell_area
        );
    }

    println!("\nSample paths:");
    for path in generator.sink().paths.iter().take(5) {
        println!(
            "  {} -> {}: length={:.1}, heading={:.1} deg",
            path.edge.a,
            path.edge.b,
            path.length,
            path.heading.to_degrees()
        );
    }

    if let Some(spawn) = generator.sink().spawn {
        println!("\nSpawn at ({:.1}, {:.1}, {:.1})", spawn.x, spawn.y, spawn.z);
    }

    // Two rooms cannot be triangulated; the map ends up cleared
    generator.set_config(MapConfig { point_count: 2, ..config });
    match generator.generate_map() {
        Ok(_) => println!("\nUnexpected success"),
        Err(err) => println!(
            "\nTwo-room Kruskal run failed ({}); placed rooms: {}",
            err,
            generator.sink().rooms.len()
        ),
    }

    println!("\nGeneration complete!");
}
