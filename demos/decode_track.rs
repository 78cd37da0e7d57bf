// demos/decode_track.rs
use td6_rs::*;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "oval.td6".to_string());

    let design = TrackReader::open(&path)?;
    let catalog = SegmentCatalog::builtin();
    let track = design.track(&catalog);

    println!("{}: {} segments", path, design.segment_count());
    for (kind, waypoint) in track.segments.iter().zip(track.path.waypoints.iter().skip(1)) {
        println!("{:>32} -> {}", kind.name(), waypoint);
    }
    println!("Final heading: {}", track.path.final_orientation);

    Ok(())
}
