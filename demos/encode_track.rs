// demos/encode_track.rs
use td6_rs::*;

fn main() -> Result<()> {
    let catalog = SegmentCatalog::builtin();

    // An oval: two straights joined by pairs of 3-tile quarter turns
    let layout = [
        "BeginStation",
        "Flat",
        "LeftQuarterTurn3Tiles",
        "LeftQuarterTurn3Tiles",
        "Flat",
        "Flat",
        "LeftQuarterTurn3Tiles",
        "LeftQuarterTurn3Tiles",
        "EndStation",
    ];

    let mut entries = Vec::with_capacity(layout.len());
    for name in layout {
        let record = catalog.require(name)?;
        entries.push(SegmentEntry::new(record.code.raw_value(), 0));
    }

    let design = TrackDesign::from_parts(&[], entries);
    let mut writer = TrackWriter::create("oval.td6")?;
    writer.write_design(&design)?;
    writer.flush()?;

    let path = design.path(&catalog);
    println!("Wrote oval.td6 ({} bytes), ends at {:?}", writer.bytes_written(), path.end());
    Ok(())
}
