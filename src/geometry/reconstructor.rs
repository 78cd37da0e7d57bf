// src/geometry/reconstructor.rs
use crate::catalog::{Movement, SegmentCatalog};
use crate::types::{Orientation, Position, SegmentTypeCode};
use tracing::{debug, trace, warn};

/// Heading state machine that places segments one after another
///
/// Starts at the origin facing 0°. Each step moves by the segment's
/// forward/sideways deltas projected onto the current heading, adds the
/// elevation delta, and then applies the segment's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathReconstructor {
    position: Position,
    orientation: Orientation,
}

impl PathReconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(position: Position, orientation: Orientation) -> Self {
        PathReconstructor { position, orientation }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Place one segment and return the waypoint it ends on
    pub fn step(&mut self, movement: Movement) -> Position {
        let Movement { forward, sideways, elevation, turn } = movement;
        let pos = &mut self.position;

        // Catalog deltas are arbitrary integers; coordinates clamp rather than overflow
        match self.orientation {
            Orientation::Deg0 => {
                pos.x = pos.x.saturating_add(forward);
                pos.y = pos.y.saturating_add(sideways);
            }
            Orientation::Deg90 => {
                pos.y = pos.y.saturating_add(forward);
                pos.x = pos.x.saturating_sub(sideways);
            }
            Orientation::Deg180 => {
                pos.x = pos.x.saturating_sub(forward);
                pos.y = pos.y.saturating_sub(sideways);
            }
            Orientation::Deg270 => {
                pos.y = pos.y.saturating_sub(forward);
                pos.x = pos.x.saturating_add(sideways);
            }
        }
        pos.z = pos.z.saturating_add(elevation);

        self.orientation = self.orientation.turn(turn);
        self.position
    }
}

/// Waypoints of a reconstructed track, starting with the origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPath {
    pub waypoints: Vec<Position>,
    pub final_orientation: Orientation,
}

impl TrackPath {
    /// Number of waypoints; always one more than the number of segments placed
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.waypoints.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.waypoints.last().copied()
    }

    /// A circuit returns to its starting point facing the starting direction
    pub fn is_closed(&self) -> bool {
        self.segment_count() > 0
            && self.start() == self.end()
            && self.final_orientation == Orientation::default()
    }
}

/// Run a sequence of movements through a fresh reconstructor
pub fn trace_movements(movements: impl IntoIterator<Item = Movement>) -> TrackPath {
    let mut state = PathReconstructor::new();
    let mut waypoints = vec![state.position()];

    for movement in movements {
        let waypoint = state.step(movement);
        trace!(%waypoint, heading = %state.orientation(), "placed segment");
        waypoints.push(waypoint);
    }

    TrackPath { waypoints, final_orientation: state.orientation() }
}

/// Reconstruct the path traced by a sequence of segment codes
///
/// Codes the catalog does not list still produce a waypoint, with no movement and no turn.
pub fn reconstruct(
    codes: impl IntoIterator<Item = SegmentTypeCode>,
    catalog: &SegmentCatalog,
) -> TrackPath {
    let mut unknown = 0usize;
    let movements = codes.into_iter().map(|code| {
        let kind = catalog.lookup(code);
        if !kind.is_known() {
            unknown += 1;
            warn!(%code, "unknown segment type; treating as zero movement");
        }
        kind.movement()
    });

    let path = trace_movements(movements);
    debug!(
        waypoints = path.len(),
        unknown,
        heading = %path.final_orientation,
        "reconstructed track path"
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SegmentRecord;
    use crate::types::TurnDelta;

    fn straight(forward: i32) -> Movement {
        Movement::new(forward, 0, 0, TurnDelta::None)
    }

    #[test]
    fn test_single_straight_segment() {
        let path = trace_movements([straight(1)]);
        assert_eq!(path.waypoints, vec![Position::new(0, 0, 0), Position::new(1, 0, 0)]);
        assert_eq!(path.final_orientation, Orientation::Deg0);
    }

    #[test]
    fn test_left_turn_changes_projection() {
        let path = trace_movements([Movement::new(1, 0, 0, TurnDelta::Left90), straight(2)]);
        assert_eq!(
            path.waypoints,
            vec![Position::new(0, 0, 0), Position::new(1, 0, 0), Position::new(1, 2, 0)]
        );
        assert_eq!(path.final_orientation, Orientation::Deg90);
    }

    #[test]
    fn test_projection_for_each_heading() {
        let movement = Movement::new(3, 1, 0, TurnDelta::None);
        let cases = [
            (Orientation::Deg0, Position::new(3, 1, 0)),
            (Orientation::Deg90, Position::new(-1, 3, 0)),
            (Orientation::Deg180, Position::new(-3, -1, 0)),
            (Orientation::Deg270, Position::new(1, -3, 0)),
        ];

        for (heading, expected) in cases {
            let mut state = PathReconstructor::starting_at(Position::ORIGIN, heading);
            assert_eq!(state.step(movement), expected, "heading {}", heading);
            assert_eq!(state.orientation(), heading);
        }
    }

    #[test]
    fn test_elevation_applies_regardless_of_heading() {
        let mut state = PathReconstructor::starting_at(Position::ORIGIN, Orientation::Deg180);
        state.step(Movement::new(0, 0, 4, TurnDelta::Right90));
        assert_eq!(state.position(), Position::new(0, 0, 4));
        assert_eq!(state.orientation(), Orientation::Deg90);
    }

    #[test]
    fn test_four_right_turns_close_the_loop() {
        let corner = Movement::new(1, -1, 0, TurnDelta::Right90);
        let path = trace_movements(std::iter::repeat(corner).take(4));

        assert_eq!(path.len(), 5);
        assert_eq!(path.end(), Some(Position::ORIGIN));
        assert!(path.is_closed());
    }

    #[test]
    fn test_empty_input_is_origin_only() {
        let path = reconstruct(std::iter::empty(), &SegmentCatalog::default());
        assert_eq!(path.waypoints, vec![Position::ORIGIN]);
        assert_eq!(path.segment_count(), 0);
        assert!(!path.is_closed());
    }

    #[test]
    fn test_unknown_codes_keep_position() {
        let catalog = SegmentCatalog::from_records([SegmentRecord::new(
            "Straight",
            SegmentTypeCode(0x00),
            straight(1),
        )])
        .unwrap();

        let codes = [SegmentTypeCode(0x00), SegmentTypeCode(0x99), SegmentTypeCode(0x00)];
        let path = reconstruct(codes, &catalog);

        assert_eq!(
            path.waypoints,
            vec![
                Position::new(0, 0, 0),
                Position::new(1, 0, 0),
                Position::new(1, 0, 0),
                Position::new(2, 0, 0),
            ]
        );
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let catalog = SegmentCatalog::from_json_str(
            r#"{ "Launch": { "Type": "0x00", "ForwardDelta": 2147483647, "ElevationDelta": -2147483648 } }"#,
        )
        .unwrap();

        let path = reconstruct([SegmentTypeCode(0x00), SegmentTypeCode(0x00)], &catalog);
        assert_eq!(path.end(), Some(Position::new(i32::MAX, 0, i32::MIN)));

        let mut state = PathReconstructor::starting_at(Position::new(i32::MIN, 0, 0), Orientation::Deg180);
        assert_eq!(state.step(straight(i32::MAX)).x, i32::MIN);
        let mut state = PathReconstructor::starting_at(Position::ORIGIN, Orientation::Deg90);
        assert_eq!(state.step(Movement::new(0, i32::MIN, 0, TurnDelta::None)).x, i32::MAX);
    }
}
