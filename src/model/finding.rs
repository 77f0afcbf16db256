//! Finding sum type - everything the external analysis engine reports
//!
//! A finding is either a recognized manufacturing feature or a
//! design-for-manufacturing issue. The engine hands findings over as
//! read-only records; the reporting pipeline never mutates them.
//!
//! The set of kinds is closed: classification dispatches over it with an
//! exhaustive match, so a newly added kind is a compile error in every
//! component that has to know about it. Engine kinds outside this
//! vocabulary arrive as [`Finding::Unrecognized`].

use serde::{Deserialize, Serialize};

use crate::model::geometry::{Direction, Extent2, Extent3, Shape, ShapeRef};

/// Machined face classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceKind {
    FlatFaceMilled,
    FlatSideMilled,
    CurvedMilled,
    CircularMilled,
    ConvexProfileEdgeMilling,
    ConcaveFilletEdgeMilling,
    FlatMilled,
    TurnDiameter,
    TurnForm,
    TurnFace,
}

/// Drilled hole classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleKind {
    Through,
    FlatBottom,
    Blind,
    Partial,
}

/// Milled pocket classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketKind {
    Closed,
    Open,
    Through,
}

/// Turning groove classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrooveKind {
    OuterDiameter,
    InnerDiameter,
    EndFace,
}

/// Hem bend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HemKind {
    Flattened,
    Open,
    Teardrop,
    Rope,
    Rolled,
}

/// Sheet-metal bend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BendKind {
    Plain,
    Curved,
    Hem(HemKind),
}

/// Sheet-metal notch classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotchKind {
    Plain,
    Straight { corner_fillet_radius: f64 },
    V { angle: f64 },
}

/// Which pair of sheet-metal features a small-distance issue is between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmallDistanceKind {
    HoleAndBend,
    Holes,
    NotchAndBend,
    Notches,
    Tabs,
    HoleAndEdge,
    HoleAndCutout,
}

/// One endpoint of a between-two-objects issue.
///
/// The variant fixes the anchoring granularity of the referenced object:
/// face-anchored feature, edge-anchored feature, or a single explicit edge
/// of the part outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceAnchor {
    Faces(Shape),
    Edges(Shape),
    Edge(ShapeRef),
}

/// A recognized feature or DFM issue produced by the analysis engine.
///
/// Feature kinds carry the engine-measured parameters and the shape the
/// feature owns; issue kinds carry expected/actual values and the shapes of
/// the objects they complain about. Angles are stored in radians and ratios
/// as fractions; display normalization happens at classification time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    // machining features
    TurningFace {
        face_kind: FaceKind,
        radius: f64,
        shape: Shape,
    },
    Face {
        face_kind: FaceKind,
        shape: Shape,
    },
    Countersink {
        radius: f64,
        depth: f64,
        axis: Direction,
        shape: Shape,
    },
    ThreadedHole {
        hole_kind: HoleKind,
        minor_radius: f64,
        major_radius: f64,
        thread_length: f64,
        pitch: f64,
        depth: f64,
        axis: Direction,
        shape: Shape,
    },
    Hole {
        hole_kind: HoleKind,
        radius: f64,
        depth: f64,
        axis: Direction,
        shape: Shape,
    },
    /// Composite: owns its constituent holes, which contribute shape
    /// references but never appear as entries of their own
    SteppedHole {
        depth: f64,
        steps: Vec<Finding>,
    },
    Pocket {
        pocket_kind: PocketKind,
        length: f64,
        width: f64,
        depth: f64,
        axis: Direction,
        shape: Shape,
    },
    TurningGroove {
        groove_kind: GrooveKind,
        radius: f64,
        depth: f64,
        width: f64,
        shape: Shape,
    },
    Bore {
        radius: f64,
        depth: f64,
        shape: Shape,
    },

    // molding features
    ScrewBoss {
        outer_radius: f64,
        inner_radius: f64,
        draft_angle: f64,
        shape: Shape,
    },
    Boss {
        length: f64,
        width: f64,
        height: f64,
        shape: Shape,
    },
    Rib {
        length: f64,
        height: f64,
        thickness: f64,
        draft_angle: f64,
        shape: Shape,
    },

    // sheet metal features
    FormingFeature {
        depth: f64,
        length: f64,
        axis: Direction,
        shape: Shape,
    },
    Bead {
        depth: f64,
        shape: Shape,
    },
    Bend {
        bend_kind: BendKind,
        radius: f64,
        angle: f64,
        length: f64,
        width: f64,
        shape: Shape,
    },
    Bridge {
        length: f64,
        depth: f64,
        shape: Shape,
    },
    SheetHole {
        complex: bool,
        radius: f64,
        depth: f64,
        axis: Direction,
        shape: Shape,
    },
    Cutout {
        perimeter: f64,
        shape: Shape,
    },
    Louver {
        depth: f64,
        shape: Shape,
    },
    Notch {
        notch_kind: NotchKind,
        length: f64,
        width: f64,
        shape: Shape,
    },
    Tab {
        length: f64,
        width: f64,
        shape: Shape,
    },

    /// An engine kind outside the report vocabulary; classified into the
    /// generic bucket with a logged warning
    Unrecognized {
        type_name: String,
        shape: Shape,
    },

    // DFM machining drilling issues
    SmallDiameterHole {
        expected_min_diameter: f64,
        actual_diameter: f64,
        shape: Shape,
    },
    DeepHole {
        expected_max_depth: f64,
        actual_depth: f64,
        shape: Shape,
    },
    PartialHole {
        expected_min_material: f64,
        actual_material: f64,
        shape: Shape,
    },
    NonStandardDrillPointAngleBlindHole {
        nearest_standard_angle: f64,
        actual_angle: f64,
        shape: Shape,
    },
    FlatBottomHole {
        shape: Shape,
    },

    // DFM machining milling issues
    DeepPocket {
        expected_max_depth: f64,
        actual_depth: f64,
        shape: Shape,
    },
    HighBoss {
        expected_max_height: f64,
        actual_height: f64,
        shape: Shape,
    },
    LargeMilledPart {
        expected_max_size: Extent3,
        actual_size: Extent3,
    },
    NonPerpendicularMilledPartShape {
        actual_angle: f64,
        shape: Shape,
    },
    SmallRadiusMilledPartInternalCorner {
        expected_min_radius: f64,
        actual_radius: f64,
        shape: Shape,
    },

    // DFM machining turning issues
    LargeTurnedPart {
        expected_max_size: Extent2,
        actual_size: Extent2,
    },
    LongSlenderTurnedPart {
        expected_max_length: f64,
        actual_length: f64,
        actual_min_diameter: f64,
        shape: Shape,
    },
    SquareEndKeyway {
        shape: Shape,
    },

    // DFM molding issues
    HighRib {
        expected_max_height: f64,
        actual_height: f64,
        shape: Shape,
    },
    IrregularWallThickness {
        expected_max_thickness: f64,
        expected_min_thickness: f64,
        actual_thickness: f64,
        shape: Shape,
    },
    SmallMoldedWallThickness {
        expected_min_thickness: f64,
        actual_thickness: f64,
        shape: Shape,
    },
    SmallDraftAngleRib {
        expected_min_draft_angle: f64,
        actual_draft_angle: f64,
        shape: Shape,
    },
    SmallDistanceBetweenRibs {
        expected_min_distance: f64,
        actual_distance: f64,
        first_rib: Shape,
        second_rib: Shape,
    },

    // DFM sheet metal issues
    FlatPatternInterference {
        first_face: ShapeRef,
        second_face: ShapeRef,
    },
    IrregularSizeNotch {
        expected_size: Extent2,
        actual_size: Extent2,
        shape: Shape,
    },
    LargeDepthBead {
        expected_max_depth: f64,
        actual_depth: f64,
        shape: Shape,
    },
    SmallDepthLouver {
        expected_min_depth: f64,
        actual_depth: f64,
        shape: Shape,
    },
    NonStandardSheetSize {
        nearest_standard_size: Extent2,
        actual_size: Extent2,
    },
    SmallSheetDiameterHole {
        expected_min_diameter: f64,
        actual_diameter: f64,
        shape: Shape,
    },
    SmallRadiusBend {
        expected_min_radius: f64,
        actual_radius: f64,
        shape: Shape,
    },
    SmallLengthFlange {
        expected_min_length: f64,
        actual_length: f64,
        panels: Vec<Shape>,
    },
    SmallDistanceBetween {
        distance_kind: SmallDistanceKind,
        expected_min_distance: f64,
        actual_distance: f64,
        first: DistanceAnchor,
        second: DistanceAnchor,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_serde_roundtrip() {
        let finding = Finding::Hole {
            hole_kind: HoleKind::Through,
            radius: 4.0,
            depth: 12.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape: Shape::faces(vec![7, 8]),
        };

        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"kind\":\"hole\""));
        assert!(json.contains("\"hole_kind\":\"through\""));

        let parsed: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, finding);
    }

    #[test]
    fn test_composite_serde_roundtrip() {
        let finding = Finding::SteppedHole {
            depth: 20.0,
            steps: vec![
                Finding::Hole {
                    hole_kind: HoleKind::Blind,
                    radius: 6.0,
                    depth: 8.0,
                    axis: Direction::new(0.0, 0.0, 1.0),
                    shape: Shape::faces(vec![1]),
                },
                Finding::Hole {
                    hole_kind: HoleKind::Through,
                    radius: 3.0,
                    depth: 12.0,
                    axis: Direction::new(0.0, 0.0, 1.0),
                    shape: Shape::faces(vec![2]),
                },
            ],
        };

        let json = serde_json::to_string(&finding).unwrap();
        let parsed: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, finding);
    }
}
