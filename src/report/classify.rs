//! Classification of findings into display groups
//!
//! Maps every finding onto its display group name, highlight color and
//! ordered parameter row. Names and colors form the report vocabulary the
//! downstream viewer keys on, so they are stable strings, plural suffixes
//! included. Angles are stored in radians and reported in degrees;
//! material fractions are reported as percentages.

use std::fmt;

use crate::model::finding::{
    BendKind, FaceKind, Finding, GrooveKind, HemKind, HoleKind, NotchKind, PocketKind,
    SmallDistanceKind,
};
use crate::model::geometry::{Direction, Extent2, Extent3};

/// Display color of a feature group, rendered as "(r, g, b)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// One named parameter of a classified finding
#[derive(Debug, Clone)]
pub struct Param {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: ParamValue,
}

/// Parameter payload; every variant renders as a quoted string
#[derive(Debug, Clone)]
pub enum ParamValue {
    Number(f64),
    Axis(Direction),
    Size2(Extent2),
    Size3(Extent3),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{v:.2}"),
            ParamValue::Axis(d) => d.fmt(f),
            ParamValue::Size2(s) => s.fmt(f),
            ParamValue::Size3(s) => s.fmt(f),
        }
    }
}

/// A finding resolved to its display group and parameter row
#[derive(Debug, Clone)]
pub struct Classified {
    pub name: &'static str,
    pub color: Rgb,
    pub params: Vec<Param>,
}

fn num(label: &'static str, unit: &'static str, value: f64) -> Param {
    Param {
        label,
        unit,
        value: ParamValue::Number(value),
    }
}

fn axis(value: Direction) -> Param {
    Param {
        label: "Axis",
        unit: "",
        value: ParamValue::Axis(value),
    }
}

fn size2(label: &'static str, value: Extent2) -> Param {
    Param {
        label,
        unit: "mm",
        value: ParamValue::Size2(value),
    }
}

fn size3(label: &'static str, value: Extent3) -> Param {
    Param {
        label,
        unit: "mm",
        value: ParamValue::Size3(value),
    }
}

fn face_name(kind: FaceKind) -> &'static str {
    match kind {
        FaceKind::FlatFaceMilled => "Flat Face Milled Face(s)",
        FaceKind::FlatSideMilled => "Flat Side Milled Face(s)",
        FaceKind::CurvedMilled => "Curved Milled Face(s)",
        FaceKind::CircularMilled => "Circular Milled Face(s)",
        FaceKind::ConvexProfileEdgeMilling => "Convex Profile Edge Milling Face(s)",
        FaceKind::ConcaveFilletEdgeMilling => "Concave Fillet Edge Milling Face(s)",
        FaceKind::FlatMilled => "Flat Milled Face(s)",
        FaceKind::TurnDiameter => "Turn Diameter Face(s)",
        FaceKind::TurnForm => "Turn Form Face(s)",
        FaceKind::TurnFace => "Turn Face Face(s)",
    }
}

fn face_color(kind: FaceKind) -> Rgb {
    match kind {
        FaceKind::FlatFaceMilled => Rgb(115, 251, 253),
        FaceKind::FlatSideMilled => Rgb(0, 35, 245),
        FaceKind::CurvedMilled => Rgb(22, 65, 124),
        FaceKind::CircularMilled => Rgb(255, 254, 145),
        FaceKind::ConvexProfileEdgeMilling => Rgb(240, 155, 89),
        FaceKind::ConcaveFilletEdgeMilling => Rgb(129, 127, 38),
        FaceKind::FlatMilled => Rgb(115, 43, 245),
        FaceKind::TurnDiameter => Rgb(88, 19, 94),
        FaceKind::TurnForm => Rgb(161, 251, 142),
        FaceKind::TurnFace => Rgb(239, 136, 190),
    }
}

fn hole_name(kind: HoleKind) -> &'static str {
    match kind {
        HoleKind::Through => "Through Hole(s)",
        HoleKind::FlatBottom => "Flat Bottom Hole(s)",
        HoleKind::Blind => "Blind Hole(s)",
        HoleKind::Partial => "Partial Hole(s)",
    }
}

fn hole_color(kind: HoleKind) -> Rgb {
    match kind {
        HoleKind::Through => Rgb(240, 135, 132),
        HoleKind::FlatBottom => Rgb(235, 51, 36),
        HoleKind::Blind => Rgb(142, 64, 58),
        HoleKind::Partial => Rgb(58, 6, 3),
    }
}

fn threaded_hole_name(kind: HoleKind) -> &'static str {
    match kind {
        HoleKind::Through => "Threaded Through Hole(s)",
        HoleKind::FlatBottom => "Threaded Flat Bottom Hole(s)",
        HoleKind::Blind => "Threaded Blind Hole(s)",
        HoleKind::Partial => "Threaded Partial Hole(s)",
    }
}

fn threaded_hole_color(kind: HoleKind) -> Rgb {
    match kind {
        HoleKind::Through => Rgb(35, 160, 207),
        HoleKind::FlatBottom => Rgb(35, 76, 111),
        HoleKind::Blind => Rgb(192, 89, 133),
        HoleKind::Partial => Rgb(108, 31, 78),
    }
}

fn pocket_name(kind: PocketKind) -> &'static str {
    match kind {
        PocketKind::Closed => "Closed Pocket(s)",
        PocketKind::Open => "Open Pocket(s)",
        PocketKind::Through => "Through Pocket(s)",
    }
}

fn pocket_color(kind: PocketKind) -> Rgb {
    match kind {
        PocketKind::Closed => Rgb(81, 20, 0),
        PocketKind::Open => Rgb(189, 103, 37),
        PocketKind::Through => Rgb(255, 217, 188),
    }
}

fn groove_name(kind: GrooveKind) -> &'static str {
    match kind {
        GrooveKind::OuterDiameter => "Outer Diameter Groove(s)",
        GrooveKind::InnerDiameter => "Inner Diameter Groove(s)",
        GrooveKind::EndFace => "End Face Groove(s)",
    }
}

fn groove_color(kind: GrooveKind) -> Rgb {
    match kind {
        GrooveKind::OuterDiameter => Rgb(175, 49, 37),
        GrooveKind::InnerDiameter => Rgb(234, 255, 53),
        GrooveKind::EndFace => Rgb(144, 66, 159),
    }
}

fn bend_name(kind: &BendKind) -> &'static str {
    match kind {
        BendKind::Plain => "Bend(s)",
        BendKind::Curved => "Curved Bend(s)",
        BendKind::Hem(HemKind::Flattened) => "Flattened Hem Bend(s)",
        BendKind::Hem(HemKind::Open) => "Open Hem Bend(s)",
        BendKind::Hem(HemKind::Teardrop) => "Teardrop Hem Bend(s)",
        BendKind::Hem(HemKind::Rope) => "Rope Hem Bend(s)",
        BendKind::Hem(HemKind::Rolled) => "Rolled Hem Bend(s)",
    }
}

fn bend_color(kind: &BendKind) -> Rgb {
    match kind {
        BendKind::Plain => Rgb(0, 35, 245),
        BendKind::Curved => Rgb(255, 254, 145),
        BendKind::Hem(HemKind::Flattened) => Rgb(22, 65, 124),
        BendKind::Hem(HemKind::Open) => Rgb(42, 85, 144),
        BendKind::Hem(HemKind::Teardrop) => Rgb(62, 105, 164),
        BendKind::Hem(HemKind::Rope) => Rgb(82, 125, 184),
        BendKind::Hem(HemKind::Rolled) => Rgb(102, 145, 204),
    }
}

fn small_distance_name(kind: SmallDistanceKind) -> &'static str {
    match kind {
        SmallDistanceKind::HoleAndBend => "Small Distance Between Hole And Bend Issue(s)",
        SmallDistanceKind::Holes => "Small Distance Between Holes Issue(s)",
        SmallDistanceKind::NotchAndBend => "Small Distance Between Notch And Bend Issue(s)",
        SmallDistanceKind::Notches => "Small Distance Between Notches Issue(s)",
        SmallDistanceKind::Tabs => "Small Distance Between Tabs Issue(s)",
        SmallDistanceKind::HoleAndEdge => "Small Distance Between Hole And Edge Issue(s)",
        SmallDistanceKind::HoleAndCutout => "Small Distance Between Hole And Cutout Issue(s)",
    }
}

fn small_distance_color(kind: SmallDistanceKind) -> Rgb {
    match kind {
        SmallDistanceKind::HoleAndBend => Rgb(239, 136, 190),
        SmallDistanceKind::Holes => Rgb(142, 64, 58),
        SmallDistanceKind::NotchAndBend => Rgb(58, 6, 3),
        SmallDistanceKind::Notches => Rgb(0, 215, 3),
        SmallDistanceKind::Tabs => Rgb(157, 160, 207),
        SmallDistanceKind::HoleAndEdge => Rgb(240, 135, 132),
        SmallDistanceKind::HoleAndCutout => Rgb(127, 130, 187),
    }
}

/// Resolve a finding to its display group and parameter row.
pub fn classify(finding: &Finding) -> Classified {
    use Finding::*;
    match finding {
        TurningFace {
            face_kind, radius, ..
        } => Classified {
            name: face_name(*face_kind),
            color: face_color(*face_kind),
            params: vec![num("Radius", "mm", *radius)],
        },
        Face { face_kind, .. } => Classified {
            name: face_name(*face_kind),
            color: face_color(*face_kind),
            params: Vec::new(),
        },
        Countersink {
            radius,
            depth,
            axis: a,
            ..
        } => Classified {
            name: "Countersink(s)",
            color: Rgb(55, 125, 34),
            params: vec![
                num("Radius", "mm", *radius),
                num("Depth", "mm", *depth),
                axis(*a),
            ],
        },
        ThreadedHole {
            hole_kind,
            minor_radius,
            major_radius,
            thread_length,
            pitch,
            depth,
            axis: a,
            ..
        } => Classified {
            name: threaded_hole_name(*hole_kind),
            color: threaded_hole_color(*hole_kind),
            params: vec![
                num("Minor radius", "mm", *minor_radius),
                num("Major radius", "mm", *major_radius),
                num("Thread length", "mm", *thread_length),
                num("Pitch", "mm", *pitch),
                num("Depth", "mm", *depth),
                axis(*a),
            ],
        },
        Hole {
            hole_kind,
            radius,
            depth,
            axis: a,
            ..
        } => Classified {
            name: hole_name(*hole_kind),
            color: hole_color(*hole_kind),
            params: vec![
                num("Radius", "mm", *radius),
                num("Depth", "mm", *depth),
                axis(*a),
            ],
        },
        SteppedHole { depth, .. } => Classified {
            name: "Stepped Hole(s)",
            color: Rgb(204, 0, 125),
            params: vec![num("Depth", "mm", *depth)],
        },
        Pocket {
            pocket_kind,
            length,
            width,
            depth,
            axis: a,
            ..
        } => Classified {
            name: pocket_name(*pocket_kind),
            color: pocket_color(*pocket_kind),
            params: vec![
                num("Length", "mm", *length),
                num("Width", "mm", *width),
                num("Depth", "mm", *depth),
                axis(*a),
            ],
        },
        TurningGroove {
            groove_kind,
            radius,
            depth,
            width,
            ..
        } => Classified {
            name: groove_name(*groove_kind),
            color: groove_color(*groove_kind),
            params: vec![
                num("Radius", "mm", *radius),
                num("Depth", "mm", *depth),
                num("Width", "mm", *width),
            ],
        },
        Bore { radius, depth, .. } => Classified {
            name: "Bore(s)",
            color: Rgb(127, 130, 187),
            params: vec![num("Radius", "mm", *radius), num("Depth", "mm", *depth)],
        },
        ScrewBoss {
            outer_radius,
            inner_radius,
            draft_angle,
            ..
        } => Classified {
            name: "Screw Boss(es)",
            color: Rgb(12, 32, 63),
            params: vec![
                num("Outer Radius", "mm", *outer_radius),
                num("Inner Radius", "mm", *inner_radius),
                num("Draft Angle", "deg", draft_angle.to_degrees()),
            ],
        },
        Boss {
            length,
            width,
            height,
            ..
        } => Classified {
            name: "Boss(es)",
            color: Rgb(56, 72, 13),
            params: vec![
                num("Length", "mm", *length),
                num("Width", "mm", *width),
                num("Height", "mm", *height),
            ],
        },
        Rib {
            length,
            height,
            thickness,
            draft_angle,
            ..
        } => Classified {
            name: "Rib(s)",
            color: Rgb(34, 51, 127),
            params: vec![
                num("Length", "mm", *length),
                num("Height", "mm", *height),
                num("Thickness", "mm", *thickness),
                num("Draft Angle", "deg", draft_angle.to_degrees()),
            ],
        },
        FormingFeature {
            depth,
            length,
            axis: a,
            ..
        } => Classified {
            name: "Forming Feature(s)",
            color: Rgb(235, 211, 253),
            params: vec![
                num("Depth", "mm", *depth),
                num("Length", "mm", *length),
                axis(*a),
            ],
        },
        Bead { depth, .. } => Classified {
            name: "Bead(s)",
            color: Rgb(115, 251, 253),
            params: vec![num("Depth", "mm", *depth)],
        },
        Bend {
            bend_kind,
            radius,
            angle,
            length,
            width,
            ..
        } => Classified {
            name: bend_name(bend_kind),
            color: bend_color(bend_kind),
            params: vec![
                num("Radius", "mm", *radius),
                num("Angle", "deg", angle.to_degrees()),
                num("Length", "mm", *length),
                num("Width", "mm", *width),
            ],
        },
        Bridge { length, depth, .. } => Classified {
            name: "Bridge(s)",
            color: Rgb(240, 155, 89),
            params: vec![num("Length", "mm", *length), num("Depth", "mm", *depth)],
        },
        SheetHole {
            complex,
            radius,
            depth,
            axis: a,
            ..
        } => Classified {
            name: if *complex { "Complex Hole(s)" } else { "Hole(s)" },
            color: if *complex {
                Rgb(115, 43, 245)
            } else {
                Rgb(129, 127, 38)
            },
            params: vec![
                num("Radius", "mm", *radius),
                num("Depth", "mm", *depth),
                axis(*a),
            ],
        },
        Cutout { perimeter, .. } => Classified {
            name: "Cutout(s)",
            color: Rgb(88, 19, 94),
            params: vec![num("Perimeter", "mm", *perimeter)],
        },
        Louver { depth, .. } => Classified {
            name: "Louver(s)",
            color: Rgb(161, 251, 142),
            params: vec![num("Depth", "mm", *depth)],
        },
        Notch {
            notch_kind,
            length,
            width,
            ..
        } => match notch_kind {
            NotchKind::Plain => Classified {
                name: "Notch(es)",
                color: Rgb(239, 136, 190),
                params: vec![num("Length", "mm", *length), num("Width", "mm", *width)],
            },
            NotchKind::Straight {
                corner_fillet_radius,
            } => Classified {
                name: "Straight Notch(es)",
                color: Rgb(240, 135, 132),
                params: vec![
                    num("Length", "mm", *length),
                    num("Width", "mm", *width),
                    num("Corner Fillet Radius", "mm", *corner_fillet_radius),
                ],
            },
            NotchKind::V { angle } => Classified {
                name: "V Notch(es)",
                color: Rgb(235, 51, 36),
                params: vec![
                    num("Length", "mm", *length),
                    num("Width", "mm", *width),
                    num("Angle", "deg", angle.to_degrees()),
                ],
            },
        },
        Tab { length, width, .. } => Classified {
            name: "Tab(s)",
            color: Rgb(127, 130, 187),
            params: vec![num("Length", "mm", *length), num("Width", "mm", *width)],
        },
        Unrecognized { type_name, .. } => {
            tracing::warn!(kind = %type_name, "finding kind outside the report vocabulary");
            Classified {
                name: "Face(s)",
                color: Rgb(0, 0, 0),
                params: Vec::new(),
            }
        }
        SmallDiameterHole {
            expected_min_diameter,
            actual_diameter,
            ..
        } => Classified {
            name: "Small Diameter Hole(s)",
            color: Rgb(115, 251, 253),
            params: vec![
                num("Expected Minimum Diameter", "mm", *expected_min_diameter),
                num("Actual Diameter", "mm", *actual_diameter),
            ],
        },
        DeepHole {
            expected_max_depth,
            actual_depth,
            ..
        } => Classified {
            name: "Deep Hole(s)",
            color: Rgb(0, 35, 245),
            params: vec![
                num("Expected Maximum Depth", "mm", *expected_max_depth),
                num("Actual Depth", "mm", *actual_depth),
            ],
        },
        PartialHole {
            expected_min_material,
            actual_material,
            ..
        } => Classified {
            name: "Partial Hole(s)",
            color: Rgb(255, 254, 145),
            params: vec![
                num(
                    "Expected Minimum Material Percent",
                    "%",
                    expected_min_material * 100.0,
                ),
                num("Actual Material Percent", "%", actual_material * 100.0),
            ],
        },
        NonStandardDrillPointAngleBlindHole {
            nearest_standard_angle,
            actual_angle,
            ..
        } => Classified {
            name: "Non Standard Drill Point Angle Blind Hole(s)",
            color: Rgb(88, 13, 78),
            params: vec![
                num(
                    "Nearest Standard Angle",
                    "deg",
                    nearest_standard_angle.to_degrees(),
                ),
                num("Actual Angle", "deg", actual_angle.to_degrees()),
            ],
        },
        FlatBottomHole { .. } => Classified {
            name: "Flat Bottom Hole(s)",
            color: Rgb(240, 155, 89),
            params: Vec::new(),
        },
        DeepPocket {
            expected_max_depth,
            actual_depth,
            ..
        } => Classified {
            name: "Deep Pocket Issue(s)",
            color: Rgb(190, 10, 100),
            params: vec![
                num("Expected Maximum Depth", "mm", *expected_max_depth),
                num("Actual Depth", "mm", *actual_depth),
            ],
        },
        HighBoss {
            expected_max_height,
            actual_height,
            ..
        } => Classified {
            name: "High Boss Issue(s)",
            color: Rgb(180, 100, 50),
            params: vec![
                num("Expected Maximum Height", "mm", *expected_max_height),
                num("Actual Height", "mm", *actual_height),
            ],
        },
        LargeMilledPart {
            expected_max_size,
            actual_size,
        } => Classified {
            name: "Large Milled Part(s)",
            color: Rgb(17, 37, 205),
            params: vec![
                size3("Expected Maximum Size (LxWxH)", *expected_max_size),
                size3("Actual Size (LxWxH)", *actual_size),
            ],
        },
        NonPerpendicularMilledPartShape { actual_angle, .. } => Classified {
            name: "Non Perpendicular Milled Part Shape(s)",
            color: Rgb(129, 227, 138),
            params: vec![num("Actual Angle", "deg", actual_angle.to_degrees())],
        },
        SmallRadiusMilledPartInternalCorner {
            expected_min_radius,
            actual_radius,
            ..
        } => Classified {
            name: "Small Radius Milled Part Internal Corner(s)",
            color: Rgb(10, 10, 200),
            params: vec![
                num("Expected Minimum Radius", "mm", *expected_min_radius),
                num("Actual Radius", "mm", *actual_radius),
            ],
        },
        LargeTurnedPart {
            expected_max_size,
            actual_size,
        } => Classified {
            name: "Large Turned Part(s)",
            color: Rgb(195, 195, 195),
            params: vec![
                size2("Expected Maximum Size (LxR)", *expected_max_size),
                size2("Actual Size (LxR)", *actual_size),
            ],
        },
        LongSlenderTurnedPart {
            expected_max_length,
            actual_length,
            actual_min_diameter,
            ..
        } => Classified {
            name: "Long-Slender Turned Part(s)",
            color: Rgb(195, 195, 195),
            params: vec![
                num("Expected Maximum Length", "mm", *expected_max_length),
                num("Actual Length", "mm", *actual_length),
                num("Actual Minimum Diameter", "mm", *actual_min_diameter),
            ],
        },
        SquareEndKeyway { .. } => Classified {
            name: "Square End Keyway(s)",
            color: Rgb(157, 160, 207),
            params: Vec::new(),
        },
        HighRib {
            expected_max_height,
            actual_height,
            ..
        } => Classified {
            name: "High Rib(s)",
            color: Rgb(255, 36, 12),
            params: vec![
                num("Expected Maximum Height", "mm", *expected_max_height),
                num("Actual Height", "mm", *actual_height),
            ],
        },
        IrregularWallThickness {
            expected_max_thickness,
            expected_min_thickness,
            actual_thickness,
            ..
        } => Classified {
            name: "Irregular Wall(s)",
            color: Rgb(23, 11, 19),
            params: vec![
                num(
                    "Expected Maximum Wall Thickness",
                    "mm",
                    *expected_max_thickness,
                ),
                num(
                    "Expected Minimum Wall Thickness",
                    "mm",
                    *expected_min_thickness,
                ),
                num("Actual Wall Thickness", "mm", *actual_thickness),
            ],
        },
        SmallMoldedWallThickness {
            expected_min_thickness,
            actual_thickness,
            ..
        } => Classified {
            name: "Small Wall(s)",
            color: Rgb(14, 209, 199),
            params: vec![
                num(
                    "Expected Minimum Wall Thickness",
                    "mm",
                    *expected_min_thickness,
                ),
                num("Actual Wall Thickness", "mm", *actual_thickness),
            ],
        },
        SmallDraftAngleRib {
            expected_min_draft_angle,
            actual_draft_angle,
            ..
        } => Classified {
            name: "Small Draft Angle Rib(s)",
            color: Rgb(189, 200, 13),
            params: vec![
                num(
                    "Expected Minimum Draft Angle",
                    "deg",
                    expected_min_draft_angle.to_degrees(),
                ),
                num(
                    "Actual Draft Angle",
                    "deg",
                    actual_draft_angle.to_degrees(),
                ),
            ],
        },
        SmallDistanceBetweenRibs {
            expected_min_distance,
            actual_distance,
            ..
        } => Classified {
            name: "Small Distance Between Ribs Issue(s)",
            color: Rgb(11, 90, 111),
            params: vec![
                num("Expected Minimum Distance", "mm", *expected_min_distance),
                num("Actual Distance", "mm", *actual_distance),
            ],
        },
        FlatPatternInterference { .. } => Classified {
            name: "Flat Pattern Interference(s)",
            color: Rgb(115, 251, 253),
            params: Vec::new(),
        },
        IrregularSizeNotch {
            expected_size,
            actual_size,
            ..
        } => Classified {
            name: "Irregular Size Notch(s)",
            color: Rgb(255, 254, 145),
            params: vec![
                size2("Expected Size (LxW)", *expected_size),
                size2("Actual Size (LxW)", *actual_size),
            ],
        },
        LargeDepthBead {
            expected_max_depth,
            actual_depth,
            ..
        } => Classified {
            name: "Large Depth Bead(s)",
            color: Rgb(129, 127, 38),
            params: vec![
                num("Expected Maximum Depth", "mm", *expected_max_depth),
                num("Actual Depth", "mm", *actual_depth),
            ],
        },
        SmallDepthLouver {
            expected_min_depth,
            actual_depth,
            ..
        } => Classified {
            name: "Small Depth Louver(s)",
            color: Rgb(190, 127, 58),
            params: vec![
                num("Expected Minimum Depth", "mm", *expected_min_depth),
                num("Actual Depth", "mm", *actual_depth),
            ],
        },
        NonStandardSheetSize {
            nearest_standard_size,
            actual_size,
        } => Classified {
            name: "Non Standard Sheet Size(s)",
            color: Rgb(0, 0, 0),
            params: vec![
                size2("Nearest Standard Size (LxW)", *nearest_standard_size),
                size2("Actual Size (LxW)", *actual_size),
            ],
        },
        SmallSheetDiameterHole {
            expected_min_diameter,
            actual_diameter,
            ..
        } => Classified {
            name: "Small Diameter Hole(s)",
            color: Rgb(115, 43, 245),
            params: vec![
                num("Expected Minimum Diameter", "mm", *expected_min_diameter),
                num("Actual Diameter", "mm", *actual_diameter),
            ],
        },
        SmallRadiusBend {
            expected_min_radius,
            actual_radius,
            ..
        } => Classified {
            name: "Small Radius Bend(s)",
            color: Rgb(161, 251, 142),
            params: vec![
                num("Expected Minimum Radius", "mm", *expected_min_radius),
                num("Actual Radius", "mm", *actual_radius),
            ],
        },
        SmallLengthFlange {
            expected_min_length,
            actual_length,
            ..
        } => Classified {
            name: "Small Length Flange(s)",
            color: Rgb(88, 19, 94),
            params: vec![
                num("Expected Minimum Length", "mm", *expected_min_length),
                num("Actual Length", "mm", *actual_length),
            ],
        },
        SmallDistanceBetween {
            distance_kind,
            expected_min_distance,
            actual_distance,
            ..
        } => Classified {
            name: small_distance_name(*distance_kind),
            color: small_distance_color(*distance_kind),
            params: vec![
                num("Expected Minimum Distance", "mm", *expected_min_distance),
                num("Actual Distance", "mm", *actual_distance),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::Shape;
    use std::f64::consts::PI;

    #[test]
    fn test_hole_params_in_contract_order() {
        let finding = Finding::Hole {
            hole_kind: HoleKind::Through,
            radius: 4.0,
            depth: 10.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape: Shape::faces(vec![1]),
        };
        let classified = classify(&finding);
        assert_eq!(classified.name, "Through Hole(s)");
        assert_eq!(classified.color, Rgb(240, 135, 132));
        let labels: Vec<_> = classified.params.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Radius", "Depth", "Axis"]);
        assert_eq!(classified.params[2].unit, "");
        assert_eq!(classified.params[2].value.to_string(), "(0.00, 0.00, 1.00)");
    }

    #[test]
    fn test_threaded_hole_gets_threaded_name_and_color() {
        let finding = Finding::ThreadedHole {
            hole_kind: HoleKind::Blind,
            minor_radius: 3.2,
            major_radius: 4.0,
            thread_length: 12.0,
            pitch: 0.7,
            depth: 15.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape: Shape::faces(vec![1]),
        };
        let classified = classify(&finding);
        assert_eq!(classified.name, "Threaded Blind Hole(s)");
        assert_eq!(classified.color, Rgb(192, 89, 133));
        assert_eq!(classified.params.len(), 6);
        assert_eq!(classified.params[0].label, "Minor radius");
    }

    #[test]
    fn test_angles_reported_in_degrees() {
        let finding = Finding::SmallDraftAngleRib {
            expected_min_draft_angle: PI / 180.0,
            actual_draft_angle: PI / 360.0,
            shape: Shape::faces(vec![9]),
        };
        let classified = classify(&finding);
        assert_eq!(classified.params[0].value.to_string(), "1.00");
        assert_eq!(classified.params[1].value.to_string(), "0.50");
        assert_eq!(classified.params[0].unit, "deg");
    }

    #[test]
    fn test_material_fractions_reported_as_percent() {
        let finding = Finding::PartialHole {
            expected_min_material: 0.5,
            actual_material: 0.25,
            shape: Shape::faces(vec![2]),
        };
        let classified = classify(&finding);
        assert_eq!(classified.params[0].value.to_string(), "50.00");
        assert_eq!(classified.params[1].value.to_string(), "25.00");
        assert_eq!(classified.params[0].unit, "%");
    }

    #[test]
    fn test_unrecognized_kind_falls_back_to_neutral_group() {
        let finding = Finding::Unrecognized {
            type_name: "ChamferNetwork".into(),
            shape: Shape::faces(vec![5]),
        };
        let classified = classify(&finding);
        assert_eq!(classified.name, "Face(s)");
        assert_eq!(classified.color, Rgb(0, 0, 0));
        assert!(classified.params.is_empty());
    }

    #[test]
    fn test_extent_params_render_as_cross_products() {
        let finding = Finding::LargeMilledPart {
            expected_max_size: Extent3::new(500.0, 400.0, 300.0),
            actual_size: Extent3::new(652.5, 410.0, 305.25),
        };
        let classified = classify(&finding);
        assert_eq!(
            classified.params[1].value.to_string(),
            "652.50 x 410.00 x 305.25"
        );
    }

    #[test]
    fn test_paramless_issue_kinds() {
        let keyway = classify(&Finding::SquareEndKeyway {
            shape: Shape::faces(vec![3]),
        });
        assert!(keyway.params.is_empty());
        assert_eq!(keyway.color, Rgb(157, 160, 207));

        let interference = classify(&Finding::FlatPatternInterference {
            first_face: 10,
            second_face: 12,
        });
        assert!(interference.params.is_empty());
        assert_eq!(interference.name, "Flat Pattern Interference(s)");
    }
}
