//! Shape-reference extraction
//!
//! Every finding resolves to the flat list of model shape ids the viewer
//! highlights for it. Most kinds anchor to faces; cutouts, simple sheet
//! holes, notches and tabs anchor to edges. Whole-part findings carry no
//! references at all. Composite findings concatenate the references of
//! their constituents in order.

use crate::model::finding::{DistanceAnchor, Finding};
use crate::model::geometry::ShapeRef;

fn anchor_refs(anchor: &DistanceAnchor, out: &mut Vec<ShapeRef>) {
    match anchor {
        DistanceAnchor::Faces(shape) => out.extend_from_slice(&shape.faces),
        DistanceAnchor::Edges(shape) => out.extend_from_slice(&shape.edges),
        DistanceAnchor::Edge(id) => out.push(*id),
    }
}

/// Collect the shape references a finding anchors to.
pub fn extract(finding: &Finding) -> Vec<ShapeRef> {
    use Finding::*;
    match finding {
        // face-anchored features
        TurningFace { shape, .. }
        | Face { shape, .. }
        | Countersink { shape, .. }
        | ThreadedHole { shape, .. }
        | Hole { shape, .. }
        | Pocket { shape, .. }
        | TurningGroove { shape, .. }
        | Bore { shape, .. }
        | ScrewBoss { shape, .. }
        | Boss { shape, .. }
        | Rib { shape, .. }
        | FormingFeature { shape, .. }
        | Bead { shape, .. }
        | Bend { shape, .. }
        | Bridge { shape, .. }
        | Louver { shape, .. }
        | Unrecognized { shape, .. } => shape.faces.clone(),

        // edge-anchored features
        Cutout { shape, .. } | Notch { shape, .. } | Tab { shape, .. } => shape.edges.clone(),
        SheetHole { complex, shape, .. } => {
            if *complex {
                shape.faces.clone()
            } else {
                shape.edges.clone()
            }
        }

        // composite: step holes contribute their faces in step order
        SteppedHole { steps, .. } => steps.iter().flat_map(extract).collect(),

        // drilling issues anchor to the offending hole's faces
        SmallDiameterHole { shape, .. }
        | DeepHole { shape, .. }
        | PartialHole { shape, .. }
        | NonStandardDrillPointAngleBlindHole { shape, .. }
        | FlatBottomHole { shape, .. } => shape.faces.clone(),

        // milling issues
        DeepPocket { shape, .. }
        | HighBoss { shape, .. }
        | NonPerpendicularMilledPartShape { shape, .. }
        | SmallRadiusMilledPartInternalCorner { shape, .. } => shape.faces.clone(),

        // turning; the whole-part size issues highlight nothing
        SquareEndKeyway { shape } => shape.faces.clone(),
        LargeMilledPart { .. } | LargeTurnedPart { .. } | LongSlenderTurnedPart { .. } => {
            Vec::new()
        }

        // molding issues
        HighRib { shape, .. }
        | IrregularWallThickness { shape, .. }
        | SmallMoldedWallThickness { shape, .. }
        | SmallDraftAngleRib { shape, .. } => shape.faces.clone(),
        SmallDistanceBetweenRibs {
            first_rib,
            second_rib,
            ..
        } => {
            let mut refs = first_rib.faces.clone();
            refs.extend_from_slice(&second_rib.faces);
            refs
        }

        // sheet metal issues
        FlatPatternInterference {
            first_face,
            second_face,
        } => vec![*first_face, *second_face],
        IrregularSizeNotch { shape, .. } | SmallSheetDiameterHole { shape, .. } => {
            shape.edges.clone()
        }
        LargeDepthBead { shape, .. } | SmallDepthLouver { shape, .. }
        | SmallRadiusBend { shape, .. } => shape.faces.clone(),
        NonStandardSheetSize { .. } => Vec::new(),
        SmallLengthFlange { panels, .. } => {
            panels.iter().flat_map(|p| p.faces.iter().copied()).collect()
        }
        SmallDistanceBetween { first, second, .. } => {
            let mut refs = Vec::new();
            anchor_refs(first, &mut refs);
            anchor_refs(second, &mut refs);
            refs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::finding::{HoleKind, NotchKind, SmallDistanceKind};
    use crate::model::geometry::{Direction, Shape};

    fn hole(faces: Vec<ShapeRef>) -> Finding {
        Finding::Hole {
            hole_kind: HoleKind::Through,
            radius: 2.0,
            depth: 8.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape: Shape::faces(faces),
        }
    }

    #[test]
    fn test_face_anchored_feature() {
        assert_eq!(extract(&hole(vec![4, 7, 9])), vec![4, 7, 9]);
    }

    #[test]
    fn test_notch_anchors_to_edges() {
        let notch = Finding::Notch {
            notch_kind: NotchKind::Plain,
            length: 10.0,
            width: 3.0,
            shape: Shape::edges(vec![21, 22]),
        };
        assert_eq!(extract(&notch), vec![21, 22]);
    }

    #[test]
    fn test_simple_sheet_hole_edges_complex_hole_faces() {
        let shape = Shape {
            faces: vec![1, 2],
            edges: vec![31, 32],
        };
        let simple = Finding::SheetHole {
            complex: false,
            radius: 3.0,
            depth: 1.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape: shape.clone(),
        };
        let complex = Finding::SheetHole {
            complex: true,
            radius: 3.0,
            depth: 1.0,
            axis: Direction::new(0.0, 0.0, 1.0),
            shape,
        };
        assert_eq!(extract(&simple), vec![31, 32]);
        assert_eq!(extract(&complex), vec![1, 2]);
    }

    #[test]
    fn test_stepped_hole_concatenates_step_faces() {
        let stepped = Finding::SteppedHole {
            depth: 20.0,
            steps: vec![hole(vec![3, 4]), hole(vec![5])],
        };
        assert_eq!(extract(&stepped), vec![3, 4, 5]);
    }

    #[test]
    fn test_stepped_hole_without_steps_has_no_refs() {
        let stepped = Finding::SteppedHole {
            depth: 20.0,
            steps: Vec::new(),
        };
        assert!(extract(&stepped).is_empty());
    }

    #[test]
    fn test_whole_part_issues_have_no_refs() {
        use crate::model::geometry::{Extent2, Extent3};
        let milled = Finding::LargeMilledPart {
            expected_max_size: Extent3::new(1.0, 1.0, 1.0),
            actual_size: Extent3::new(2.0, 2.0, 2.0),
        };
        let sheet = Finding::NonStandardSheetSize {
            nearest_standard_size: Extent2::new(100.0, 50.0),
            actual_size: Extent2::new(120.0, 55.0),
        };
        assert!(extract(&milled).is_empty());
        assert!(extract(&sheet).is_empty());
    }

    #[test]
    fn test_distance_anchors_concatenate_first_then_second() {
        let issue = Finding::SmallDistanceBetween {
            distance_kind: SmallDistanceKind::HoleAndEdge,
            expected_min_distance: 2.0,
            actual_distance: 0.8,
            first: DistanceAnchor::Edges(Shape::edges(vec![41, 42])),
            second: DistanceAnchor::Edge(77),
        };
        assert_eq!(extract(&issue), vec![41, 42, 77]);
    }

    #[test]
    fn test_flange_panels_flatten_in_order() {
        let issue = Finding::SmallLengthFlange {
            expected_min_length: 6.0,
            actual_length: 2.5,
            panels: vec![Shape::faces(vec![1, 2]), Shape::faces(vec![8])],
        };
        assert_eq!(extract(&issue), vec![1, 2, 8]);
    }
}
