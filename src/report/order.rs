//! Canonical ordering and deduplication of findings
//!
//! Findings are kept in a sequence sorted under an externally supplied
//! strict-weak comparator. Two findings neither of which orders below the
//! other are considered equivalent and collapse into one entry carrying an
//! occurrence count and every occurrence's shape-reference set.
//!
//! The comparator is authoritative: equivalence is *mutual non-less*, never
//! a direct value comparison. A comparator whose key is coarser than the
//! full parameter set will conflate findings that differ in the ignored
//! parameters; that is the comparator's policy, not this module's.

use crate::model::finding::{Finding, NotchKind};
use crate::model::geometry::ShapeRef;

/// Strict-weak ordering over findings, supplied by the report caller
pub trait FindingOrder {
    fn less(&self, a: &Finding, b: &Finding) -> bool;
}

/// Default report ordering: kind rank first, then a coarse per-kind
/// numeric key (sub-kind and principal dimensions; axes and anchors are
/// deliberately not part of the key).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrder;

impl FindingOrder for DefaultOrder {
    fn less(&self, a: &Finding, b: &Finding) -> bool {
        let (rank_a, rank_b) = (kind_rank(a), kind_rank(b));
        if rank_a != rank_b {
            return rank_a < rank_b;
        }
        let (key_a, key_b) = (sort_key(a), sort_key(b));
        for (x, y) in key_a.iter().zip(key_b.iter()) {
            if x < y {
                return true;
            }
            if y < x {
                return false;
            }
        }
        false
    }
}

fn kind_rank(finding: &Finding) -> u32 {
    use Finding::*;
    match finding {
        TurningFace { .. } => 0,
        Face { .. } => 1,
        Countersink { .. } => 2,
        ThreadedHole { .. } => 3,
        Hole { .. } => 4,
        SteppedHole { .. } => 5,
        Pocket { .. } => 6,
        TurningGroove { .. } => 7,
        Bore { .. } => 8,
        ScrewBoss { .. } => 9,
        Boss { .. } => 10,
        Rib { .. } => 11,
        FormingFeature { .. } => 12,
        Bead { .. } => 13,
        Bend { .. } => 14,
        Bridge { .. } => 15,
        SheetHole { .. } => 16,
        Cutout { .. } => 17,
        Louver { .. } => 18,
        Notch { .. } => 19,
        Tab { .. } => 20,
        Unrecognized { .. } => 21,
        SmallDiameterHole { .. } => 22,
        DeepHole { .. } => 23,
        PartialHole { .. } => 24,
        NonStandardDrillPointAngleBlindHole { .. } => 25,
        FlatBottomHole { .. } => 26,
        DeepPocket { .. } => 27,
        HighBoss { .. } => 28,
        LargeMilledPart { .. } => 29,
        NonPerpendicularMilledPartShape { .. } => 30,
        SmallRadiusMilledPartInternalCorner { .. } => 31,
        LargeTurnedPart { .. } => 32,
        LongSlenderTurnedPart { .. } => 33,
        SquareEndKeyway { .. } => 34,
        HighRib { .. } => 35,
        IrregularWallThickness { .. } => 36,
        SmallMoldedWallThickness { .. } => 37,
        SmallDraftAngleRib { .. } => 38,
        SmallDistanceBetweenRibs { .. } => 39,
        FlatPatternInterference { .. } => 40,
        IrregularSizeNotch { .. } => 41,
        LargeDepthBead { .. } => 42,
        SmallDepthLouver { .. } => 43,
        NonStandardSheetSize { .. } => 44,
        SmallSheetDiameterHole { .. } => 45,
        SmallRadiusBend { .. } => 46,
        SmallLengthFlange { .. } => 47,
        SmallDistanceBetween { .. } => 48,
    }
}

/// Coarse comparison key within one kind rank
fn sort_key(finding: &Finding) -> Vec<f64> {
    use Finding::*;
    match finding {
        TurningFace {
            face_kind, radius, ..
        } => vec![*face_kind as u32 as f64, *radius],
        Face { face_kind, .. } => vec![*face_kind as u32 as f64],
        Countersink { radius, depth, .. } => vec![*radius, *depth],
        ThreadedHole {
            hole_kind,
            major_radius,
            pitch,
            thread_length,
            ..
        } => vec![*hole_kind as u32 as f64, *major_radius, *pitch, *thread_length],
        Hole {
            hole_kind,
            radius,
            depth,
            ..
        } => vec![*hole_kind as u32 as f64, *radius, *depth],
        SteppedHole { depth, steps } => vec![*depth, steps.len() as f64],
        Pocket {
            pocket_kind,
            length,
            width,
            depth,
            ..
        } => vec![*pocket_kind as u32 as f64, *length, *width, *depth],
        TurningGroove {
            groove_kind,
            radius,
            depth,
            width,
            ..
        } => vec![*groove_kind as u32 as f64, *radius, *depth, *width],
        Bore { radius, depth, .. } => vec![*radius, *depth],
        ScrewBoss {
            outer_radius,
            inner_radius,
            draft_angle,
            ..
        } => vec![*outer_radius, *inner_radius, *draft_angle],
        Boss {
            length,
            width,
            height,
            ..
        } => vec![*length, *width, *height],
        Rib {
            length,
            height,
            thickness,
            draft_angle,
            ..
        } => vec![*length, *height, *thickness, *draft_angle],
        FormingFeature { depth, length, .. } => vec![*depth, *length],
        Bead { depth, .. } => vec![*depth],
        Bend {
            bend_kind,
            radius,
            angle,
            length,
            width,
            ..
        } => vec![bend_rank(bend_kind), *radius, *angle, *length, *width],
        Bridge { length, depth, .. } => vec![*length, *depth],
        SheetHole {
            complex,
            radius,
            depth,
            ..
        } => vec![*complex as u32 as f64, *radius, *depth],
        Cutout { perimeter, .. } => vec![*perimeter],
        Louver { depth, .. } => vec![*depth],
        Notch {
            notch_kind,
            length,
            width,
            ..
        } => vec![notch_rank(notch_kind), *length, *width],
        Tab { length, width, .. } => vec![*length, *width],
        Unrecognized { .. } => Vec::new(),
        SmallDiameterHole {
            expected_min_diameter,
            actual_diameter,
            ..
        } => vec![*expected_min_diameter, *actual_diameter],
        DeepHole {
            expected_max_depth,
            actual_depth,
            ..
        } => vec![*expected_max_depth, *actual_depth],
        PartialHole {
            expected_min_material,
            actual_material,
            ..
        } => vec![*expected_min_material, *actual_material],
        NonStandardDrillPointAngleBlindHole {
            nearest_standard_angle,
            actual_angle,
            ..
        } => vec![*nearest_standard_angle, *actual_angle],
        FlatBottomHole { .. } => Vec::new(),
        DeepPocket {
            expected_max_depth,
            actual_depth,
            ..
        } => vec![*expected_max_depth, *actual_depth],
        HighBoss {
            expected_max_height,
            actual_height,
            ..
        } => vec![*expected_max_height, *actual_height],
        LargeMilledPart { actual_size, .. } => {
            vec![actual_size.length, actual_size.width, actual_size.height]
        }
        NonPerpendicularMilledPartShape { actual_angle, .. } => vec![*actual_angle],
        SmallRadiusMilledPartInternalCorner {
            expected_min_radius,
            actual_radius,
            ..
        } => vec![*expected_min_radius, *actual_radius],
        LargeTurnedPart { actual_size, .. } => vec![actual_size.first, actual_size.second],
        LongSlenderTurnedPart {
            expected_max_length,
            actual_length,
            actual_min_diameter,
            ..
        } => vec![*expected_max_length, *actual_length, *actual_min_diameter],
        SquareEndKeyway { .. } => Vec::new(),
        HighRib {
            expected_max_height,
            actual_height,
            ..
        } => vec![*expected_max_height, *actual_height],
        IrregularWallThickness {
            expected_max_thickness,
            expected_min_thickness,
            actual_thickness,
            ..
        } => vec![
            *expected_max_thickness,
            *expected_min_thickness,
            *actual_thickness,
        ],
        SmallMoldedWallThickness {
            expected_min_thickness,
            actual_thickness,
            ..
        } => vec![*expected_min_thickness, *actual_thickness],
        SmallDraftAngleRib {
            expected_min_draft_angle,
            actual_draft_angle,
            ..
        } => vec![*expected_min_draft_angle, *actual_draft_angle],
        SmallDistanceBetweenRibs {
            expected_min_distance,
            actual_distance,
            ..
        } => vec![*expected_min_distance, *actual_distance],
        FlatPatternInterference {
            first_face,
            second_face,
        } => vec![*first_face as f64, *second_face as f64],
        IrregularSizeNotch { actual_size, .. } => vec![actual_size.first, actual_size.second],
        LargeDepthBead {
            expected_max_depth,
            actual_depth,
            ..
        } => vec![*expected_max_depth, *actual_depth],
        SmallDepthLouver {
            expected_min_depth,
            actual_depth,
            ..
        } => vec![*expected_min_depth, *actual_depth],
        NonStandardSheetSize { actual_size, .. } => vec![actual_size.first, actual_size.second],
        SmallSheetDiameterHole {
            expected_min_diameter,
            actual_diameter,
            ..
        } => vec![*expected_min_diameter, *actual_diameter],
        SmallRadiusBend {
            expected_min_radius,
            actual_radius,
            ..
        } => vec![*expected_min_radius, *actual_radius],
        SmallLengthFlange {
            expected_min_length,
            actual_length,
            ..
        } => vec![*expected_min_length, *actual_length],
        SmallDistanceBetween {
            distance_kind,
            expected_min_distance,
            actual_distance,
            ..
        } => vec![
            *distance_kind as u32 as f64,
            *expected_min_distance,
            *actual_distance,
        ],
    }
}

fn bend_rank(kind: &crate::model::finding::BendKind) -> f64 {
    use crate::model::finding::BendKind;
    match kind {
        BendKind::Plain => 0.0,
        BendKind::Curved => 1.0,
        BendKind::Hem(hem) => 2.0 + *hem as u32 as f64,
    }
}

fn notch_rank(kind: &NotchKind) -> f64 {
    match kind {
        NotchKind::Plain => 0.0,
        NotchKind::Straight { .. } => 1.0,
        NotchKind::V { .. } => 2.0,
    }
}

/// A unique finding with its occurrence count and every occurrence's
/// shape-reference set, in insertion order
#[derive(Debug, Clone)]
pub struct OrderedEntry {
    pub finding: Finding,
    pub count: u32,
    pub occurrences: Vec<Vec<ShapeRef>>,
}

/// Sorted, deduplicated finding sequence
#[derive(Debug, Clone, Default)]
pub struct OrderedFindingList {
    entries: Vec<OrderedEntry>,
}

impl OrderedFindingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finding with its shape references.
    ///
    /// Scans from the front: an existing entry that is mutually non-less
    /// with the new finding absorbs it (count + occurrence set); otherwise
    /// the finding lands immediately before the first entry it orders
    /// below, or at the end.
    pub fn insert(
        &mut self,
        order: &dyn FindingOrder,
        finding: Finding,
        shape_refs: Vec<ShapeRef>,
    ) {
        let mut insert_at = self.entries.len();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let new_less = order.less(&finding, &entry.finding);
            let existing_less = order.less(&entry.finding, &finding);
            if !new_less && !existing_less {
                entry.count += 1;
                entry.occurrences.push(shape_refs);
                return;
            }
            if new_less {
                insert_at = index;
                break;
            }
        }
        self.entries.insert(
            insert_at,
            OrderedEntry {
                finding,
                count: 1,
                occurrences: vec![shape_refs],
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderedEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::finding::HoleKind;
    use crate::model::geometry::{Direction, Shape};

    fn hole(radius: f64, depth: f64, axis: Direction, face: ShapeRef) -> Finding {
        Finding::Hole {
            hole_kind: HoleKind::Through,
            radius,
            depth,
            axis,
            shape: Shape::faces(vec![face]),
        }
    }

    #[test]
    fn test_equivalent_findings_merge() {
        let mut list = OrderedFindingList::new();
        let axis = Direction::new(0.0, 0.0, 1.0);
        list.insert(&DefaultOrder, hole(4.0, 10.0, axis, 1), vec![1, 2]);
        list.insert(&DefaultOrder, hole(4.0, 10.0, axis, 3), vec![3, 4]);

        assert_eq!(list.len(), 1);
        let entry = list.iter().next().unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.occurrences, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_coarse_key_conflates_axis_only_differences() {
        // DefaultOrder keys holes by (type, radius, depth); two holes that
        // differ only in axis are mutually non-less and merge
        let mut list = OrderedFindingList::new();
        list.insert(
            &DefaultOrder,
            hole(4.0, 10.0, Direction::new(0.0, 0.0, 1.0), 1),
            vec![1],
        );
        list.insert(
            &DefaultOrder,
            hole(4.0, 10.0, Direction::new(1.0, 0.0, 0.0), 2),
            vec![2],
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().count, 2);
    }

    #[test]
    fn test_sequence_is_sorted_after_every_insert() {
        let mut list = OrderedFindingList::new();
        let axis = Direction::new(0.0, 0.0, 1.0);
        let radii = [6.0, 2.0, 4.0, 8.0, 2.0, 4.0];
        for (i, radius) in radii.iter().enumerate() {
            list.insert(&DefaultOrder, hole(*radius, 10.0, axis, i as u64), vec![]);
            let entries: Vec<_> = list.iter().collect();
            for pair in entries.windows(2) {
                assert!(!DefaultOrder.less(&pair[1].finding, &pair[0].finding));
            }
        }
        // 2, 4, 6, 8 with the repeats merged
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_different_kinds_keep_separate_entries() {
        let mut list = OrderedFindingList::new();
        let axis = Direction::new(0.0, 0.0, 1.0);
        list.insert(&DefaultOrder, hole(4.0, 10.0, axis, 1), vec![1]);
        list.insert(
            &DefaultOrder,
            Finding::Bore {
                radius: 4.0,
                depth: 10.0,
                shape: Shape::faces(vec![2]),
            },
            vec![2],
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_before_first_greater_entry() {
        let mut list = OrderedFindingList::new();
        let axis = Direction::new(0.0, 0.0, 1.0);
        list.insert(&DefaultOrder, hole(8.0, 10.0, axis, 1), vec![]);
        list.insert(&DefaultOrder, hole(2.0, 10.0, axis, 2), vec![]);
        let radii: Vec<f64> = list
            .iter()
            .map(|e| match &e.finding {
                Finding::Hole { radius, .. } => *radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![2.0, 8.0]);
    }
}
