//! Domain model - findings, geometry references, per-part engine output

pub mod finding;
pub mod geometry;
pub mod part;

pub use finding::{
    BendKind, DistanceAnchor, FaceKind, Finding, GrooveKind, HemKind, HoleKind, NotchKind,
    PocketKind, SmallDistanceKind,
};
pub use geometry::{Direction, Extent2, Extent3, Point, Shape, ShapeRef};
pub use part::{
    MachiningData, MachiningOperation, MoldingData, PartInfo, ProcessData, SheetMetalData,
    ThicknessProbe, UnfoldedPartData, WallThicknessData, WallThicknessRange,
};
