//! Per-part analysis results as handed over by the external engine
//!
//! Each analyzed part arrives as one [`ProcessData`] record: which
//! manufacturing process was evaluated, the findings the engine produced,
//! and enough about the part's representation to phrase an error when
//! analysis was impossible.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::finding::Finding;
use crate::model::geometry::Point;

/// Identity and representation summary of an analyzed part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartInfo {
    /// Stable part identifier, rendered as the document's partId field
    pub id: Uuid,

    /// Whether the part's BRep representation contains solids
    pub has_solids: bool,

    /// Whether the part's BRep representation contains shells
    pub has_shells: bool,
}

impl PartInfo {
    pub fn new(id: Uuid, has_solids: bool, has_shells: bool) -> Self {
        Self {
            id,
            has_solids,
            has_shells,
        }
    }
}

/// Machining operation the engine was asked to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachiningOperation {
    Milling,
    LatheMilling,
    Other,
}

impl MachiningOperation {
    /// Process display name written to the report
    pub fn process_name(self) -> &'static str {
        match self {
            MachiningOperation::Milling => "CNC Machining Milling",
            MachiningOperation::LatheMilling => "CNC Machining Lathe+Milling",
            MachiningOperation::Other => "CNC Machining",
        }
    }
}

/// Machining analysis results for one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachiningData {
    pub part: PartInfo,
    pub operation: MachiningOperation,
    pub features: Vec<Finding>,
    pub issues: Vec<Finding>,
}

/// Molding analysis results for one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldingData {
    pub part: PartInfo,
    pub features: Vec<Finding>,
    pub issues: Vec<Finding>,
}

/// Flat-pattern measurements and issues of an unfolded sheet-metal part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnfoldedPartData {
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub perimeter: f64,
    pub issues: Vec<Finding>,
}

/// Sheet-metal analysis results for one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMetalData {
    pub part: PartInfo,

    /// Whether the engine recognized the part as sheet metal at all
    pub is_sheet_metal: bool,

    pub features: Vec<Finding>,
    pub issues: Vec<Finding>,

    /// None when the unfolder could not generate a flat pattern
    pub unfolded: Option<UnfoldedPartData>,
}

/// A thickness extremum probe between two points on the part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThicknessProbe {
    pub value: f64,
    pub first_point: Point,
    pub second_point: Point,
}

/// Wall-thickness analysis results for one part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallThicknessData {
    pub part: PartInfo,

    /// None when the analyzer could not compute a thickness field
    pub thickness: Option<WallThicknessRange>,
}

/// Min/max thickness pair produced by a successful wall-thickness run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallThicknessRange {
    pub min: ThicknessProbe,
    pub max: ThicknessProbe,
}

/// One part's worth of engine output, tagged by process.
///
/// `Failed` records a part whose analysis raised an unrecoverable engine
/// error; the report still emits an entry for it so the remaining parts are
/// unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "process", rename_all = "snake_case")]
pub enum ProcessData {
    Machining(MachiningData),
    Molding(MoldingData),
    SheetMetal(SheetMetalData),
    WallThickness(WallThicknessData),
    Failed { part: PartInfo },
}

impl ProcessData {
    /// The part this record belongs to
    pub fn part(&self) -> &PartInfo {
        match self {
            ProcessData::Machining(data) => &data.part,
            ProcessData::Molding(data) => &data.part,
            ProcessData::SheetMetal(data) => &data.part,
            ProcessData::WallThickness(data) => &data.part,
            ProcessData::Failed { part } => part,
        }
    }
}
