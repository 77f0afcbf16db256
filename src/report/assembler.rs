//! Report assembly and document emission
//!
//! Collects per-part process data and writes the complete report document:
//! a version header plus one entry per part, each entry carrying its
//! process name and the findings sections the process produces. Per-part
//! analysis failures degrade to an error message inside that part's entry;
//! only sink failures abort the report.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::finding::Finding;
use crate::model::geometry::ShapeRef;
use crate::model::part::{ProcessData, ThicknessProbe, UnfoldedPartData};
use crate::report::classify::{classify, Classified, ParamValue};
use crate::report::groups::{FeatureGroupManager, SerializedEntry};
use crate::report::order::{DefaultOrder, FindingOrder, OrderedFindingList};
use crate::report::shape_refs;
use crate::report::writer::{fragment, Fixed, JsonWriter};

/// Errors raised while emitting a report document
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report output")]
    Io(#[from] io::Error),
}

const DOCUMENT_VERSION: &str = "1";

const MSG_NO_PARTS: &str = "The model doesn't contain any parts.";
const MSG_NO_FEATURES: &str = "Part contains no features.";
const MSG_NO_DFM: &str = "Part contains no DFM improvement suggestions.";
const MSG_NO_DFM_UNFOLDED: &str = "Unfolded part contains no DFM improvement suggestions.";
const MSG_NO_UNFOLDED: &str = "Unfolded part wasn't generated.";

const ERR_PROCESSING: &str = "An error occurred while processing the part.";
const ERR_NO_SOLIDS: &str =
    "The part can't be analyzed due to lack of: BRep representation or solids in BRep representation.";
const ERR_NO_SOLIDS_OR_SHELLS: &str =
    "The part can't be analyzed due to lack of: BRep representation, solids and shells in BRep representation.";
const ERR_NOT_SHEET_METAL: &str = "The part wasn't recognized as a sheet metal part.";
const ERR_NO_SOLIDS_THICKNESS: &str =
    "The part can't be analyzed due to lack of: BRep representation, solids in BRep representation.";

// Nesting depths the pre-rendered fragments are written at, so their
// indentation lines up with the splice site in the final document.
const SUBGROUP_ENTRY_LEVEL: i32 = 7;
const FLAT_ENTRY_LEVEL: i32 = 6;
const UNFOLDED_PARAMS_LEVEL: i32 = 4;

/// Builder for one report document
pub struct Report {
    data: Vec<ProcessData>,
    order: Box<dyn FindingOrder>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self::with_order(Box::new(DefaultOrder))
    }

    /// Use a caller-supplied finding ordering instead of [`DefaultOrder`].
    pub fn with_order(order: Box<dyn FindingOrder>) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    pub fn add_data(&mut self, data: ProcessData) {
        self.data.push(data);
    }

    /// Write the report document to a file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), parts = self.data.len(), "writing report");
        let mut sink = BufWriter::new(File::create(path)?);
        self.write_to(&mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Write the report document to an arbitrary sink.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), ReportError> {
        let mut writer = JsonWriter::new(sink);
        writer.open_object()?;
        writer.write_field("version", DOCUMENT_VERSION)?;

        if self.data.is_empty() {
            writer.write_field("error", MSG_NO_PARTS)?;
        } else {
            writer.open_array("parts")?;
            for data in &self.data {
                writer.open_object()?;
                write_part(&mut writer, self.order.as_ref(), data)?;
                writer.close_object()?;
            }
            writer.close_array()?;
        }

        writer.close_object()?;
        Ok(())
    }
}

fn write_part<W: Write>(
    writer: &mut JsonWriter<W>,
    order: &dyn FindingOrder,
    data: &ProcessData,
) -> io::Result<()> {
    writer.write_field("partId", data.part().id)?;

    let mut done = false;
    let mut error_msg = ERR_PROCESSING;
    match data {
        ProcessData::Machining(machining) => {
            writer.write_field("process", machining.operation.process_name())?;
            if !machining.features.is_empty() {
                write_findings_section(
                    writer,
                    order,
                    "Feature Recognition",
                    "featureRecognition",
                    &machining.features,
                    "",
                )?;
                write_findings_section(
                    writer,
                    order,
                    "Design for Manufacturing",
                    "dfm",
                    &machining.issues,
                    MSG_NO_DFM,
                )?;
                done = true;
            } else if !machining.part.has_solids {
                error_msg = ERR_NO_SOLIDS;
            }
        }
        ProcessData::Molding(molding) => {
            writer.write_field("process", "Molding Analysis")?;
            if !molding.features.is_empty() {
                write_findings_section(
                    writer,
                    order,
                    "Feature Recognition",
                    "featureRecognition",
                    &molding.features,
                    "",
                )?;
                write_findings_section(
                    writer,
                    order,
                    "Design for Manufacturing",
                    "dfm",
                    &molding.issues,
                    MSG_NO_DFM,
                )?;
                done = true;
            } else if !molding.part.has_solids {
                error_msg = ERR_NO_SOLIDS;
            }
        }
        ProcessData::SheetMetal(sheet) => {
            writer.write_field("process", "Sheet Metal")?;
            if sheet.is_sheet_metal {
                write_findings_section(
                    writer,
                    order,
                    "Feature Recognition",
                    "featureRecognition",
                    &sheet.features,
                    MSG_NO_FEATURES,
                )?;
                write_findings_section(
                    writer,
                    order,
                    "Design for Manufacturing",
                    "dfm",
                    &sheet.issues,
                    MSG_NO_DFM,
                )?;
                write_unfolded(writer, sheet.unfolded.as_ref())?;
                if let Some(unfolded) = &sheet.unfolded {
                    write_findings_section(
                        writer,
                        order,
                        "Design for Manufacturing",
                        "dfmUnfolded",
                        &unfolded.issues,
                        MSG_NO_DFM_UNFOLDED,
                    )?;
                }
                done = true;
            } else if !sheet.part.has_solids && !sheet.part.has_shells {
                error_msg = ERR_NO_SOLIDS_OR_SHELLS;
            } else {
                error_msg = ERR_NOT_SHEET_METAL;
            }
        }
        ProcessData::WallThickness(thickness) => {
            writer.write_field("process", "Wall Thickness Analysis")?;
            if let Some(range) = &thickness.thickness {
                write_thickness_node(writer, "Minimum Thickness", &range.min, "minThickness")?;
                write_thickness_node(writer, "Maximum Thickness", &range.max, "maxThickness")?;
                done = true;
            } else if !thickness.part.has_solids {
                error_msg = ERR_NO_SOLIDS_THICKNESS;
            }
        }
        ProcessData::Failed { .. } => {}
    }

    if !done {
        writer.write_field("error", error_msg)?;
    }
    Ok(())
}

/// Write one findings section: dedup, classify, group, emit.
fn write_findings_section<W: Write>(
    writer: &mut JsonWriter<W>,
    order: &dyn FindingOrder,
    display_name: &str,
    section_key: &str,
    findings: &[Finding],
    empty_message: &str,
) -> io::Result<()> {
    writer.open_named_object(section_key)?;
    writer.write_field("name", display_name)?;

    if findings.is_empty() {
        writer.write_field("message", empty_message)?;
    } else {
        let mut list = OrderedFindingList::new();
        for finding in findings {
            let refs = shape_refs::extract(finding);
            list.insert(order, finding.clone(), refs);
        }

        let mut manager = FeatureGroupManager::new();
        for entry in list.iter() {
            let classified = classify(&entry.finding);
            let serialized = render_entry(&classified, &entry.occurrences)?;
            manager.add(classified.name, classified.color, serialized, entry.count);
        }

        writer.write_field("totalFeatureCount", manager.total_feature_count())?;
        writer.open_array("featureGroups")?;
        manager.write(writer)?;
        writer.close_array()?;
    }

    writer.close_object()?;
    Ok(())
}

/// Pre-render one group entry at its splice depth.
fn render_entry(
    classified: &Classified,
    occurrences: &[Vec<ShapeRef>],
) -> io::Result<SerializedEntry> {
    if classified.params.is_empty() {
        let data = fragment(FLAT_ENTRY_LEVEL, |w| write_shape_ids(w, occurrences, false))?;
        return Ok(SerializedEntry {
            data,
            has_params: false,
        });
    }

    let data = fragment(SUBGROUP_ENTRY_LEVEL, |w| {
        w.open_object()?;
        w.write_field("parametersCount", classified.params.len())?;
        w.open_array("parameters")?;
        for param in &classified.params {
            write_parameter(w, param.label, param.unit, &param.value)?;
        }
        w.close_array()?;
        write_shape_ids(w, occurrences, true)?;
        w.close_object()
    })?;
    Ok(SerializedEntry {
        data,
        has_params: true,
    })
}

fn write_parameter<W: Write>(
    writer: &mut JsonWriter<W>,
    name: &str,
    units: &str,
    value: &ParamValue,
) -> io::Result<()> {
    writer.open_object()?;
    writer.write_field("name", name)?;
    writer.write_field("units", units)?;
    writer.write_field("value", value)?;
    writer.close_object()
}

fn write_shape_ids<W: Write>(
    writer: &mut JsonWriter<W>,
    occurrences: &[Vec<ShapeRef>],
    wrap_in_features: bool,
) -> io::Result<()> {
    if occurrences.is_empty() {
        return Ok(());
    }

    if wrap_in_features {
        writer.open_array("features")?;
    }

    for refs in occurrences {
        writer.open_object()?;
        writer.write_field("shapeIDCount", refs.len())?;
        if refs.is_empty() {
            writer.write_empty_array("shapeIDs")?;
        } else {
            writer.open_array("shapeIDs")?;
            for id in refs {
                writer.open_object()?;
                writer.write_field("id", id)?;
                writer.close_object()?;
            }
            writer.close_array()?;
        }
        writer.close_object()?;
    }

    if wrap_in_features {
        writer.close_array()?;
    }
    Ok(())
}

fn write_unfolded<W: Write>(
    writer: &mut JsonWriter<W>,
    data: Option<&UnfoldedPartData>,
) -> io::Result<()> {
    writer.open_named_object("featureRecognitionUnfolded")?;
    writer.write_field("name", "Feature Recognition")?;

    match data {
        Some(unfolded) => {
            // consumers key on parametersCount 3 here; the perimeter row
            // rides along uncounted
            let params = fragment(UNFOLDED_PARAMS_LEVEL, |w| {
                w.write_field("parametersCount", 3)?;
                w.open_array("parameters")?;
                write_parameter(w, "Length", "mm", &ParamValue::Number(unfolded.length))?;
                write_parameter(w, "Width", "mm", &ParamValue::Number(unfolded.width))?;
                write_parameter(w, "Thickness", "mm", &ParamValue::Number(unfolded.thickness))?;
                write_parameter(w, "Perimeter", "mm", &ParamValue::Number(unfolded.perimeter))?;
                w.close_array()
            })?;
            writer.write_raw(&params)?;
        }
        None => writer.write_field("message", MSG_NO_UNFOLDED)?,
    }

    writer.close_object()
}

fn write_thickness_node<W: Write>(
    writer: &mut JsonWriter<W>,
    name: &str,
    probe: &ThicknessProbe,
    node_key: &str,
) -> io::Result<()> {
    writer.open_named_object(node_key)?;
    writer.write_field("name", name)?;
    writer.write_field("units", "mm")?;
    writer.write_field("value", Fixed(probe.value))?;
    writer.write_field("firstPoint", probe.first_point)?;
    writer.write_field("secondPoint", probe.second_point)?;
    writer.close_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::Point;
    use crate::model::part::{MachiningData, MachiningOperation, PartInfo, WallThicknessData, WallThicknessRange};
    use uuid::Uuid;

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_report_document() {
        let out = render(&Report::new());
        assert_eq!(
            out,
            "{\n    \"version\": \"1\",\n    \"error\": \"The model doesn't contain any parts.\"\n}"
        );
    }

    #[test]
    fn test_failed_part_gets_error_entry() {
        let mut report = Report::new();
        let id = Uuid::new_v4();
        report.add_data(ProcessData::Failed {
            part: PartInfo::new(id, true, false),
        });
        let out = render(&report);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["parts"][0]["partId"], id.to_string());
        assert_eq!(
            doc["parts"][0]["error"],
            "An error occurred while processing the part."
        );
    }

    #[test]
    fn test_machining_part_without_solids_reports_brep_lack() {
        let mut report = Report::new();
        report.add_data(ProcessData::Machining(MachiningData {
            part: PartInfo::new(Uuid::new_v4(), false, false),
            operation: MachiningOperation::Milling,
            features: Vec::new(),
            issues: Vec::new(),
        }));
        let out = render(&report);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["parts"][0]["process"], "CNC Machining Milling");
        assert_eq!(doc["parts"][0]["error"], ERR_NO_SOLIDS);
        assert!(doc["parts"][0].get("featureRecognition").is_none());
    }

    #[test]
    fn test_thickness_nodes_carry_probe_points() {
        let mut report = Report::new();
        report.add_data(ProcessData::WallThickness(WallThicknessData {
            part: PartInfo::new(Uuid::new_v4(), true, false),
            thickness: Some(WallThicknessRange {
                min: ThicknessProbe {
                    value: 1.5,
                    first_point: Point::new(0.0, 0.0, 0.0),
                    second_point: Point::new(0.0, 0.0, 1.5),
                },
                max: ThicknessProbe {
                    value: 4.0,
                    first_point: Point::new(1.0, 0.0, 0.0),
                    second_point: Point::new(1.0, 4.0, 0.0),
                },
            }),
        }));
        let out = render(&report);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        let part = &doc["parts"][0];
        assert_eq!(part["process"], "Wall Thickness Analysis");
        assert_eq!(part["minThickness"]["name"], "Minimum Thickness");
        assert_eq!(part["minThickness"]["value"], "1.50");
        assert_eq!(part["minThickness"]["firstPoint"], "(0.00, 0.00, 0.00)");
        assert_eq!(part["maxThickness"]["secondPoint"], "(1.00, 4.00, 0.00)");
        assert!(part.get("error").is_none());
    }

    #[test]
    fn test_thickness_without_result_reports_brep_lack() {
        let mut report = Report::new();
        report.add_data(ProcessData::WallThickness(WallThicknessData {
            part: PartInfo::new(Uuid::new_v4(), false, false),
            thickness: None,
        }));
        let out = render(&report);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["parts"][0]["error"], ERR_NO_SOLIDS_THICKNESS);
    }
}
