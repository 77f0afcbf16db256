//! dfm-report: deduplicated, grouped JSON reporting for manufacturing
//! feature-recognition and DFM analysis results.
//!
//! Upstream analysis engines hand over per-part findings as plain data;
//! this crate orders and deduplicates them, classifies them into named
//! display groups, and streams a hierarchical JSON report document.

pub mod model;
pub mod report;

pub use model::{Finding, PartInfo, ProcessData};
pub use report::{Report, ReportError};
