//! The reporting pipeline: ordering, classification, grouping and emission

pub mod assembler;
pub mod classify;
pub mod groups;
pub mod order;
pub mod shape_refs;
pub mod writer;

pub use assembler::{Report, ReportError};
pub use classify::{classify, Classified, Param, ParamValue, Rgb};
pub use order::{DefaultOrder, FindingOrder, OrderedFindingList};
