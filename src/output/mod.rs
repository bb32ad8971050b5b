//! Report output.
//!
//! - [`report`] - per-item text blocks for the command line

mod report;

pub use report::{expand_specs, report_item, write_report};
