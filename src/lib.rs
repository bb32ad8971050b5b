//! Show IPv4 addresses and CIDR blocks as dotted quads, binary, decimal, and hex.
//!
//! # Modules
//! - [`models`] - address parsing, masking, and rendering
//! - [`output`] - the per-item text report
//! - [`cmd`] - command line arguments
//! - [`config`] - logging setup

pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used items at crate root
pub use error::IncidrError;
pub use models::{apply_mask, AddressValue, Format, Formats, RawAddress};
pub use output::{expand_specs, report_item, write_report};
