//! Text report for a batch of specifications.
//!
//! Each specification gets its own block; a failure prints an error block
//! and the batch carries on.

use crate::models::{AddressValue, Formats};
use colored::Colorize;
use std::io::Write;

/// Combine positional specifications with `--mask` values.
///
/// A specification without `/` yields one `spec/mask` pair per mask. One that
/// already has a `/` is passed through untouched and the masks are ignored.
pub fn expand_specs(addresses: &[String], masks: &[String]) -> Vec<String> {
    let mut specs = Vec::new();
    for addr in addresses {
        if !addr.contains('/') && !masks.is_empty() {
            specs.extend(masks.iter().map(|mask| format!("{addr}/{mask}")));
        } else {
            specs.push(addr.clone());
        }
    }
    specs
}

/// Build the report block for one specification, trailing blank line included.
pub fn report_item(spec: &str, formats: Formats) -> String {
    let header = format!("{spec} :\n{}\n", "=".repeat(spec.chars().count()));
    match AddressValue::new(spec, formats) {
        Ok(value) => format!("{header}{value}\n\n"),
        Err(e) => {
            log::warn!("{skipping} {spec}: {e}", skipping = "skipping".on_red());
            format!("{header}Error: {e}\nSkipping\n\n")
        }
    }
}

/// Write the report for every expanded specification to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    addresses: &[String],
    masks: &[String],
    formats: Formats,
) -> std::io::Result<()> {
    let specs = expand_specs(addresses, masks);
    log::info!("#Start report for {} specification(s)", specs.len());

    for spec in specs.iter() {
        out.write_all(report_item(spec, formats).as_bytes())?;
    }

    log::info!("#End report");
    Ok(())
}
