//! Address models.
//!
//! This module contains the core data structures:
//! - [`RawAddress`] - 4-byte IPv4 value and byte-level helpers
//! - [`Formats`] - which representations to render
//! - [`AddressValue`] - an address parsed from user text, optionally masked

mod address;
mod address_value;
mod formats;

// Re-export public types
pub use address::{
    apply_mask, mask_from_len, parse_address, render, render_format, RawAddress, MAX_LENGTH,
    SEPARATOR,
};
pub use address_value::{AddressValue, Masking};
pub use formats::{Format, Formats};
