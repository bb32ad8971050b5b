//! [`AddressValue`]: an address built from user text, optionally masked.

use super::address::{apply_mask, mask_from_len, parse_address, render, RawAddress};
use super::formats::Formats;
use crate::error::IncidrError;
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

/// Bare numbers up to this value are mask lengths.
const MASK_LEN_LIMIT: u64 = 32;

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]{1,10}$").expect("Invalid Regex?");
    static ref HEX: Regex = Regex::new(r"(?i)^[0-9a-f]{1,8}$").expect("Invalid Regex?");
}

/// A netmask together with the address it produced when applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Masking {
    pub mask: RawAddress,
    pub result: RawAddress,
}

/// An IPv4 quantity parsed from a specification such as `1.2.3.4/24`,
/// `16909060`, `ff` or `24`.
///
/// The mask and the masked result are rendered with the same [`Formats`] as
/// the address itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressValue {
    raw: RawAddress,
    source: String,
    formats: Formats,
    masking: Option<Masking>,
}

impl AddressValue {
    /// Build an [`AddressValue`] from a specification string.
    ///
    /// A bare number of at most 10 digits whose value is 32 or less is always a
    /// mask length: `24` is `255.255.255.0`, never `0.0.0.24`.
    pub fn new(spec: &str, formats: Formats) -> Result<AddressValue, IncidrError> {
        if spec.matches('/').count() > 1 {
            return Err(IncidrError::multiple_separators(spec));
        }

        let (raw, masking) = match spec.split_once('/') {
            Some((base, mask_spec)) => {
                let mask = normalize(mask_spec)?;
                let raw = parse_address(base)?;
                let result = RawAddress(apply_mask(raw, mask));
                (raw, Some(Masking { mask, result }))
            }
            None => (normalize(spec)?, None),
        };
        log::debug!("{} => {raw}", spec.on_blue());

        Ok(AddressValue {
            raw,
            source: spec.to_string(),
            formats,
            masking,
        })
    }

    pub fn raw(&self) -> RawAddress {
        self.raw
    }

    /// The text this value was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn formats(&self) -> Formats {
        self.formats
    }

    pub fn mask(&self) -> Option<RawAddress> {
        self.masking.map(|m| m.mask)
    }

    pub fn masked_result(&self) -> Option<RawAddress> {
        self.masking.map(|m| m.result)
    }
}

/// Turn a single token (no `/`) into 4 bytes.
fn normalize(token: &str) -> Result<RawAddress, IncidrError> {
    if token.contains('.') {
        return parse_address(token);
    }

    if DECIMAL.is_match(token) {
        // At most 10 digits, so this always fits.
        let value: u64 = token
            .parse()
            .map_err(|_| IncidrError::invalid_numeric(token))?;
        if value <= MASK_LEN_LIMIT {
            log::debug!("{token} taken as a mask length");
            return Ok(RawAddress::from_u32(mask_from_len(value as u32)?));
        }
        let value = u32::try_from(value).map_err(|_| IncidrError::invalid_address(token))?;
        Ok(RawAddress::from_u32(value))
    } else if HEX.is_match(token) {
        log::debug!("{token} taken as hex");
        let value =
            u32::from_str_radix(token, 16).map_err(|_| IncidrError::invalid_numeric(token))?;
        Ok(RawAddress::from_u32(value))
    } else {
        Err(IncidrError::invalid_numeric(token))
    }
}

impl std::fmt::Display for AddressValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let line = render(self.raw, &self.formats);
        match self.masking {
            None => write!(f, "{line}"),
            Some(Masking { mask, result }) => write!(
                f,
                "   {line}\n & {mask}\n = {result}",
                mask = render(mask, &self.formats),
                result = render(result, &self.formats),
            ),
        }
    }
}
