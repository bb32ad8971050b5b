//! The raw 4-byte address record and the byte-level operations on it.
//!
//! Provides [`RawAddress`] along with parsing, masking, and rendering
//! functions. Nothing in here knows about `/` separated specifications; see
//! [`crate::AddressValue`] for that.

use super::formats::{Format, Formats};
use crate::error::IncidrError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u32 = 32;

/// Separator placed between the visible representations.
pub const SEPARATOR: &str = "  <=>  ";

/// A 32-bit IPv4 quantity as 4 big-endian bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawAddress(pub [u8; 4]);

impl RawAddress {
    pub fn from_u32(value: u32) -> Self {
        RawAddress(value.to_be_bytes())
    }

    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl From<Ipv4Addr> for RawAddress {
    fn from(addr: Ipv4Addr) -> Self {
        RawAddress(addr.octets())
    }
}

impl From<RawAddress> for Ipv4Addr {
    fn from(raw: RawAddress) -> Self {
        Ipv4Addr::from(raw.0)
    }
}

impl std::fmt::Display for RawAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Ipv4Addr::from(*self))
    }
}

/// Convert a mask length in `1..=32` to the netmask value.
///
/// # Examples
/// ```
/// use incidr::models::mask_from_len;
/// assert_eq!(mask_from_len(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn mask_from_len(len: u32) -> Result<u32, IncidrError> {
    if !(1..=MAX_LENGTH).contains(&len) {
        return Err(IncidrError::mask_out_of_range(len));
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    Ok(((all_bits >> right_len) << right_len) as u32)
}

/// Byte-wise AND of an address and a mask.
pub fn apply_mask(addr: RawAddress, mask: RawAddress) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = addr.0[i] & mask.0[i];
    }
    out
}

/// Parse text into 4 bytes with the classic `inet_aton` rules.
///
/// Accepts `a.b.c.d`, `a.b.c` (last part 16 bits), `a.b` (last part 24 bits)
/// and a bare 32-bit `a`. Each part may be decimal, octal with a leading `0`,
/// or hex with a `0x` prefix.
pub fn parse_address(text: &str) -> Result<RawAddress, IncidrError> {
    let err = || IncidrError::invalid_address(text);

    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() > 4 {
        return Err(err());
    }
    let values = parts
        .iter()
        .map(|p| parse_part(p).ok_or_else(err))
        .collect::<Result<Vec<u32>, _>>()?;

    let (last, leading) = values.split_last().ok_or_else(err)?;
    if leading.iter().any(|v| *v > 0xff) {
        return Err(err());
    }
    // The last part fills whatever the leading octets leave over.
    let tail_bits = 8 * (4 - leading.len() as u32);
    if tail_bits < 32 && (*last >> tail_bits) != 0 {
        return Err(err());
    }

    let value = leading
        .iter()
        .enumerate()
        .fold(*last, |acc, (i, v)| acc | (v << (24 - 8 * i as u32)));
    Ok(RawAddress::from_u32(value))
}

fn parse_part(part: &str) -> Option<u32> {
    let (digits, radix) = if let Some(hex) = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
    {
        (hex, 16)
    } else if part.len() > 1 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

/// Render one representation of `raw`.
pub fn render_format(raw: RawAddress, format: Format) -> String {
    let octets = raw.octets();
    match format {
        Format::Quad => octets
            .iter()
            .map(|o| format!("{o:>3}"))
            .collect::<Vec<String>>()
            .join("."),
        Format::Binary => octets
            .iter()
            .map(|o| format!("{o:08b}"))
            .collect::<Vec<String>>()
            .join(" "),
        Format::Decimal => format!("{:010}", raw.to_u32()),
        Format::Hex => format!("{:08x}", raw.to_u32()),
    }
}

/// Render the visible representations of `raw` on one line.
pub fn render(raw: RawAddress, formats: &Formats) -> String {
    formats
        .visible()
        .map(|f| render_format(raw, f))
        .collect::<Vec<String>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_len() {
        assert_eq!(mask_from_len(1).unwrap(), 0x80000000);
        assert_eq!(mask_from_len(8).unwrap(), 0xFF000000);
        assert_eq!(mask_from_len(16).unwrap(), 0xFFFF0000);
        assert_eq!(mask_from_len(24).unwrap(), 0xFFFFFF00);
        assert_eq!(mask_from_len(32).unwrap(), 0xFFFFFFFF);
        assert!(mask_from_len(0).is_err());
        assert!(mask_from_len(33).is_err());
    }

    #[test]
    fn test_mask_from_len_matches_power_formula() {
        for n in 1..=32u32 {
            let expected = (1u64 << 32) - (1u64 << (32 - n));
            assert_eq!(mask_from_len(n).unwrap() as u64, expected, "/{n}");
        }
    }

    #[test]
    fn test_parse_dotted_quad() {
        assert_eq!(parse_address("1.2.3.4").unwrap(), RawAddress([1, 2, 3, 4]));
        assert_eq!(
            parse_address("255.255.255.0").unwrap(),
            RawAddress([255, 255, 255, 0])
        );
        assert_eq!(parse_address("0.0.0.0").unwrap(), RawAddress([0, 0, 0, 0]));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(parse_address("16909060").unwrap(), RawAddress([1, 2, 3, 4]));
        assert_eq!(parse_address("0xff").unwrap(), RawAddress([0, 0, 0, 255]));
        assert_eq!(parse_address("10.1").unwrap(), RawAddress([10, 0, 0, 1]));
        assert_eq!(parse_address("10.1.258").unwrap(), RawAddress([10, 1, 1, 2]));
        assert_eq!(parse_address("010.0x10.0.1").unwrap(), RawAddress([8, 16, 0, 1]));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "999.1.1.1",
            "1.2.3.4.5",
            "1..3.4",
            "1.2.3.",
            "",
            "a.b.c.d",
            "1.2.3.256",
            "1.2.65536",
            "09.1.1.1",
            "0x.1.1.1",
            " 1.2.3.4",
            "4294967296",
        ] {
            let err = parse_address(bad).unwrap_err();
            assert!(
                matches!(err, IncidrError::InvalidAddress(_)),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_apply_mask() {
        let addr = RawAddress([1, 2, 3, 4]);
        let mask = RawAddress::from_u32(mask_from_len(24).unwrap());
        assert_eq!(apply_mask(addr, mask), [1, 2, 3, 0]);
        assert_eq!(apply_mask(mask, mask), mask.octets());
        assert_eq!(
            apply_mask(RawAddress([192, 168, 77, 200]), RawAddress([255, 255, 240, 0])),
            [192, 168, 64, 0]
        );
    }

    #[test]
    fn test_render_formats() {
        let raw = RawAddress([1, 2, 3, 4]);
        assert_eq!(render_format(raw, Format::Quad), "  1.  2.  3.  4");
        assert_eq!(
            render_format(raw, Format::Binary),
            "00000001 00000010 00000011 00000100"
        );
        assert_eq!(render_format(raw, Format::Decimal), "0016909060");
        assert_eq!(render_format(raw, Format::Hex), "01020304");
    }

    #[test]
    fn test_render_line() {
        let raw = RawAddress([255, 255, 255, 0]);
        assert_eq!(
            render(raw, &Formats::default()),
            "255.255.255.  0  <=>  11111111 11111111 11111111 00000000  <=>  4294967040  <=>  ffffff00"
        );
        assert_eq!(
            render(raw, &Formats::only(true, false, false, true)),
            "255.255.255.  0  <=>  ffffff00"
        );
    }

    #[test]
    fn test_decimal_and_hex_follow_octets() {
        for (a, b, c, d) in [(0u8, 0u8, 0u8, 0u8), (10, 0, 0, 1), (192, 168, 1, 42), (255, 255, 255, 255)] {
            let raw = RawAddress([a, b, c, d]);
            let value = (a as u64) * 256u64.pow(3) + (b as u64) * 256u64.pow(2) + (c as u64) * 256 + d as u64;
            let decimal = render_format(raw, Format::Decimal);
            assert_eq!(decimal, format!("{value:010}"));
            assert_eq!(render_format(raw, Format::Hex), format!("{value:08x}"));
            assert_eq!(decimal.parse::<u64>().unwrap(), value);
        }
    }
}
