//! Error type for address parsing.

use thiserror::Error;

/// Errors raised while building an [`crate::AddressValue`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncidrError {
    /// The specification text is malformed (separators, numeric token, mask length).
    #[error("{0}")]
    InvalidFormat(String),
    /// The normalized text could not be parsed as an IPv4 address.
    #[error("{0}")]
    InvalidAddress(String),
}

impl IncidrError {
    pub fn multiple_separators(spec: &str) -> Self {
        IncidrError::InvalidFormat(format!("Invalid CIDR block (multiple \"/\"es): {spec}"))
    }

    pub fn invalid_numeric(spec: &str) -> Self {
        IncidrError::InvalidFormat(format!(
            "Invalid CIDR block (invalid numeric value): {spec}"
        ))
    }

    pub fn mask_out_of_range(len: u32) -> Self {
        IncidrError::InvalidFormat(format!(
            "Invalid netmask, outside of 1 <= m <= 32 range: {len}"
        ))
    }

    pub fn invalid_address(text: &str) -> Self {
        IncidrError::InvalidAddress(format!("Invalid address: {text}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            IncidrError::multiple_separators("1.2.3.4/25/26").to_string(),
            "Invalid CIDR block (multiple \"/\"es): 1.2.3.4/25/26"
        );
        assert_eq!(
            IncidrError::mask_out_of_range(0).to_string(),
            "Invalid netmask, outside of 1 <= m <= 32 range: 0"
        );
        assert_eq!(
            IncidrError::invalid_address("999.1.1.1").to_string(),
            "Invalid address: 999.1.1.1"
        );
    }
}
