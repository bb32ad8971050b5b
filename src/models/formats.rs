//! Display format selection.
//!
//! [`Format`] lists the four representations in their canonical order and
//! [`Formats`] records which of them are visible.

/// One textual representation of a 32-bit address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Quad,
    Binary,
    Decimal,
    Hex,
}

impl Format {
    /// All representations, in display order.
    pub const ALL: [Format; 4] = [Format::Quad, Format::Binary, Format::Decimal, Format::Hex];
}

/// Which representations to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Formats {
    pub quad: bool,
    pub binary: bool,
    pub decimal: bool,
    pub hex: bool,
}

impl Default for Formats {
    fn default() -> Self {
        Formats {
            quad: true,
            binary: true,
            decimal: true,
            hex: true,
        }
    }
}

impl Formats {
    /// Show only the flagged representations, or all of them when nothing is flagged.
    pub fn only(quad: bool, binary: bool, decimal: bool, hex: bool) -> Self {
        if quad || binary || decimal || hex {
            Formats {
                quad,
                binary,
                decimal,
                hex,
            }
        } else {
            Formats::default()
        }
    }

    pub fn shows(&self, format: Format) -> bool {
        match format {
            Format::Quad => self.quad,
            Format::Binary => self.binary,
            Format::Decimal => self.decimal,
            Format::Hex => self.hex,
        }
    }

    /// Visible representations, in display order.
    pub fn visible(&self) -> impl Iterator<Item = Format> + '_ {
        Format::ALL.into_iter().filter(move |f| self.shows(*f))
    }
}
