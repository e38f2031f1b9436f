//! Palettes
//!
//! The fixed sets of metal colors and gold purity grades the storefront filters on.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Metal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Yellow gold
    Yellow,

    /// Rose gold
    Rose,

    /// White gold
    White,

    /// Black gold
    Black,
}

impl Color {
    /// Every color, in filter display order.
    pub const ALL: [Self; 4] = [Self::Yellow, Self::Rose, Self::White, Self::Black];

    /// The value used by the catalog API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Rose => "Rose",
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the palette colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color `{0}` (expected one of Yellow, Rose, White, Black)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Gold purity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carat {
    /// 10 karat
    K10,

    /// 14 karat
    K14,

    /// 18 karat
    K18,

    /// 22 karat
    K22,
}

impl Carat {
    /// Every grade, in filter display order.
    pub const ALL: [Self; 4] = [Self::K10, Self::K14, Self::K18, Self::K22];

    /// The value used by the catalog API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::K10 => "10k",
            Self::K14 => "14k",
            Self::K18 => "18k",
            Self::K22 => "22k",
        }
    }
}

impl Display for Carat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the carat grades.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown carat `{0}` (expected one of 10k, 14k, 18k, 22k)")]
pub struct ParseCaratError(String);

impl FromStr for Carat {
    type Err = ParseCaratError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        Self::ALL
            .into_iter()
            .find(|carat| carat.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseCaratError(s.to_string()))
    }
}
