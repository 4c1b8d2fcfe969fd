use std::fmt;

use serde::Deserialize;

use crate::error::DemoError;

/// Numbered grouping that pairs one product of each family with one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Variant {
    One,
    Two,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::One, Variant::Two];

    pub fn number(self) -> u8 {
        match self {
            Variant::One => 1,
            Variant::Two => 2,
        }
    }

    pub fn ordinal(self) -> &'static str {
        match self {
            Variant::One => "first",
            Variant::Two => "second",
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = DemoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Variant::One),
            2 => Ok(Variant::Two),
            other => Err(DemoError::UnknownVariant(other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
