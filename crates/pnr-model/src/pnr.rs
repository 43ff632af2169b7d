//! The 10-digit booking identifier.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::ModelError;

/// Number of characters in a PNR.
pub const PNR_LENGTH: usize = 10;

/// ASCII digits only; `\d` would also accept other Unicode digit classes.
static PNR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("PNR pattern compiles"));

/// A validated Passenger Name Record number.
///
/// Construction checks the character length first and then matches the full
/// value against the digit pattern. Both checks must pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PnrNumber(String);

impl PnrNumber {
    pub fn new(value: impl Into<String>) -> crate::Result<Self> {
        let value = value.into();
        let length = value.chars().count();
        if length != PNR_LENGTH {
            return Err(ModelError::InvalidPnrLength { length });
        }
        if !PNR_PATTERN.is_match(&value) {
            return Err(ModelError::InvalidPnrDigits(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as `DDD-DDD-DDDD`.
    pub fn formatted(&self) -> String {
        // Byte slicing is safe: the pattern guarantees ten ASCII bytes.
        let digits = self.0.as_str();
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    }
}

impl fmt::Display for PnrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PnrNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for PnrNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PnrNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
