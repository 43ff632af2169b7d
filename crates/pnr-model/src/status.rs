//! Passenger status labels derived from the current-status code.
//!
//! Railway status codes arrive as free text: a berth or seat code such as
//! `B1` or `S4`, a waitlist position such as `WL5`, an `RAC 12` share, or
//! `CAN` once the ticket is cancelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Current-status code of a cancelled passenger.
pub const CANCELLED_CODE: &str = "CAN";
/// Prefix of a waitlisted current-status code.
pub const WAITLIST_PREFIX: &str = "WL";
/// Prefix of a Reservation Against Cancellation code.
pub const RAC_PREFIX: &str = "RAC";

/// Display label for a passenger's current booking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusLabel {
    /// Holds a berth or seat.
    Confirmed,
    /// On the waiting list.
    Waiting,
    /// Ticket cancelled.
    Cancelled,
    /// Reservation Against Cancellation: a shared, conditional berth.
    Rac,
}

impl StatusLabel {
    /// Every label, in the order [`StatusLabel::from_current_status`] tries them.
    pub const ALL: [StatusLabel; 4] = [
        StatusLabel::Cancelled,
        StatusLabel::Waiting,
        StatusLabel::Rac,
        StatusLabel::Confirmed,
    ];

    /// Classify a current-status code. First match wins:
    ///
    /// 1. exactly `CAN` → `Cancelled`
    /// 2. starts with `WL` → `Waiting`
    /// 3. starts with `RAC` → `Rac`
    /// 4. anything else → `Confirmed`
    ///
    /// The last rule is unconditional. Berth codes (`B..`, `S..`) land there,
    /// but so does every unrecognised or empty code.
    pub fn from_current_status(current: &str) -> Self {
        if current == CANCELLED_CODE {
            StatusLabel::Cancelled
        } else if current.starts_with(WAITLIST_PREFIX) {
            StatusLabel::Waiting
        } else if current.starts_with(RAC_PREFIX) {
            StatusLabel::Rac
        } else {
            StatusLabel::Confirmed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Confirmed => "CONFIRMED",
            StatusLabel::Waiting => "WAITING",
            StatusLabel::Cancelled => "CANCELLED",
            StatusLabel::Rac => "RAC",
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, StatusLabel::Confirmed)
    }

    /// Short description of the current-status codes that select this label.
    pub fn rule(&self) -> &'static str {
        match self {
            StatusLabel::Cancelled => "current is exactly CAN",
            StatusLabel::Waiting => "current starts with WL",
            StatusLabel::Rac => "current starts with RAC",
            StatusLabel::Confirmed => "any other current value",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusLabel {
    type Err = ModelError;

    /// Parse a label name (case-insensitive).
    fn from_str(s: &str) -> crate::Result<Self> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "CONFIRMED" => Ok(StatusLabel::Confirmed),
            "WAITING" => Ok(StatusLabel::Waiting),
            "CANCELLED" => Ok(StatusLabel::Cancelled),
            "RAC" => Ok(StatusLabel::Rac),
            _ => Err(ModelError::UnknownStatusLabel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        assert_eq!(
            StatusLabel::from_current_status("CAN"),
            StatusLabel::Cancelled
        );
        assert_eq!(
            StatusLabel::from_current_status("WL5"),
            StatusLabel::Waiting
        );
        assert_eq!(
            StatusLabel::from_current_status("RAC 12"),
            StatusLabel::Rac
        );
        assert_eq!(
            StatusLabel::from_current_status("B1"),
            StatusLabel::Confirmed
        );
        assert_eq!(
            StatusLabel::from_current_status("S4"),
            StatusLabel::Confirmed
        );
    }

    #[test]
    fn test_fallback_is_unconditional() {
        for code in ["", "XYZ", "can", "CANCELLED", "wl3", "GNWL", " WL1", "RA"] {
            assert_eq!(
                StatusLabel::from_current_status(code),
                StatusLabel::Confirmed,
                "{code:?} should fall through to CONFIRMED"
            );
        }
    }

    #[test]
    fn test_all_follows_classification_order() {
        let samples = ["CAN", "WL1", "RAC1", "B1"];
        for (label, code) in StatusLabel::ALL.iter().zip(samples) {
            assert_eq!(StatusLabel::from_current_status(code), *label);
        }
    }

    #[test]
    fn test_label_from_str() {
        assert_eq!(
            "waiting".parse::<StatusLabel>().unwrap(),
            StatusLabel::Waiting
        );
        assert_eq!(" RAC ".parse::<StatusLabel>().unwrap(), StatusLabel::Rac);
        assert!("BOARDED".parse::<StatusLabel>().is_err());
    }

    #[test]
    fn test_serde_names() {
        for label in StatusLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }
}
