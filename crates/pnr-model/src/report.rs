//! The display-ready status report.

use serde::{Deserialize, Serialize};

use crate::StatusLabel;

/// Display record for one passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerStatus {
    /// Name padded to 20 columns, then `(age/gender)`.
    pub formatted_name: String,
    pub booking_status: String,
    pub current_status: String,
    pub status_label: StatusLabel,
    pub is_confirmed: bool,
}

/// Aggregate counts over all passengers of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrSummary {
    pub total_passengers: usize,
    pub confirmed: usize,
    pub waiting: usize,
    pub cancelled: usize,
    pub rac: usize,
    pub all_confirmed: bool,
    pub any_waiting: bool,
}

impl PnrSummary {
    /// Count for a single label.
    pub fn count(&self, label: StatusLabel) -> usize {
        match label {
            StatusLabel::Confirmed => self.confirmed,
            StatusLabel::Waiting => self.waiting,
            StatusLabel::Cancelled => self.cancelled,
            StatusLabel::Rac => self.rac,
        }
    }

    /// True when the four label counts add up to the passenger total.
    pub fn is_partitioned(&self) -> bool {
        self.confirmed + self.waiting + self.cancelled + self.rac == self.total_passengers
    }
}

/// Formatted report for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrReport {
    pub pnr_formatted: String,
    pub train_info: String,
    /// Same order as the input passengers.
    pub passengers: Vec<PassengerStatus>,
    pub summary: PnrSummary,
    pub chart_prepared: bool,
}

impl PnrReport {
    /// The bare PNR digits, recovered from the hyphenated form.
    pub fn pnr_digits(&self) -> String {
        self.pnr_formatted.replace('-', "")
    }
}
