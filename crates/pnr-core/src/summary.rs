//! Aggregate counts over classified passengers.

use pnr_model::{PassengerStatus, PnrSummary, StatusLabel};

/// Count passengers per status label in a single pass.
///
/// `all_confirmed` is computed from `is_confirmed`, so an empty slice reports
/// `true`. Validated bookings always have at least one passenger.
pub fn summarize(passengers: &[PassengerStatus]) -> PnrSummary {
    let mut summary = PnrSummary {
        total_passengers: passengers.len(),
        all_confirmed: true,
        ..PnrSummary::default()
    };
    for passenger in passengers {
        match passenger.status_label {
            StatusLabel::Confirmed => summary.confirmed += 1,
            StatusLabel::Waiting => summary.waiting += 1,
            StatusLabel::Cancelled => summary.cancelled += 1,
            StatusLabel::Rac => summary.rac += 1,
        }
        summary.all_confirmed &= passenger.is_confirmed;
        summary.any_waiting |= passenger.status_label == StatusLabel::Waiting;
    }
    summary
}

/// True when every passenger that is not cancelled holds a confirmed berth.
pub fn is_chart_prepared(passengers: &[PassengerStatus]) -> bool {
    passengers
        .iter()
        .filter(|passenger| passenger.status_label != StatusLabel::Cancelled)
        .all(|passenger| passenger.is_confirmed)
}
