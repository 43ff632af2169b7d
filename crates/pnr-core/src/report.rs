use serde_json::Value;
use thiserror::Error;

use pnr_model::{PassengerStatus, PnrReport};
use pnr_validate::{ValidatedBooking, validate_booking};

use crate::{classify_passenger, format_train_info, is_chart_prepared, summarize};

/// The booking failed validation. No further detail is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid PNR input")]
pub struct InvalidInput;

/// Validate a booking and build its report.
///
/// Returns `None` for any input that fails validation.
pub fn format_pnr_status(input: &Value) -> Option<PnrReport> {
    try_format_pnr_status(input).ok()
}

/// Same as [`format_pnr_status`], as a `Result`.
pub fn try_format_pnr_status(input: &Value) -> Result<PnrReport, InvalidInput> {
    let booking = validate_booking(input).map_err(|_| InvalidInput)?;
    Ok(build_report(&booking))
}

/// Classify and aggregate an already-validated booking.
pub fn build_report(booking: &ValidatedBooking<'_>) -> PnrReport {
    let span = tracing::debug_span!("build_report", passengers = booking.passenger_count());
    let _guard = span.enter();

    let passengers: Vec<PassengerStatus> = booking
        .passengers()
        .enumerate()
        .map(|(index, record)| {
            let status = classify_passenger(&record);
            tracing::trace!(
                index,
                current = status.current_status.as_str(),
                label = %status.status_label,
                "classified passenger"
            );
            status
        })
        .collect();

    let summary = summarize(&passengers);
    let chart_prepared = is_chart_prepared(&passengers);
    tracing::debug!(
        confirmed = summary.confirmed,
        waiting = summary.waiting,
        cancelled = summary.cancelled,
        rac = summary.rac,
        chart_prepared,
        "PNR report built"
    );

    PnrReport {
        pnr_formatted: booking.pnr().formatted(),
        train_info: format_train_info(&booking.train(), &booking.class_booked()),
        passengers,
        summary,
        chart_prepared,
    }
}
