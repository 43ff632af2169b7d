//! Structural validation of a booking.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the input is a JSON object (`null` counts as absent)
//! 2. `pnr` is a string
//! 3. `pnr` is exactly 10 characters long
//! 4. `pnr` matches the 10-ASCII-digit pattern
//! 5. `train` is an object
//! 6. `passengers` is an array with at least one entry
//!
//! The contents of `train`, `classBooked` and each passenger are not checked.

use serde_json::{Map, Value};
use thiserror::Error;

use pnr_model::{ModelError, PassengerRecord, PnrNumber, TrainDetails};

use crate::render_loose;

/// Why a booking was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("input is absent or not an object")]
    NotARecord,
    #[error("pnr is missing or not a string")]
    PnrNotText,
    #[error("pnr has {length} characters, expected 10")]
    PnrLength { length: usize },
    #[error("pnr contains characters other than ASCII digits")]
    PnrNotDigits,
    #[error("train is missing or not an object")]
    TrainNotRecord,
    #[error("passengers is missing or not an array")]
    PassengersNotSequence,
    #[error("passengers is empty")]
    NoPassengers,
}

impl Rejection {
    /// Stable identifier of the failed check.
    pub fn check(&self) -> &'static str {
        match self {
            Rejection::NotARecord => "record",
            Rejection::PnrNotText => "pnr_type",
            Rejection::PnrLength { .. } => "pnr_length",
            Rejection::PnrNotDigits => "pnr_pattern",
            Rejection::TrainNotRecord => "train",
            Rejection::PassengersNotSequence => "passengers_type",
            Rejection::NoPassengers => "passengers_empty",
        }
    }
}

/// A booking that passed validation, borrowing from the input value.
#[derive(Debug, Clone)]
pub struct ValidatedBooking<'a> {
    pnr: PnrNumber,
    record: &'a Map<String, Value>,
    train: &'a Map<String, Value>,
    passengers: &'a [Value],
}

impl ValidatedBooking<'_> {
    pub fn pnr(&self) -> &PnrNumber {
        &self.pnr
    }

    pub fn train(&self) -> TrainDetails {
        TrainDetails {
            number: render_loose(self.train.get("number")),
            name: render_loose(self.train.get("name")),
            from: render_loose(self.train.get("from")),
            to: render_loose(self.train.get("to")),
        }
    }

    pub fn class_booked(&self) -> String {
        render_loose(self.record.get("classBooked"))
    }

    /// Passengers in input order.
    ///
    /// An entry that is not an object yields a record of empty fields.
    pub fn passengers(&self) -> impl Iterator<Item = PassengerRecord> {
        self.passengers.iter().map(|entry| {
            let field = |key: &str| render_loose(entry.get(key));
            PassengerRecord {
                name: field("name"),
                age: field("age"),
                gender: field("gender"),
                booking: field("booking"),
                current: field("current"),
            }
        })
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }
}

/// Validate a booking value.
pub fn validate_booking(input: &Value) -> Result<ValidatedBooking<'_>, Rejection> {
    let result = check_booking(input);
    if let Err(rejection) = &result {
        tracing::debug!(
            check = rejection.check(),
            reason = %rejection,
            "PNR input rejected"
        );
    }
    result
}

fn check_booking(input: &Value) -> Result<ValidatedBooking<'_>, Rejection> {
    let record = input.as_object().ok_or(Rejection::NotARecord)?;

    let pnr_text = record
        .get("pnr")
        .and_then(Value::as_str)
        .ok_or(Rejection::PnrNotText)?;
    let pnr = PnrNumber::new(pnr_text).map_err(|error| match error {
        ModelError::InvalidPnrLength { length } => Rejection::PnrLength { length },
        _ => Rejection::PnrNotDigits,
    })?;

    let train = record
        .get("train")
        .and_then(Value::as_object)
        .ok_or(Rejection::TrainNotRecord)?;

    let passengers = record
        .get("passengers")
        .and_then(Value::as_array)
        .ok_or(Rejection::PassengersNotSequence)?;
    if passengers.is_empty() {
        return Err(Rejection::NoPassengers);
    }

    Ok(ValidatedBooking {
        pnr,
        record,
        train,
        passengers: passengers.as_slice(),
    })
}
