use serde::{Deserialize, Serialize};

/// Train fields of a booking, carried as text and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainDetails {
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
}

/// One passenger as it arrived in the booking.
///
/// `booking` and `current` are raw status codes (`B1`, `WL5`, `RAC 3`, `CAN`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub booking: String,
    pub current: String,
}
