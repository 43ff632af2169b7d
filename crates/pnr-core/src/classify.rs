use pnr_model::{PassengerRecord, PassengerStatus, StatusLabel};

/// Minimum width of the name column in a formatted passenger name.
pub const NAME_COLUMN_WIDTH: usize = 20;

/// Pad `name` on the right to [`NAME_COLUMN_WIDTH`] characters and append
/// `(age/gender)`. Longer names are kept whole.
pub fn format_passenger_name(name: &str, age: &str, gender: &str) -> String {
    format!("{name:<width$}({age}/{gender})", width = NAME_COLUMN_WIDTH)
}

/// Derive the display record for one passenger.
pub fn classify_passenger(passenger: &PassengerRecord) -> PassengerStatus {
    let status_label = StatusLabel::from_current_status(&passenger.current);
    PassengerStatus {
        formatted_name: format_passenger_name(&passenger.name, &passenger.age, &passenger.gender),
        booking_status: passenger.booking.clone(),
        current_status: passenger.current.clone(),
        status_label,
        is_confirmed: status_label.is_confirmed(),
    }
}
