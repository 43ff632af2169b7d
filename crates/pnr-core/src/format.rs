use pnr_model::TrainDetails;

/// One-line train description. Fields are inserted verbatim.
pub fn format_train_info(train: &TrainDetails, class_booked: &str) -> String {
    format!(
        "Train: {} - {} | {} → {} | Class: {}",
        train.number, train.name, train.from, train.to, class_booked
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_template() {
        let train = TrainDetails {
            number: "12301".to_string(),
            name: "Rajdhani Express".to_string(),
            from: "NDLS".to_string(),
            to: "HWH".to_string(),
        };
        assert_eq!(
            format_train_info(&train, "3A"),
            "Train: 12301 - Rajdhani Express | NDLS → HWH | Class: 3A"
        );
    }

    #[test]
    fn empty_fields_leave_gaps() {
        assert_eq!(
            format_train_info(&TrainDetails::default(), ""),
            "Train:  -  |  →  | Class: "
        );
    }
}
