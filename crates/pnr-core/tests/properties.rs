//! Property-based tests for report invariants.

use proptest::prelude::*;
use serde_json::{Value, json};

use pnr_core::{format_passenger_name, format_pnr_status};
use pnr_model::StatusLabel;

fn current_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CAN".to_string()),
        "WL[0-9]{1,3}",
        "RAC ?[0-9]{0,3}",
        "[BS][0-9]{1,2}",
        ".{0,6}",
    ]
}

fn passenger() -> impl Strategy<Value = (String, u32, String, String)> {
    (
        "[A-Za-z ]{0,30}",
        0u32..120,
        prop_oneof![Just("M".to_string()), Just("F".to_string()), Just("T".to_string())],
        current_status(),
    )
}

fn booking(pnr: &str, passengers: &[(String, u32, String, String)]) -> Value {
    let passengers: Vec<Value> = passengers
        .iter()
        .map(|(name, age, gender, current)| {
            json!({
                "name": name,
                "age": age,
                "gender": gender,
                "booking": current,
                "current": current
            })
        })
        .collect();
    json!({
        "pnr": pnr,
        "train": {"number": "12951", "name": "Mumbai Rajdhani", "from": "MMCT", "to": "NDLS"},
        "classBooked": "2A",
        "passengers": passengers
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Label counts partition the passenger list and keep input order.
    #[test]
    fn counts_partition_passengers(
        pnr in "[0-9]{10}",
        passengers in prop::collection::vec(passenger(), 1..12),
    ) {
        let report = format_pnr_status(&booking(&pnr, &passengers)).unwrap();
        let summary = report.summary;

        prop_assert_eq!(summary.total_passengers, passengers.len());
        prop_assert_eq!(
            summary.confirmed + summary.waiting + summary.cancelled + summary.rac,
            summary.total_passengers
        );
        prop_assert_eq!(report.passengers.len(), passengers.len());
        for (status, (name, age, gender, current)) in report.passengers.iter().zip(&passengers) {
            prop_assert_eq!(
                &status.formatted_name,
                &format_passenger_name(name, &age.to_string(), gender)
            );
            prop_assert_eq!(&status.current_status, current);
            prop_assert_eq!(status.status_label, StatusLabel::from_current_status(current));
        }
    }

    /// Boolean summary fields agree with the counts.
    #[test]
    fn flags_agree_with_counts(
        passengers in prop::collection::vec(passenger(), 1..12),
    ) {
        let report = format_pnr_status(&booking("1234567890", &passengers)).unwrap();
        let summary = report.summary;

        prop_assert_eq!(summary.all_confirmed, summary.confirmed == summary.total_passengers);
        prop_assert_eq!(summary.any_waiting, summary.waiting > 0);

        let chart_expected = report
            .passengers
            .iter()
            .filter(|p| p.status_label != StatusLabel::Cancelled)
            .all(|p| p.status_label == StatusLabel::Confirmed);
        prop_assert_eq!(report.chart_prepared, chart_expected);
    }

    /// Removing the hyphens from the formatted PNR gives back the input.
    #[test]
    fn formatted_pnr_round_trips(pnr in "[0-9]{10}") {
        let passengers = vec![("A".to_string(), 1, "M".to_string(), "B1".to_string())];
        let report = format_pnr_status(&booking(&pnr, &passengers)).unwrap();

        prop_assert_eq!(report.pnr_formatted.len(), 12);
        prop_assert_eq!(&report.pnr_formatted[3..4], "-");
        prop_assert_eq!(&report.pnr_formatted[7..8], "-");
        prop_assert_eq!(report.pnr_digits(), pnr);
    }

    /// PNRs of the wrong length are rejected.
    #[test]
    fn wrong_length_pnr_rejected(pnr in "[0-9]{0,9}|[0-9]{11,16}") {
        let passengers = vec![("A".to_string(), 1, "M".to_string(), "B1".to_string())];
        prop_assert!(format_pnr_status(&booking(&pnr, &passengers)).is_none());
    }

    /// Ten-character PNRs with a non-digit are rejected.
    #[test]
    fn non_digit_pnr_rejected(pnr in "[0-9]{4}[^0-9][0-9]{5}") {
        let passengers = vec![("A".to_string(), 1, "M".to_string(), "B1".to_string())];
        prop_assert!(format_pnr_status(&booking(&pnr, &passengers)).is_none());
    }

    /// Anything that is not an object is rejected.
    #[test]
    fn non_record_rejected(text in ".*", number in any::<i64>(), flag in any::<bool>()) {
        prop_assert!(format_pnr_status(&json!(text)).is_none());
        prop_assert!(format_pnr_status(&json!(number)).is_none());
        prop_assert!(format_pnr_status(&json!(flag)).is_none());
        prop_assert!(format_pnr_status(&json!([text])).is_none());
    }
}
