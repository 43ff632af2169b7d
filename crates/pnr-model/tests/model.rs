//! Tests for pnr-model types.

use pnr_model::{
    ModelError, PassengerStatus, PnrNumber, PnrReport, PnrSummary, StatusLabel,
};

fn passenger(label: StatusLabel) -> PassengerStatus {
    PassengerStatus {
        formatted_name: format!("{:<20}(30/F)", "Asha"),
        booking_status: "B1".to_string(),
        current_status: "B1".to_string(),
        status_label: label,
        is_confirmed: label.is_confirmed(),
    }
}

#[test]
fn report_uses_camel_case_keys() {
    let report = PnrReport {
        pnr_formatted: "987-654-3210".to_string(),
        train_info: "Train: 12951 - Mumbai Rajdhani | MMCT → NDLS | Class: 2A".to_string(),
        passengers: vec![passenger(StatusLabel::Confirmed)],
        summary: PnrSummary {
            total_passengers: 1,
            confirmed: 1,
            all_confirmed: true,
            ..PnrSummary::default()
        },
        chart_prepared: true,
    };

    let value = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(value["pnrFormatted"], "987-654-3210");
    assert_eq!(value["chartPrepared"], true);
    assert_eq!(value["summary"]["totalPassengers"], 1);
    assert_eq!(value["summary"]["allConfirmed"], true);
    assert_eq!(value["summary"]["anyWaiting"], false);
    assert_eq!(value["passengers"][0]["statusLabel"], "CONFIRMED");
    assert_eq!(value["passengers"][0]["isConfirmed"], true);
    assert_eq!(value["passengers"][0]["bookingStatus"], "B1");
}

#[test]
fn pnr_digits_reverses_formatting() {
    let pnr = PnrNumber::new("5550001234").unwrap();
    let report = PnrReport {
        pnr_formatted: pnr.formatted(),
        train_info: String::new(),
        passengers: vec![],
        summary: PnrSummary::default(),
        chart_prepared: true,
    };
    assert_eq!(report.pnr_digits(), pnr.as_str());
}

#[test]
fn summary_count_matches_fields() {
    let summary = PnrSummary {
        total_passengers: 6,
        confirmed: 3,
        waiting: 1,
        cancelled: 2,
        rac: 0,
        all_confirmed: false,
        any_waiting: true,
    };
    assert_eq!(summary.count(StatusLabel::Confirmed), 3);
    assert_eq!(summary.count(StatusLabel::Cancelled), 2);
    assert!(summary.is_partitioned());

    let broken = PnrSummary {
        total_passengers: 7,
        ..summary
    };
    assert!(!broken.is_partitioned());
}

#[test]
fn model_error_messages() {
    assert_eq!(
        ModelError::InvalidPnrLength { length: 9 }.to_string(),
        "PNR must be exactly 10 characters, got 9"
    );
    assert_eq!(
        ModelError::UnknownStatusLabel("X".to_string()).to_string(),
        "unknown status label: X"
    );
}
