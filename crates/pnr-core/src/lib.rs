//! Build display-ready PNR status reports.
//!
//! The pipeline has three stages: validation (in `pnr-validate`), passenger
//! classification, and aggregation into summary counts. Every stage is a pure
//! function of its input.

mod classify;
mod format;
mod report;
mod summary;

pub use classify::{NAME_COLUMN_WIDTH, classify_passenger, format_passenger_name};
pub use format::format_train_info;
pub use report::{InvalidInput, build_report, format_pnr_status, try_format_pnr_status};
pub use summary::{is_chart_prepared, summarize};
