pub mod error;
pub mod pnr;
pub mod record;
pub mod report;
pub mod status;

pub use error::{ModelError, Result};
pub use pnr::{PNR_LENGTH, PnrNumber};
pub use record::{PassengerRecord, TrainDetails};
pub use report::{PassengerStatus, PnrReport, PnrSummary};
pub use status::StatusLabel;
