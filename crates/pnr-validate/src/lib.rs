//! Validation of untrusted PNR booking input.
//!
//! A booking arrives as an arbitrary JSON value. [`validate_booking`] checks
//! only the structure needed to build a report: the PNR itself, that `train`
//! is an object, and that `passengers` is a non-empty array. Everything else
//! is carried through as loosely-typed text, see [`render_loose`].

mod loose;
mod validator;

pub use loose::render_loose;
pub use validator::{Rejection, ValidatedBooking, validate_booking};
