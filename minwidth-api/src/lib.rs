//! Caller-facing interface for the minwidth width search.
//!
//! A presentation layer hands over the raw text a user typed; this crate
//! validates each field, attributes failures to the input they concern, and
//! runs the search:
//!
//! - [`Request`] — the text fields of one computation
//! - [`Field`] — identifies which input a failure concerns
//! - [`Failure`] — the complete failure taxonomy of a request
//!
//! Every failure is a returned value. Which fields a UI should flag is a
//! query on the failure ([`Failure::fields`]), not shared mutable state.

mod failure;
mod field;
mod request;

pub use failure::Failure;
pub use field::Field;
pub use request::Request;
