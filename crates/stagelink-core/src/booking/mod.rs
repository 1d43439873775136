//! Booking domain module.
//!
//! # Module Structure
//!
//! - `model`: drafts, form input, persisted bookings, remote payloads
//! - `state`: the per-attempt workflow state machine
//! - `date`: date helpers for the booking form

mod date;
mod model;
mod state;

pub use date::{earliest_bookable_date, format_booking_date};
pub use model::{
    Booking, BookingConfirmation, BookingDraft, BookingForm, BookingRequest, BookingStatus,
};
pub use state::WorkflowState;
