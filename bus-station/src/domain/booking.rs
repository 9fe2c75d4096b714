//! Convenience booking helper.
//!
//! `book_trip` builds an unregistered ticket for a trip in one call,
//! choosing the seat through a pluggable [`SeatPicker`] strategy so
//! tests can substitute a deterministic one for the default uniform
//! random pick.

use std::sync::Arc;

use chrono::Local;
use rand::Rng;

use super::{Ticket, TicketBuilder, TicketId, Trip, ValidationError};

/// Placeholder document used until the passenger supplies a real one
/// via [`Ticket::with_document`].
const UNKNOWN_DOCUMENT: &str = "unknown";

/// Strategy for choosing a seat number on a trip.
///
/// Implementations must return a value in `[1, capacity]`.
pub trait SeatPicker {
    /// Picks a seat on a trip with the given capacity.
    fn pick(&mut self, capacity: u32) -> u32;
}

/// Default picker: any seat, uniformly at random.
#[derive(Debug, Default)]
pub struct UniformSeatPicker;

impl SeatPicker for UniformSeatPicker {
    fn pick(&mut self, capacity: u32) -> u32 {
        rand::thread_rng().gen_range(1..=capacity)
    }
}

/// Deterministic picker returning a fixed seat, for tests and callers
/// that already know the seat.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeatPicker(pub u32);

impl SeatPicker for FixedSeatPicker {
    fn pick(&mut self, _capacity: u32) -> u32 {
        self.0
    }
}

/// Books a seat on a trip for a named passenger.
///
/// The ticket gets the trip's listed price, a purchase time of now, a
/// seat chosen by `picker`, and the placeholder document
/// `"unknown"` to be replaced with [`Ticket::with_document`]. The
/// ticket is **not** registered with any station.
///
/// # Errors
///
/// Returns `Err` if the passenger name is blank or the picker returns
/// a seat outside `[1, capacity]`.
pub fn book_trip(
    trip: &Arc<Trip>,
    id: TicketId,
    passenger: impl Into<String>,
    picker: &mut dyn SeatPicker,
) -> Result<Ticket, ValidationError> {
    let mut builder = TicketBuilder::new(id);
    builder.seat_number = picker.pick(trip.capacity());
    builder.trip = Some(Arc::clone(trip));
    builder.passenger_name = passenger.into();
    builder.passenger_document = UNKNOWN_DOCUMENT.into();
    builder.purchase_time = Local::now().naive_local();
    builder.final_price = trip.price();
    builder.build()
}
