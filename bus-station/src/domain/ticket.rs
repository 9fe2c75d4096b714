//! Ticket entity and its validating builder.
//!
//! A `Ticket` is a purchased seat on a specific trip. It holds a shared
//! read-only reference to its trip (`Arc<Trip>`), never owning the
//! trip's lifecycle. Tickets are immutable after construction;
//! `with_document` produces a new value.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::{TicketId, Trip, ValidationError};

/// A purchased seat on a specific trip for a named passenger.
///
/// # Invariants
///
/// - Passenger name and document are non-blank
/// - Seat number is in `[1, trip.capacity]`
/// - Final price is non-negative
///
/// Building a ticket does **not** register it with any station; that is
/// a separate explicit step.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    id: TicketId,
    trip: Arc<Trip>,
    passenger_name: String,
    passenger_document: String,
    purchase_time: NaiveDateTime,
    seat_number: u32,
    final_price: f64,
}

impl Ticket {
    /// Returns the ticket id.
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the trip this ticket is for.
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Returns the shared trip handle, for building further tickets on
    /// the same trip without cloning it.
    pub fn trip_handle(&self) -> Arc<Trip> {
        Arc::clone(&self.trip)
    }

    /// Returns the passenger name.
    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    /// Returns the passenger identity document.
    pub fn passenger_document(&self) -> &str {
        &self.passenger_document
    }

    /// Returns the purchase time.
    pub fn purchase_time(&self) -> NaiveDateTime {
        self.purchase_time
    }

    /// Returns the seat number.
    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    /// Returns the final price paid.
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    /// Returns true if the referenced trip departs after the given instant.
    pub fn is_upcoming(&self, relative_to: NaiveDateTime) -> bool {
        self.trip.is_upcoming(relative_to)
    }

    /// Returns a copy of this ticket with the passenger document replaced.
    pub fn with_document(&self, document: impl Into<String>) -> Ticket {
        Ticket {
            passenger_document: document.into(),
            ..self.clone()
        }
    }
}

/// Mutable accumulator for building a [`Ticket`].
///
/// A trip must be assigned before building. Fields are assigned
/// directly, then [`build`](TicketBuilder::build) validates and freezes
/// them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bus_station::domain::{TicketBuilder, TicketId, TripBuilder, TripId};
///
/// let mut trip = TripBuilder::new(TripId(1));
/// trip.departure_point = "Москва".into();
/// trip.destination = "Казань".into();
/// let trip = Arc::new(trip.build().unwrap());
///
/// let mut builder = TicketBuilder::new(TicketId(1));
/// builder.trip = Some(trip);
/// builder.passenger_name = "Иван Иванов".into();
/// builder.passenger_document = "1234 567890".into();
/// builder.seat_number = 15;
/// builder.final_price = 1500.0;
///
/// let ticket = builder.build().unwrap();
/// assert_eq!(ticket.seat_number(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct TicketBuilder {
    id: TicketId,
    pub trip: Option<Arc<Trip>>,
    pub passenger_name: String,
    pub passenger_document: String,
    pub purchase_time: NaiveDateTime,
    pub seat_number: u32,
    pub final_price: f64,
}

impl TicketBuilder {
    /// Creates a builder for a ticket with the given id.
    ///
    /// Defaults: no trip, purchase time now, seat 0 (invalid until
    /// assigned), final price 0.0.
    pub fn new(id: TicketId) -> Self {
        Self {
            id,
            trip: None,
            passenger_name: String::new(),
            passenger_document: String::new(),
            purchase_time: Local::now().naive_local(),
            seat_number: 0,
            final_price: 0.0,
        }
    }

    /// Validates the accumulated fields and builds the ticket.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no trip is assigned, the passenger name or
    /// document is blank, the seat number is outside
    /// `[1, trip.capacity]`, or the final price is negative.
    pub fn build(self) -> Result<Ticket, ValidationError> {
        let trip = self.trip.ok_or(ValidationError::MissingTrip)?;

        if self.passenger_name.trim().is_empty() {
            return Err(ValidationError::BlankPassengerName);
        }
        if self.passenger_document.trim().is_empty() {
            return Err(ValidationError::BlankPassengerDocument);
        }
        if self.seat_number < 1 || self.seat_number > trip.capacity() {
            return Err(ValidationError::SeatOutOfRange {
                seat: self.seat_number,
                capacity: trip.capacity(),
            });
        }
        if self.final_price < 0.0 {
            return Err(ValidationError::NegativePrice {
                price: self.final_price,
            });
        }

        Ok(Ticket {
            id: self.id,
            trip,
            passenger_name: self.passenger_name,
            passenger_document: self.passenger_document,
            purchase_time: self.purchase_time,
            seat_number: self.seat_number,
            final_price: self.final_price,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{TripBuilder, TripId};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn trip_with_capacity(capacity: u32) -> Arc<Trip> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut builder = TripBuilder::new(TripId(1));
        builder.departure_point = "A".into();
        builder.destination = "B".into();
        builder.departure_time = date.and_hms_opt(10, 0, 0).unwrap();
        builder.arrival_time = date.and_hms_opt(12, 0, 0).unwrap();
        builder.capacity = capacity;
        Arc::new(builder.build().unwrap())
    }

    proptest! {
        /// Seat validity is exactly the range check against capacity.
        #[test]
        fn seat_range_decides_validity(capacity in 1u32..200, seat in 0u32..400) {
            let mut builder = TicketBuilder::new(TicketId(1));
            builder.trip = Some(trip_with_capacity(capacity));
            builder.passenger_name = "P".into();
            builder.passenger_document = "D".into();
            builder.seat_number = seat;

            let result = builder.build();
            if (1..=capacity).contains(&seat) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(
                    result.err(),
                    Some(ValidationError::SeatOutOfRange { seat, capacity })
                );
            }
        }
    }
}
