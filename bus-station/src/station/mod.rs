//! The station aggregate.
//!
//! A `Station` owns the collections of known trips and issued tickets
//! and enforces the seat-capacity invariant at the moment a ticket is
//! proposed for insertion. It is the only mutable entity in the model.

mod ops;

pub use ops::{
    exclude_bus_type, is_empty_station, merge_stations, scale_prices, sort_by_arrival,
    sort_by_price_desc,
};

use tracing::debug;

use crate::domain::{Ticket, Trip, TripId};
use crate::search::{SearchCriteria, TripSearch};

/// Error from the escalating convenience registration path.
///
/// Plain [`Station::add_ticket`] reports capacity exhaustion as a
/// `false` return because it is an expected business outcome; this
/// error exists for callers that want the purchase workflow to fail
/// loudly instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Every seat on the trip already has a ticket
    #[error("no seats left on trip {trip_id}")]
    SoldOut { trip_id: TripId },
}

/// A bus station: all known trips and all issued tickets.
///
/// Both collections preserve insertion order and are exposed only as
/// read-only slices; internal state can only change through the `add`
/// operations.
///
/// # Invariant
///
/// For every trip, the number of registered tickets referencing it
/// never exceeds the trip's capacity. The check runs at insertion time
/// and recounts the live ticket list rather than maintaining a running
/// counter, so the counter can never drift.
///
/// # Concurrency
///
/// The model is single-threaded. `add_ticket` is check-then-append and
/// not atomic, so sharing a `Station` across threads requires external
/// synchronization (a single mutex over the whole station suffices).
#[derive(Debug, Clone, Default)]
pub struct Station {
    trips: Vec<Trip>,
    tickets: Vec<Ticket>,
}

impl Station {
    /// Creates an empty station.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the trips in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns the issued tickets in insertion order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Appends a trip. Always succeeds.
    ///
    /// No duplicate-id check is performed; keeping ids unique is the
    /// caller's responsibility (see [`crate::domain::IdSequence`]).
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Registers a ticket if the trip still has a free seat.
    ///
    /// Returns `false` without appending when the trip's capacity is
    /// already exhausted. This is an expected business outcome, not an
    /// error; callers wanting a hard failure use
    /// [`issue_ticket`](Station::issue_ticket).
    ///
    /// The check counts tickets against the capacity of the trip the
    /// ticket itself references, so it also applies to tickets for
    /// trips that were never added to this station.
    pub fn add_ticket(&mut self, ticket: Ticket) -> bool {
        let trip_id = ticket.trip().id();
        let remaining = ticket
            .trip()
            .capacity()
            .saturating_sub(self.ticket_count_for(trip_id));

        if remaining > 0 {
            self.tickets.push(ticket);
            true
        } else {
            debug!(%trip_id, "ticket rejected: trip sold out");
            false
        }
    }

    /// Registers a ticket, escalating capacity exhaustion into an error.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::SoldOut`] when [`add_ticket`](Station::add_ticket)
    /// would have returned `false`.
    pub fn issue_ticket(&mut self, ticket: Ticket) -> Result<(), BookingError> {
        let trip_id = ticket.trip().id();
        if self.add_ticket(ticket) {
            Ok(())
        } else {
            Err(BookingError::SoldOut { trip_id })
        }
    }

    /// Returns the number of free seats on the given trip.
    ///
    /// Returns 0 when no trip with that id is known. Absence and
    /// "fully booked" are deliberately not distinguished here; callers
    /// needing the distinction check [`trips`](Station::trips) first.
    pub fn available_seats(&self, trip_id: TripId) -> u32 {
        let Some(trip) = self.trips.iter().find(|t| t.id() == trip_id) else {
            return 0;
        };
        trip.capacity().saturating_sub(self.ticket_count_for(trip_id))
    }

    /// Returns the trips matching the given criteria, in insertion order.
    ///
    /// One-shot counterpart of [`find_trips`](Station::find_trips);
    /// both surfaces share the same predicate.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Trip> {
        let matched: Vec<&Trip> = self
            .trips
            .iter()
            .filter(|trip| criteria.matches(trip))
            .collect();
        debug!(matched = matched.len(), total = self.trips.len(), "trip search");
        matched
    }

    /// Starts a fluent trip search over this station.
    pub fn find_trips(&self) -> TripSearch<'_> {
        TripSearch::new(self)
    }

    fn ticket_count_for(&self, trip_id: TripId) -> u32 {
        self.tickets
            .iter()
            .filter(|t| t.trip().id() == trip_id)
            .count() as u32
    }
}
