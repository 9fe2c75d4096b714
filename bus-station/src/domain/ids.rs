//! Identifier types.
//!
//! Trips and tickets carry numeric ids assigned by the caller. Ids are
//! never generated inside an entity; `IdSequence` is the monotonic
//! counter a caller or factory hands out ids from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a trip, unique within a station by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(pub u32);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an issued ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u32);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter.
///
/// One sequence is kept per id kind; mixing trip and ticket ids from the
/// same sequence is the caller's choice and is harmless but unusual.
///
/// # Examples
///
/// ```
/// use bus_station::domain::{IdSequence, TripId};
///
/// let mut seq = IdSequence::new();
/// assert_eq!(seq.next_trip(), TripId(1));
/// assert_eq!(seq.next_trip(), TripId(2));
/// ```
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Creates a sequence starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence starting at the given value.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    fn advance(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Returns the next trip id and advances the counter.
    pub fn next_trip(&mut self) -> TripId {
        TripId(self.advance())
    }

    /// Returns the next ticket id and advances the counter.
    pub fn next_ticket(&mut self) -> TicketId {
        TicketId(self.advance())
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
