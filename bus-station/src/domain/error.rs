//! Domain error types.
//!
//! These errors represent validation failures raised by the trip and
//! ticket builders. They signal programmer or input errors: they are
//! never retried or recovered internally, only propagated to the caller.

/// Validation failure raised while building a trip or ticket.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Trip departure point is missing or whitespace-only
    #[error("departure point must not be blank")]
    BlankDeparturePoint,

    /// Trip destination is missing or whitespace-only
    #[error("destination must not be blank")]
    BlankDestination,

    /// Trip arrival time is not strictly after its departure time
    #[error("arrival time must be after departure time")]
    ArrivalNotAfterDeparture,

    /// Ticket built without a trip assigned
    #[error("ticket must reference a trip")]
    MissingTrip,

    /// Ticket passenger name is missing or whitespace-only
    #[error("passenger name must not be blank")]
    BlankPassengerName,

    /// Ticket passenger document is missing or whitespace-only
    #[error("passenger document must not be blank")]
    BlankPassengerDocument,

    /// Ticket seat number is outside `[1, capacity]` for its trip
    #[error("seat number {seat} is out of range 1..={capacity}")]
    SeatOutOfRange { seat: u32, capacity: u32 },

    /// Ticket final price is negative
    #[error("final price must not be negative, got {price}")]
    NegativePrice { price: f64 },
}
