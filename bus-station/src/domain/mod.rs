//! Domain types for the bus station.
//!
//! This module contains the core domain model types that represent
//! validated station data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod booking;
mod bus_type;
mod error;
mod ids;
mod ticket;
mod trip;

pub use booking::{FixedSeatPicker, SeatPicker, UniformSeatPicker, book_trip};
pub use bus_type::BusType;
pub use error::ValidationError;
pub use ids::{IdSequence, TicketId, TripId};
pub use ticket::{Ticket, TicketBuilder};
pub use trip::{DEFAULT_CAPACITY, Trip, TripBuilder};
