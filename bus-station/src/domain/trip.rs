//! Trip entity and its validating builder.
//!
//! A `Trip` is a scheduled journey between two points. Instances are
//! immutable after construction: the builder validates once, and the
//! only "modification" is `with_price`, which produces a new value.

use chrono::{Duration, Local, NaiveDateTime};
use serde::Serialize;

use super::{BusType, TripId, ValidationError};

/// Default seat capacity for a trip when the builder is not told otherwise.
pub const DEFAULT_CAPACITY: u32 = 50;

/// A scheduled bus journey.
///
/// # Invariants
///
/// - Departure point and destination are non-blank
/// - Arrival is strictly after departure (so `duration` is positive)
/// - Price is non-negative, capacity is positive
///
/// These hold by construction: the only way to obtain a `Trip` is
/// through [`TripBuilder::build`] or a copy operation that preserves
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    id: TripId,
    departure_point: String,
    destination: String,
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
    bus_type: BusType,
    price: f64,
    capacity: u32,
}

impl Trip {
    /// Returns the trip id.
    pub fn id(&self) -> TripId {
        self.id
    }

    /// Returns the departure point.
    pub fn departure_point(&self) -> &str {
        &self.departure_point
    }

    /// Returns the destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the scheduled departure time.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    /// Returns the scheduled arrival time.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.arrival_time
    }

    /// Returns the bus category.
    pub fn bus_type(&self) -> BusType {
        self.bus_type
    }

    /// Returns the ticket price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the total seat capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the journey duration. Always strictly positive.
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }

    /// Returns the journey duration in whole hours, rounded down.
    pub fn duration_hours(&self) -> i64 {
        self.duration().num_hours()
    }

    /// Returns true if the trip departs after the given instant.
    pub fn is_upcoming(&self, relative_to: NaiveDateTime) -> bool {
        self.departure_time > relative_to
    }

    /// Returns a copy of this trip with the price replaced.
    ///
    /// The id and every other field are preserved. Used by the
    /// price-scaling station transform.
    pub fn with_price(&self, price: f64) -> Trip {
        Trip {
            price,
            ..self.clone()
        }
    }
}

/// Mutable accumulator for building a [`Trip`].
///
/// Fields are assigned directly, then [`build`](TripBuilder::build)
/// validates and freezes them into an immutable `Trip`.
///
/// # Examples
///
/// ```
/// use bus_station::domain::{BusType, TripBuilder, TripId};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let mut builder = TripBuilder::new(TripId(1));
/// builder.departure_point = "Москва".into();
/// builder.destination = "Казань".into();
/// builder.departure_time = date.and_hms_opt(10, 0, 0).unwrap();
/// builder.arrival_time = date.and_hms_opt(18, 30, 0).unwrap();
/// builder.bus_type = BusType::Comfort;
/// builder.price = 1200.0;
///
/// let trip = builder.build().unwrap();
/// assert_eq!(trip.duration_hours(), 8);
/// assert_eq!(trip.capacity(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct TripBuilder {
    id: TripId,
    pub departure_point: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub bus_type: BusType,
    pub price: f64,
    pub capacity: u32,
}

impl TripBuilder {
    /// Creates a builder for a trip with the given id.
    ///
    /// Defaults: departure now, arrival one hour later, standard bus,
    /// price 0.0, capacity [`DEFAULT_CAPACITY`].
    pub fn new(id: TripId) -> Self {
        let now = Local::now().naive_local();
        Self {
            id,
            departure_point: String::new(),
            destination: String::new(),
            departure_time: now,
            arrival_time: now + Duration::hours(1),
            bus_type: BusType::Standard,
            price: 0.0,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Validates the accumulated fields and builds the trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the departure point or destination is blank, or
    /// the arrival time is not strictly after the departure time.
    pub fn build(self) -> Result<Trip, ValidationError> {
        if self.departure_point.trim().is_empty() {
            return Err(ValidationError::BlankDeparturePoint);
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::BlankDestination);
        }
        if self.arrival_time <= self.departure_time {
            return Err(ValidationError::ArrivalNotAfterDeparture);
        }

        Ok(Trip {
            id: self.id,
            departure_point: self.departure_point,
            destination: self.destination,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            bus_type: self.bus_type,
            price: self.price,
            capacity: self.capacity,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    proptest! {
        /// Any positive gap between departure and arrival builds, any
        /// non-positive gap is rejected.
        #[test]
        fn arrival_ordering_decides_validity(dep_min in 0i64..5000, gap_min in -1000i64..1000) {
            let mut builder = TripBuilder::new(TripId(1));
            builder.departure_point = "A".into();
            builder.destination = "B".into();
            builder.departure_time = base() + Duration::minutes(dep_min);
            builder.arrival_time = builder.departure_time + Duration::minutes(gap_min);

            let result = builder.build();
            if gap_min > 0 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(ValidationError::ArrivalNotAfterDeparture));
            }
        }

        /// `with_price` never disturbs identity or schedule.
        #[test]
        fn with_price_is_price_only(price in 0.0f64..100_000.0, factor in 0.0f64..10.0) {
            let mut builder = TripBuilder::new(TripId(42));
            builder.departure_point = "A".into();
            builder.destination = "B".into();
            builder.departure_time = base();
            builder.arrival_time = base() + Duration::hours(2);
            builder.price = price;
            let trip = builder.build().unwrap();

            let scaled = trip.with_price(price * factor);
            prop_assert_eq!(scaled.id(), trip.id());
            prop_assert_eq!(scaled.departure_time(), trip.departure_time());
            prop_assert_eq!(scaled.arrival_time(), trip.arrival_time());
            prop_assert_eq!(scaled.price(), price * factor);
        }
    }
}
