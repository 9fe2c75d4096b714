//! Fluent trip search.

use chrono::NaiveDateTime;

use crate::domain::{BusType, Trip};
use crate::station::Station;

use super::SearchCriteria;

/// Incremental builder surface over the search predicate.
///
/// Accumulates a [`SearchCriteria`] one clause at a time and runs it
/// with [`execute`](TripSearch::execute). Produces exactly the same
/// results as passing the equivalent criteria to
/// [`Station::search`]: both surfaces share [`SearchCriteria::matches`].
///
/// # Examples
///
/// ```
/// use bus_station::station::Station;
///
/// let station = Station::new();
/// let trips = station
///     .find_trips()
///     .from("Москва")
///     .to("Казань")
///     .max_price(2000.0)
///     .execute();
/// assert!(trips.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TripSearch<'a> {
    station: &'a Station,
    criteria: SearchCriteria,
}

impl<'a> TripSearch<'a> {
    /// Starts a search over the given station with empty criteria.
    pub fn new(station: &'a Station) -> Self {
        Self {
            station,
            criteria: SearchCriteria::new(),
        }
    }

    /// Requires the departure point to equal `departure`, case-insensitively.
    pub fn from(mut self, departure: impl Into<String>) -> Self {
        self.criteria.departure_point = Some(departure.into());
        self
    }

    /// Requires the destination to equal `destination`, case-insensitively.
    pub fn to(mut self, destination: impl Into<String>) -> Self {
        self.criteria.destination = Some(destination.into());
        self
    }

    /// Requires departure at or after `time`.
    pub fn departing_after(mut self, time: NaiveDateTime) -> Self {
        self.criteria.min_departure_time = Some(time);
        self
    }

    /// Requires departure at or before `time`.
    pub fn departing_before(mut self, time: NaiveDateTime) -> Self {
        self.criteria.max_departure_time = Some(time);
        self
    }

    /// Requires the price to be at most `price`.
    pub fn max_price(mut self, price: f64) -> Self {
        self.criteria.max_price = Some(price);
        self
    }

    /// Restricts matches to the given bus categories.
    ///
    /// Passing an empty iterator lifts the restriction again.
    pub fn bus_types(mut self, types: impl IntoIterator<Item = BusType>) -> Self {
        self.criteria.bus_types = types.into_iter().collect();
        self
    }

    /// Runs the accumulated criteria against the station's trips.
    pub fn execute(self) -> Vec<&'a Trip> {
        self.station.search(&self.criteria)
    }

    /// Returns the criteria accumulated so far.
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }
}
