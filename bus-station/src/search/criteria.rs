//! Search criteria and the filter predicate.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{BusType, Trip};

/// An optional-field filter specification over trips.
///
/// All present criteria are AND-combined; absent criteria impose no
/// constraint. A default-constructed value matches every trip. The
/// value is ephemeral: it parameterizes a single query call and is not
/// part of any station's state.
///
/// # Examples
///
/// ```
/// use bus_station::search::SearchCriteria;
///
/// let mut criteria = SearchCriteria::new();
/// criteria.departure_point = Some("Москва".into());
/// criteria.max_price = Some(2000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive exact match on the departure point
    pub departure_point: Option<String>,
    /// Case-insensitive exact match on the destination
    pub destination: Option<String>,
    /// Earliest acceptable departure time, inclusive
    pub min_departure_time: Option<NaiveDateTime>,
    /// Latest acceptable departure time, inclusive
    pub max_departure_time: Option<NaiveDateTime>,
    /// Highest acceptable price, inclusive
    pub max_price: Option<f64>,
    /// Acceptable bus categories; empty means no restriction
    pub bus_types: HashSet<BusType>,
}

impl SearchCriteria {
    /// Creates criteria matching every trip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the trip satisfies every present criterion.
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(point) = &self.departure_point
            && !eq_ignore_case(trip.departure_point(), point)
        {
            return false;
        }
        if let Some(destination) = &self.destination
            && !eq_ignore_case(trip.destination(), destination)
        {
            return false;
        }
        if let Some(min) = self.min_departure_time
            && trip.departure_time() < min
        {
            return false;
        }
        if let Some(max) = self.max_departure_time
            && trip.departure_time() > max
        {
            return false;
        }
        if let Some(max_price) = self.max_price
            && trip.price() > max_price
        {
            return false;
        }
        if !self.bus_types.is_empty() && !self.bus_types.contains(&trip.bus_type()) {
            return false;
        }
        true
    }
}

// Full Unicode lowercasing: departure points are written in Cyrillic
// as often as not, so ASCII-only comparison is not enough.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
