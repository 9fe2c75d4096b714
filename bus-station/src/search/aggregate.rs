//! Aggregate views over trip and ticket collections.
//!
//! Free functions taking the collection as an explicit slice, so they
//! work over a station's views and over any filtered subset alike.
//! The min/max helpers return `None` on empty input, never an error.

use chrono::NaiveDateTime;

use crate::domain::{BusType, Ticket, Trip};

/// Returns the cheapest trip, or `None` if the slice is empty.
pub fn cheapest(trips: &[Trip]) -> Option<&Trip> {
    trips.iter().min_by(|a, b| a.price().total_cmp(&b.price()))
}

/// Returns the most expensive trip, or `None` if the slice is empty.
pub fn most_expensive(trips: &[Trip]) -> Option<&Trip> {
    trips.iter().max_by(|a, b| a.price().total_cmp(&b.price()))
}

/// Returns the trip with the shortest duration, or `None` if the slice
/// is empty.
pub fn fastest(trips: &[Trip]) -> Option<&Trip> {
    trips.iter().min_by_key(|t| t.duration())
}

/// Returns the trip with the longest duration, or `None` if the slice
/// is empty.
pub fn slowest(trips: &[Trip]) -> Option<&Trip> {
    trips.iter().max_by_key(|t| t.duration())
}

/// Groups trips by bus category.
///
/// Grouping is stable: categories appear in first-seen order and trips
/// keep their relative order within each group.
pub fn group_by_bus_type(trips: &[Trip]) -> Vec<(BusType, Vec<&Trip>)> {
    let mut groups: Vec<(BusType, Vec<&Trip>)> = Vec::new();
    for trip in trips {
        match groups.iter_mut().find(|(ty, _)| *ty == trip.bus_type()) {
            Some((_, group)) => group.push(trip),
            None => groups.push((trip.bus_type(), vec![trip])),
        }
    }
    groups
}

/// Returns the trips departing strictly after the given instant.
pub fn upcoming(trips: &[Trip], now: NaiveDateTime) -> Vec<&Trip> {
    trips.iter().filter(|t| t.is_upcoming(now)).collect()
}

/// Sums the listed prices of the trips. Zero for an empty slice.
pub fn total_revenue(trips: &[Trip]) -> f64 {
    trips.iter().map(Trip::price).sum()
}

/// Sums the final prices of the tickets. Zero for an empty slice.
pub fn total_sales(tickets: &[Ticket]) -> f64 {
    tickets.iter().map(Ticket::final_price).sum()
}

/// Returns the tickets whose trip departs strictly after the given instant.
pub fn upcoming_tickets(tickets: &[Ticket], now: NaiveDateTime) -> Vec<&Ticket> {
    tickets.iter().filter(|t| t.is_upcoming(now)).collect()
}
