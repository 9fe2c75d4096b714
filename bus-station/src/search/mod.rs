//! Trip search and aggregation.
//!
//! Filtering is driven by [`SearchCriteria`], reachable through two
//! equivalent surfaces: the one-shot [`Station::search`] call and the
//! fluent [`TripSearch`] builder. Aggregate helpers over trip and
//! ticket slices live in [`aggregate`].
//!
//! [`Station::search`]: crate::station::Station::search

pub mod aggregate;
mod criteria;
mod query;

pub use criteria::SearchCriteria;
pub use query::TripSearch;
