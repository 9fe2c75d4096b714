//! Bus station domain model.
//!
//! An in-memory model of a small bus station: scheduled trips, issued
//! tickets, and seat inventory, plus a search layer for filtering and
//! aggregating trips. Everything is single-process and synchronous;
//! there is no persistence and no network surface.

pub mod domain;
pub mod search;
pub mod station;
