//! Bus category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of bus operating a trip.
///
/// # Examples
///
/// ```
/// use bus_station::domain::BusType;
///
/// assert_eq!(BusType::DoubleDecker.to_string(), "double-decker");
/// assert_ne!(BusType::Standard, BusType::Luxury);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusType {
    Standard,
    Comfort,
    Luxury,
    Minibus,
    DoubleDecker,
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusType::Standard => "standard",
            BusType::Comfort => "comfort",
            BusType::Luxury => "luxury",
            BusType::Minibus => "minibus",
            BusType::DoubleDecker => "double-decker",
        };
        f.write_str(name)
    }
}
