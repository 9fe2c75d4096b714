//! Whole-station transforms.
//!
//! Each transform returns a new station built from the input's trips,
//! leaving the original untouched. Tickets are never carried over: a
//! transformed station is a view over the timetable, not a resale of
//! the issued tickets.

use crate::domain::{BusType, Trip};

use super::Station;

/// Returns a new station with the trips sorted by arrival time, ascending.
pub fn sort_by_arrival(station: &Station) -> Station {
    let mut trips = station.trips().to_vec();
    trips.sort_by_key(|t| t.arrival_time());
    from_trips(trips)
}

/// Returns a new station with the trips sorted by price, descending.
pub fn sort_by_price_desc(station: &Station) -> Station {
    let mut trips = station.trips().to_vec();
    trips.sort_by(|a, b| b.price().total_cmp(&a.price()));
    from_trips(trips)
}

/// Returns a new station holding `a`'s trips followed by `b`'s.
///
/// Tickets are not merged; duplicate trip ids are not deduplicated.
pub fn merge_stations(a: &Station, b: &Station) -> Station {
    let mut trips = a.trips().to_vec();
    trips.extend_from_slice(b.trips());
    from_trips(trips)
}

/// Returns a new station without the trips of the given bus category.
pub fn exclude_bus_type(station: &Station, bus_type: BusType) -> Station {
    let trips = station
        .trips()
        .iter()
        .filter(|t| t.bus_type() != bus_type)
        .cloned()
        .collect();
    from_trips(trips)
}

/// Returns a new station with every trip's price multiplied by `factor`.
///
/// Trip ids and schedules are preserved; only prices change.
pub fn scale_prices(station: &Station, factor: f64) -> Station {
    let trips = station
        .trips()
        .iter()
        .map(|t| t.with_price(t.price() * factor))
        .collect();
    from_trips(trips)
}

/// Returns true if the station has no trips.
pub fn is_empty_station(station: &Station) -> bool {
    station.trips().is_empty()
}

fn from_trips(trips: Vec<Trip>) -> Station {
    let mut station = Station::new();
    for trip in trips {
        station.add_trip(trip);
    }
    station
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ticket, TicketBuilder, TicketId, Trip, TripBuilder, TripId};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn make_trip(id: u32, price: f64, arrival_hour: u32, bus_type: BusType) -> Trip {
        let mut builder = TripBuilder::new(TripId(id));
        builder.departure_point = "Москва".into();
        builder.destination = "Казань".into();
        builder.departure_time = at(6);
        builder.arrival_time = at(arrival_hour);
        builder.bus_type = bus_type;
        builder.price = price;
        builder.build().unwrap()
    }

    fn make_ticket(trip: Trip) -> Ticket {
        let mut builder = TicketBuilder::new(TicketId(1));
        builder.trip = Some(Arc::new(trip));
        builder.passenger_name = "Иван".into();
        builder.passenger_document = "1234".into();
        builder.seat_number = 1;
        builder.build().unwrap()
    }

    fn sample_station() -> Station {
        let mut station = Station::new();
        station.add_trip(make_trip(1, 1500.0, 18, BusType::Comfort));
        station.add_trip(make_trip(2, 2500.0, 16, BusType::Luxury));
        station.add_trip(make_trip(3, 1200.0, 22, BusType::Standard));
        station
    }

    #[test]
    fn sort_by_arrival_ascending() {
        let station = sample_station();
        let sorted = sort_by_arrival(&station);

        let ids: Vec<u32> = sorted.trips().iter().map(|t| t.id().0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        // original order intact
        let original: Vec<u32> = station.trips().iter().map(|t| t.id().0).collect();
        assert_eq!(original, vec![1, 2, 3]);
    }

    #[test]
    fn sort_by_price_descending() {
        let sorted = sort_by_price_desc(&sample_station());
        let prices: Vec<f64> = sorted.trips().iter().map(|t| t.price()).collect();
        assert_eq!(prices, vec![2500.0, 1500.0, 1200.0]);
    }

    #[test]
    fn merge_concatenates_trips_only() {
        let mut a = Station::new();
        a.add_trip(make_trip(1, 1000.0, 12, BusType::Standard));
        a.add_trip(make_trip(2, 1100.0, 13, BusType::Standard));
        assert!(a.add_ticket(make_ticket(a.trips()[0].clone())));

        let mut b = Station::new();
        b.add_trip(make_trip(3, 1200.0, 14, BusType::Standard));
        b.add_trip(make_trip(4, 1300.0, 15, BusType::Standard));
        b.add_trip(make_trip(5, 1400.0, 16, BusType::Standard));

        let merged = merge_stations(&a, &b);
        let ids: Vec<u32> = merged.trips().iter().map(|t| t.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(merged.tickets().is_empty());
        // inputs untouched
        assert_eq!(a.trips().len(), 2);
        assert_eq!(a.tickets().len(), 1);
        assert_eq!(b.trips().len(), 3);
    }

    #[test]
    fn exclude_removes_only_that_category() {
        let filtered = exclude_bus_type(&sample_station(), BusType::Luxury);
        let ids: Vec<u32> = filtered.trips().iter().map(|t| t.id().0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn exclude_absent_category_changes_nothing() {
        let filtered = exclude_bus_type(&sample_station(), BusType::Minibus);
        assert_eq!(filtered.trips().len(), 3);
    }

    #[test]
    fn scale_prices_doubles_and_preserves_identity() {
        let station = sample_station();
        let scaled = scale_prices(&station, 2.0);

        for (original, scaled) in station.trips().iter().zip(scaled.trips()) {
            assert_eq!(scaled.price(), original.price() * 2.0);
            assert_eq!(scaled.id(), original.id());
            assert_eq!(scaled.departure_point(), original.departure_point());
            assert_eq!(scaled.destination(), original.destination());
        }
        // original prices unchanged
        assert_eq!(station.trips()[0].price(), 1500.0);
    }

    #[test]
    fn is_empty_station_checks_trips() {
        assert!(is_empty_station(&Station::new()));
        assert!(!is_empty_station(&sample_station()));
    }
}
