// Copyright  (C) 2022, Hove and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Hove (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use crate::{
    models::{Station, Trip},
    time::TimeFilter,
    traffic_data::TrafficData,
};
use std::collections::BTreeMap;

/// Trip counts keyed by station id.
/// A station id absent from the map has a count of zero,
/// looking it up is not an error.
pub struct TrafficCounts<'a> {
    counts: BTreeMap<&'a str, u32>,
}

impl<'a> TrafficCounts<'a> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Counts `trips`, keyed by the station id `key` extracts.
    pub fn from_trips<Trips, Key>(trips: Trips, key: Key) -> Self
    where
        Trips: Iterator<Item = &'a Trip>,
        Key: Fn(&'a Trip) -> &'a str,
    {
        let mut result = Self::new();
        for trip in trips {
            result.increment(key(trip));
        }
        result
    }

    pub fn increment(&mut self, station_id: &'a str) {
        *self.counts.entry(station_id).or_insert(0) += 1;
    }

    pub fn get(&self, station_id: &str) -> u32 {
        self.counts.get(station_id).copied().unwrap_or(0)
    }
}

impl<'a> Default for TrafficCounts<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites the traffic counters of every station from the trips
/// selected by `filter`.
///
/// A trip contributes one departure to the station whose `short_name`
/// is its `start_station_id`, and one arrival to the station whose
/// `short_name` is its `end_station_id`. A trip referencing a station
/// absent from `stations` is counted but never surfaced. The counters
/// are fully overwritten : calling this twice with the same arguments
/// leaves the stations identical.
pub fn compute_station_traffic(
    stations: &mut [Station],
    traffic_data: &TrafficData,
    filter: &TimeFilter,
) {
    let departures = TrafficCounts::from_trips(traffic_data.departures(filter), |trip| {
        trip.start_station_id.as_str()
    });
    let arrivals = TrafficCounts::from_trips(traffic_data.arrivals(filter), |trip| {
        trip.end_station_id.as_str()
    });

    for station in stations.iter_mut() {
        station.departures = departures.get(&station.short_name);
        station.arrivals = arrivals.get(&station.short_name);
        station.total_traffic = station.departures + station.arrivals;
    }
}
