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

use heimdall_launch::heimdall::{
    chrono::NaiveDateTime, Station, TrafficData, TrafficDataBuilder, TrafficSession, Trip,
};

/// Builder used to easily create a small fleet with its trip records.
///
/// All trips happen on the same date, only their clock times matter.
/// Stations share a default coordinate, tests care about names and
/// counters, not geography.
pub struct FleetBuilder {
    stations: Vec<Station>,
    traffic_data_builder: TrafficDataBuilder,
}

/// Datetime of the given minute of day, on the fixture date.
pub fn datetime_at(minute_of_day: u16) -> NaiveDateTime {
    let string = format!(
        "2024-03-01 {:02}:{:02}:00",
        minute_of_day / 60,
        minute_of_day % 60
    );
    NaiveDateTime::parse_from_str(&string, "%Y-%m-%d %H:%M:%S").unwrap()
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            traffic_data_builder: TrafficDataBuilder::new(),
        }
    }

    pub fn station(self, short_name: &str) -> Self {
        self.push_station(short_name, None)
    }

    pub fn named_station(self, short_name: &str, name: &str) -> Self {
        self.push_station(short_name, Some(name.to_string()))
    }

    fn push_station(mut self, short_name: &str, name: Option<String>) -> Self {
        self.stations.push(Station {
            short_name: short_name.to_string(),
            name,
            lon: 2.37,
            lat: 48.85,
            departures: 0,
            arrivals: 0,
            total_traffic: 0,
        });
        self
    }

    /// Record a trip between two stations, both ends given
    /// as minutes of day.
    pub fn trip(
        mut self,
        start_station: &str,
        end_station: &str,
        start_minute: u16,
        end_minute: u16,
    ) -> Self {
        self.traffic_data_builder.push(Trip::new(
            start_station.to_string(),
            end_station.to_string(),
            datetime_at(start_minute),
            datetime_at(end_minute),
        ));
        self
    }

    pub fn build(self) -> (Vec<Station>, TrafficData) {
        (self.stations, self.traffic_data_builder.build())
    }

    pub fn build_session(self) -> TrafficSession {
        let (stations, traffic_data) = self.build();
        TrafficSession::new(stations, traffic_data)
    }
}
