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

use crate::time::MinuteOfDay;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{Debug, Display, Formatter},
    io,
};

/// A dock station of the fleet.
///
/// `short_name` is the identifier trips refer to, and must be unique
/// within a catalog. The three traffic counters are rewritten from
/// scratch by every aggregation pass, never accumulated across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub short_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub departures: u32,
    #[serde(default)]
    pub arrivals: u32,
    #[serde(default)]
    pub total_traffic: u32,
}

impl Station {
    /// One line report for a station, e.g.
    /// "128 trips (90 departures, 38 arrivals)".
    pub fn traffic_summary(&self) -> String {
        format!(
            "{} trips ({} departures, {} arrivals)",
            self.total_traffic, self.departures, self.arrivals
        )
    }
}

/// One trip between two stations.
/// The minute of day of each end is computed once, at construction,
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    start_minute: MinuteOfDay,
    end_minute: MinuteOfDay,
}

impl Trip {
    pub fn new(
        start_station_id: String,
        end_station_id: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        let start_minute = MinuteOfDay::from_datetime(&start_time);
        let end_minute = MinuteOfDay::from_datetime(&end_time);
        Self {
            start_station_id,
            end_station_id,
            start_time,
            end_time,
            start_minute,
            end_minute,
        }
    }

    pub fn start_minute(&self) -> MinuteOfDay {
        self.start_minute
    }

    pub fn end_minute(&self) -> MinuteOfDay {
        self.end_minute
    }
}

#[derive(Debug, Deserialize)]
struct StationsFile {
    data: StationsData,
}

#[derive(Debug, Deserialize)]
struct StationsData {
    stations: Vec<Station>,
}

/// Reads a station catalog from the station information feed,
/// a json document shaped `{ "data": { "stations": [..] } }`.
/// Unknown fields on stations are ignored, a missing `short_name`,
/// `lon` or `lat` makes the whole catalog invalid.
pub fn read_stations<R: io::Read>(reader: R) -> Result<Vec<Station>, BadStationCatalog> {
    let file: StationsFile = serde_json::from_reader(reader).map_err(BadStationCatalog::Json)?;
    let stations = file.data.stations;
    {
        let mut seen = BTreeSet::new();
        for station in &stations {
            if !seen.insert(station.short_name.as_str()) {
                return Err(BadStationCatalog::DuplicateShortName(
                    station.short_name.clone(),
                ));
            }
        }
    }
    Ok(stations)
}

pub enum BadStationCatalog {
    Json(serde_json::Error),
    DuplicateShortName(String),
}

impl std::error::Error for BadStationCatalog {}

impl Display for BadStationCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Debug for BadStationCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BadStationCatalog::Json(err) => {
                write!(f, "Bad station catalog. The json document is invalid : {}", err)
            }
            BadStationCatalog::DuplicateShortName(short_name) => {
                write!(
                    f,
                    "Bad station catalog. The short_name '{}' appears more than once.",
                    short_name
                )
            }
        }
    }
}
