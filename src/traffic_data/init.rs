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

use super::{trips_by_minute::TripsByMinute, TrafficData, TripIdx};
use crate::models::Trip;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display, Formatter},
    io,
};
use tracing::{info, warn};

/// What to do with a trip record that cannot be parsed.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadTripPolicy {
    /// Fail the whole load. This is the default.
    Abort,
    /// Log the record, count it, and keep loading.
    SkipAndCount,
}

impl std::str::FromStr for BadTripPolicy {
    type Err = BadTripPolicyConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = match s {
            "abort" => BadTripPolicy::Abort,
            "skip_and_count" => BadTripPolicy::SkipAndCount,
            _ => {
                return Err(BadTripPolicyConfigError {
                    policy_name: s.to_string(),
                })
            }
        };
        Ok(policy)
    }
}

impl Default for BadTripPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

impl Display for BadTripPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BadTripPolicy::Abort => write!(f, "abort"),
            BadTripPolicy::SkipAndCount => write!(f, "skip_and_count"),
        }
    }
}

#[derive(Debug)]
pub struct BadTripPolicyConfigError {
    policy_name: String,
}

impl Display for BadTripPolicyConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bad trip policy : `{}`. Allowed values are 'abort' and 'skip_and_count'.",
            self.policy_name
        )
    }
}

/// Collects trips, then freezes them into a [`TrafficData`].
pub struct TrafficDataBuilder {
    trips: Vec<Trip>,
    nb_of_skipped_records: u64,
}

impl TrafficDataBuilder {
    pub fn new() -> Self {
        Self {
            trips: Vec::new(),
            nb_of_skipped_records: 0,
        }
    }

    pub fn push(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Number of records rejected so far by
    /// [`BadTripPolicy::SkipAndCount`] loads.
    pub fn nb_of_skipped_records(&self) -> u64 {
        self.nb_of_skipped_records
    }

    /// Reads trip records from a csv document with headers.
    ///
    /// The needed columns are `start_station_id`, `end_station_id`,
    /// `started_at` and `ended_at`. Extra columns are ignored,
    /// a missing column fails the whole load whatever the policy.
    pub fn extend_from_csv<R: io::Read>(
        &mut self,
        trips_reader: R,
        on_bad_trip: &BadTripPolicy,
    ) -> Result<(), BadTripsFile> {
        info!("loading trip records");
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .from_reader(trips_reader);
        let columns = TripColumns::from_headers(reader.headers().map_err(BadTripsFile::Csv)?)?;

        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record).map_err(BadTripsFile::Csv)? {
            match parse_record(&record, &columns) {
                Ok(trip) => self.push(trip),
                Err(parse_error) => {
                    let line = reader.position().line();
                    match on_bad_trip {
                        BadTripPolicy::Abort => {
                            return Err(BadTripsFile::BadRecord {
                                line,
                                problem: parse_error,
                            });
                        }
                        BadTripPolicy::SkipAndCount => {
                            warn!(
                                "Error reading trip record at line {} : {}. I'll skip this line.",
                                line, parse_error
                            );
                            self.nb_of_skipped_records += 1;
                        }
                    }
                }
            }
        }
        info!(
            "trip records loaded, {} trips, {} records skipped",
            self.trips.len(),
            self.nb_of_skipped_records
        );
        Ok(())
    }

    /// Freezes the collected trips into both rings.
    pub fn build(self) -> TrafficData {
        let mut departures_by_minute = TripsByMinute::new();
        let mut arrivals_by_minute = TripsByMinute::new();
        for (idx, trip) in self.trips.iter().enumerate() {
            let trip_idx = TripIdx { idx };
            departures_by_minute.insert(trip.start_minute(), trip_idx);
            arrivals_by_minute.insert(trip.end_minute(), trip_idx);
        }
        TrafficData {
            trips: self.trips,
            departures_by_minute,
            arrivals_by_minute,
        }
    }
}

impl Default for TrafficDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions of the needed columns in the csv header.
struct TripColumns {
    start_station_id: usize,
    end_station_id: usize,
    started_at: usize,
    ended_at: usize,
}

impl TripColumns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, BadTripsFile> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(BadTripsFile::MissingColumn(name))
        };
        Ok(Self {
            start_station_id: position("start_station_id")?,
            end_station_id: position("end_station_id")?,
            started_at: position("started_at")?,
            ended_at: position("ended_at")?,
        })
    }
}

fn parse_record(record: &csv::StringRecord, columns: &TripColumns) -> Result<Trip, BadTripRecord> {
    let field = |column: usize, name: &'static str| {
        record.get(column).ok_or(BadTripRecord::MissingField(name))
    };
    let start_station_id = field(columns.start_station_id, "start_station_id")?;
    let end_station_id = field(columns.end_station_id, "end_station_id")?;
    let started_at = field(columns.started_at, "started_at")?;
    let ended_at = field(columns.ended_at, "ended_at")?;

    let start_time = parse_timestamp(started_at)
        .ok_or_else(|| BadTripRecord::InvalidStartTime(started_at.to_string()))?;
    let end_time = parse_timestamp(ended_at)
        .ok_or_else(|| BadTripRecord::InvalidEndTime(ended_at.to_string()))?;

    Ok(Trip::new(
        start_station_id.to_string(),
        end_station_id.to_string(),
        start_time,
        end_time,
    ))
}

/// Bike share exports write their timestamps either as
/// "2024-03-01 08:30:12" or "2024-03-01T08:30:12", sometimes with
/// fractional seconds. Both shapes are accepted.
fn parse_timestamp(string: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(string, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(string, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// A single trip record that cannot be turned into a [`Trip`].
#[derive(PartialEq, Eq)]
pub enum BadTripRecord {
    MissingField(&'static str),
    InvalidStartTime(String),
    InvalidEndTime(String),
}

impl std::error::Error for BadTripRecord {}

impl Display for BadTripRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Debug for BadTripRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BadTripRecord::MissingField(name) => {
                write!(f, "The field '{}' is missing.", name)
            }
            BadTripRecord::InvalidStartTime(string) => {
                write!(f, "The start time '{}' is not a valid timestamp.", string)
            }
            BadTripRecord::InvalidEndTime(string) => {
                write!(f, "The end time '{}' is not a valid timestamp.", string)
            }
        }
    }
}

pub enum BadTripsFile {
    Csv(csv::Error),
    MissingColumn(&'static str),
    BadRecord { line: u64, problem: BadTripRecord },
}

impl std::error::Error for BadTripsFile {}

impl Display for BadTripsFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Debug for BadTripsFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BadTripsFile::Csv(err) => {
                write!(f, "The trips document is not valid csv : {}", err)
            }
            BadTripsFile::MissingColumn(name) => {
                write!(f, "The trips document has no '{}' column.", name)
            }
            BadTripsFile::BadRecord { line, problem } => {
                write!(f, "Bad trip record at line {} : {}", line, problem)
            }
        }
    }
}
