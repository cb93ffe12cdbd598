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

pub mod init;
mod queries;
mod trips_by_minute;

pub use init::{BadTripPolicy, BadTripRecord, BadTripsFile, TrafficDataBuilder};
pub use queries::WINDOW_HALF_WIDTH;

use crate::{models::Trip, time::TimeFilter};
use trips_by_minute::TripsByMinute;

/// Identifies a trip inside [`TrafficData`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TripIdx {
    idx: usize,
}

/// The trip set, indexed by minute of day.
///
/// The slot `m` of `departures_by_minute` holds the trips whose start
/// minute is `m`, the slot `m` of `arrivals_by_minute` those whose end
/// minute is `m`. Every trip appears in exactly one slot of each ring.
/// Built once by [`TrafficDataBuilder`], read only afterwards.
pub struct TrafficData {
    trips: Vec<Trip>,
    departures_by_minute: TripsByMinute,
    arrivals_by_minute: TripsByMinute,
}

impl TrafficData {
    pub fn nb_of_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn trip(&self, trip_idx: &TripIdx) -> &Trip {
        &self.trips[trip_idx.idx]
    }

    /// Trips whose start minute falls within `filter`, in slot order.
    pub fn departures<'a>(&'a self, filter: &TimeFilter) -> impl Iterator<Item = &'a Trip> + 'a {
        queries::filter_by_minute(&self.departures_by_minute, filter)
            .map(move |trip_idx| self.trip(&trip_idx))
    }

    /// Trips whose end minute falls within `filter`, in slot order.
    pub fn arrivals<'a>(&'a self, filter: &TimeFilter) -> impl Iterator<Item = &'a Trip> + 'a {
        queries::filter_by_minute(&self.arrivals_by_minute, filter)
            .map(move |trip_idx| self.trip(&trip_idx))
    }
}
