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

//! heimdall computes per station traffic statistics for a fleet of
//! bike share stations : how many trips depart from and arrive at
//! each station, over the whole dataset or restricted to a time of
//! day window that may wrap around midnight.
//!
//! Trips are ingested once, bucketed by minute of day into
//! [`traffic_data::TrafficData`], then queried repeatedly through a
//! [`session::TrafficSession`] which annotates the stations and
//! exposes the two scale contracts a renderer consumes.

pub mod models;
pub mod scales;
pub mod session;
pub mod time;
pub mod traffic;
pub mod traffic_data;

pub use chrono;
pub use tracing;

pub use models::{read_stations, BadStationCatalog, Station, Trip};
pub use scales::{flow_level, RadiusScale};
pub use session::TrafficSession;
pub use time::{BadTimeFilter, MinuteOfDay, TimeFilter};
pub use traffic::{compute_station_traffic, TrafficCounts};
pub use traffic_data::{BadTripPolicy, TrafficData, TrafficDataBuilder};
