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
    models::Station,
    scales::{self, RadiusScale},
    time::{BadTimeFilter, TimeFilter},
    traffic::compute_station_traffic,
    traffic_data::TrafficData,
};
use tracing::info;

/// Holds a loaded fleet and answers the traffic queries of one
/// interactive consumer.
///
/// The session is a two state machine driven by the control value of
/// the time slider : unfiltered ([`TimeFilter::AnyTime`]) or windowed
/// ([`TimeFilter::Around`]). Every accepted transition re-runs the
/// full aggregation over the stations. The radius scale domain is
/// fixed at construction, from the unfiltered counters, and never
/// changes afterwards.
pub struct TrafficSession {
    stations: Vec<Station>,
    traffic_data: TrafficData,
    radius_scale: RadiusScale,
    current_filter: TimeFilter,
}

impl TrafficSession {
    /// Runs the initial unfiltered aggregation, which also fixes
    /// the radius scale domain.
    pub fn new(mut stations: Vec<Station>, traffic_data: TrafficData) -> Self {
        compute_station_traffic(&mut stations, &traffic_data, &TimeFilter::AnyTime);
        let radius_scale = RadiusScale::new(&stations);
        Self {
            stations,
            traffic_data,
            radius_scale,
            current_filter: TimeFilter::AnyTime,
        }
    }

    /// Applies the raw value of the external time control.
    /// An out of bound value is rejected before anything is touched :
    /// the previous annotations and filter remain as they were.
    pub fn apply_control_value(&mut self, value: i32) -> Result<(), BadTimeFilter> {
        let filter = TimeFilter::from_control_value(value)?;
        self.apply_filter(&filter);
        Ok(())
    }

    pub fn apply_filter(&mut self, filter: &TimeFilter) {
        info!("applying time filter : {}", filter);
        compute_station_traffic(&mut self.stations, &self.traffic_data, filter);
        self.current_filter = *filter;
    }

    pub fn current_filter(&self) -> &TimeFilter {
        &self.current_filter
    }

    /// The stations, annotated for the current filter.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn traffic_data(&self) -> &TrafficData {
        &self.traffic_data
    }

    pub fn radius_scale(&self) -> &RadiusScale {
        &self.radius_scale
    }

    /// Circle radius for `total_traffic` under the current filter.
    pub fn radius(&self, total_traffic: u32) -> f64 {
        self.radius_scale
            .radius(total_traffic, &self.current_filter)
    }

    /// Flow level of a station from its current counters.
    pub fn flow_level(&self, departures: u32, total_traffic: u32) -> f64 {
        scales::flow_level(departures, total_traffic)
    }
}
