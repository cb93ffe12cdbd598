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

use crate::{models::Station, time::TimeFilter};

/// Pixel ranges handed to the renderer. The windowed range starts
/// above zero so that stations with little traffic in the window
/// remain visible.
const ANY_TIME_RADIUS_RANGE: (f64, f64) = (0.0, 25.0);
const WINDOWED_RADIUS_RANGE: (f64, f64) = (3.0, 50.0);

/// Maps a station total traffic to a circle radius, in pixels.
///
/// The mapping interpolates on the square root of the input, so that
/// circle areas grow linearly with traffic. Its domain is
/// `[0, max_total_traffic]` where `max_total_traffic` comes from the
/// unfiltered aggregation, once, at construction. Applying a time
/// filter switches the output range, never the domain.
#[derive(Debug, Clone, Copy)]
pub struct RadiusScale {
    max_total_traffic: u32,
}

impl RadiusScale {
    /// `stations` must carry the counters of the unfiltered
    /// aggregation, so that the domain covers every later query.
    pub fn new(stations: &[Station]) -> Self {
        let max_total_traffic = stations
            .iter()
            .map(|station| station.total_traffic)
            .max()
            .unwrap_or(0);
        Self { max_total_traffic }
    }

    pub fn max_total_traffic(&self) -> u32 {
        self.max_total_traffic
    }

    /// Radius for `total_traffic` under `filter`.
    /// An empty domain maps every input to the low end of the range.
    pub fn radius(&self, total_traffic: u32, filter: &TimeFilter) -> f64 {
        let (low, high) = match filter {
            TimeFilter::AnyTime => ANY_TIME_RADIUS_RANGE,
            TimeFilter::Around(_) => WINDOWED_RADIUS_RANGE,
        };
        if self.max_total_traffic == 0 {
            return low;
        }
        let ratio = f64::from(total_traffic).sqrt() / f64::from(self.max_total_traffic).sqrt();
        low + (high - low) * ratio
    }
}

/// Departure share of a station traffic, quantized to three levels :
/// 0.0 (mostly arrivals), 0.5 (balanced), 1.0 (mostly departures).
/// The thresholds sit at one third and two thirds of the ratio.
/// A station with no traffic at all reads as 0.0 rather than
/// propagating an undefined ratio.
pub fn flow_level(departures: u32, total_traffic: u32) -> f64 {
    if total_traffic == 0 {
        return 0.0;
    }
    let ratio = f64::from(departures) / f64::from(total_traffic);
    if ratio < 1.0 / 3.0 {
        0.0
    } else if ratio < 2.0 / 3.0 {
        0.5
    } else {
        1.0
    }
}
