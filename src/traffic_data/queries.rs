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

use super::{trips_by_minute::TripsByMinute, TripIdx};
use crate::time::{TimeFilter, NB_OF_MINUTES_IN_DAY};

/// Half width of the time window, in minutes.
/// `TimeFilter::Around(center)` selects the minutes
/// `[center - WINDOW_HALF_WIDTH, center + WINDOW_HALF_WIDTH)`,
/// modulo a day.
pub const WINDOW_HALF_WIDTH: u16 = 60;

/// Selects the slots of `ring` that fall inside `filter`.
///
/// The window is closed on its lower bound and open on its upper
/// bound : a trip at exactly `center - 60` is selected, a trip at
/// exactly `center + 60` is not. When the window straddles midnight
/// it is split in two ranges, one at each end of the day.
// TODO : check with product whether the open upper bound is wanted,
// a trip at center + 60 is excluded while center - 60 is included.
pub(super) fn filter_by_minute<'a>(
    ring: &'a TripsByMinute,
    filter: &TimeFilter,
) -> impl Iterator<Item = TripIdx> + 'a {
    let (first, second) = match filter {
        TimeFilter::AnyTime => ((0, NB_OF_MINUTES_IN_DAY), (0, 0)),
        TimeFilter::Around(center) => {
            // the window is strictly narrower than a day, so
            //  - adding NB_OF_MINUTES_IN_DAY below cannot underflow
            //  - min_minute == max_minute cannot happen
            static_assertions::const_assert!(2 * WINDOW_HALF_WIDTH < NB_OF_MINUTES_IN_DAY);
            let center = center.total_minutes();
            let min_minute =
                (center + NB_OF_MINUTES_IN_DAY - WINDOW_HALF_WIDTH) % NB_OF_MINUTES_IN_DAY;
            let max_minute = (center + WINDOW_HALF_WIDTH) % NB_OF_MINUTES_IN_DAY;
            if min_minute <= max_minute {
                ((min_minute, max_minute), (0, 0))
            } else {
                // the window straddles midnight
                ((min_minute, NB_OF_MINUTES_IN_DAY), (0, max_minute))
            }
        }
    };
    ring.range(first.0, first.1).chain(ring.range(second.0, second.1))
}
