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

use super::TripIdx;
use crate::time::{MinuteOfDay, NB_OF_MINUTES_IN_DAY};

/// A fixed ring of one slot per minute of day.
///
/// `slots[m]` holds the trips whose key minute is `m`,
/// in insertion order. Lookups never allocate : a range
/// query walks the already built slots.
#[derive(Debug)]
pub(super) struct TripsByMinute {
    slots: Vec<Vec<TripIdx>>,
}

impl TripsByMinute {
    pub(super) fn new() -> Self {
        Self {
            slots: vec![Vec::new(); NB_OF_MINUTES_IN_DAY as usize],
        }
    }

    pub(super) fn insert(&mut self, minute: MinuteOfDay, trip_idx: TripIdx) {
        self.slots[usize::from(minute.total_minutes())].push(trip_idx);
    }

    /// All trips in the slots `[from, upto)`, in slot order.
    /// `from <= upto <= NB_OF_MINUTES_IN_DAY` must hold,
    /// there is no wraparound at this level.
    pub(super) fn range(&self, from: u16, upto: u16) -> impl Iterator<Item = TripIdx> + '_ {
        debug_assert!(from <= upto);
        debug_assert!(upto <= NB_OF_MINUTES_IN_DAY);
        self.slots[usize::from(from)..usize::from(upto)]
            .iter()
            .flatten()
            .copied()
    }
}
