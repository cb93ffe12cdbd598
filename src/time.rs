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

use chrono::{NaiveDateTime, Timelike};
use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

pub const NB_OF_MINUTES_IN_DAY: u16 = 24 * 60;

/// A clock time of day, with minute resolution.
/// This type accepts only times comprised between
/// 00:00 (midnight, value 0) and 23:59 (value 1439).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct MinuteOfDay {
    minutes: u16,
}

impl MinuteOfDay {
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= NB_OF_MINUTES_IN_DAY {
            None
        } else {
            Some(Self { minutes })
        }
    }

    /// Total : every datetime reduces to a minute of day,
    /// whatever its date.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        let minutes = datetime.hour() * 60 + datetime.minute();
        // the cast is safe since hour() <= 23 and minute() <= 59
        // so minutes <= 1439, which fits into an u16
        Self {
            minutes: minutes as u16,
        }
    }

    pub fn total_minutes(self) -> u16 {
        self.minutes
    }
}

/// Displays as a 12-hour clock label, the way
/// the time window is echoed to users ("8:30 AM", "12:05 PM").
impl Display for MinuteOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hour = self.minutes / 60;
        let minute = self.minutes % 60;
        let (hour_12, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour_12, minute, meridiem)
    }
}

/// The time restriction applied to traffic queries.
/// `AnyTime` means the whole dataset, `Around(t)` restricts
/// to trips departing/arriving within the window centered on `t`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TimeFilter {
    AnyTime,
    Around(MinuteOfDay),
}

/// On the wire, the filter is a single integer :
/// -1 for "no filter", or a minute of day in [0, 1439].
pub const ANY_TIME_CONTROL_VALUE: i32 = -1;

impl TimeFilter {
    pub fn from_control_value(value: i32) -> Result<Self, BadTimeFilter> {
        if value == ANY_TIME_CONTROL_VALUE {
            return Ok(TimeFilter::AnyTime);
        }
        u16::try_from(value)
            .ok()
            .and_then(MinuteOfDay::from_minutes)
            .map(TimeFilter::Around)
            .ok_or(BadTimeFilter::OutOfBound(value))
    }

    pub fn control_value(&self) -> i32 {
        match self {
            TimeFilter::AnyTime => ANY_TIME_CONTROL_VALUE,
            TimeFilter::Around(minute) => i32::from(minute.total_minutes()),
        }
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFilter::AnyTime => write!(f, "any time"),
            TimeFilter::Around(minute) => write!(f, "around {}", minute),
        }
    }
}

impl FromStr for TimeFilter {
    type Err = BadTimeFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(TimeFilter::AnyTime);
        }
        let value = trimmed
            .parse::<i32>()
            .map_err(|_| BadTimeFilter::UnparseableValue(s.to_string()))?;
        TimeFilter::from_control_value(value)
    }
}

pub enum BadTimeFilter {
    OutOfBound(i32),
    UnparseableValue(String),
}

impl std::error::Error for BadTimeFilter {}

impl Display for BadTimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

impl Debug for BadTimeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BadTimeFilter::OutOfBound(value) => {
                write!(
                    f,
                    "Bad time filter value {}. Allowed values are -1 (no filter) \
                    or a minute of day between 0 and 1439.",
                    value
                )
            }
            BadTimeFilter::UnparseableValue(string) => {
                write!(
                    f,
                    "Bad time filter '{}'. Expected 'any', -1, \
                    or a minute of day between 0 and 1439.",
                    string
                )
            }
        }
    }
}
