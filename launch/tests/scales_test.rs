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

mod utils;

use anyhow::Error;
use heimdall_launch::heimdall::{compute_station_traffic, flow_level, RadiusScale, TimeFilter};
use rstest::rstest;
use utils::fleet_builder::FleetBuilder;

fn around(center: i32) -> TimeFilter {
    TimeFilter::from_control_value(center).unwrap()
}

// eight self trips give station A a total traffic of 16,
// a perfect square, so the expected radii below are exact
fn sixteen_trips_fleet() -> FleetBuilder {
    let mut builder = FleetBuilder::new().station("A").station("B");
    for offset in 0..8 {
        builder = builder.trip("A", "A", 600 + offset, 600 + offset);
    }
    builder
}

#[rstest]
fn radius_interpolates_on_the_square_root_of_traffic() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let (mut stations, traffic_data) = sixteen_trips_fleet().build();
    compute_station_traffic(&mut stations, &traffic_data, &TimeFilter::AnyTime);

    let scale = RadiusScale::new(&stations);
    assert_eq!(scale.max_total_traffic(), 16);

    assert_eq!(scale.radius(16, &TimeFilter::AnyTime), 25.0);
    assert_eq!(scale.radius(4, &TimeFilter::AnyTime), 12.5);
    assert_eq!(scale.radius(0, &TimeFilter::AnyTime), 0.0);

    // a time filter switches the output range to [3, 50]
    assert_eq!(scale.radius(16, &around(600)), 50.0);
    assert_eq!(scale.radius(4, &around(600)), 26.5);
    assert_eq!(scale.radius(0, &around(600)), 3.0);

    Ok(())
}

#[rstest]
fn an_empty_domain_maps_everything_to_the_low_end() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let (mut stations, traffic_data) = FleetBuilder::new().station("A").station("B").build();
    compute_station_traffic(&mut stations, &traffic_data, &TimeFilter::AnyTime);

    let scale = RadiusScale::new(&stations);
    assert_eq!(scale.max_total_traffic(), 0);

    assert_eq!(scale.radius(0, &TimeFilter::AnyTime), 0.0);
    assert_eq!(scale.radius(7, &TimeFilter::AnyTime), 0.0);
    assert_eq!(scale.radius(0, &around(0)), 3.0);
    assert_eq!(scale.radius(7, &around(0)), 3.0);

    Ok(())
}

#[rstest]
fn the_radius_domain_is_fixed_by_the_unfiltered_aggregation() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let mut session = sixteen_trips_fleet()
        .trip("B", "B", 100, 100)
        .trip("B", "B", 101, 101)
        .build_session();

    assert_eq!(session.radius_scale().max_total_traffic(), 16);
    assert_eq!(session.radius(16), 25.0);

    // inside the window around 100, the busiest station carries
    // a total traffic of 4, but the domain keeps its unfiltered
    // maximum of 16
    session.apply_filter(&around(100));
    assert_eq!(session.radius_scale().max_total_traffic(), 16);
    assert_eq!(session.radius(4), 26.5);

    Ok(())
}

#[rstest]
fn flow_level_quantizes_the_departure_share() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    // no traffic reads as 0 rather than an undefined ratio
    assert_eq!(flow_level(0, 0), 0.0);

    assert_eq!(flow_level(0, 4), 0.0);
    assert_eq!(flow_level(1, 4), 0.0);
    assert_eq!(flow_level(2, 4), 0.5);
    assert_eq!(flow_level(3, 4), 1.0);
    assert_eq!(flow_level(4, 4), 1.0);

    // a share sitting exactly on a threshold lands in the upper level
    assert_eq!(flow_level(1, 3), 0.5);
    assert_eq!(flow_level(2, 3), 1.0);

    Ok(())
}
