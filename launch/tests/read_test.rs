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

use std::{fs::File, path::PathBuf};

use anyhow::Error;
use heimdall_launch::{
    config::{read_config, LaunchParams},
    heimdall::{read_stations, BadStationCatalog, BadTripPolicy, Station, TrafficDataBuilder},
    read,
};
use rstest::rstest;

fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures/read_test").join(file_name)
}

fn counters(stations: &[Station]) -> Vec<(u32, u32, u32)> {
    stations
        .iter()
        .map(|station| (station.departures, station.arrivals, station.total_traffic))
        .collect()
}

#[rstest]
fn read_builds_a_session_from_the_data_files() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let launch_params = LaunchParams::new(fixture_path("stations.json"), fixture_path("trips.csv"));
    let session = read::read(&launch_params)?;

    assert_eq!(session.traffic_data().nb_of_trips(), 3);
    // trips : A -> B over 08:05-08:20, B -> A over 23:58-00:10,
    // A -> C over 11:40-12:05
    assert_eq!(
        counters(session.stations()),
        vec![(2, 1, 3), (1, 1, 2), (0, 1, 1)]
    );
    assert_eq!(session.radius_scale().max_total_traffic(), 3);

    let names: Vec<Option<&str>> = session
        .stations()
        .iter()
        .map(|station| station.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Albert Docks"), None, Some("City Hall")]);

    Ok(())
}

#[rstest]
fn the_default_policy_aborts_on_the_first_bad_record() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let launch_params = LaunchParams::new(
        fixture_path("stations.json"),
        fixture_path("trips_with_errors.csv"),
    );
    assert_eq!(launch_params.on_bad_trip, BadTripPolicy::Abort);

    let result = read::read_trips_file(&launch_params);
    let err = result.err().expect("loading should have failed");
    assert!(err
        .root_cause()
        .to_string()
        .contains("is not a valid timestamp"));

    Ok(())
}

#[rstest]
fn skipping_bad_records_keeps_the_good_ones() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let file = File::open(fixture_path("trips_with_errors.csv"))?;
    let mut builder = TrafficDataBuilder::new();
    builder.extend_from_csv(file, &BadTripPolicy::SkipAndCount)?;

    assert_eq!(builder.nb_of_skipped_records(), 2);
    let traffic_data = builder.build();
    assert_eq!(traffic_data.nb_of_trips(), 2);

    Ok(())
}

#[rstest]
fn launch_params_can_come_from_a_toml_file() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let launch_params = read_config(&fixture_path("config.toml"))?;
    assert_eq!(launch_params.on_bad_trip, BadTripPolicy::SkipAndCount);
    assert_eq!(launch_params.stations_path, fixture_path("stations.json"));

    let session = read::read(&launch_params)?;
    assert_eq!(session.traffic_data().nb_of_trips(), 3);

    Ok(())
}

#[rstest]
fn duplicate_station_short_names_are_rejected() -> Result<(), Error> {
    let _log_guard = heimdall_launch::logger::init_test_logger();

    let document = r#"{
        "data": {
            "stations": [
                { "short_name": "A", "lon": 2.37, "lat": 48.85 },
                { "short_name": "A", "lon": 2.38, "lat": 48.86 }
            ]
        }
    }"#;
    let result = read_stations(document.as_bytes());
    assert!(matches!(
        result,
        Err(BadStationCatalog::DuplicateShortName(name)) if name == "A"
    ));

    let not_a_catalog = r#"{ "stations": [] }"#;
    assert!(matches!(
        read_stations(not_a_catalog.as_bytes()),
        Err(BadStationCatalog::Json(_))
    ));

    Ok(())
}
