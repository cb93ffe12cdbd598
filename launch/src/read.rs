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

use std::{fs::File, io::BufReader, path::Path, time::SystemTime};

use crate::{config::LaunchParams, timer};
use anyhow::{Context, Error};
use heimdall::{
    read_stations, tracing::info, Station, TrafficData, TrafficDataBuilder, TrafficSession,
};

pub fn read(launch_params: &LaunchParams) -> Result<TrafficSession, Error> {
    let stations = read_stations_file(&launch_params.stations_path)?;
    let traffic_data = read_trips_file(launch_params)?;

    let session_timer = SystemTime::now();
    let session = TrafficSession::new(stations, traffic_data);
    info!(
        "Initial aggregation done in {}",
        timer::duration_since(session_timer)
    );
    info!(
        "Largest total traffic over all stations : {}",
        session.radius_scale().max_total_traffic()
    );

    Ok(session)
}

pub fn read_stations_file(stations_path: &Path) -> Result<Vec<Station>, Error> {
    info!("Reading stations from file {:?}", stations_path);
    let file = File::open(stations_path)
        .with_context(|| format!("Error opening stations file {:?}", stations_path))?;
    let stations = read_stations(BufReader::new(file))
        .with_context(|| format!("Error reading stations file {:?}", stations_path))?;
    info!("Number of stations : {}", stations.len());

    Ok(stations)
}

pub fn read_trips_file(launch_params: &LaunchParams) -> Result<TrafficData, Error> {
    let trips_path = &launch_params.trips_path;
    info!("Reading trip records from file {:?}", trips_path);
    let file = File::open(trips_path)
        .with_context(|| format!("Error opening trips file {:?}", trips_path))?;

    let read_timer = SystemTime::now();
    let mut builder = TrafficDataBuilder::new();
    builder
        .extend_from_csv(BufReader::new(file), &launch_params.on_bad_trip)
        .with_context(|| format!("Error reading trips file {:?}", trips_path))?;
    if builder.nb_of_skipped_records() > 0 {
        info!(
            "Number of skipped trip records : {}",
            builder.nb_of_skipped_records()
        );
    }
    let traffic_data = builder.build();
    info!(
        "Number of trips : {}, loaded in {}",
        traffic_data.nb_of_trips(),
        timer::duration_since(read_timer)
    );

    Ok(traffic_data)
}
