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

use std::{
    fmt::{Debug, Display},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Error};
use heimdall::{
    tracing::{info, warn},
    BadTripPolicy,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LaunchParams {
    /// path to the json file describing the stations of the fleet
    pub stations_path: PathBuf,

    /// path to the csv file containing the trip records
    pub trips_path: PathBuf,

    /// what to do with a trip record that cannot be parsed (abort/skip_and_count)
    #[serde(default)]
    pub on_bad_trip: BadTripPolicy,
}

impl LaunchParams {
    pub fn new(stations_path: PathBuf, trips_path: PathBuf) -> Self {
        Self {
            stations_path,
            trips_path,
            on_bad_trip: BadTripPolicy::default(),
        }
    }

    pub fn new_from_env_vars() -> Result<Self, Error> {
        let stations_path = std::env::var("HEIMDALL_STATIONS_PATH")
            .map(PathBuf::from)
            .context("Could not read mandatory env var HEIMDALL_STATIONS_PATH")?;

        let trips_path = std::env::var("HEIMDALL_TRIPS_PATH")
            .map(PathBuf::from)
            .context("Could not read mandatory env var HEIMDALL_TRIPS_PATH")?;

        let on_bad_trip = parse_env_var(
            "HEIMDALL_ON_BAD_TRIP",
            BadTripPolicy::default(),
            BadTripPolicy::from_str,
        );

        Ok(Self {
            stations_path,
            trips_path,
            on_bad_trip,
        })
    }
}

pub fn read_config(config_file_path: &Path) -> Result<LaunchParams, Error> {
    info!("Reading config from file {:?}", &config_file_path);
    let content = fs::read_to_string(config_file_path)
        .with_context(|| format!("Error opening config file {:?}", &config_file_path))?;
    let config: LaunchParams = toml::from_str(&content)?;

    Ok(config)
}

// - var not set -> use default value
// - var set but non-unicode -> warn and use default value
// - var set but not parsable -> warn and use default value
pub fn parse_env_var<T, Parser, ParseErr>(var_name: &str, default_value: T, parser: Parser) -> T
where
    Parser: Fn(&str) -> Result<T, ParseErr>,
    ParseErr: Display,
    T: Debug,
{
    match std::env::var(var_name) {
        Ok(s) => match parser(&s) {
            Ok(val) => val,
            Err(err) => {
                warn!(
                    "Could not parse env var {} : {}. I'll use the default value '{:?}' instead",
                    var_name, err, default_value
                );
                default_value
            }
        },
        Err(std::env::VarError::NotPresent) => default_value,
        Err(std::env::VarError::NotUnicode(err)) => {
            warn!(
                "Badly formed env var {} : {:?}. I'll use the default value {:?} instead",
                var_name, err, default_value
            );
            default_value
        }
    }
}
