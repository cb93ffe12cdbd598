use std::{fmt::Display, path::PathBuf, time::SystemTime};

use anyhow::{bail, Error};
use heimdall_launch::{
    config::{self, LaunchParams},
    heimdall::{tracing::info, BadTripPolicy, TimeFilter},
    read, timer,
};
use structopt::StructOpt;

pub mod traffic_report;

const DEFAULT_ON_BAD_TRIP: &str = "abort";
const DEFAULT_NB_OF_STATIONS: &str = "10";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "heimdall_cli",
    about = "Compute per station traffic statistics from the command line.",
    rename_all = "snake_case"
)]
pub struct Options {
    /// path to a toml file containing the launch params
    /// If given, the stations/trips options below are ignored
    #[structopt(long)]
    pub config: Option<PathBuf>,

    /// path to the json file describing the stations of the fleet
    #[structopt(short = "s", long = "stations")]
    pub stations_path: Option<PathBuf>,

    /// path to the csv file containing the trip records
    #[structopt(short = "t", long = "trips")]
    pub trips_path: Option<PathBuf>,

    /// what to do with a trip record that cannot be parsed (abort/skip_and_count)
    #[structopt(long, default_value = DEFAULT_ON_BAD_TRIP)]
    pub on_bad_trip: BadTripPolicy,

    /// time filter to report traffic for : 'any', -1,
    /// or a minute of day between 0 and 1439.
    /// May be given several times, the filters are applied in turn
    #[structopt(long = "at")]
    pub filters: Vec<TimeFilter>,

    /// number of stations shown in each report
    #[structopt(long, default_value = DEFAULT_NB_OF_STATIONS)]
    pub nb_of_stations: usize,

    /// write the stations of the last report to this json file
    #[structopt(short = "o", long = "output")]
    pub output_path: Option<PathBuf>,
}

impl Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(config) = &self.config {
            write!(f, "--config {:?} ", config)?;
        }
        if let Some(stations_path) = &self.stations_path {
            write!(f, "--stations {:?} ", stations_path)?;
        }
        if let Some(trips_path) = &self.trips_path {
            write!(f, "--trips {:?} ", trips_path)?;
        }
        for filter in &self.filters {
            write!(f, "--at {} ", filter.control_value())?;
        }
        if let Some(output_path) = &self.output_path {
            write!(f, "--output {:?} ", output_path)?;
        }
        write!(
            f,
            "--on_bad_trip {} --nb_of_stations {}",
            self.on_bad_trip, self.nb_of_stations
        )
    }
}

impl Options {
    pub fn launch_params(&self) -> Result<LaunchParams, Error> {
        if let Some(config_path) = &self.config {
            return config::read_config(config_path);
        }
        match (&self.stations_path, &self.trips_path) {
            (Some(stations_path), Some(trips_path)) => {
                let mut launch_params =
                    LaunchParams::new(stations_path.clone(), trips_path.clone());
                launch_params.on_bad_trip = self.on_bad_trip;
                Ok(launch_params)
            }
            (None, None) => LaunchParams::new_from_env_vars(),
            _ => {
                bail!("Bad options. Provide either --config, or both --stations and --trips, or neither (env vars are used then).")
            }
        }
    }
}

pub fn run() -> Result<(), Error> {
    let options = Options::from_args();
    info!("Launched with options : {}", options);

    let launch_params = options.launch_params()?;
    let mut session = read(&launch_params)?;

    if options.filters.is_empty() {
        traffic_report::log_report(&session, options.nb_of_stations);
    }
    for filter in &options.filters {
        let filter_timer = SystemTime::now();
        session.apply_filter(filter);
        info!("Traffic aggregated in {}", timer::duration_since(filter_timer));
        traffic_report::log_report(&session, options.nb_of_stations);
    }

    if let Some(output_path) = &options.output_path {
        traffic_report::write_json(&session, output_path)?;
    }

    Ok(())
}
