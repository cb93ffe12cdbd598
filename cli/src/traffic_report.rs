use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Error};
use heimdall_launch::heimdall::{tracing::info, Station, TrafficSession};
use serde::Serialize;

// stations ranked by decreasing total traffic, ties broken by short name
fn ranked_stations(session: &TrafficSession) -> Vec<&Station> {
    let mut stations: Vec<&Station> = session.stations().iter().collect();
    stations.sort_by(|lhs, rhs| {
        rhs.total_traffic
            .cmp(&lhs.total_traffic)
            .then_with(|| lhs.short_name.cmp(&rhs.short_name))
    });
    stations
}

pub fn log_report(session: &TrafficSession, nb_of_stations: usize) {
    info!("Traffic report ({})", session.current_filter());
    for station in ranked_stations(session).iter().take(nb_of_stations) {
        let label = station.name.as_deref().unwrap_or(&station.short_name);
        info!(
            "{} : {}, radius {:.1}, flow {:.1}",
            label,
            station.traffic_summary(),
            session.radius(station.total_traffic),
            session.flow_level(station.departures, station.total_traffic),
        );
    }
}

#[derive(Debug, Serialize)]
struct TrafficPayload<'a> {
    time_filter: i32,
    max_total_traffic: u32,
    stations: Vec<StationPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct StationPayload<'a> {
    #[serde(flatten)]
    station: &'a Station,
    radius: f64,
    flow_level: f64,
}

pub fn write_json(session: &TrafficSession, output_path: &Path) -> Result<(), Error> {
    let payload = TrafficPayload {
        time_filter: session.current_filter().control_value(),
        max_total_traffic: session.radius_scale().max_total_traffic(),
        stations: ranked_stations(session)
            .into_iter()
            .map(|station| StationPayload {
                station,
                radius: session.radius(station.total_traffic),
                flow_level: session.flow_level(station.departures, station.total_traffic),
            })
            .collect(),
    };

    let file = File::create(output_path)
        .with_context(|| format!("Error creating output file {:?}", output_path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &payload)
        .with_context(|| format!("Error writing traffic report to {:?}", output_path))?;
    info!("Traffic report written to {:?}", output_path);

    Ok(())
}
