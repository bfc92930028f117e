use std::{env, process::ExitCode};

use svy21::{Error, LatLon, Svy21};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: svy21 [to-svy21 <latitude> <longitude> | to-latlon <northing> <easting>]";

// Sample point near Kent Ridge
const SAMPLE_LATITUDE: f64 = 1.294_919_268_848_527_8;
const SAMPLE_LONGITUDE: f64 = 103.773_674_368_858_34;

fn sample() {
    let coord = LatLon::new(SAMPLE_LATITUDE, SAMPLE_LONGITUDE);
    let projected = coord.to_svy21();
    let back = projected.to_latlon();

    info!(%coord, %projected, "converted sample point to SVY21");
    println!("{projected}");
    info!(%projected, %back, "converted sample point back to lat/lon");
    println!("{back}");
}

fn convert(command: &str, first: &str, second: &str) -> Result<Option<String>, Error> {
    let value = format!("{first} {second}");
    let converted = match command {
        "to-svy21" => value.parse::<LatLon>()?.to_svy21().to_string(),
        "to-latlon" => value.parse::<Svy21>()?.to_latlon().to_string(),
        _ => return Ok(None),
    };

    Ok(Some(converted))
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = env::args().skip(1).collect::<Vec<_>>();

    match args.as_slice() {
        [] => {
            sample();
            ExitCode::SUCCESS
        }
        [command, first, second] => match convert(command, first, second) {
            Ok(Some(converted)) => {
                println!("{converted}");
                ExitCode::SUCCESS
            }
            Ok(None) => {
                eprintln!("{USAGE}");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
