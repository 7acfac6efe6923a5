/* 3rd party libraries */
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

/* Custom libraries */
use building_sim::config::{self, Config};
use building_sim::unwrap_or_exit;
use building_sim::{Building, ElevatorSystem};

/// Replays a scripted scenario against the elevator simulation.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to run, overrides the configuration file
    #[clap(short, long)]
    ticks: Option<u32>,

    /// Print every snapshot as JSON instead of the text report
    #[clap(long)]
    json: bool,
}

/* Main */
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(&args.config));
    let ticks = args.ticks.unwrap_or(config.simulation.ticks);

    // Create the building
    let mut building = unwrap_or_exit!(Building::new(&config.building, &config.elevator));
    building.start()?;
    info!(
        "simulating {} floor(s), {} elevator(s) of capacity {} for {} tick(s)",
        config.building.n_floors, config.building.n_elevators, config.building.elevator_capacity, ticks
    );

    run(&mut building, &config, ticks, args.json)
}

fn run<S: ElevatorSystem>(system: &mut S, config: &Config, ticks: u32, json: bool) -> anyhow::Result<()> {
    for tick in 0..ticks {
        for request in config.simulation.requests.iter().filter(|r| r.tick == tick) {
            if let Err(e) = system.add_request(request.origin, request.destination) {
                warn!("tick {}: request {}->{} rejected: {}", tick, request.origin, request.destination, e);
            }
        }
        if config.simulation.stop_at == Some(tick) {
            system.stop();
        }

        system.tick();

        let report = system.snapshot();
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            info!("tick {}\n****************************\n{}****************************", tick + 1, report);
        }
    }
    Ok(())
}
