/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
/// Number of ticks the doors stay open after a car serves a floor.
pub const DOOR_OPEN_TIME: u32 = 3;

/// Number of ticks a parked car waits before it sweeps to the opposite end.
pub const WAIT_TIME: u32 = 5;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub elevator: ElevatorConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
    pub elevator_capacity: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    #[serde(default = "default_door_open_time")]
    pub door_open_time: u32,
    #[serde(default = "default_wait_time")]
    pub wait_time: u32,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub ticks: u32,
    pub stop_at: Option<u32>,
    #[serde(default)]
    pub requests: Vec<ScriptedRequest>,
}

/// A request the runner submits right before the given tick.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ScriptedRequest {
    pub tick: u32,
    pub origin: u8,
    pub destination: u8,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl BuildingConfig {
    pub fn new(n_floors: u8, n_elevators: u8, elevator_capacity: u8) -> BuildingConfig {
        BuildingConfig {
            n_floors,
            n_elevators,
            elevator_capacity,
        }
    }
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            door_open_time: DOOR_OPEN_TIME,
            wait_time: WAIT_TIME,
        }
    }
}

fn default_door_open_time() -> u32 {
    DOOR_OPEN_TIME
}

fn default_wait_time() -> u32 {
    WAIT_TIME
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
