/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::SimError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    pub fn symbol(&self) -> char {
        match *self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Stop => '-',
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Open,
    Closing,
    Closed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    #[serde(rename = "inService")]
    InService,
    #[serde(rename = "outOfService")]
    OutOfService,
}

/// Coarse behaviour of a car, as seen from outside the state machine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "outOfService")]
    OutOfService,
    #[serde(rename = "parked")]
    Parked,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "doorOpen")]
    DoorOpen,
    #[serde(rename = "doorClosing")]
    DoorClosing,
    #[serde(rename = "goingOutOfService")]
    GoingOutOfService,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    #[serde(rename = "outOfService")]
    OutOfService,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "stopping")]
    Stopping,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            SystemStatus::OutOfService => "outOfService",
            SystemStatus::Running => "running",
            SystemStatus::Stopping => "stopping",
        };
        write!(f, "{}", name)
    }
}

/// A single trip from one floor to another.
///
/// The endpoints are validated against the building by the dispatcher; the
/// request itself only guarantees that they differ.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    origin: u8,
    destination: u8,
}

impl Request {
    pub fn new(origin: u8, destination: u8) -> Result<Request, SimError> {
        if origin == destination {
            return Err(SimError::InvalidRequest(format!(
                "start floor and end floor cannot be the same ({})",
                origin
            )));
        }
        Ok(Request {
            origin,
            destination,
        })
    }

    pub fn origin(&self) -> u8 {
        self.origin
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn direction(&self) -> Direction {
        if self.origin < self.destination {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}
