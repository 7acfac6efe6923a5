/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Behaviour, Direction, DoorState, ServiceState};

/***************************************/
/*       Public data structures        */
/***************************************/
/// Snapshot of one car, copied out of the state machine at read time.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorReport {
    pub id: usize,
    pub floor: u8,
    pub direction: Direction,
    pub door: DoorState,
    #[serde(rename = "doorTimer")]
    pub door_timer: u32,
    #[serde(rename = "waitTimer")]
    pub wait_timer: u32,
    /// Pending stops in the order the car will reach them.
    pub stops: Vec<u8>,
    #[serde(rename = "floorRequests")]
    pub floor_requests: Vec<bool>,
    #[serde(rename = "activeRequests")]
    pub active_requests: usize,
    pub behaviour: Behaviour,
    #[serde(rename = "serviceState")]
    pub service_state: ServiceState,
    #[serde(rename = "takingRequests")]
    pub taking_requests: bool,
}

impl ElevatorReport {
    pub fn is_out_of_service(&self) -> bool {
        self.service_state == ServiceState::OutOfService
    }

    pub fn is_door_closed(&self) -> bool {
        self.door != DoorState::Open
    }
}

impl fmt::Display for ElevatorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.behaviour {
            Behaviour::OutOfService => write!(f, "Out of Service[Floor {}]", self.floor),
            Behaviour::Parked => {
                write!(f, "Waiting[Floor {}, Time {}]", self.floor, self.wait_timer)
            }
            _ => {
                let door = match self.door {
                    DoorState::Open => format!("O {}", self.door_timer),
                    DoorState::Closing | DoorState::Closed => "C  ".to_string(),
                };
                write!(f, "[{}|{}|{}]<", self.floor, self.direction.symbol(), door)?;
                for (floor, requested) in self.floor_requests.iter().enumerate() {
                    if *requested {
                        write!(f, " {:>2}", floor)?;
                    } else {
                        write!(f, " --")?;
                    }
                }
                write!(f, ">")
            }
        }
    }
}
