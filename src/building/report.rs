/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorReport;
use crate::shared::{Request, SystemStatus};

/***************************************/
/*       Public data structures        */
/***************************************/
/// Snapshot of the whole building, copied out of the dispatcher at read time.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BuildingReport {
    #[serde(rename = "numFloors")]
    pub n_floors: u8,
    #[serde(rename = "numElevators")]
    pub n_elevators: u8,
    #[serde(rename = "elevatorCapacity")]
    pub elevator_capacity: u8,
    pub elevators: Vec<ElevatorReport>,
    #[serde(rename = "upRequests")]
    pub up_requests: Vec<Request>,
    #[serde(rename = "downRequests")]
    pub down_requests: Vec<Request>,
    #[serde(rename = "systemStatus")]
    pub system_status: SystemStatus,
}

impl fmt::Display for BuildingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Building Report")?;
        writeln!(f, "Number of Floors: {}", self.n_floors)?;
        writeln!(f, "Number of Elevators: {}", self.n_elevators)?;
        writeln!(f, "Elevator Capacity: {}", self.elevator_capacity)?;
        writeln!(f, "Elevator System Status: {}", self.system_status)?;

        write!(f, "Up Requests: [({})]", self.up_requests.len())?;
        for request in self.up_requests.iter() {
            write!(f, " {}", request)?;
        }
        writeln!(f)?;
        write!(f, "Down Requests: [({})]", self.down_requests.len())?;
        for request in self.down_requests.iter() {
            write!(f, " {}", request)?;
        }
        writeln!(f)?;

        writeln!(f, "Elevator Reports:")?;
        for report in self.elevators.iter() {
            writeln!(f, "elevator{}: {}", report.id, report)?;
        }
        Ok(())
    }
}
