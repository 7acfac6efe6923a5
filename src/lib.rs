//! Discrete-time simulation of a building with a fleet of elevators.
//!
//! The [`Building`] dispatcher queues travel requests, hands them out in
//! batches to parked cars and advances every [`Elevator`] one step per tick.
//! Front ends talk to it through the [`ElevatorSystem`] trait and read
//! [`BuildingReport`] snapshots back.

/* Modules */
pub mod building;
pub mod config;
pub mod elevator;
pub mod shared;

pub use building::{Building, BuildingReport, ElevatorSystem};
pub use elevator::{Elevator, ElevatorReport};
pub use shared::{Request, SimError, SystemStatus};
