use crate::building::BuildingReport;
use crate::shared::SimError;

/// Command and query surface of an elevator system.
///
/// Front ends drive the simulation only through this trait and read the
/// state back through the report returned by `snapshot`.
pub trait ElevatorSystem {
    /// Queues a trip from `origin` to `destination`.
    fn add_request(&mut self, origin: u8, destination: u8) -> Result<(), SimError>;

    fn start(&mut self) -> Result<(), SimError>;

    /// Drains the system; the cars park at floor 0 over the following ticks.
    fn stop(&mut self);

    fn remove_all_requests(&mut self) -> bool;

    /// Advances the whole building by one tick.
    fn tick(&mut self);

    fn snapshot(&self) -> BuildingReport;
}
