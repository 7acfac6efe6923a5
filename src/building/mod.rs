pub mod building;
pub mod report;
pub mod system;

pub use building::Building;
pub use report::BuildingReport;
pub use system::ElevatorSystem;
