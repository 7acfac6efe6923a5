pub mod fsm;
pub mod report;

pub use fsm::Elevator;
pub use report::ElevatorReport;
