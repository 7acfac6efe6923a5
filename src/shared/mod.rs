pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::Behaviour;
pub use structs::Direction;
pub use structs::DoorState;
pub use structs::Request;
pub use structs::ServiceState;
pub use structs::SystemStatus;
