//! # Domain Models
//!
//! The two entities of the paddock and the identifiers that key them.

pub mod car;
pub mod id;
pub mod pilot;

pub use car::Car;
pub use id::{CarId, PilotId};
pub use pilot::Pilot;
