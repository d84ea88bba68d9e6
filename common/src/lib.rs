//! # Paddock Common
//!
//! Shared vocabulary of the `paddock` workspace.
//!
//! * **[`models`]**: Pilots, cars and their identifiers.
//! * **[`registry`]**: Port traits the application uses to reach the pilot and car registries.
//! * **[`error`]**: The business failures every operation can report.
//! * **[`config`]**: Runtime switches shared by the front-ends.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use error::{RacingError, RacingResult};
