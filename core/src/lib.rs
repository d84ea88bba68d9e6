//! # Paddock Core
//!
//! Business rules of the paddock and the adapters that back them.
//!
//! * **[`application`]**: [`RacingApplication`], the single entry point for every operation.
//! * **[`registry`]**: In-memory implementations of the registry ports.
//! * **[`shared`]**: A coarse-locked handle for callers on several threads.
//! * **[`dispatch`]**: Name-based command parsing and execution, used by the CLI.

pub mod application;
pub mod dispatch;
pub mod registry;
pub mod shared;

pub use application::RacingApplication;
pub use shared::SharedApplication;
