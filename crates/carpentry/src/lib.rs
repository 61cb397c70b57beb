//! carpentry - Workers, boards and interchangeable tools
//!
//! This crate provides functionality to:
//! - Model boards with a required and a current fastener count
//! - Drive and remove fasteners through small, swappable tool capabilities
//! - Reconcile a list of boards against a toolbox and report the result

pub mod constants;
pub mod error;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::report::write_status;
pub use app::worker::{WorkTally, Worker};
pub use constants::*;
pub use domain::board::{Board, BoardState};
pub use domain::toolbox::{Toolbox, Tools};
pub use domain::tools::{Drive, Driver, Remove, Remover, Rework};
pub use error::WorkshopError;
