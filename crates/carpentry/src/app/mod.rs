//! Application layer - Use case implementations
//!
//! This module drives domain behaviors across a board list and reports on it.

pub mod report;
pub mod worker;
