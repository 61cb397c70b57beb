//! Domain layer - Boards and tool behaviors
//!
//! This module contains the passive records and the unit operations on them.

pub mod board;
pub mod toolbox;
pub mod tools;
