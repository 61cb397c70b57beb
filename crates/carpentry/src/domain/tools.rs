//! Tool capabilities and the two stock tools
//!
//! Each capability is a single unit operation: move one fastener between the
//! supply and a board, then write one line about it. Neither operation checks
//! bounds. The caller decides when to stop, and the supply may go negative.

use crate::domain::board::Board;
use std::fmt;
use std::io::{self, Write};

/// Line written by [`Driver`] for every fastener driven
pub const DRIVER_LINE: &str = "driver: struck a fastener and drove it into the board.";

/// Line written by [`Remover`] for every fastener pulled
pub const REMOVER_LINE: &str = "remover: pulled a fastener from the board.";

/// Takes one fastener from the supply and drives it into a board
pub trait Drive: fmt::Debug {
    fn drive(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()>;
}

/// Pulls one fastener from a board and returns it to the supply
pub trait Remove: fmt::Debug {
    fn remove(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()>;
}

/// Anything that can both drive and remove
pub trait Rework: Drive + Remove {}

impl<T: Drive + Remove + ?Sized> Rework for T {}

/// Hammer-like tool
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver;

impl Drive for Driver {
    fn drive(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()> {
        *supply -= 1;
        board.current += 1;
        tracing::debug!(supply = *supply, board = %board, "driver: fastener driven");
        writeln!(out, "{DRIVER_LINE}")
    }
}

/// Pliers-like tool
#[derive(Clone, Copy, Debug, Default)]
pub struct Remover;

impl Remove for Remover {
    fn remove(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()> {
        board.current -= 1;
        *supply += 1;
        tracing::debug!(supply = *supply, board = %board, "remover: fastener pulled");
        writeln!(out, "{REMOVER_LINE}")
    }
}
