//! Toolbox: one driving tool, one removing tool and a fastener supply
//!
//! [`Tools`] satisfies both capabilities by forwarding to whichever tool it
//! holds for each. [`Toolbox`] pairs it with the supply counter so a worker
//! can borrow the capability and the counter at the same time.

use crate::constants::INITIAL_SUPPLY;
use crate::domain::board::Board;
use crate::domain::tools::{Drive, Driver, Remove, Remover};
use std::io::{self, Write};

/// A driving handle and a removing handle, each independently replaceable
#[derive(Debug)]
pub struct Tools {
    driver: Box<dyn Drive>,
    remover: Box<dyn Remove>,
}

impl Tools {
    pub fn new(driver: impl Drive + 'static, remover: impl Remove + 'static) -> Self {
        Self {
            driver: Box::new(driver),
            remover: Box::new(remover),
        }
    }

    /// Swap in a different driving tool, returning the old one
    pub fn replace_driver(&mut self, driver: impl Drive + 'static) -> Box<dyn Drive> {
        std::mem::replace(&mut self.driver, Box::new(driver))
    }

    /// Swap in a different removing tool, returning the old one
    pub fn replace_remover(&mut self, remover: impl Remove + 'static) -> Box<dyn Remove> {
        std::mem::replace(&mut self.remover, Box::new(remover))
    }
}

impl Drive for Tools {
    fn drive(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()> {
        self.driver.drive(supply, board, out)
    }
}

impl Remove for Tools {
    fn remove(&self, supply: &mut i32, board: &mut Board, out: &mut dyn Write) -> io::Result<()> {
        self.remover.remove(supply, board, out)
    }
}

/// Tools plus the spare fasteners they draw from
///
/// The combined capability is [`Tools`]; reach it through [`Toolbox::split_mut`].
#[derive(Debug)]
pub struct Toolbox {
    tools: Tools,
    supply: i32,
}

impl Toolbox {
    pub fn new(driver: impl Drive + 'static, remover: impl Remove + 'static, supply: i32) -> Self {
        Self {
            tools: Tools::new(driver, remover),
            supply,
        }
    }

    /// Stock driver and remover with [`INITIAL_SUPPLY`] spare fasteners
    pub fn standard() -> Self {
        Self::new(Driver, Remover, INITIAL_SUPPLY)
    }

    /// Spare fasteners; negative once more were driven than were on hand
    pub fn supply(&self) -> i32 {
        self.supply
    }

    pub fn tools_mut(&mut self) -> &mut Tools {
        &mut self.tools
    }

    /// Borrow the capability and the supply counter together
    pub fn split_mut(&mut self) -> (&Tools, &mut i32) {
        (&self.tools, &mut self.supply)
    }
}
