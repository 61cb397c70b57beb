//! Status report
//!
//! Read-only dump of the toolbox and every board, in input order.

use crate::domain::board::Board;
use crate::domain::toolbox::Toolbox;
use std::io::{self, Write};

/// Write the toolbox structure, one line per board, then a blank line
pub fn write_status(toolbox: &Toolbox, boards: &[Board], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "toolbox: {toolbox:?}")?;
    writeln!(out, "boards:")?;

    for board in boards {
        writeln!(out, "\t{board}")?;
    }

    writeln!(out)
}
