//! Workshop errors
//!
//! Counting never fails; the only fallible step is writing log lines.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkshopError {
    /// The output sink rejected a log or report line
    #[error("failed to write workshop output: {0}")]
    Output(#[from] io::Error),
}
