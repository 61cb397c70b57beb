//! Workshop scenario runner
//!
//! Usage: carpentry_run
//!
//! Strips three old boards, assembles three new ones from a toolbox holding
//! 10 spare fasteners, then prints the toolbox and every board.
//! Set `RUST_LOG=debug` for per-fastener diagnostics on stderr.

use carpentry::{Toolbox, WorkshopError, Worker, starting_boards, write_status};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(out: &mut dyn Write) -> Result<(), WorkshopError> {
    let mut boards = starting_boards();
    let mut toolbox = Toolbox::standard();

    let tally = Worker.process_toolbox(&mut toolbox, &mut boards, out)?;
    tracing::info!(?tally, supply = toolbox.supply(), "workshop finished");

    write_status(&toolbox, &boards, out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
