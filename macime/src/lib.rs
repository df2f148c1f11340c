pub mod cli;
pub mod logging;
pub mod platform;

pub use cli::Cli;

use macime_core::app;
use macime_core::output::render_error;
use macime_core::{Command, StoreConfig};
use std::io::{self, Write};

/// Run one parsed invocation against stdout/stderr and return the exit code
pub fn run(cli: Cli) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(cli, &mut stdout.lock(), &mut stderr.lock())
}

/// Run one parsed invocation. Command output goes to `out`, the error line
/// (a `{"error": ...}` object in JSON mode) goes to `err`.
pub fn run_with<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> i32 {
    let command = cli.into_command();
    log::debug!("Running {:?}", command);

    match execute(&command, out) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            let _ = writeln!(err, "{}", render_error(&e.to_string(), command.format()));
            1
        }
    }
}

fn execute<O: Write>(command: &Command, out: &mut O) -> macime_core::Result<()> {
    let config = StoreConfig::from_env()?;
    let store = config.open_store();
    let provider = platform::create_provider()?;

    app::run(command, provider.as_ref(), store.as_ref(), out)
}
