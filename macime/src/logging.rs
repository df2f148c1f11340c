use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Environment variable holding the `env_logger` filter
pub const LOG_ENV: &str = "MACIME_LOG";

/// Route `log` records to stderr, filtered by `MACIME_LOG` (default `warn`)
pub fn init() -> Result<()> {
    Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Stderr)
        .try_init()
        .context("Failed to initialize logger")
}
