//! CLI logging setup.

use flexi_logger::{DeferredNow, Logger, Record};

use crate::Error;

/// `LEVEL message` lines on stderr, keeping stdout for command output.
fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{} {}", record.level(), record.args())
}

pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .format(cli_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
