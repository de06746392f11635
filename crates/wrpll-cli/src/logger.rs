//! Stderr logging for the `wrpll` binary, backed by `env_logger`.

use std::io::Write;

use log::LevelFilter;

/// Installs the logger with a level picked from the `-v` count.
///
/// `RUST_LOG`, when set, overrides the level per module.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(level_filter(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                buf.default_styled_level(record.level()),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
