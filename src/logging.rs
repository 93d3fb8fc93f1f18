//! Terminal logger setup. Everything goes to stderr; stdout is reserved for URL output.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Map the `-v` count to a level: none => Info, `-v` => Debug, `-vv` => Trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    // Only our own records; reqwest and hyper are chatty at debug.
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();

    TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Initializes a terminal logger for unit tests; no-op if one is already set.
#[cfg(test)]
pub fn initialize_for_tests() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
