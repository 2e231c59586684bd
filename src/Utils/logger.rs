use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Install a terminal logger so the `log::info!`/`log::error!` lines emitted
/// by the kinetics stages reach the console. Call once at program start; a
/// repeated call returns the backend's already-initialized error.
pub fn init_term_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}
