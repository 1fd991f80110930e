//!The process-wide logger and the free functions that drive it.
//!
//!Until `setup` or `setup_from_env` runs, the logger writes everything from `Debug` up, without
//!color, to stderr.
use crate::clogger::Level;
use crate::error::LogResult;
use crate::Logger;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

///the logger behind the free functions and macros.
pub fn logger() -> &'static Logger {
    static LOGGER: OnceLock<Logger> = OnceLock::new();
    LOGGER.get_or_init(Logger::default)
}

///Installs the process-wide logger as the `log` crate's logger, so `log::info!` and friends are
///filtered and written like everything else. Can succeed only once per process.
///
///```
///clog::install()?;
///clog::setup(clog::Level::Warning, false);
///log::info!("filtered out");
///# Ok::<(), clog::LogError>(())
///```
pub fn install() -> LogResult<&'static Logger> {
    let logger = logger();
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(logger)
}

///see `Logger::setup`.
pub fn setup(level: Level, color: bool) {
    logger().setup(level, color);
}
///see `Logger::setup_from_env`.
pub fn setup_from_env() {
    logger().setup_from_env();
}
///see `Logger::set_output`. Call after `setup`.
pub fn set_output<W: Write + Send + 'static>(writer: W) {
    logger().set_output(writer);
}

pub fn log(level: Level, message: &str) -> LogResult<()> {
    logger().log(level, message)
}
pub fn log_fmt(level: Level, args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().log_fmt(level, args)
}
pub fn debug(message: &str) -> LogResult<()> {
    logger().debug(message)
}
pub fn info(message: &str) -> LogResult<()> {
    logger().info(message)
}
pub fn warning(message: &str) -> LogResult<()> {
    logger().warning(message)
}
pub fn error(message: &str) -> LogResult<()> {
    logger().error(message)
}
///logs at `Level::Panic`, then panics with `message`.
pub fn panic(message: &str) -> LogResult<()> {
    logger().panic(message)
}
pub fn debug_fmt(args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().debug_fmt(args)
}
pub fn info_fmt(args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().info_fmt(args)
}
pub fn warning_fmt(args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().warning_fmt(args)
}
pub fn error_fmt(args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().error_fmt(args)
}
pub fn panic_fmt(args: fmt::Arguments<'_>) -> LogResult<()> {
    logger().panic_fmt(args)
}
