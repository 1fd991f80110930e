use log::Log;

fn main() -> clog::LogResult<()> {
    clog::install()?;
    clog::setup(clog::Level::Info, true);
    log::trace!("dropped: trace maps to DEBUG");
    log::info!("logged through the log crate");
    log::warn!("warn shows up as {}", clog::Level::Warning);
    log::error!("errors never panic from here");
    log::logger().flush();
    Ok(())
}
