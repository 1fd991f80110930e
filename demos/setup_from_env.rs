//try `LOG_LEVEL=warning LOG_COLOR=true cargo run --example setup_from_env`
fn main() -> clog::LogResult<()> {
    clog::setup_from_env();
    let logger = clog::logger();
    clog::infof!("level {}, color {}", logger.level(), logger.color())?;
    clog::debug("only shown at DEBUG")?;
    clog::warning("shown unless the level is above WARNING")?;
    Ok(())
}
