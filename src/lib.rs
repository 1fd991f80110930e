//!A small leveled logger for the console. Each message becomes one line,
//!`<RFC3339 timestamp> <LEVEL> <message>`, optionally painted in the level's color, written to
//!stderr or any other `std::io::Write`.
//!
//!Five levels exist, lowest first: `Debug`, `Info`, `Warning`, `Error` and `Panic`. Messages
//!below the configured level are dropped. Logging at `Panic` writes the line and then panics
//!with the message.
//!# How to use
//!Configure once, early, before other threads start logging. `setup` picks level and color
//!directly, `setup_from_env` reads them from `LOG_LEVEL` and `LOG_COLOR`. Both reset output to
//!stderr, so `set_output` goes after them.
//!```
//!use clog::Level;
//!clog::setup(Level::Warning, true);
//!clog::debug("hello world!")?;
//!clog::warning("Hello")?;
//!clog::warningf!("The end is {}!", "nigh")?;
//!# Ok::<(), clog::LogError>(())
//!```
//!A `Logger` can also be owned directly instead of using the process-wide one, and the
//!process-wide one can serve the `log` crate through `install`.
mod clogger;
mod error;
mod global;
pub use clogger::line::{format_line, timestamp};
pub use clogger::settings::{Settings, COLOR_VAR, LEVEL_VAR};
pub use clogger::sink::Sink;
pub use clogger::{Level, LevelStyle, Logger, Paint, RESET};
pub use error::{LogError, LogResult, ParseLevelError};
pub use global::*;
