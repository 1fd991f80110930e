//!what gets logged, in what colors, and where to.
use super::sink::Sink;
use super::Level;
use std::env;

///environment variable holding the minimum level name.
pub const LEVEL_VAR: &str = "LOG_LEVEL";
///environment variable that turns color on when it is `true` (any case).
pub const COLOR_VAR: &str = "LOG_COLOR";

///One snapshot of logger configuration. A logger swaps whole snapshots, so readers never see a
///half-applied change.
///
///# Examples
///```
///use clog::{Level, Settings};
///let settings = Settings::from_env_values(Some("error"), Some("TRUE"));
///assert_eq!((settings.level, settings.color), (Level::Error, true));
///
///let settings = Settings::from_env_values(Some("bogus"), None);
///assert_eq!((settings.level, settings.color), (Level::Debug, false));
///```
#[derive(Clone, Debug)]
pub struct Settings {
    ///lowest level that is written.
    pub level: Level,
    ///paint lines with the level's color.
    pub color: bool,
    ///where lines are written.
    pub sink: Sink,
}

impl Settings {
    ///settings writing to stderr.
    pub fn new(level: Level, color: bool) -> Self {
        Self {
            level,
            color,
            sink: Sink::stderr(),
        }
    }
    ///reads `LOG_LEVEL` and `LOG_COLOR` from the process environment.
    pub fn from_env() -> Self {
        let level = env::var(LEVEL_VAR).ok();
        let color = env::var(COLOR_VAR).ok();
        Self::from_env_values(level.as_deref(), color.as_deref())
    }
    ///Resolves raw environment values. An absent or unknown level falls back to the lowest
    ///level; color is on only for a case-insensitive `true`.
    pub fn from_env_values(level: Option<&str>, color: Option<&str>) -> Self {
        let level = level.and_then(Level::from_name).unwrap_or(Level::LOWEST);
        let color = color.is_some_and(|value| value.eq_ignore_ascii_case("true"));
        Self::new(level, color)
    }
    pub fn with_sink(self, sink: Sink) -> Self {
        Self { sink, ..self }
    }
    ///whether a message at `level` passes the threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Level::LOWEST, false)
    }
}
