//!severities, ordered lowest to highest, with the name and paint each one is written with.
use super::ansi::Paint;
use crate::error::ParseLevelError;
use std::fmt::Display;
use std::str::FromStr;

///How severe a message is. Ordering is used for filtering: a logger set to `Warning` drops
///`Debug` and `Info`.
///
///`Panic` is the top severity. Logging at it writes the line and then panics with the message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Panic = 4,
}

///what a level looks like in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    ///uppercase name, written verbatim.
    pub name: &'static str,
    ///paint for the whole line when color is on.
    pub paint: Paint,
}

impl Level {
    ///every level, lowest first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Panic,
    ];
    pub const LOWEST: Level = Level::Debug;
    pub const HIGHEST: Level = Level::Panic;

    pub const fn style(self) -> LevelStyle {
        let (name, paint) = match self {
            Level::Debug => ("DEBUG", Paint::Blue),
            Level::Info => ("INFO", Paint::Plain),
            Level::Warning => ("WARNING", Paint::Yellow),
            Level::Error => ("ERROR", Paint::Red),
            Level::Panic => ("PANIC", Paint::BoldRed),
        };
        LevelStyle { name, paint }
    }
    pub const fn name(self) -> &'static str {
        self.style().name
    }
    ///escape sequence for this level. Empty for `Info`.
    pub const fn color(self) -> &'static str {
        self.style().paint.escape()
    }
    ///whether logging at this level ends in a panic.
    pub const fn is_fatal(self) -> bool {
        matches!(self, Level::Panic)
    }
    ///Looks a level up by name, ignoring case. `FATAL` is accepted for `Panic`. Case folding is
    ///Unicode uppercasing, so `ınfo` (dotless i) names `Info`.
    ///
    ///```
    ///use clog::Level;
    ///assert_eq!(Level::from_name("warning"), Some(Level::Warning));
    ///assert_eq!(Level::from_name("Fatal"), Some(Level::Panic));
    ///assert_eq!(Level::from_name("loud"), None);
    ///```
    pub fn from_name(name: &str) -> Option<Level> {
        let name = name.to_uppercase();
        if name == "FATAL" {
            return Some(Level::Panic);
        }
        Self::ALL.into_iter().find(|level| level.name() == name)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warning,
            log::Level::Error => Level::Error,
        }
    }
}
