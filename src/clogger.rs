mod ansi;
pub(crate) mod level;
pub(crate) mod line;
mod macros;
pub(crate) mod settings;
pub(crate) mod sink;
pub use ansi::{Paint, RESET};
pub use level::{Level, LevelStyle};
use crate::error::{LogError, LogResult};
use arc_swap::ArcSwap;
use chrono::Local;
use log::{Log, Metadata, Record};
use settings::Settings;
use sink::Sink;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

///The logger: a threshold, a color switch and a sink, held as one swappable snapshot.
///
///Configuration is meant to happen once, early, before other threads log. Changing it later is
///memory safe (each call swaps a whole snapshot, last writer wins) but lines already in flight
///use whichever snapshot they loaded.
///
///# Examples
///```
///use clog::{Level, Logger};
///let logger = Logger::new(Level::Warning, false);
///logger.set_output(std::io::sink());
///logger.info("dropped")?;
///logger.warning("written")?;
///# Ok::<(), clog::LogError>(())
///```
pub struct Logger {
    settings: ArcSwap<Settings>,
}

impl Logger {
    ///a logger writing to stderr.
    pub fn new(level: Level, color: bool) -> Self {
        Self::with_settings(Settings::new(level, color))
    }
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
        }
    }
    ///a logger configured from `LOG_LEVEL` and `LOG_COLOR`.
    pub fn from_env() -> Self {
        Self::with_settings(Settings::from_env())
    }
    ///Replaces level and color and points output back at stderr. Call `set_output` after this,
    ///never before, if lines should go elsewhere.
    pub fn setup(&self, level: Level, color: bool) {
        self.settings.store(Arc::new(Settings::new(level, color)));
    }
    ///`setup` with values read from `LOG_LEVEL` and `LOG_COLOR`.
    pub fn setup_from_env(&self) {
        self.settings.store(Arc::new(Settings::from_env()));
    }
    ///Sends further lines to `writer`, keeping level and color.
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.set_sink(Sink::new(writer));
    }
    pub fn set_sink(&self, sink: Sink) {
        self.settings
            .rcu(|current| Settings::clone(current).with_sink(sink.clone()));
    }
    ///the current snapshot.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }
    pub fn level(&self) -> Level {
        self.settings.load().level
    }
    pub fn color(&self) -> bool {
        self.settings.load().color
    }
    ///whether a message at `level` would be written.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.settings.load().enabled(level)
    }
    ///Logs `message` at `level`.
    ///
    ///Below the threshold nothing happens. Otherwise one line is written to the sink, and a
    ///failed write comes back as `LogError::Write`.
    ///
    ///# Panics
    ///At `Level::Panic` this call does not return: after writing (whether or not the write
    ///worked) it panics with `message` as the payload.
    pub fn log(&self, level: Level, message: &str) -> LogResult<()> {
        let settings = self.settings.load();
        if !settings.enabled(level) {
            return Ok(());
        }
        let line = line::format_line(&Local::now(), level, message, settings.color);
        let written = settings.sink.write_line(&line);
        if level.is_fatal() {
            panic!("{message}");
        }
        written.map_err(LogError::from)
    }
    ///Renders `args`, then logs the result. Rendering always happens, even when the message is
    ///below the threshold.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) -> LogResult<()> {
        let message = fmt::format(args);
        self.log(level, &message)
    }
    pub fn debug(&self, message: &str) -> LogResult<()> {
        self.log(Level::Debug, message)
    }
    pub fn info(&self, message: &str) -> LogResult<()> {
        self.log(Level::Info, message)
    }
    pub fn warning(&self, message: &str) -> LogResult<()> {
        self.log(Level::Warning, message)
    }
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.log(Level::Error, message)
    }
    ///logs at `Level::Panic`, then panics.
    pub fn panic(&self, message: &str) -> LogResult<()> {
        self.log(Level::Panic, message)
    }
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt(Level::Debug, args)
    }
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt(Level::Info, args)
    }
    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt(Level::Warning, args)
    }
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt(Level::Error, args)
    }
    ///logs at `Level::Panic`, then panics.
    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt(Level::Panic, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings())
            .finish()
    }
}

//records from `log` go through the same gate. `log::Level::Error` maps to `Level::Error`, so
//nothing arriving this way can panic.
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        //nowhere to report a failed write from inside the facade
        let _ = self.log_fmt(record.level().into(), *record.args());
    }

    fn flush(&self) {
        let _ = self.settings.load().sink.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::sink::capture::{Broken, Capture};
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn captured(level: Level, color: bool) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::new(level, color);
        logger.set_output(capture.clone());
        (logger, capture)
    }

    #[test]
    fn writes_at_and_above_threshold_only() {
        let (logger, capture) = captured(Level::Info, false);
        for level in [Level::Debug, Level::Info, Level::Warning, Level::Error] {
            logger.log(level, "x").unwrap();
        }
        let names: Vec<_> = capture
            .contents()
            .lines()
            .map(|line| line.split(' ').nth(1).unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["INFO", "WARNING", "ERROR"]);
    }

    #[test]
    fn line_has_three_fields() {
        let (logger, capture) = captured(Level::Debug, false);
        logger.warning("message").unwrap();
        let out = capture.contents();
        let parts: Vec<_> = out.split(' ').collect();
        assert_eq!(parts.len(), 3, "bad line {out:?}");
        assert!(DateTime::parse_from_rfc3339(parts[0]).is_ok());
        assert_eq!(parts[1], "WARNING");
        assert_eq!(parts[2], "message\n");
    }

    #[test]
    fn colored_line_ends_with_reset() {
        let (logger, capture) = captured(Level::Debug, true);
        logger.error("red").unwrap();
        let out = capture.contents();
        assert!(out.starts_with(Level::Error.color()));
        assert!(out.ends_with("red\x1b[0m\n"));
    }

    #[test]
    fn set_output_keeps_level_and_color() {
        let logger = Logger::new(Level::Error, true);
        logger.set_output(Capture::default());
        assert_eq!(logger.level(), Level::Error);
        assert!(logger.color());
    }

    #[test]
    fn setup_resets_output_to_stderr() {
        let (logger, capture) = captured(Level::Debug, false);
        logger.setup(Level::Debug, false);
        logger.info("goes to stderr").unwrap();
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn arguments_render_even_when_dropped() {
        struct Counted<'a>(&'a Cell<u32>);
        impl fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("counted")
            }
        }
        let renders = Cell::new(0);
        let (logger, capture) = captured(Level::Error, false);
        logger
            .debug_fmt(format_args!("{}", Counted(&renders)))
            .unwrap();
        assert_eq!(renders.get(), 1);
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn broken_sink_is_an_error() {
        let logger = Logger::new(Level::Debug, false);
        logger.set_output(Broken);
        let err = logger.info("lost").unwrap_err();
        assert!(matches!(err, LogError::Write(_)));
    }

    #[test]
    fn panic_writes_then_unwinds() {
        let (logger, capture) = captured(Level::Debug, false);
        let result = catch_unwind(AssertUnwindSafe(|| logger.panic("omg!")));
        assert!(capture.contents().ends_with(" PANIC omg!\n"));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("omg!"));
    }

    #[test]
    fn panic_with_broken_sink_still_unwinds() {
        let logger = Logger::new(Level::Debug, false);
        logger.set_output(Broken);
        let result = catch_unwind(AssertUnwindSafe(|| logger.panic("no witness")));
        assert!(result.is_err());
    }

    #[test]
    fn facade_records_use_the_gate() {
        let (logger, capture) = captured(Level::Warning, false);
        let quiet = Metadata::builder().level(log::Level::Info).build();
        assert!(!Log::enabled(&logger, &quiet));
        Log::log(
            &logger,
            &Record::builder()
                .level(log::Level::Info)
                .args(format_args!("quiet"))
                .build(),
        );
        Log::log(
            &logger,
            &Record::builder()
                .level(log::Level::Error)
                .args(format_args!("loud {}", 1))
                .build(),
        );
        Log::flush(&logger);
        assert!(capture.contents().ends_with(" ERROR loud 1\n"));
        assert_eq!(capture.contents().lines().count(), 1);
    }
}
