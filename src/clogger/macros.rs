//!`format!`-style shorthands for the process-wide logger. Arguments are rendered before the level
//!check, and every macro evaluates to `clog::LogResult<()>`.

///Logs a formatted message at the given level.
///
///```
///clog::setup(clog::Level::Debug, false);
///clog::set_output(std::io::sink());
///clog::logf!(clog::Level::Info, "Hello {} world {}!", "happy", 42)?;
///# Ok::<(), clog::LogError>(())
///```
#[macro_export]
macro_rules! logf {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_fmt($level, ::std::format_args!($($arg)+))
    };
}
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debug_fmt(::std::format_args!($($arg)+))
    };
}
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::info_fmt(::std::format_args!($($arg)+))
    };
}
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::warning_fmt(::std::format_args!($($arg)+))
    };
}
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::error_fmt(::std::format_args!($($arg)+))
    };
}
///Logs a formatted message at `Level::Panic`, then panics with it.
///
///```should_panic
///clog::setup(clog::Level::Debug, false);
///let _ = clog::panicf!("The end is {}!", "nigh");
///```
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panic_fmt(::std::format_args!($($arg)+))
    };
}
