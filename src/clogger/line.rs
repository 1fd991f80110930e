//!builds the literal text of one log line.
use super::Level;
use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

///RFC3339 at second precision, `Z` for a zero offset.
pub fn timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

///Formats `<timestamp> <LEVEL> <message>` followed by a newline. With `color` the whole line,
///timestamp included, is wrapped in the level's paint and a reset, and the newline follows the
///reset.
///
///```
///use chrono::{TimeZone, Utc};
///use clog::{format_line, Level};
///let time = Utc.with_ymd_and_hms(2014, 5, 6, 15, 4, 5).unwrap();
///assert_eq!(format_line(&time, Level::Error, "disk full", false), "2014-05-06T15:04:05Z ERROR disk full\n");
///assert_eq!(
///    format_line(&time, Level::Error, "disk full", true),
///    "\x1b[31m2014-05-06T15:04:05Z ERROR disk full\x1b[0m\n"
///);
///```
pub fn format_line<Tz>(time: &DateTime<Tz>, level: Level, message: &str, color: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let line = format!("{} {} {}", timestamp(time), level.name(), message);
    let mut line = if color {
        level.style().paint.wrap(&line)
    } else {
        line
    };
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 5, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn offset_is_kept() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let time = offset.with_ymd_and_hms(2014, 5, 6, 15, 4, 5).unwrap();
        assert_eq!(timestamp(&time), "2014-05-06T15:04:05+07:00");
    }

    #[test]
    fn utc_uses_z() {
        assert_eq!(timestamp(&noon()), "2014-05-06T12:00:00Z");
    }

    #[test]
    fn plain_line_has_two_spaces_before_message() {
        let line = format_line(&noon(), Level::Warning, "message", false);
        assert_eq!(line, "2014-05-06T12:00:00Z WARNING message\n");
    }

    #[test]
    fn message_is_verbatim() {
        let line = format_line(&noon(), Level::Debug, "  spaced  out %s {}", false);
        assert_eq!(line, "2014-05-06T12:00:00Z DEBUG   spaced  out %s {}\n");
    }

    #[test]
    fn color_wraps_whole_line() {
        let line = format_line(&noon(), Level::Panic, "omg!", true);
        assert_eq!(line, "\x1b[1;31m2014-05-06T12:00:00Z PANIC omg!\x1b[0m\n");
    }

    #[test]
    fn info_color_is_only_a_reset() {
        let line = format_line(&noon(), Level::Info, "hi", true);
        assert_eq!(line, "2014-05-06T12:00:00Z INFO hi\x1b[0m\n");
    }
}
