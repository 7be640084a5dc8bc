//! Line layout patterns
//!
//! A pattern is literal text mixed with `%X` tokens:
//!
//! | token | output                                   |
//! |-------|------------------------------------------|
//! | `%V`  | formatted message                        |
//! | `%N`  | logger name                              |
//! | `%L`  | level name (`info`, `warning`, ...)      |
//! | `%A`  | weekday name                             |
//! | `%B`  | month name                               |
//! | `%C`  | two-digit year                           |
//! | `%Y`  | four-digit year                          |
//! | `%R`  | `Weekday Month D YYYY HH:MM:SS`          |
//! | `%D`  | `MM/DD/YY`                               |
//! | `%m`  | month, `01`-`12`                         |
//! | `%d`  | day of month, `01`-`31`                  |
//! | `%H`  | hour, `00`-`23`                          |
//! | `%h`  | hour modulo 12, `00`-`11`                |
//! | `%M`  | minute                                   |
//! | `%S`  | second                                   |
//! | `%F`  | `AM` / `PM`                              |
//! | `%x`  | `hh:MM:SS AM` on a 12-hour clock         |
//! | `%X`  | `HH:MM`                                  |
//! | `%T`  | `HH:MM:SS`                               |
//! | `%%`  | `%`                                      |
//! | `%n`  | newline                                  |
//!
//! Unknown tokens are copied through as written and a trailing `%` is kept.

use super::log_level::LogLevel;
use super::timestamp::TimeSnapshot;
use std::fmt::Write;

/// Default layout used by new loggers
pub const DEFAULT_PATTERN: &str = "[%R] %N: %V%n";

/// Expand `pattern` for one log line.
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::core::pattern::render;
/// use rust_pattern_logger::{LogLevel, TimeSnapshot};
///
/// let line = render("[%L] %N: %V", "hi", "App", LogLevel::Info, &TimeSnapshot::now());
/// assert_eq!(line, "[info] App: hi");
/// ```
#[must_use]
pub fn render(
    pattern: &str,
    message: &str,
    logger_name: &str,
    level: LogLevel,
    time: &TimeSnapshot,
) -> String {
    let mut out = String::with_capacity(pattern.len() + message.len() + 32);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let Some(token) = chars.next() else {
            out.push('%');
            break;
        };

        // writing into a String cannot fail
        let _ = match token {
            'V' => out.write_str(message),
            'N' => out.write_str(logger_name),
            'L' => out.write_str(level.to_str()),
            'A' => out.write_str(time.weekday_name()),
            'B' => out.write_str(time.month_name()),
            'C' => write!(out, "{:02}", time.short_year()),
            'Y' => write!(out, "{}", time.year),
            'R' => write!(
                out,
                "{} {} {} {} {:02}:{:02}:{:02}",
                time.weekday_name(),
                time.month_name(),
                time.day,
                time.year,
                time.hour,
                time.minute,
                time.second
            ),
            'D' => write!(
                out,
                "{:02}/{:02}/{:02}",
                time.month,
                time.day,
                time.short_year()
            ),
            'm' => write!(out, "{:02}", time.month),
            'd' => write!(out, "{:02}", time.day),
            'H' => write!(out, "{:02}", time.hour),
            'h' => write!(out, "{:02}", time.hour % 12),
            'M' => write!(out, "{:02}", time.minute),
            'S' => write!(out, "{:02}", time.second),
            'F' => out.write_str(time.meridiem()),
            'x' => write!(
                out,
                "{:02}:{:02}:{:02} {}",
                time.clock_hour(),
                time.minute,
                time.second,
                time.meridiem()
            ),
            'X' => write!(out, "{:02}:{:02}", time.hour, time.minute),
            'T' => write!(
                out,
                "{:02}:{:02}:{:02}",
                time.hour, time.minute, time.second
            ),
            '%' => out.write_char('%'),
            'n' => out.write_char('\n'),
            other => {
                out.push('%');
                out.write_char(other)
            }
        };
    }

    out
}
