//! Formatting and printing of lookup results.

use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};

use crate::config::PASS_TIME_FORMAT;
use crate::models::{Coordinates, PassWindow};

/// Formats one pass as `Next pass at <date/time> for <duration> seconds!`.
///
/// The rise time is rendered in `tz`. A rise time chrono cannot represent is
/// printed as raw epoch seconds instead.
pub fn format_pass_line<Tz>(pass: &PassWindow, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let when = match DateTime::from_timestamp(pass.risetime, 0) {
        Some(utc) => utc.with_timezone(tz).format(PASS_TIME_FORMAT).to_string(),
        None => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

/// Writes one line per pass to `out`, in the order given.
pub fn write_pass_times<W, Tz>(out: &mut W, passes: &[PassWindow], tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    for pass in passes {
        writeln!(out, "{}", format_pass_line(pass, tz))?;
    }
    Ok(())
}

/// Prints the passes to stdout in the local timezone.
pub fn print_pass_times(passes: &[PassWindow]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_pass_times(&mut handle, passes, &Local)
}

/// Formats coordinates as `latitude: <lat>, longitude: <lon>`.
pub fn format_coordinates(coords: &Coordinates) -> String {
    format!(
        "latitude: {}, longitude: {}",
        coords.latitude, coords.longitude
    )
}
