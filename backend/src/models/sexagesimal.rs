//! Sexagesimal right ascension / declination strings.
//!
//! Catalog files store coordinates as display strings: right ascension as
//! `HHhMMmSSs` and declination as `±DD°MM′SS″` (U+2032 prime, U+2033 double
//! prime, U+2212 minus). The parsers also accept the straight-quote and ASCII
//! hyphen fallbacks found in hand-edited data, optional blanks between fields
//! and fractional seconds.

use qtty::{Degrees, HourAngles};

/// Unicode minus sign used for negative declinations.
pub const MINUS_SIGN: char = '\u{2212}';
/// Arc-minute glyph.
pub const PRIME: char = '\u{2032}';
/// Arc-second glyph.
pub const DOUBLE_PRIME: char = '\u{2033}';

/// Format decimal hours as `HHhMMmSSs`.
///
/// Hours and minutes are floored, seconds rounded. A rounded value of 60
/// carries into the next field so the output always stays in range.
pub fn format_ra_hms(decimal_hours: f64) -> String {
    let mut hours = decimal_hours.floor() as i64;
    let minutes_decimal = (decimal_hours - hours as f64) * 60.0;
    let mut minutes = minutes_decimal.floor() as i64;
    let mut seconds = ((minutes_decimal - minutes as f64) * 60.0).round() as i64;

    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }
    let hours = hours.rem_euclid(24);

    format!("{:02}h{:02}m{:02}s", hours, minutes, seconds)
}

/// Format decimal degrees as `±DD°MM′SS″`.
pub fn format_dec_dms(decimal_degrees: f64) -> String {
    let sign = if decimal_degrees >= 0.0 { '+' } else { MINUS_SIGN };
    let abs_degrees = decimal_degrees.abs();
    let mut degrees = abs_degrees.floor() as i64;
    let minutes_decimal = (abs_degrees - degrees as f64) * 60.0;
    let mut minutes = minutes_decimal.floor() as i64;
    let mut seconds = ((minutes_decimal - minutes as f64) * 60.0).round() as i64;

    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }

    format!(
        "{}{:02}°{:02}{}{:02}{}",
        sign, degrees, minutes, PRIME, seconds, DOUBLE_PRIME
    )
}

/// Parse `{h}h{m}m{s}s` into an hour angle.
///
/// Returns `None` when the string does not follow the pattern.
pub fn parse_ra(input: &str) -> Option<HourAngles> {
    let (hours, rest) = input.trim().split_once('h')?;
    let (minutes, rest) = rest.split_once('m')?;
    let seconds = rest.trim().strip_suffix('s')?;

    let hours = parse_integer(hours)?;
    let minutes = parse_integer(minutes)?;
    let seconds = parse_decimal(seconds)?;

    Some(HourAngles::new(hours + minutes / 60.0 + seconds / 3600.0))
}

/// Parse `{±d}°{m}′{s}″` into signed degrees.
///
/// The sign applies to the whole angle, so `−00°30′00″` is `-0.5°`.
pub fn parse_dec(input: &str) -> Option<Degrees> {
    let trimmed = input.trim();
    let (sign, body) = if let Some(rest) = trimmed.strip_prefix(MINUS_SIGN) {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };

    let (degrees, rest) = body.split_once('°')?;
    let (minutes, rest) = rest.split_once(&['\'', PRIME][..])?;
    let seconds = rest.trim().strip_suffix(&['\'', '"', DOUBLE_PRIME][..])?;

    let degrees = parse_integer(degrees)?;
    let minutes = parse_integer(minutes)?;
    let seconds = parse_decimal(seconds)?;

    Some(Degrees::new(
        sign * (degrees + minutes / 60.0 + seconds / 3600.0),
    ))
}

fn parse_integer(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().map(f64::from)
}

fn parse_decimal(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    field.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "sexagesimal_tests.rs"]
mod sexagesimal_tests;
