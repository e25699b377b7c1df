//! Decoders for the two delimited text resources.
//!
//! Both files carry a header line followed by one row per line. The header is
//! skipped; columns are positional. Malformed numeric cells degrade to zero
//! instead of failing the row.

use skyfare_shared::{AirportRecord, FlightRecord};
use tracing::debug;

use crate::airports::AirportIndex;

pub const DELIMITER: char = ',';

/// Once a flight row's current field contains this, delimiters stop splitting.
pub const URL_MARKER: &str = "https://";

pub const FLIGHT_FIELD_COUNT: usize = 16;

/// Split one flight row into fields.
///
/// The deep link is written unquoted and its query string may contain the
/// delimiter, so as soon as the field being accumulated contains
/// [`URL_MARKER`] the remainder of the line belongs to that field. No other
/// quoting or escaping is recognised.
pub fn split_flight_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(FLIGHT_FIELD_COUNT);
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        if ch != DELIMITER {
            continue;
        }
        if line[start..idx].contains(URL_MARKER) {
            break;
        }
        fields.push(&line[start..idx]);
        start = idx + ch.len_utf8();
    }

    fields.push(&line[start..]);
    fields
}

/// Plain delimiter split used for the airport table.
pub fn split_plain_line(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Decode the flight deals table. Rows failing [`FlightRecord::is_valid`] are dropped.
pub fn decode_flights(text: &str) -> Vec<FlightRecord> {
    let mut seen = 0usize;

    let flights: Vec<FlightRecord> = data_lines(text)
        .inspect(|_| seen += 1)
        .map(|line| flight_from_fields(&split_flight_line(line)))
        .filter(FlightRecord::is_valid)
        .collect();

    debug!(
        rows = seen,
        decoded = flights.len(),
        discarded = seen - flights.len(),
        "Decoded flight table"
    );

    flights
}

/// Decode the airport table row by row, keeping source order. Rows failing
/// [`AirportRecord::is_valid`] are dropped.
pub fn decode_airport_rows(text: &str) -> Vec<AirportRecord> {
    let mut seen = 0usize;

    let airports: Vec<AirportRecord> = data_lines(text)
        .inspect(|_| seen += 1)
        .map(|line| airport_from_fields(&split_plain_line(line)))
        .filter(AirportRecord::is_valid)
        .collect();

    debug!(
        rows = seen,
        decoded = airports.len(),
        discarded = seen - airports.len(),
        "Decoded airport table"
    );

    airports
}

/// Decode the airport table into a lookup keyed by code (last row wins).
pub fn decode_airports(text: &str) -> AirportIndex {
    AirportIndex::from_records(decode_airport_rows(text))
}

fn data_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim().lines().skip(1)
}

fn flight_from_fields(fields: &[&str]) -> FlightRecord {
    FlightRecord {
        city: text_at(fields, 0),
        price: parse_int(field_at(fields, 1)),
        days: parse_small_int(field_at(fields, 2)),
        country: text_at(fields, 3),
        outbound_date: text_at(fields, 4),
        outbound_weekday: text_at(fields, 5),
        outbound_time: text_at(fields, 6),
        outbound_part_of_day: text_at(fields, 7),
        return_date: text_at(fields, 8),
        return_weekday: text_at(fields, 9),
        return_time: text_at(fields, 10),
        return_part_of_day: text_at(fields, 11),
        outbound_transfers: parse_small_int(field_at(fields, 12)),
        return_transfers: parse_small_int(field_at(fields, 13)),
        airport_code: text_at(fields, 14),
        link: text_at(fields, 15),
    }
}

fn airport_from_fields(fields: &[&str]) -> AirportRecord {
    AirportRecord {
        code: text_at(fields, 0),
        name: text_at(fields, 1),
        city: text_at(fields, 2),
        country: text_at(fields, 3),
        continent: text_at(fields, 4),
        region: text_at(fields, 5),
        longitude: parse_float(field_at(fields, 6)),
        latitude: parse_float(field_at(fields, 7)),
        rank: parse_small_int(field_at(fields, 8)),
    }
}

fn field_at<'a>(fields: &[&'a str], idx: usize) -> &'a str {
    fields.get(idx).copied().unwrap_or_default()
}

fn text_at(fields: &[&str], idx: usize) -> String {
    field_at(fields, idx).to_string()
}

/// Lenient integer parse: optional leading whitespace and sign, then the
/// longest run of ASCII digits. Trailing garbage is ignored; no digits at all
/// (or overflow) yields 0.
pub(crate) fn parse_int(field: &str) -> i64 {
    let s = field.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

fn parse_small_int(field: &str) -> i32 {
    i32::try_from(parse_int(field)).unwrap_or(0)
}

/// Lenient float parse, the counterpart of [`parse_int`]: the longest prefix of
/// the form `[sign] digits [. digits] [e [sign] digits]` after leading
/// whitespace. No digits, or a non-finite result, yields 0.0.
fn parse_float(field: &str) -> f64 {
    let s = field.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    // An exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
