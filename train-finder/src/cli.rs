//! Interactive terminal session.
//!
//! Asks for the three query inputs one line at a time, runs the query and
//! prints the outcome. Generic over reader and writer so it can be driven
//! from tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::dataset::TripSource;
use crate::display::{NO_TRAINS_MESSAGE, format_error, format_trip};
use crate::query::TripFinder;

pub const DEPARTURE_PROMPT: &str = "enter departure station id: ";
pub const ARRIVAL_PROMPT: &str = "enter arrival station id: ";
pub const CRITERIA_PROMPT: &str = "enter criteria: ";

/// Read one line and return its first whitespace-separated token.
///
/// A blank line, or end of input, yields an empty string.
pub fn read_token<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

/// Prompt for a query, run it, and print the results.
///
/// Returns `Ok(true)` if the query succeeded (even with no trips found),
/// `Ok(false)` if it failed validation or loading. I/O errors on the
/// terminal itself are returned as `Err`.
pub fn run<R, W, S>(input: &mut R, output: &mut W, finder: &TripFinder<S>) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
    S: TripSource,
{
    writeln!(output, "{DEPARTURE_PROMPT}")?;
    let departure = read_token(input)?;
    writeln!(output, "{ARRIVAL_PROMPT}")?;
    let arrival = read_token(input)?;
    writeln!(output, "{CRITERIA_PROMPT}")?;
    let criterion = read_token(input)?;

    debug!(%departure, %arrival, %criterion, "read query input");

    match finder.find_trains(&departure, &arrival, &criterion) {
        Ok(trips) if trips.is_empty() => {
            writeln!(output, "{NO_TRAINS_MESSAGE}")?;
            Ok(true)
        }
        Ok(trips) => {
            for trip in &trips {
                writeln!(output, "{}", format_trip(trip))?;
            }
            Ok(true)
        }
        Err(err) => {
            writeln!(output, "{}", format_error(&err))?;
            Ok(false)
        }
    }
}
