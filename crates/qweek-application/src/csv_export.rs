//! Spreadsheet export of participant results.
//!
//! `;`-delimited, UTF-8 with a byte order mark so spreadsheet apps detect the
//! encoding, timestamps in local time as `d/m/yyyy, H:MM:SS` (es-ES style, no
//! padding on day, month or hour).

use chrono::{DateTime, Local, TimeZone, Utc};

use qweek_core::participant::Participant;

pub const CSV_FILE_NAME: &str = "qweek-results.csv";
pub const CSV_BOM: &str = "\u{feff}";
pub const CSV_DELIMITER: char = ';';
pub const CSV_HEADERS: [&str; 4] = ["Nombre", "Apellido", "Calificación", "Fecha y Hora"];

const TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y, %-H:%M:%S";

/// Renders participants, in the given order, with local timestamps.
pub fn participants_to_csv(participants: &[Participant]) -> String {
    participants_to_csv_in(participants, &Local)
}

/// Renders participants with timestamps converted to `tz`.
pub fn participants_to_csv_in<Tz: TimeZone>(participants: &[Participant], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::with_capacity(participants.len() + 1);
    lines.push(join_row(CSV_HEADERS.iter().map(|h| h.to_string())));

    for participant in participants {
        lines.push(join_row([
            participant.first_name.clone(),
            participant.last_name.clone(),
            participant.score_label(),
            format_timestamp_in(&participant.created_at, tz),
        ]));
    }

    format!("{}{}", CSV_BOM, lines.join("\n"))
}

pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Quotes a cell if it contains the delimiter, a quote or a line break.
pub fn escape_cell(cell: &str) -> String {
    if cell.contains([CSV_DELIMITER, '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn join_row<I>(cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    cells
        .into_iter()
        .map(|cell| escape_cell(&cell))
        .collect::<Vec<_>>()
        .join(&CSV_DELIMITER.to_string())
}
