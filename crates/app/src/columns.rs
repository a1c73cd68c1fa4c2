//! Column encoding helpers.
//!
//! Timestamps are stored as integer microseconds since the Unix epoch so that
//! `ORDER BY created_at` sorts chronologically without string formatting rules.

use jiff::Timestamp;
use sqlx::{Row, sqlite::SqliteRow};

pub(crate) fn timestamp_to_column(timestamp: Timestamp) -> i64 {
    timestamp.as_microsecond()
}

pub(crate) fn timestamp_from_column(row: &SqliteRow, column: &str) -> sqlx::Result<Timestamp> {
    let micros: i64 = row.try_get(column)?;

    Timestamp::from_microsecond(micros).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Decode a non-negative integer column into `u32`.
pub(crate) fn count_from_column(row: &SqliteRow, column: &str) -> sqlx::Result<u32> {
    let value: i64 = row.try_get(column)?;

    u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_value_round_trips_to_the_microsecond() -> testresult::TestResult {
        let timestamp: Timestamp = "2026-02-21T12:00:00.123456Z".parse()?;

        let restored = Timestamp::from_microsecond(timestamp_to_column(timestamp))?;

        assert_eq!(restored, timestamp);

        Ok(())
    }
}
