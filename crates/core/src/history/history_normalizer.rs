//! Turns a raw newest-first feed into a chronological typed series.

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use std::collections::HashSet;
use tickerfolio_market_data::parsing::{parse_decimal, parse_volume};
use tickerfolio_market_data::RawHistoryPoint;

use super::history_model::HistoricalPoint;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a feed timestamp (UTC) into epoch seconds. A bare date is midnight.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|datetime| datetime.and_utc().timestamp())
}

fn parse_row(row: &RawHistoryPoint) -> Option<HistoricalPoint> {
    let timestamp = parse_timestamp(&row.datetime)?;
    let open = parse_decimal(&row.open)?;
    let high = parse_decimal(&row.high)?;
    let low = parse_decimal(&row.low)?;
    let close = parse_decimal(&row.close)?;
    let volume = parse_volume(row.volume.as_deref()).unwrap_or_else(|| {
        warn!(
            "Unreadable volume '{:?}' at {}; using 0",
            row.volume, row.datetime
        );
        0
    });

    Some(HistoricalPoint {
        timestamp,
        open,
        high,
        low,
        close,
        volume,
    })
}

/// Normalize a raw feed into strictly increasing timestamp order.
///
/// Rows are expected newest-first. They are reversed and then stably sorted
/// by timestamp, so a feed that is out of order still comes out ordered.
/// Rows with an unreadable date or price are skipped. When two rows share a
/// timestamp the one appearing first in the feed wins. Empty input gives an
/// empty series.
pub fn normalize(raw: Vec<RawHistoryPoint>) -> Vec<HistoricalPoint> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut points = Vec::with_capacity(raw.len());

    for row in &raw {
        let Some(point) = parse_row(row) else {
            warn!("Skipping unreadable history row: {:?}", row);
            continue;
        };
        if !seen.insert(point.timestamp) {
            warn!(
                "Dropping duplicate history row at {} ({})",
                row.datetime, point.timestamp
            );
            continue;
        }
        points.push(point);
    }

    points.reverse();
    points.sort_by_key(|point| point.timestamp);
    points
}
