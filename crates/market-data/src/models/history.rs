use serde::{Deserialize, Serialize};

/// Bar size requested from a history source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// One row of a raw historical feed, exactly as the upstream delivers it.
///
/// Every field is textual. Feeds arrive newest-first and numeric precision
/// varies between rows; turning this into an ordered typed series is the
/// job of the core normalizer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHistoryPoint {
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`, UTC
    pub datetime: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    /// Absent for instruments without volume (FX, indices)
    #[serde(default)]
    pub volume: Option<String>,
}

impl RawHistoryPoint {
    pub fn new(
        datetime: impl Into<String>,
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
        volume: Option<&str>,
    ) -> Self {
        Self {
            datetime: datetime.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume: volume.map(str::to_string),
        }
    }
}
