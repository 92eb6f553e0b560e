/// Length of the default history window, in days
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

pub const SECONDS_PER_DAY: i64 = 86_400;
