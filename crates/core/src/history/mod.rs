//! History module - chronological price series for charts.

mod history_model;
mod history_normalizer;
mod history_service;

pub use history_model::{HistoricalPoint, History, HistoryRequest};
pub use history_normalizer::{normalize, parse_timestamp};
pub use history_service::{HistoryService, HistoryServiceTrait};
