//! Telemetry for the path engine

pub mod path_stats;

pub use path_stats::{PathStats, PathStatsSnapshot};
