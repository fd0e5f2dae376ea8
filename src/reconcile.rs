//! Data source reconciliation
//!
//! Two independent sources describe the same weather: a local sensor
//! station and a forecast provider. This module decides, per quantity,
//! which source is present, which one wins, and how the chosen value is
//! formatted. Everything here is a pure function of the latest payload
//! and the station enablement, so callers can recompute it in full each
//! cycle.

mod availability;
mod quality;
mod resolver;
mod trend;

pub use availability::{
    AvailabilitySnapshot, Quantity, Source, StationEnablement, compute_availability, is_present,
    is_trend_present,
};
pub use quality::{
    AvailabilitySummary, QualityAssessment, QualityLevel, assess_forecast, assess_station,
    co2_level, noise_level, summarize,
};
pub use resolver::{ResolvedDataPoint, Resolver, SourceInfo, format_value};
pub use trend::{AnalysisQuality, Trend, TrendOrigin, TrendReading, derive_fallback_trend};
