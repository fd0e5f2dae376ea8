//! Backend API integration
//!
//! The kiosk consumes four read-only resources. Transport is handled by
//! [`client`], wire types live in [`types`], and [`sections`] turns raw
//! JSON bodies into typed sections, reporting malformed sections as
//! shape errors instead of failing the whole refresh.

pub mod client;
mod lenient;
pub mod sections;
pub mod types;

pub use client::{Endpoint, HttpWeatherApi, WeatherApi};
pub use sections::{decode_current, decode_daily, decode_hourly, decode_theme};
pub use types::{
    CurrentPayload, DailyEntry, ForecastReading, HourlyEntry, ServerConfig, StationReading,
    StationTrend, SunTimes,
};
