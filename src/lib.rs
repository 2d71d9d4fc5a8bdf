pub mod aggregate;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod filter;

mod tally;

pub use aggregate::{
  CategoryCount, ChartUpdate, CompensationSample, LanguageCounts, PreferenceTrend, SamplePoint,
  TrendPoint, WorkPreferenceCounts,
};
pub use config::SurveyConfig;
pub use controller::{ChartSink, Controller, FilterEvent, FilterState};
pub use dataset::SurveyData;
pub use error::{DashboardError, Result};
