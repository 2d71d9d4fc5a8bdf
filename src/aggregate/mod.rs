pub mod compensation;
pub mod languages;
pub mod trend;
pub mod work_preference;

pub use compensation::compensation_sample;
pub use languages::top_languages;
pub use trend::preference_trend;
pub use work_preference::work_preference;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
  pub category: String,
  pub count:    u64,
}

/// Rows per remote-work preference for the current country and developer
/// type. Carries the country so the presentation layer can label the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkPreferenceCounts {
  pub country: String,
  pub counts:  Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCounts {
  pub country:     String,
  pub remote_pref: String,
  pub counts:      Vec<CategoryCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
  pub years:        u32,
  pub compensation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompensationSample {
  pub country:   String,
  pub min_years: u32,
  pub points:    Vec<SamplePoint>,
}

/// One experience bucket's share of each canonical work preference. The
/// three proportions sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
  pub bucket:    String,
  pub hybrid:    f64,
  pub in_person: f64,
  pub remote:    f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceTrend {
  pub country: String,
  pub points:  Vec<TrendPoint>,
}

/// One recomputed chart dataset, pushed to the presentation sink on every
/// filter change. Scatter and trend carry `None` when the filtered subset
/// was empty, so a "no data" message can replace the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartUpdate {
  WorkPreference(WorkPreferenceCounts),
  Languages(LanguageCounts),
  Compensation(Option<CompensationSample>),
  Trend(Option<PreferenceTrend>),
}
