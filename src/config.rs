use std::path::PathBuf;

/// Knobs for loading and sampling the survey dataset. The defaults reproduce
/// the published dashboard: compensation capped below 500k, top-5 countries,
/// top-6 developer types, a 1000-row scatter sample with a fixed seed.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
  pub csv_path:         PathBuf,
  pub compensation_cap: f64,
  pub top_countries:    usize,
  pub top_dev_types:    usize,
  pub sample_limit:     usize,
  pub sample_seed:      u64,
}

impl SurveyConfig {
  pub fn new(csv_path: impl Into<PathBuf>) -> SurveyConfig {
    SurveyConfig { csv_path: csv_path.into(), ..SurveyConfig::default() }
  }
}

impl Default for SurveyConfig {
  fn default() -> SurveyConfig {
    SurveyConfig {
      csv_path:         PathBuf::from("survey_results_public.csv"),
      compensation_cap: 500_000.0,
      top_countries:    5,
      top_dev_types:    6,
      sample_limit:     1000,
      sample_seed:      42,
    }
  }
}
