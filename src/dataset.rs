use std::collections::BTreeSet;
use std::sync::Arc;

use polars::prelude::*;
use tracing::info;

use crate::{DashboardError, Result, config::SurveyConfig, tally};

pub const COUNTRY: &str = "Country";
pub const YEARS_CODE_PRO: &str = "YearsCodePro";
pub const COMPENSATION: &str = "ConvertedCompYearly";
pub const LANGUAGES: &str = "LanguageHaveWorkedWith";
pub const REMOTE_WORK: &str = "RemoteWork";
pub const DEV_TYPE: &str = "DevType";

/// Derived column holding the experience bucket label.
pub const EXP_GROUP: &str = "ExpGroup";

pub const REQUIRED_COLUMNS: [&str; 6] =
  [COUNTRY, YEARS_CODE_PRO, COMPENSATION, LANGUAGES, REMOTE_WORK, DEV_TYPE];

/// Developer-type selection meaning "no filter applied".
pub const ALL_DEV_TYPES: &str = "All";

/// Fixed, right-inclusive experience buckets: 5 years lands in `0-5`,
/// 6 in `6-10`, everything past 30 in `30+`.
pub const EXPERIENCE_BUCKETS: [&str; 7] =
  ["0-5", "6-10", "11-15", "16-20", "21-25", "26-30", "30+"];

/// The normalized survey table plus the widget option lists derived from it.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug)]
pub struct SurveyData {
  frame:        DataFrame,
  config:       SurveyConfig,
  countries:    Vec<String>,
  dev_types:    Vec<String>,
  remote_prefs: Vec<String>,
}

impl SurveyData {
  /// Reads the survey CSV and normalizes it: keeps the six required columns,
  /// drops rows with missing values, keeps only all-digit experience values,
  /// drops compensation outliers, and derives the experience bucket. Fails
  /// before materializing any row if a required column is absent.
  pub fn load(config: SurveyConfig) -> Result<SurveyData> {
    let path = config.csv_path.to_string_lossy();

    // Force the two value-sensitive columns to String so that free-text
    // entries like "Less than 1 year" never abort the scan; all numeric
    // coercion happens in `normalize`.
    let overrides: Schema = [
      Field::new(YEARS_CODE_PRO.into(), DataType::String),
      Field::new(COMPENSATION.into(), DataType::String),
    ]
    .into_iter()
    .collect();

    let mut source = LazyCsvReader::new(PlPath::new(&path))
      .with_null_values(Some(NullValues::AllColumnsSingle("NA".into())))
      .with_dtype_overwrite(Some(Arc::new(overrides)))
      .finish()?;

    let schema = source.collect_schema()?;
    for name in REQUIRED_COLUMNS {
      if !schema.contains(name) {
        return Err(DashboardError::MissingColumn { name: name.to_string() });
      }
    }

    SurveyData::from_lazy(source, config)
  }

  /// Normalizes an already-materialized raw table. Used by tests to bypass
  /// the CSV layer; the frame must carry the six required columns.
  pub fn from_frame(raw: DataFrame, config: SurveyConfig) -> Result<SurveyData> {
    SurveyData::from_lazy(raw.lazy(), config)
  }

  fn from_lazy(source: LazyFrame, config: SurveyConfig) -> Result<SurveyData> {
    let frame = normalize(source, config.compensation_cap).collect()?;
    if frame.height() == 0 {
      return Err(DashboardError::EmptyDataset);
    }

    let countries = top_countries(&frame, config.top_countries)?;
    let dev_types = top_dev_types(&frame, config.top_dev_types)?;
    let remote_prefs = remote_preferences(&frame)?;

    info!(
      rows = frame.height() as u64,
      countries = countries.len() as u64,
      dev_types = dev_types.len() as u64,
      remote_prefs = remote_prefs.len() as u64,
      "normalized survey dataset"
    );

    Ok(SurveyData { frame, config, countries, dev_types, remote_prefs })
  }

  pub fn frame(&self) -> &DataFrame { &self.frame }
  pub fn config(&self) -> &SurveyConfig { &self.config }

  /// The most frequent countries, most frequent first, ties broken by first
  /// appearance in the data.
  pub fn countries(&self) -> &[String] { &self.countries }

  /// The `"All"` sentinel followed by the most frequent single developer-type
  /// tokens.
  pub fn dev_types(&self) -> &[String] { &self.dev_types }

  /// Distinct remote-work preferences, sorted lexicographically.
  pub fn remote_prefs(&self) -> &[String] { &self.remote_prefs }
}

fn normalize(source: LazyFrame, compensation_cap: f64) -> LazyFrame {
  let no_missing = REQUIRED_COLUMNS
    .iter()
    .fold(lit(true), |acc, name| acc.and(col(*name).is_not_null()));

  source
    .select(REQUIRED_COLUMNS.map(|name| col(name)))
    .filter(no_missing)
    .with_column(col(YEARS_CODE_PRO).cast(DataType::String))
    .filter(col(YEARS_CODE_PRO).str().contains(lit("^[0-9]+$"), true))
    .with_columns([
      col(YEARS_CODE_PRO).cast(DataType::UInt32),
      col(COMPENSATION).cast(DataType::Float64),
    ])
    .filter(col(COMPENSATION).lt(lit(compensation_cap)))
    .with_column(experience_bucket())
}

fn experience_bucket() -> Expr {
  when(col(YEARS_CODE_PRO).lt_eq(lit(5u32)))
    .then(lit(EXPERIENCE_BUCKETS[0]))
    .when(col(YEARS_CODE_PRO).lt_eq(lit(10u32)))
    .then(lit(EXPERIENCE_BUCKETS[1]))
    .when(col(YEARS_CODE_PRO).lt_eq(lit(15u32)))
    .then(lit(EXPERIENCE_BUCKETS[2]))
    .when(col(YEARS_CODE_PRO).lt_eq(lit(20u32)))
    .then(lit(EXPERIENCE_BUCKETS[3]))
    .when(col(YEARS_CODE_PRO).lt_eq(lit(25u32)))
    .then(lit(EXPERIENCE_BUCKETS[4]))
    .when(col(YEARS_CODE_PRO).lt_eq(lit(30u32)))
    .then(lit(EXPERIENCE_BUCKETS[5]))
    .otherwise(lit(EXPERIENCE_BUCKETS[6]))
    .alias(EXP_GROUP)
}

fn top_countries(frame: &DataFrame, limit: usize) -> Result<Vec<String>> {
  let countries = frame.column(COUNTRY)?.as_materialized_series().str()?;
  let mut ranked = tally::rank(countries.into_iter().flatten());
  ranked.truncate(limit);
  Ok(ranked.into_iter().map(|(country, _)| country).collect())
}

fn top_dev_types(frame: &DataFrame, limit: usize) -> Result<Vec<String>> {
  let fields = frame.column(DEV_TYPE)?.as_materialized_series().str()?;
  let tokens = fields
    .into_iter()
    .flatten()
    .flat_map(|field| field.split(';'))
    .map(str::trim)
    .filter(|token| !token.is_empty());

  let mut ranked = tally::rank(tokens);
  ranked.truncate(limit);

  let mut dev_types = vec![ALL_DEV_TYPES.to_string()];
  dev_types.extend(ranked.into_iter().map(|(token, _)| token));
  Ok(dev_types)
}

fn remote_preferences(frame: &DataFrame) -> Result<Vec<String>> {
  let prefs = frame.column(REMOTE_WORK)?.as_materialized_series().str()?;
  let distinct: BTreeSet<&str> = prefs.into_iter().flatten().collect();
  Ok(distinct.into_iter().map(str::to_string).collect())
}
