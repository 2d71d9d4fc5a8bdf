use polars::prelude::DataFrame;

use crate::{
  Result,
  aggregate::TrendPoint,
  dataset::{EXP_GROUP, EXPERIENCE_BUCKETS, REMOTE_WORK},
};

pub const HYBRID: &str = "Hybrid (some remote, some in-person)";
pub const IN_PERSON: &str = "In-person";
pub const REMOTE: &str = "Remote";

/// Per experience bucket, the share of each canonical work preference.
/// Categories missing from a bucket report 0.0; buckets with no rows in the
/// subset are omitted entirely. Returns `None` for an empty subset.
pub fn preference_trend(subset: &DataFrame) -> Result<Option<Vec<TrendPoint>>> {
  if subset.height() == 0 {
    return Ok(None);
  }

  let buckets = subset.column(EXP_GROUP)?.as_materialized_series().str()?;
  let prefs = subset.column(REMOTE_WORK)?.as_materialized_series().str()?;

  let mut counts = [[0u64; 3]; EXPERIENCE_BUCKETS.len()];
  for (bucket, pref) in buckets.into_iter().zip(prefs) {
    let (Some(bucket), Some(pref)) = (bucket, pref) else { continue };
    let Some(row) = EXPERIENCE_BUCKETS.iter().position(|b| *b == bucket) else { continue };
    let column = match pref {
      HYBRID => 0,
      IN_PERSON => 1,
      REMOTE => 2,
      _ => continue,
    };
    counts[row][column] += 1;
  }

  let mut points = Vec::new();
  for (bucket, row) in EXPERIENCE_BUCKETS.iter().zip(counts) {
    let total: u64 = row.iter().sum();
    if total == 0 {
      continue;
    }
    let total = total as f64;
    points.push(TrendPoint {
      bucket:    (*bucket).to_string(),
      hybrid:    row[0] as f64 / total,
      in_person: row[1] as f64 / total,
      remote:    row[2] as f64 / total,
    });
  }

  Ok(Some(points))
}

#[cfg(test)]
mod tests {
  use polars::prelude::*;

  use super::*;
  use crate::dataset;

  fn subset(rows: &[(&str, &str)]) -> DataFrame {
    let buckets: Vec<&str> = rows.iter().map(|(bucket, _)| *bucket).collect();
    let prefs: Vec<&str> = rows.iter().map(|(_, pref)| *pref).collect();
    let n = rows.len();
    df!(
      dataset::COUNTRY => vec!["Germany"; n],
      dataset::YEARS_CODE_PRO => vec![5u32; n],
      dataset::COMPENSATION => vec![50_000.0; n],
      dataset::LANGUAGES => vec!["Rust"; n],
      dataset::REMOTE_WORK => prefs,
      dataset::DEV_TYPE => vec!["Developer"; n],
      dataset::EXP_GROUP => buckets,
    )
    .unwrap()
  }

  #[test]
  fn empty_subset_yields_no_data_signal() {
    let trend = preference_trend(&subset(&[])).unwrap();
    assert_eq!(trend, None);
  }

  #[test]
  fn proportions_sum_to_one_per_bucket() {
    let trend = preference_trend(&subset(&[
      ("0-5", REMOTE),
      ("0-5", REMOTE),
      ("0-5", IN_PERSON),
      ("6-10", HYBRID),
    ]))
    .unwrap()
    .unwrap();

    for point in &trend {
      let sum = point.hybrid + point.in_person + point.remote;
      assert!((sum - 1.0).abs() < 1e-9);
    }
  }

  #[test]
  fn missing_categories_are_zero_filled() {
    let trend = preference_trend(&subset(&[("0-5", REMOTE), ("0-5", REMOTE)]))
      .unwrap()
      .unwrap();

    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].hybrid, 0.0);
    assert_eq!(trend[0].in_person, 0.0);
    assert_eq!(trend[0].remote, 1.0);
  }

  #[test]
  fn absent_buckets_are_omitted_and_order_is_fixed() {
    let trend = preference_trend(&subset(&[
      ("16-20", IN_PERSON),
      ("0-5", REMOTE),
      ("30+", HYBRID),
    ]))
    .unwrap()
    .unwrap();

    let buckets: Vec<&str> = trend.iter().map(|p| p.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["0-5", "16-20", "30+"]);
  }

  #[test]
  fn unknown_preference_values_do_not_contribute() {
    let trend = preference_trend(&subset(&[("0-5", REMOTE), ("0-5", "Sometimes")]))
      .unwrap()
      .unwrap();

    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].remote, 1.0);
  }
}
