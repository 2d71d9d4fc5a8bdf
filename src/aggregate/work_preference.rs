use polars::prelude::DataFrame;

use crate::{Result, aggregate::CategoryCount, dataset::REMOTE_WORK, tally};

/// Counts rows per remote-work preference. Output is sorted by category
/// label so recomputations are deterministic; the sum of counts equals the
/// subset height.
pub fn work_preference(subset: &DataFrame) -> Result<Vec<CategoryCount>> {
  let prefs = subset.column(REMOTE_WORK)?.as_materialized_series().str()?;
  let mut counts = tally::rank(prefs.into_iter().flatten());
  counts.sort_by(|a, b| a.0.cmp(&b.0));
  Ok(counts.into_iter().map(|(category, count)| CategoryCount { category, count }).collect())
}

#[cfg(test)]
mod tests {
  use polars::prelude::*;

  use super::*;
  use crate::{dataset, filter::filter_subset};

  fn germany_frame() -> DataFrame {
    df!(
      dataset::COUNTRY => ["Germany", "Germany", "Germany", "France"],
      dataset::YEARS_CODE_PRO => [3u32, 8, 15, 4],
      dataset::COMPENSATION => [50_000.0, 60_000.0, 70_000.0, 55_000.0],
      dataset::LANGUAGES => ["Rust", "Python", "Go", "Rust"],
      dataset::REMOTE_WORK => ["Remote", "Remote", "In-person", "Remote"],
      dataset::DEV_TYPE => ["Developer", "Developer", "Developer", "Developer"],
      dataset::EXP_GROUP => ["0-5", "6-10", "11-15", "0-5"],
    )
    .unwrap()
  }

  #[test]
  fn counts_germany_example() {
    let frame = germany_frame();
    let subset = filter_subset(&frame, "Germany", dataset::ALL_DEV_TYPES, None, None).unwrap();
    let counts = work_preference(&subset).unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0], CategoryCount { category: "In-person".to_string(), count: 1 });
    assert_eq!(counts[1], CategoryCount { category: "Remote".to_string(), count: 2 });
  }

  #[test]
  fn counts_sum_to_subset_height() {
    let frame = germany_frame();
    let subset = filter_subset(&frame, "Germany", dataset::ALL_DEV_TYPES, None, None).unwrap();
    let counts = work_preference(&subset).unwrap();
    let total: u64 = counts.iter().map(|c| c.count).sum();
    assert_eq!(total, subset.height() as u64);
  }

  #[test]
  fn empty_subset_counts_empty() {
    let frame = germany_frame();
    let subset = filter_subset(&frame, "Nowhere", dataset::ALL_DEV_TYPES, None, None).unwrap();
    assert!(work_preference(&subset).unwrap().is_empty());
  }
}
