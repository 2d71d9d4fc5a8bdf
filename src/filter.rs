use polars::prelude::*;

use crate::{
  Result,
  dataset::{ALL_DEV_TYPES, COUNTRY, DEV_TYPE, REMOTE_WORK, YEARS_CODE_PRO},
};

/// Selects the rows a chart aggregates over. Country always applies; the
/// remote preference and minimum-years predicates apply only when the caller
/// passes them. The developer-type filter goes last: the `"All"` sentinel
/// short-circuits it, anything else keeps rows whose raw multi-value
/// `DevType` field contains the selection as a case-sensitive substring.
pub fn filter_subset(
  frame: &DataFrame,
  country: &str,
  dev_type: &str,
  remote_pref: Option<&str>,
  min_years: Option<u32>,
) -> Result<DataFrame> {
  let mut subset = frame.clone().lazy().filter(col(COUNTRY).eq(lit(country)));

  if let Some(pref) = remote_pref {
    subset = subset.filter(col(REMOTE_WORK).eq(lit(pref)));
  }
  if let Some(years) = min_years {
    subset = subset.filter(col(YEARS_CODE_PRO).gt_eq(lit(years)));
  }
  if dev_type != ALL_DEV_TYPES {
    subset = subset.filter(col(DEV_TYPE).str().contains_literal(lit(dev_type)));
  }

  Ok(subset.collect()?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dataset::{COMPENSATION, EXP_GROUP, LANGUAGES};

  fn normalized_frame() -> DataFrame {
    df!(
      COUNTRY => ["Germany", "Germany", "Germany", "France"],
      YEARS_CODE_PRO => [5u32, 12, 20, 7],
      COMPENSATION => [60_000.0, 80_000.0, 90_000.0, 70_000.0],
      LANGUAGES => ["Rust;Python", "Python", "Go", "Rust"],
      REMOTE_WORK => ["Remote", "In-person", "Remote", "Remote"],
      DEV_TYPE => [
        "Developer, back-end", "Developer, back-end;Developer, front-end",
        "Academic researcher", "Developer, back-end",
      ],
      EXP_GROUP => ["0-5", "11-15", "16-20", "6-10"],
    )
    .unwrap()
  }

  #[test]
  fn country_filter_always_applies() {
    let frame = normalized_frame();
    let subset = filter_subset(&frame, "Germany", ALL_DEV_TYPES, None, None).unwrap();
    assert_eq!(subset.height(), 3);
  }

  #[test]
  fn all_sentinel_leaves_subset_unchanged() {
    let frame = normalized_frame();
    let with_all = filter_subset(&frame, "Germany", ALL_DEV_TYPES, None, None).unwrap();
    let plain = frame.clone().lazy().filter(col(COUNTRY).eq(lit("Germany"))).collect().unwrap();
    assert_eq!(with_all.height(), plain.height());
  }

  #[test]
  fn dev_type_matches_raw_field_as_substring() {
    let frame = normalized_frame();
    let subset = filter_subset(&frame, "Germany", "Developer, front-end", None, None).unwrap();
    // Only the multi-value row mentions front-end.
    assert_eq!(subset.height(), 1);

    // A partial token still matches the raw field.
    let subset = filter_subset(&frame, "Germany", "Developer", None, None).unwrap();
    assert_eq!(subset.height(), 2);
  }

  #[test]
  fn remote_and_min_years_apply_only_when_requested() {
    let frame = normalized_frame();
    let remote = filter_subset(&frame, "Germany", ALL_DEV_TYPES, Some("Remote"), None).unwrap();
    assert_eq!(remote.height(), 2);

    let experienced =
      filter_subset(&frame, "Germany", ALL_DEV_TYPES, None, Some(10)).unwrap();
    assert_eq!(experienced.height(), 2);

    let both =
      filter_subset(&frame, "Germany", ALL_DEV_TYPES, Some("Remote"), Some(10)).unwrap();
    assert_eq!(both.height(), 1);
  }

  #[test]
  fn filtering_is_idempotent_and_leaves_input_untouched() {
    let frame = normalized_frame();
    let before = frame.clone();

    let first = filter_subset(&frame, "Germany", "Developer, back-end", Some("Remote"), Some(0))
      .unwrap();
    let second = filter_subset(&frame, "Germany", "Developer, back-end", Some("Remote"), Some(0))
      .unwrap();

    assert!(first.equals(&second));
    assert!(frame.equals(&before));
  }
}
