use polars::prelude::DataFrame;

use crate::{
  Result,
  aggregate::SamplePoint,
  dataset::{COMPENSATION, YEARS_CODE_PRO},
};

/// Draws a seeded sample of at most `limit` (experience, compensation)
/// pairs, unsorted. Returns `None` for an empty subset so the caller can
/// distinguish "no data" from a small sample. The fixed seed makes repeated
/// calls over identical input reproduce the identical sample.
pub fn compensation_sample(
  subset: &DataFrame,
  limit: usize,
  seed: u64,
) -> Result<Option<Vec<SamplePoint>>> {
  if subset.height() == 0 {
    return Ok(None);
  }

  let n = subset.height().min(limit);
  let sampled = subset.sample_n_literal(n, false, true, Some(seed))?;

  let years = sampled.column(YEARS_CODE_PRO)?.as_materialized_series().u32()?;
  let compensation = sampled.column(COMPENSATION)?.as_materialized_series().f64()?;

  let points = years
    .into_iter()
    .zip(compensation)
    .filter_map(|(years, compensation)| {
      Some(SamplePoint { years: years?, compensation: compensation? })
    })
    .collect();

  Ok(Some(points))
}
