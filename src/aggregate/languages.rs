use polars::prelude::DataFrame;

use crate::{Result, aggregate::CategoryCount, dataset::LANGUAGES, tally};

const TOP_LANGUAGES: usize = 10;

/// Splits every row's semicolon-delimited language field, trims the tokens,
/// and returns the ten most frequent languages. The sort is stable: equal
/// counts keep first-encountered order.
pub fn top_languages(subset: &DataFrame) -> Result<Vec<CategoryCount>> {
  let fields = subset.column(LANGUAGES)?.as_materialized_series().str()?;
  let tokens = fields
    .into_iter()
    .flatten()
    .flat_map(|field| field.split(';'))
    .map(str::trim)
    .filter(|token| !token.is_empty());

  let mut ranked = tally::rank(tokens);
  ranked.truncate(TOP_LANGUAGES);
  Ok(ranked.into_iter().map(|(category, count)| CategoryCount { category, count }).collect())
}
