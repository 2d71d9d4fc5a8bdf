use std::collections::HashMap;

/// Counts occurrences in first-seen order, then stable-sorts by count
/// descending. Ties keep the order in which a value first appeared, so the
/// ranking is fully deterministic for a given input sequence.
pub(crate) fn rank<'a, I>(items: I) -> Vec<(String, u64)>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut order: Vec<(String, u64)> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for item in items {
    match index.get(item) {
      Some(&at) => order[at].1 += 1,
      None => {
        index.insert(item.to_string(), order.len());
        order.push((item.to_string(), 1));
      }
    }
  }

  order.sort_by(|a, b| b.1.cmp(&a.1));
  order
}
