//! Intra-file deduplication — first occurrence per user id wins.

use std::collections::HashSet;

use crate::SheetRow;

/// Remove rows whose `user_id` repeats within the batch, keeping the first
/// occurrence in original order. Returns the surviving rows and the count
/// removed. Running it twice removes nothing further.
pub fn dedup_rows(rows: Vec<SheetRow>) -> (Vec<SheetRow>, usize) {
  let before = rows.len();
  let mut seen: HashSet<String> = HashSet::with_capacity(before);
  let unique: Vec<SheetRow> = rows
    .into_iter()
    .filter(|row| seen.insert(row.draft.user_id.clone()))
    .collect();
  let removed = before - unique.len();
  (unique, removed)
}
