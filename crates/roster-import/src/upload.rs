//! The batch upload orchestrator.
//!
//! Sequences clean → dedup → existing-record filter → validate → bulk
//! insert over one uploaded batch, short-circuiting to a terminal outcome
//! whenever a stage leaves nothing to process.
//!
//! The batch is all-or-nothing: if any row fails validation, nothing from
//! the batch is persisted and every failure is reported.

use std::collections::BTreeMap;

use roster_core::{
  outcome::UploadOutcome,
  store::EmployeeStore,
  validate::validate_row,
};
use thiserror::Error;

use crate::{
  CellValue, SheetRow, clean::clean_rows, dedup::dedup_rows, error,
};

/// Errors that abort a batch before any outcome can be assembled.
/// Row-validation failures are not errors — they ride inside the outcome.
#[derive(Debug, Error)]
pub enum UploadError<E: std::error::Error> {
  #[error(transparent)]
  Import(#[from] error::Error),

  #[error("store error: {0}")]
  Store(E),
}

/// Run one batch through the full pipeline.
///
/// `rows` is `None` when no file was provided at all — distinct from a
/// file that cleans down to nothing. Every path re-reads the full listing
/// for `total_users_after_upload`.
pub async fn run_bulk_upload<S: EmployeeStore>(
  store: &S,
  rows: Option<Vec<BTreeMap<String, CellValue>>>,
) -> Result<UploadOutcome, UploadError<S::Error>> {
  let Some(raw_rows) = rows else {
    let total = list_all(store).await?;
    return Ok(UploadOutcome::terminal(total, false, false, 0));
  };

  // Clean.
  let cleaned = clean_rows(&raw_rows)?;
  if cleaned.is_empty() {
    let total = list_all(store).await?;
    return Ok(UploadOutcome::terminal(total, true, false, 0));
  }

  // Deduplicate within the file.
  let (unique, duplicates_removed) = dedup_rows(cleaned);
  if unique.is_empty() {
    let total = list_all(store).await?;
    return Ok(UploadOutcome::terminal(total, true, false, duplicates_removed));
  }

  // Filter out user ids already in the store — one snapshot read, never
  // re-checked before the insert.
  let existing = store
    .existing_user_ids()
    .await
    .map_err(UploadError::Store)?;
  let before_filter = unique.len();
  let new_rows: Vec<SheetRow> = unique
    .into_iter()
    .filter(|row| !existing.contains(&row.draft.user_id))
    .collect();
  if new_rows.is_empty() {
    debug_assert!(before_filter > 0);
    let total = list_all(store).await?;
    return Ok(UploadOutcome::terminal(total, false, true, duplicates_removed));
  }

  // Validate every remaining row.
  let attempted = new_rows.len();
  let mut validated = Vec::with_capacity(attempted);
  let mut failures = Vec::new();
  for row in &new_rows {
    match validate_row(&row.draft, row.index) {
      Ok(employee) => validated.push(employee),
      Err(failure) => failures.push(failure),
    }
  }

  tracing::debug!(
    raw = raw_rows.len(),
    attempted,
    duplicates_removed,
    failed = failures.len(),
    "batch pipeline complete"
  );

  if !failures.is_empty() {
    let total = list_all(store).await?;
    return Ok(UploadOutcome {
      newly_created_count: 0,
      failed_rows: failures,
      successful_users: Vec::new(),
      attempted_new_rows_count: attempted,
      total_users_after_upload: total,
      all_users_in_file_existed: false,
      input_data_was_empty_after_cleaning: false,
      file_internal_duplicates_removed_count: duplicates_removed,
    });
  }

  // Persist; the store skips uniqueness conflicts rather than failing, so
  // a race with a concurrent upload lowers the count instead of erroring.
  let created = store
    .insert_ignoring_conflicts(validated.clone())
    .await
    .map_err(UploadError::Store)?;

  let total = list_all(store).await?;
  Ok(UploadOutcome {
    newly_created_count: created,
    failed_rows: Vec::new(),
    successful_users: if created > 0 { validated } else { Vec::new() },
    attempted_new_rows_count: attempted,
    total_users_after_upload: total,
    all_users_in_file_existed: false,
    input_data_was_empty_after_cleaning: false,
    file_internal_duplicates_removed_count: duplicates_removed,
  })
}

async fn list_all<S: EmployeeStore>(
  store: &S,
) -> Result<Vec<roster_core::employee::Employee>, UploadError<S::Error>> {
  store.list_all().await.map_err(UploadError::Store)
}
