//! The summary assembled for one batch upload run.

use serde::Serialize;

use crate::{employee::Employee, validate::RowFailure};

/// Everything the caller learns about one processed batch.
///
/// `successful_users` is populated only when at least one record was
/// actually persisted; `total_users_after_upload` is a fresh full listing
/// taken after the insert (or after the terminal short-circuit).
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
  pub newly_created_count: usize,
  pub failed_rows: Vec<RowFailure>,
  pub successful_users: Vec<Employee>,
  /// Rows that survived cleaning, deduplication, and the existing-record
  /// filter — the rows validation was attempted on.
  pub attempted_new_rows_count: usize,
  pub total_users_after_upload: Vec<Employee>,
  pub all_users_in_file_existed: bool,
  pub input_data_was_empty_after_cleaning: bool,
  pub file_internal_duplicates_removed_count: usize,
}

impl UploadOutcome {
  /// A terminal outcome for a batch that never reached validation.
  pub fn terminal(
    total_users_after_upload: Vec<Employee>,
    input_data_was_empty_after_cleaning: bool,
    all_users_in_file_existed: bool,
    file_internal_duplicates_removed_count: usize,
  ) -> Self {
    UploadOutcome {
      newly_created_count: 0,
      failed_rows: Vec::new(),
      successful_users: Vec::new(),
      attempted_new_rows_count: 0,
      total_users_after_upload,
      all_users_in_file_existed,
      input_data_was_empty_after_cleaning,
      file_internal_duplicates_removed_count,
    }
  }
}
