//! Handler for `POST /users/import` — the bulk upload endpoint.
//!
//! Accepts one `.xlsx` file per request as `multipart/form-data` under the
//! field name `file`. File-level problems (wrong extension, empty file,
//! unparsable workbook, missing columns) are 400s; row-level validation
//! failures are part of the 200 outcome, never an error status.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Multipart, State},
};
use bytes::Bytes;
use roster_core::{outcome::UploadOutcome, store::EmployeeStore};
use roster_import::{sheet::read_workbook, upload::{UploadError, run_bulk_upload}};
use serde::Serialize;

use crate::error::ApiError;

/// The multipart field the file must arrive under.
pub const FILE_FIELD: &str = "file";

/// The upload outcome plus the human-readable messages the UI shows.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
  pub messages: Vec<String>,
  #[serde(flatten)]
  pub outcome: UploadOutcome,
}

/// `POST /users/import` — multipart body with one `file` field.
pub async fn import<S>(
  State(store): State<Arc<S>>,
  multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
  S: EmployeeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (filename, data) = extract_file(multipart).await?;

  if !filename.to_ascii_lowercase().ends_with(".xlsx") {
    return Err(ApiError::BadRequest(
      "invalid file type; please upload an .xlsx file".to_owned(),
    ));
  }
  if data.is_empty() {
    return Err(ApiError::BadRequest("the uploaded file is empty".to_owned()));
  }

  let rows = read_workbook(&data)?;
  if rows.is_empty() {
    return Err(ApiError::BadRequest(
      "the excel file contains no data rows".to_owned(),
    ));
  }

  let outcome =
    run_bulk_upload(store.as_ref(), Some(rows)).await.map_err(|e| match e {
      UploadError::Import(e) => ApiError::Import(e),
      UploadError::Store(e) => ApiError::Store(Box::new(e)),
    })?;

  tracing::info!(
    file = %filename,
    created = outcome.newly_created_count,
    duplicates = outcome.file_internal_duplicates_removed_count,
    failed = outcome.failed_rows.len(),
    "bulk upload processed"
  );

  Ok(Json(UploadResponse { messages: upload_messages(&outcome), outcome }))
}

/// Pull the first `file` field out of the multipart body.
async fn extract_file(
  mut multipart: Multipart,
) -> Result<(String, Bytes), ApiError> {
  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
  {
    if field.name() != Some(FILE_FIELD) {
      continue;
    }
    let filename = field.file_name().unwrap_or_default().to_owned();
    let data = field
      .bytes()
      .await
      .map_err(|e| ApiError::BadRequest(format!("cannot read upload: {e}")))?;
    return Ok((filename, data));
  }
  Err(ApiError::BadRequest("no file uploaded".to_owned()))
}

/// Assemble the user-facing message list for one outcome, mirroring what
/// the admin screen shows: duplicates note, success count, one warning per
/// failed row, and an explanation whenever nothing was created.
fn upload_messages(outcome: &UploadOutcome) -> Vec<String> {
  let mut messages = Vec::new();

  if outcome.file_internal_duplicates_removed_count > 0 {
    messages.push(format!(
      "{} duplicate row(s) within the uploaded file were ignored (based on \
       User ID, first occurrence kept)",
      outcome.file_internal_duplicates_removed_count
    ));
  }

  if outcome.newly_created_count > 0 {
    messages
      .push(format!("{} user(s) uploaded successfully", outcome.newly_created_count));
  }

  for failure in &outcome.failed_rows {
    let details: Vec<String> = failure
      .errors
      .iter()
      .map(|e| format!("column '{}': {}", e.field, e.message))
      .collect();
    messages.push(format!(
      "excel row {} failed validation: {}",
      failure.excel_row,
      details.join("; ")
    ));
  }

  if outcome.newly_created_count == 0 {
    if outcome.input_data_was_empty_after_cleaning {
      messages.push(
        "no processable user data found in the file after cleaning (e.g. all \
         User IDs were blank)"
          .to_owned(),
      );
    } else if outcome.all_users_in_file_existed {
      messages.push(
        "no new users were added; all unique users from the file already \
         exist"
          .to_owned(),
      );
    } else if outcome.attempted_new_rows_count > 0
      && outcome.failed_rows.is_empty()
    {
      messages.push(
        "data was processed and deemed valid, but no new users were saved; \
         they may have been created concurrently"
          .to_owned(),
      );
    } else if !outcome.failed_rows.is_empty() {
      messages.push(
        "no users were uploaded because the batch contained validation \
         failures"
          .to_owned(),
      );
    }
  }

  messages
}
