//! Spreadsheet import pipeline for the roster store.
//!
//! Pipeline:
//!   raw `.xlsx` bytes
//!     └─ sheet::read_workbook()   → rows of label → CellValue
//!          └─ clean::clean_rows()  → Vec<SheetRow> (canonical drafts)
//!               └─ dedup::dedup_rows() → first occurrence per user id
//!                    └─ upload::run_bulk_upload() → UploadOutcome
//!
//! The orchestrator at the end also performs the existing-record filter and
//! the bulk insert through the [`EmployeeStore`] trait; it never talks to a
//! concrete backend.
//!
//! [`EmployeeStore`]: roster_core::store::EmployeeStore

pub mod clean;
pub mod dedup;
pub mod error;
pub mod sheet;
pub mod upload;

pub use error::{Error, Result};

use roster_core::employee::EmployeeDraft;

/// A raw cell as read from the workbook, before cleaning.
///
/// Kept deliberately small: the cleaner only distinguishes text, numbers
/// (which may be legacy date serials), and empties.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
  Text(String),
  Number(f64),
  Empty,
}

/// A cleaned row paired with its 0-based position in the original sheet
/// (excluding the header row). The position survives deduplication and
/// existing-record filtering so validation failures can report the true
/// spreadsheet row number.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
  pub index: usize,
  pub draft: EmployeeDraft,
}
