//! Error types for `roster-import`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The header row lacks one or more required column labels. Nothing is
  /// processed in this case.
  #[error("missing required columns: {}", .0.join(", "))]
  MissingColumns(Vec<String>),

  #[error("cannot read workbook: {0}")]
  Workbook(#[from] calamine::XlsxError),

  #[error("workbook contains no worksheets")]
  NoSheets,

  #[error("worksheet has no header row")]
  NoHeader,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
