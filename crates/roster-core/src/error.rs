//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown business unit: {0:?}")]
  UnknownBusinessUnit(String),

  #[error("unknown department: {0:?}")]
  UnknownDepartment(String),

  #[error("invalid date (expected YYYY-MM-DD): {0:?}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
