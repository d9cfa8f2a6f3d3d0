//! The `EmployeeStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `roster-store-sqlite`). The import pipeline and the HTTP layer depend on
//! this abstraction, not on any concrete backend, so they can be tested
//! against an in-memory fake.

use std::{collections::HashSet, future::Future};

use crate::employee::Employee;

/// Abstraction over an employee record store.
///
/// Exactly three operations: a conflict-ignoring bulk insert, a full
/// ordered listing, and a snapshot of the identifying keys already
/// present. Records are immutable once persisted — there is no update or
/// delete.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Bulk-insert `employees`, silently skipping any row whose `user_id`
  /// already exists. Returns the number of rows actually inserted, which
  /// may be lower than `employees.len()` if a concurrent upload won a
  /// race on the same key.
  fn insert_ignoring_conflicts(
    &self,
    employees: Vec<Employee>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// List every stored employee, ordered by `user_id` ascending.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// One point-in-time fetch of all stored `user_id`s. Callers treat this
  /// as a snapshot: it is not re-checked before a later insert.
  fn existing_user_ids(
    &self,
  ) -> impl Future<Output = Result<HashSet<String>, Self::Error>> + Send + '_;
}
