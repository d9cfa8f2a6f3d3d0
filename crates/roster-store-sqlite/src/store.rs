//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::{collections::HashSet, path::Path};

use roster_core::{employee::Employee, store::EmployeeStore};

use crate::{Result, encode::RawEmployee, schema::SCHEMA};

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = crate::Error;

  async fn insert_ignoring_conflicts(
    &self,
    employees: Vec<Employee>,
  ) -> Result<usize> {
    let rows: Vec<RawEmployee> =
      employees.iter().map(RawEmployee::from_employee).collect();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut inserted = 0usize;
        {
          let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO employees (
               user_id, user_name, email, business_unit, department,
               date_of_joining, mobile_number
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          )?;
          for row in &rows {
            inserted += stmt.execute(rusqlite::params![
              row.user_id,
              row.user_name,
              row.email,
              row.business_unit,
              row.department,
              row.date_of_joining,
              row.mobile_number,
            ])?;
          }
        }
        tx.commit()?;
        Ok(inserted)
      })
      .await?;

    Ok(inserted)
  }

  async fn list_all(&self) -> Result<Vec<Employee>> {
    let raws: Vec<RawEmployee> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT user_id, user_name, email, business_unit, department,
                  date_of_joining, mobile_number
           FROM employees
           ORDER BY user_id ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawEmployee {
              user_id:         row.get(0)?,
              user_name:       row.get(1)?,
              email:           row.get(2)?,
              business_unit:   row.get(3)?,
              department:      row.get(4)?,
              date_of_joining: row.get(5)?,
              mobile_number:   row.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn existing_user_ids(&self) -> Result<HashSet<String>> {
    let ids = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT user_id FROM employees")?;
        let ids = stmt
          .query_map([], |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<HashSet<_>>>()?;
        Ok(ids)
      })
      .await?;
    Ok(ids)
  }
}
