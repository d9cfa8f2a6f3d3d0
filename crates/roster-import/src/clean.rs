//! The spreadsheet cleaner — raw labelled cells to canonical
//! [`EmployeeDraft`]s.
//!
//! Renames the fixed human-readable column labels to canonical field
//! names, normalizes whitespace and placeholder text, converts legacy
//! date serials, and drops rows whose identifying key comes out empty.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use roster_core::employee::EmployeeDraft;

use crate::{CellValue, Error, Result, SheetRow};

pub const LABEL_USER_ID: &str = "User ID";
pub const LABEL_USER_NAME: &str = "User Name";
pub const LABEL_EMAIL: &str = "Email";
pub const LABEL_BUSINESS_UNIT: &str = "Business Unit";
pub const LABEL_DEPARTMENT: &str = "Department";
pub const LABEL_DATE_OF_JOINING: &str = "Date of Joining";
pub const LABEL_MOBILE_NUMBER: &str = "Mobile Number";

/// The fixed column contract: every one of these labels must be present in
/// the header, case- and wording-sensitive.
pub const REQUIRED_LABELS: [&str; 7] = [
  LABEL_USER_ID,
  LABEL_USER_NAME,
  LABEL_EMAIL,
  LABEL_BUSINESS_UNIT,
  LABEL_DEPARTMENT,
  LABEL_DATE_OF_JOINING,
  LABEL_MOBILE_NUMBER,
];

/// Literal placeholder strings that legacy exports write into blank cells.
const PLACEHOLDERS: [&str; 2] = ["nan", "None"];

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Clean every row. Fails with [`Error::MissingColumns`] — naming all
/// absent labels — before touching any row; rows whose `User ID` is empty
/// after normalization are dropped (their indices are simply absent from
/// the output).
pub fn clean_rows(
  rows: &[BTreeMap<String, CellValue>],
) -> Result<Vec<SheetRow>> {
  let Some(first) = rows.first() else {
    return Ok(Vec::new());
  };

  let missing: Vec<String> = REQUIRED_LABELS
    .iter()
    .filter(|label| !first.contains_key(**label))
    .map(|label| (*label).to_owned())
    .collect();
  if !missing.is_empty() {
    return Err(Error::MissingColumns(missing));
  }

  let mut cleaned = Vec::with_capacity(rows.len());
  for (index, row) in rows.iter().enumerate() {
    let cell = |label: &str| row.get(label).unwrap_or(&EMPTY_CELL);

    let draft = EmployeeDraft {
      user_id: clean_cell(cell(LABEL_USER_ID)),
      user_name: clean_cell(cell(LABEL_USER_NAME)),
      email: clean_cell(cell(LABEL_EMAIL)),
      business_unit: clean_cell(cell(LABEL_BUSINESS_UNIT)),
      department: clean_cell(cell(LABEL_DEPARTMENT)),
      date_of_joining: clean_date_cell(cell(LABEL_DATE_OF_JOINING)),
      mobile_number: clean_cell(cell(LABEL_MOBILE_NUMBER)),
    };

    if draft.user_id.is_empty() {
      continue;
    }
    cleaned.push(SheetRow { index, draft });
  }
  Ok(cleaned)
}

/// Coerce to string, trim, and blank out placeholder text.
fn clean_cell(value: &CellValue) -> String {
  match value {
    CellValue::Empty => String::new(),
    CellValue::Number(n) => format_number(*n),
    CellValue::Text(s) => {
      let trimmed = s.trim();
      if PLACEHOLDERS.contains(&trimmed) {
        String::new()
      } else {
        trimmed.to_owned()
      }
    }
  }
}

/// The join-date column: numeric cells are day offsets from the legacy
/// spreadsheet serial epoch (1899-12-30, one day before 1900 to absorb the
/// historical leap-year bug); anything else passes through for the
/// validator to judge.
fn clean_date_cell(value: &CellValue) -> String {
  match value {
    CellValue::Number(serial) => serial_to_date(*serial)
      .map(|date| date.format("%Y-%m-%d").to_string())
      .unwrap_or_else(|| format_number(*serial)),
    other => clean_cell(other),
  }
}

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
  if !serial.is_finite() || serial < 0.0 {
    return None;
  }
  let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
  epoch.checked_add_days(Days::new(serial.trunc() as u64))
}

/// Render a numeric cell the way a human typed it: integral values lose
/// the trailing `.0` (a numeric user id must clean to `"1001"`, not
/// `"1001.0"`).
fn format_number(n: f64) -> String {
  if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
    format!("{}", n as i64)
  } else {
    n.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw_row(user_id: &str) -> BTreeMap<String, CellValue> {
    let mut row = BTreeMap::new();
    row.insert(LABEL_USER_ID.into(), CellValue::Text(user_id.into()));
    row.insert(LABEL_USER_NAME.into(), CellValue::Text("  Priya  ".into()));
    row.insert(LABEL_EMAIL.into(), CellValue::Text("p@example.com".into()));
    row.insert(LABEL_BUSINESS_UNIT.into(), CellValue::Text("Chennai".into()));
    row.insert(LABEL_DEPARTMENT.into(), CellValue::Text("Testing".into()));
    row.insert(
      LABEL_DATE_OF_JOINING.into(),
      CellValue::Text("2023-03-15".into()),
    );
    row.insert(LABEL_MOBILE_NUMBER.into(), CellValue::Text("5551234567".into()));
    row
  }

  #[test]
  fn trims_whitespace_and_keeps_indices() {
    let rows = vec![raw_row("  E1  ")];
    let cleaned = clean_rows(&rows).unwrap();
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].index, 0);
    assert_eq!(cleaned[0].draft.user_id, "E1");
    assert_eq!(cleaned[0].draft.user_name, "Priya");
  }

  #[test]
  fn placeholder_text_becomes_empty() {
    let mut row = raw_row("E1");
    row.insert(LABEL_USER_NAME.into(), CellValue::Text("nan".into()));
    row.insert(LABEL_EMAIL.into(), CellValue::Text(" None ".into()));
    let cleaned = clean_rows(&[row]).unwrap();
    assert_eq!(cleaned[0].draft.user_name, "");
    assert_eq!(cleaned[0].draft.email, "");
  }

  #[test]
  fn blank_user_id_rows_are_dropped_without_renumbering() {
    let rows = vec![raw_row(""), raw_row("E2"), raw_row("nan")];
    let cleaned = clean_rows(&rows).unwrap();
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].index, 1);
    assert_eq!(cleaned[0].draft.user_id, "E2");
  }

  #[test]
  fn missing_columns_fail_before_any_row_is_processed() {
    let mut row = raw_row("E1");
    row.remove(LABEL_MOBILE_NUMBER);
    row.remove(LABEL_DEPARTMENT);
    let err = clean_rows(&[row]).unwrap_err();
    match err {
      Error::MissingColumns(labels) => {
        assert_eq!(labels, vec![
          LABEL_DEPARTMENT.to_owned(),
          LABEL_MOBILE_NUMBER.to_owned()
        ]);
      }
      other => panic!("expected MissingColumns, got {other:?}"),
    }
  }

  #[test]
  fn numeric_join_date_converts_from_serial_epoch() {
    let mut row = raw_row("E1");
    row.insert(LABEL_DATE_OF_JOINING.into(), CellValue::Number(45000.0));
    let cleaned = clean_rows(&[row]).unwrap();
    assert_eq!(cleaned[0].draft.date_of_joining, "2023-03-15");
  }

  #[test]
  fn textual_join_date_passes_through() {
    let mut row = raw_row("E1");
    row.insert(
      LABEL_DATE_OF_JOINING.into(),
      CellValue::Text(" not a date ".into()),
    );
    let cleaned = clean_rows(&[row]).unwrap();
    assert_eq!(cleaned[0].draft.date_of_joining, "not a date");
  }

  #[test]
  fn numeric_user_id_cleans_without_decimal_point() {
    let mut row = raw_row("ignored");
    row.insert(LABEL_USER_ID.into(), CellValue::Number(1001.0));
    let cleaned = clean_rows(&[row]).unwrap();
    assert_eq!(cleaned[0].draft.user_id, "1001");
  }

  #[test]
  fn cleaning_is_idempotent_on_clean_input() {
    let rows = vec![raw_row("E1"), raw_row("E2")];
    let once = clean_rows(&rows).unwrap();

    // Feed the cleaned drafts back through as raw text cells.
    let again: Vec<BTreeMap<String, CellValue>> = once
      .iter()
      .map(|r| {
        let d = &r.draft;
        [
          (LABEL_USER_ID, &d.user_id),
          (LABEL_USER_NAME, &d.user_name),
          (LABEL_EMAIL, &d.email),
          (LABEL_BUSINESS_UNIT, &d.business_unit),
          (LABEL_DEPARTMENT, &d.department),
          (LABEL_DATE_OF_JOINING, &d.date_of_joining),
          (LABEL_MOBILE_NUMBER, &d.mobile_number),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), CellValue::Text(v.clone())))
        .collect()
      })
      .collect();
    let twice = clean_rows(&again).unwrap();

    let drafts_once: Vec<_> = once.iter().map(|r| &r.draft).collect();
    let drafts_twice: Vec<_> = twice.iter().map(|r| &r.draft).collect();
    assert_eq!(drafts_once, drafts_twice);
  }

  #[test]
  fn empty_input_cleans_to_empty() {
    assert!(clean_rows(&[]).unwrap().is_empty());
  }
}
