//! `.xlsx` reading — raw workbook bytes to rows of label → [`CellValue`].

use std::{collections::BTreeMap, io::Cursor};

use calamine::{Data, Reader as _, Xlsx};

use crate::{CellValue, Error, Result};

/// Read the first worksheet of an `.xlsx` workbook held in memory.
///
/// The first row is the header; every following row becomes a map from
/// header label to raw cell value. A sheet with a header but no data rows
/// yields an empty vector.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<BTreeMap<String, CellValue>>> {
  let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
  let range = workbook.worksheet_range_at(0).ok_or(Error::NoSheets)??;

  let mut rows = range.rows();
  let header: Vec<String> = rows
    .next()
    .ok_or(Error::NoHeader)?
    .iter()
    .map(|cell| cell.to_string().trim().to_owned())
    .collect();

  let mapped = rows
    .map(|row| {
      header
        .iter()
        .cloned()
        .zip(row.iter().map(cell_value))
        .collect()
    })
    .collect();
  Ok(mapped)
}

/// Collapse calamine's cell representation into the three shapes the
/// cleaner cares about. Date-typed cells come back as their underlying
/// serial number; the cleaner decides whether to interpret it as a date.
fn cell_value(data: &Data) -> CellValue {
  match data {
    Data::Empty | Data::Error(_) => CellValue::Empty,
    Data::String(s) => CellValue::Text(s.clone()),
    Data::Float(f) => CellValue::Number(*f),
    Data::Int(i) => CellValue::Number(*i as f64),
    Data::Bool(b) => CellValue::Text(b.to_string()),
    Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
    Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
  }
}
