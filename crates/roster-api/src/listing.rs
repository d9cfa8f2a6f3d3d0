//! Handler for `GET /users` — the paginated employee listing.
//!
//! Query parameters are accepted as raw strings so a malformed value never
//! produces a 400: a non-numeric or non-positive `page_number` falls back
//! to 1, a `per_page` outside the allowed set falls back to the default.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::{
  page::{DEFAULT_PAGE_SIZE, EmployeePage, paginate},
  store::EmployeeStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub page_number: Option<String>,
  pub per_page:    Option<String>,
}

/// `GET /users[?page_number=N][&per_page=5|10|15|20]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<EmployeePage>, ApiError>
where
  S: EmployeeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let page_number = parse_page_number(params.page_number.as_deref());
  let per_page = parse_per_page(params.per_page.as_deref());

  let employees = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(paginate(employees, page_number, per_page)))
}

fn parse_page_number(raw: Option<&str>) -> usize {
  raw
    .and_then(|s| s.trim().parse::<usize>().ok())
    .filter(|n| *n >= 1)
    .unwrap_or(1)
}

fn parse_per_page(raw: Option<&str>) -> usize {
  // paginate() re-checks the allowed set; this only handles non-numbers.
  raw
    .and_then(|s| s.trim().parse::<usize>().ok())
    .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_number_falls_back_on_garbage() {
    assert_eq!(parse_page_number(None), 1);
    assert_eq!(parse_page_number(Some("abc")), 1);
    assert_eq!(parse_page_number(Some("0")), 1);
    assert_eq!(parse_page_number(Some("-3")), 1);
    assert_eq!(parse_page_number(Some(" 4 ")), 4);
  }

  #[test]
  fn per_page_falls_back_on_garbage() {
    assert_eq!(parse_per_page(None), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_per_page(Some("lots")), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_per_page(Some("15")), 15);
  }
}
