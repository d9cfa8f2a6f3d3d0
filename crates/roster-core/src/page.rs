//! Pagination over the full employee listing.
//!
//! The listing itself comes from the store, already ordered by `user_id`;
//! this module only slices it and computes navigation metadata. Requests
//! outside the valid range never error — they clamp.

use serde::Serialize;

use crate::employee::Employee;

/// Page sizes a caller may request; anything else falls back to
/// [`DEFAULT_PAGE_SIZE`].
pub const ALLOWED_PAGE_SIZES: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of the employee listing plus navigation metadata.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePage {
  pub users: Vec<Employee>,
  pub page_number: usize,
  pub per_page: usize,
  pub total_users: usize,
  pub total_pages: usize,
  pub has_previous: bool,
  /// Clamped: equals `page_number` when there is no previous page.
  pub previous_page_number: usize,
  pub has_next: bool,
  /// Clamped: equals `page_number` when there is no next page.
  pub next_page_number: usize,
}

/// Slice `employees` into the requested page.
///
/// `per_page` outside [`ALLOWED_PAGE_SIZES`] falls back to the default;
/// `page_number` of zero falls back to 1; a page past the end returns the
/// last page.
pub fn paginate(
  employees: Vec<Employee>,
  page_number: usize,
  per_page: usize,
) -> EmployeePage {
  let per_page = if ALLOWED_PAGE_SIZES.contains(&per_page) {
    per_page
  } else {
    DEFAULT_PAGE_SIZE
  };
  let page_number = page_number.max(1);

  let total_users = employees.len();
  let total_pages = total_users.div_ceil(per_page).max(1);
  let page_number = page_number.min(total_pages);

  let start = (page_number - 1) * per_page;
  let users: Vec<Employee> =
    employees.into_iter().skip(start).take(per_page).collect();

  let has_previous = page_number > 1;
  let has_next = page_number < total_pages;

  EmployeePage {
    users,
    page_number,
    per_page,
    total_users,
    total_pages,
    has_previous,
    previous_page_number: if has_previous { page_number - 1 } else { page_number },
    has_next,
    next_page_number: if has_next { page_number + 1 } else { page_number },
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::employee::{BusinessUnit, Department};

  fn employees(n: usize) -> Vec<Employee> {
    (0..n)
      .map(|i| Employee {
        user_id: format!("E{i:03}"),
        user_name: format!("Employee {i}"),
        email: format!("e{i}@example.com"),
        business_unit: BusinessUnit::Chennai,
        department: Department::Software,
        date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        mobile_number: "5551234567".into(),
      })
      .collect()
  }

  #[test]
  fn middle_page_has_both_neighbours() {
    let page = paginate(employees(30), 2, 10);
    assert_eq!(page.users.len(), 10);
    assert_eq!(page.users[0].user_id, "E010");
    assert!(page.has_previous);
    assert_eq!(page.previous_page_number, 1);
    assert!(page.has_next);
    assert_eq!(page.next_page_number, 3);
    assert_eq!(page.total_pages, 3);
  }

  #[test]
  fn disallowed_per_page_falls_back_to_default() {
    let page = paginate(employees(12), 1, 7);
    assert_eq!(page.per_page, DEFAULT_PAGE_SIZE);
    assert_eq!(page.users.len(), 10);
  }

  #[test]
  fn page_past_the_end_clamps_to_last_page() {
    let page = paginate(employees(12), 9999, 10);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.users.len(), 2);
    assert!(!page.has_next);
    assert_eq!(page.next_page_number, 2);
  }

  #[test]
  fn zero_page_number_falls_back_to_first_page() {
    let page = paginate(employees(3), 0, 5);
    assert_eq!(page.page_number, 1);
    assert!(!page.has_previous);
    assert_eq!(page.previous_page_number, 1);
  }

  #[test]
  fn empty_listing_is_a_single_empty_page() {
    let page = paginate(Vec::new(), 1, 10);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_users, 0);
    assert!(page.users.is_empty());
    assert!(!page.has_previous && !page.has_next);
  }

  #[test]
  fn exact_multiple_has_no_phantom_page() {
    let page = paginate(employees(20), 2, 10);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.users.len(), 10);
    assert!(!page.has_next);
  }
}
