//! Row validation — turns an [`EmployeeDraft`] into an [`Employee`] or a
//! structured [`RowFailure`].
//!
//! A row is all-or-nothing: every field is checked, every failure is
//! collected, and a single bad field rejects the whole row.

use chrono::NaiveDate;
use serde::Serialize;

use crate::employee::{BusinessUnit, Department, Employee, EmployeeDraft};

/// Raw field values in a failure report are truncated to this many
/// characters (with a `...` suffix) before being shown to the caller.
pub const PREVIEW_LEN: usize = 30;

/// Maximum stored length of a mobile number, after stripping a leading `+`.
pub const MOBILE_MAX_LEN: usize = 15;

/// Minimum count of digit characters a mobile number must contain.
pub const MOBILE_MIN_DIGITS: usize = 7;

// ─── Failure types ───────────────────────────────────────────────────────────

/// One field-level error descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: String,
}

/// One rejected row: its human-visible spreadsheet row number, a truncated
/// preview of every raw field value, and the per-field errors in canonical
/// field order.
#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
  /// 1-based spreadsheet row: 0-based sheet position + 2 (one for the
  /// header row, one for 1-based numbering).
  pub excel_row: usize,
  pub data:      EmployeeDraft,
  pub errors:    Vec<FieldError>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Validate one cleaned row. `index` is the row's 0-based position in the
/// original sheet (excluding the header row).
pub fn validate_row(
  draft: &EmployeeDraft,
  index: usize,
) -> Result<Employee, RowFailure> {
  let mut errors: Vec<FieldError> = Vec::new();
  let mut err = |field: &'static str, message: String| {
    errors.push(FieldError { field, message });
  };

  if draft.user_id.is_empty() {
    err("user_id", "user id is required".to_owned());
  }

  // user_name is free text; no constraint beyond the cleaning pass.

  if !is_valid_email(&draft.email) {
    err("email", format!("not a valid email address: {:?}", draft.email));
  }

  let business_unit = match BusinessUnit::parse(&draft.business_unit) {
    Ok(unit) => Some(unit),
    Err(e) => {
      err("business_unit", e.to_string());
      None
    }
  };

  let department = match Department::parse(&draft.department) {
    Ok(dept) => Some(dept),
    Err(e) => {
      err("department", e.to_string());
      None
    }
  };

  let date_of_joining =
    match NaiveDate::parse_from_str(&draft.date_of_joining, "%Y-%m-%d") {
      Ok(date) => Some(date),
      Err(_) => {
        err(
          "date_of_joining",
          format!(
            "not a valid date (expected YYYY-MM-DD): {:?}",
            draft.date_of_joining
          ),
        );
        None
      }
    };

  let mobile_number = match validate_mobile_number(&draft.mobile_number) {
    Ok(normalized) => Some(normalized),
    Err(message) => {
      err("mobile_number", message);
      None
    }
  };

  match (business_unit, department, date_of_joining, mobile_number) {
    (
      Some(business_unit),
      Some(department),
      Some(date_of_joining),
      Some(mobile_number),
    ) if errors.is_empty() => Ok(Employee {
      user_id: draft.user_id.clone(),
      user_name: draft.user_name.clone(),
      email: draft.email.clone(),
      business_unit,
      department,
      date_of_joining,
      mobile_number,
    }),
    _ => Err(RowFailure {
      excel_row: index + 2,
      data: preview_draft(draft),
      errors,
    }),
  }
}

/// The dedicated multi-step mobile number rule.
///
/// Accepts digits, spaces, hyphens, and parentheses after one optional
/// leading `+`; at most [`MOBILE_MAX_LEN`] characters; at least
/// [`MOBILE_MIN_DIGITS`] digit characters. Returns the normalized string
/// (leading `+` removed) — that is the value stored.
pub fn validate_mobile_number(raw: &str) -> Result<String, String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err("mobile number is required".to_owned());
  }

  let stripped = trimmed.strip_prefix('+').unwrap_or(trimmed);
  if stripped.is_empty() {
    return Err("mobile number is required after stripping \"+\"".to_owned());
  }

  let allowed = |c: char| {
    c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')'
  };
  if !stripped.chars().all(allowed) {
    return Err(
      "mobile number contains invalid characters; allowed: digits, spaces, \
       hyphens, parentheses (after an optional leading \"+\")"
        .to_owned(),
    );
  }

  if stripped.chars().count() > MOBILE_MAX_LEN {
    return Err(format!(
      "mobile number too long (max {MOBILE_MAX_LEN} chars after stripping \
       \"+\"), got {}",
      stripped.chars().count()
    ));
  }

  let digits = stripped.chars().filter(char::is_ascii_digit).count();
  if digits < MOBILE_MIN_DIGITS {
    return Err(format!(
      "mobile number must contain at least {MOBILE_MIN_DIGITS} digits, \
       found {digits}"
    ));
  }

  Ok(stripped.to_owned())
}

/// Syntactic email-shape check: one `@`, a non-empty local part, a domain
/// containing an interior dot, no whitespace.
pub fn is_valid_email(s: &str) -> bool {
  if s.is_empty() || s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let Some((host, tld)) = domain.rsplit_once('.') else {
    return false;
  };
  !host.is_empty() && !tld.is_empty()
}

fn preview_draft(draft: &EmployeeDraft) -> EmployeeDraft {
  EmployeeDraft {
    user_id:         preview(&draft.user_id),
    user_name:       preview(&draft.user_name),
    email:           preview(&draft.email),
    business_unit:   preview(&draft.business_unit),
    department:      preview(&draft.department),
    date_of_joining: preview(&draft.date_of_joining),
    mobile_number:   preview(&draft.mobile_number),
  }
}

fn preview(s: &str) -> String {
  if s.chars().count() > PREVIEW_LEN {
    let truncated: String = s.chars().take(PREVIEW_LEN).collect();
    format!("{truncated}...")
  } else {
    s.to_owned()
  }
}
