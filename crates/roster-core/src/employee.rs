//! Employee — the single canonical record shape.
//!
//! Cleaning produces an [`EmployeeDraft`], validation turns it into an
//! [`Employee`], and the storage layer persists exactly these fields. There
//! is deliberately no second schema anywhere else in the workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Closed enumerations ─────────────────────────────────────────────────────

/// Regional office an employee belongs to. Closed set; shared between the
/// validation layer and the storage schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessUnit {
  Chennai,
  Coimbatore,
  Madurai,
  #[serde(rename = "UK Office")]
  UkOffice,
  #[serde(rename = "US Office")]
  UsOffice,
}

impl BusinessUnit {
  pub const ALL: [BusinessUnit; 5] = [
    BusinessUnit::Chennai,
    BusinessUnit::Coimbatore,
    BusinessUnit::Madurai,
    BusinessUnit::UkOffice,
    BusinessUnit::UsOffice,
  ];

  /// The canonical wire/storage string for this unit.
  pub fn as_str(self) -> &'static str {
    match self {
      BusinessUnit::Chennai => "Chennai",
      BusinessUnit::Coimbatore => "Coimbatore",
      BusinessUnit::Madurai => "Madurai",
      BusinessUnit::UkOffice => "UK Office",
      BusinessUnit::UsOffice => "US Office",
    }
  }

  /// Parse a canonical string back into the enum.
  pub fn parse(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|unit| unit.as_str() == s)
      .ok_or_else(|| Error::UnknownBusinessUnit(s.to_owned()))
  }
}

/// Functional department. Closed set, same sharing rule as [`BusinessUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
  #[serde(rename = "Web Development")]
  WebDevelopment,
  #[serde(rename = "Mobile Development")]
  MobileDevelopment,
  Software,
  #[serde(rename = "Human Resource")]
  HumanResource,
  #[serde(rename = "Web Design")]
  WebDesign,
  #[serde(rename = "UI/UX")]
  UiUx,
  Testing,
  #[serde(rename = "Quality Assurance")]
  QualityAssurance,
  Sales,
  Marketing,
  Admin,
}

impl Department {
  pub const ALL: [Department; 11] = [
    Department::WebDevelopment,
    Department::MobileDevelopment,
    Department::Software,
    Department::HumanResource,
    Department::WebDesign,
    Department::UiUx,
    Department::Testing,
    Department::QualityAssurance,
    Department::Sales,
    Department::Marketing,
    Department::Admin,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Department::WebDevelopment => "Web Development",
      Department::MobileDevelopment => "Mobile Development",
      Department::Software => "Software",
      Department::HumanResource => "Human Resource",
      Department::WebDesign => "Web Design",
      Department::UiUx => "UI/UX",
      Department::Testing => "Testing",
      Department::QualityAssurance => "Quality Assurance",
      Department::Sales => "Sales",
      Department::Marketing => "Marketing",
      Department::Admin => "Admin",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|dept| dept.as_str() == s)
      .ok_or_else(|| Error::UnknownDepartment(s.to_owned()))
  }
}

// ─── Record shapes ───────────────────────────────────────────────────────────

/// A validated, persisted employee record.
///
/// `user_id` is the business identifier; uniqueness across the store is
/// enforced by the storage backend, never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub user_id:         String,
  pub user_name:       String,
  pub email:           String,
  pub business_unit:   BusinessUnit,
  pub department:      Department,
  pub date_of_joining: NaiveDate,
  pub mobile_number:   String,
}

/// A cleaned but not yet validated row: the same seven fields, all raw
/// strings. Produced by the spreadsheet cleaner, consumed by
/// [`validate_row`](crate::validate::validate_row).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeDraft {
  pub user_id:         String,
  pub user_name:       String,
  pub email:           String,
  pub business_unit:   String,
  pub department:      String,
  pub date_of_joining: String,
  pub mobile_number:   String,
}
