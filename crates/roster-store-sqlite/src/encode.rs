//! Encoding and decoding between [`Employee`] and the plain-text column
//! representation stored in SQLite.
//!
//! Dates are stored as `YYYY-MM-DD`; the closed enums are stored as their
//! canonical strings. A stored string outside the closed sets is a decode
//! error, never a silent skip.

use chrono::NaiveDate;
use roster_core::employee::{BusinessUnit, Department, Employee};

use crate::Result;

/// The seven text columns of one `employees` row, as read from or written
/// to the database.
#[derive(Debug)]
pub struct RawEmployee {
  pub user_id:         String,
  pub user_name:       String,
  pub email:           String,
  pub business_unit:   String,
  pub department:      String,
  pub date_of_joining: String,
  pub mobile_number:   String,
}

impl RawEmployee {
  pub fn from_employee(employee: &Employee) -> Self {
    RawEmployee {
      user_id:         employee.user_id.clone(),
      user_name:       employee.user_name.clone(),
      email:           employee.email.clone(),
      business_unit:   employee.business_unit.as_str().to_owned(),
      department:      employee.department.as_str().to_owned(),
      date_of_joining: encode_date(employee.date_of_joining),
      mobile_number:   employee.mobile_number.clone(),
    }
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      business_unit:   BusinessUnit::parse(&self.business_unit)?,
      department:      Department::parse(&self.department)?,
      date_of_joining: decode_date(&self.date_of_joining)?,
      user_id:         self.user_id,
      user_name:       self.user_name,
      email:           self.email,
      mobile_number:   self.mobile_number,
    })
  }
}

pub fn encode_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|_| roster_core::Error::DateParse(s.to_owned()).into())
}
