use crate::models::Employee;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LEAVE_TYPE_OPTIONS: [&str; 6] = [
    "Sick Leave",
    "Casual Leave",
    "Personal Leave",
    "Vacation",
    "Maternity Leave",
    "Paternity Leave",
];

pub const DEPARTMENT_OPTIONS: [&str; 7] = [
    "Engineering",
    "Marketing",
    "Finance",
    "HR",
    "Design",
    "Product",
    "Sales",
];

pub const LEAVE_SUBMITTED: &str = "Leave application submitted successfully!";
pub const EMPLOYEE_SUBMITTED: &str = "Employee details submitted successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for FormError {}

fn check_required(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let missing: Vec<_> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveForm {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self {
            leave_type: LEAVE_TYPE_OPTIONS[0].to_string(),
            start_date: String::new(),
            end_date: String::new(),
            reason: String::new(),
        }
    }
}

impl LeaveForm {
    pub fn validate(&self) -> Result<(), FormError> {
        check_required(&[
            ("leave_type", self.leave_type.as_str()),
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            ("reason", self.reason.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub salary: String,
    pub address: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            start_date: employee.start_date.to_string(),
            end_date: employee
                .end_date
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            salary: employee.salary.to_string(),
            address: employee.address.clone(),
        }
    }

    /// Everything except the end date is required.
    pub fn validate(&self) -> Result<(), FormError> {
        check_required(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("department", self.department.as_str()),
            ("position", self.position.as_str()),
            ("start_date", self.start_date.as_str()),
            ("salary", self.salary.as_str()),
            ("address", self.address.as_str()),
        ])
    }
}
