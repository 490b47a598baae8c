//! Per-page UI state. Every page owns a plain state object and changes only
//! through `apply(state, event) -> state`, so the transitions are testable
//! without rendering anything.

use crate::calendar::{CalendarCursor, DateKey};
use crate::forms::{EMPLOYEE_SUBMITTED, EmployeeForm, FormError, LEAVE_SUBMITTED, LeaveForm};
use crate::models::Employee;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub cursor: CalendarCursor,
    pub selected: Option<DateKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    PrevMonth,
    NextMonth,
    Select(DateKey),
    ClearSelection,
}

impl CalendarView {
    pub fn new(cursor: CalendarCursor) -> Self {
        Self {
            cursor,
            selected: None,
        }
    }

    pub fn apply(self, event: CalendarEvent) -> Self {
        match event {
            CalendarEvent::PrevMonth => Self::new(self.cursor.prev_month()),
            CalendarEvent::NextMonth => Self::new(self.cursor.next_month()),
            CalendarEvent::Select(date) => Self {
                selected: Some(date),
                ..self
            },
            CalendarEvent::ClearSelection => Self::new(self.cursor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveTab {
    #[default]
    Apply,
    History,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaveView {
    pub tab: LeaveTab,
    pub form: LeaveForm,
    pub notice: Option<String>,
    /// Required fields left blank by the last rejected submit.
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveEvent {
    ShowTab(LeaveTab),
    Submit(LeaveForm),
    DismissNotice,
}

impl LeaveView {
    pub fn apply(self, event: LeaveEvent) -> Self {
        match event {
            LeaveEvent::ShowTab(tab) => Self { tab, ..self },
            LeaveEvent::Submit(form) => match form.validate() {
                Ok(()) => {
                    info!(leave_type = %form.leave_type, start = %form.start_date, end = %form.end_date, "leave application submitted");
                    Self {
                        tab: self.tab,
                        form: LeaveForm::default(),
                        notice: Some(LEAVE_SUBMITTED.to_string()),
                        missing: Vec::new(),
                    }
                }
                Err(err) => {
                    debug!("leave application rejected: {err}");
                    let FormError::MissingFields(missing) = err;
                    Self {
                        tab: LeaveTab::Apply,
                        form,
                        notice: None,
                        missing,
                    }
                }
            },
            LeaveEvent::DismissNotice => Self {
                notice: None,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeesTab {
    #[default]
    List,
    Form,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeesView {
    pub tab: EmployeesTab,
    pub search: String,
    /// Employee shown in the detail panel and targeted by the form.
    pub selected: Option<u32>,
    pub form: EmployeeForm,
    pub notice: Option<String>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeesEvent {
    ShowList,
    StartAdd,
    Edit(Employee),
    Search(String),
    Submit(EmployeeForm),
    DismissNotice,
}

impl EmployeesView {
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn apply(self, event: EmployeesEvent) -> Self {
        match event {
            EmployeesEvent::ShowList => Self {
                tab: EmployeesTab::List,
                missing: Vec::new(),
                ..self
            },
            EmployeesEvent::StartAdd => Self {
                tab: EmployeesTab::Form,
                selected: None,
                form: EmployeeForm::default(),
                missing: Vec::new(),
                ..self
            },
            EmployeesEvent::Edit(employee) => Self {
                tab: EmployeesTab::Form,
                selected: Some(employee.id),
                form: EmployeeForm::from_employee(&employee),
                missing: Vec::new(),
                ..self
            },
            EmployeesEvent::Search(term) => Self {
                search: term,
                ..self
            },
            EmployeesEvent::Submit(form) => match form.validate() {
                Ok(()) => {
                    info!(name = %form.name, department = %form.department, editing = ?self.selected, "employee details submitted");
                    Self {
                        tab: EmployeesTab::List,
                        form: EmployeeForm::default(),
                        notice: Some(EMPLOYEE_SUBMITTED.to_string()),
                        missing: Vec::new(),
                        ..self
                    }
                }
                Err(err) => {
                    debug!("employee form rejected: {err}");
                    let FormError::MissingFields(missing) = err;
                    Self {
                        tab: EmployeesTab::Form,
                        form,
                        notice: None,
                        missing,
                        ..self
                    }
                }
            },
            EmployeesEvent::DismissNotice => Self {
                notice: None,
                ..self
            },
        }
    }
}

/// One instance of every page's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub attendance: CalendarView,
    pub team_calendar: CalendarView,
    pub leave: LeaveView,
    pub employees: EmployeesView,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        let cursor = CalendarCursor::from_date(today);
        Self {
            attendance: CalendarView::new(cursor),
            team_calendar: CalendarView::new(cursor),
            leave: LeaveView::default(),
            employees: EmployeesView::default(),
        }
    }
}
