use crate::calendar::DateKey;
use crate::index::{DateIndex, Dated};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    Weekend,
    Holiday,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
        AttendanceStatus::Weekend,
        AttendanceStatus::Holiday,
        AttendanceStatus::Leave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::HalfDay => "half-day",
            AttendanceStatus::Weekend => "weekend",
            AttendanceStatus::Holiday => "holiday",
            AttendanceStatus::Leave => "leave",
        }
    }

    /// Badge text, e.g. "half day".
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: DateKey,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Dated for AttendanceRecord {
    fn date_key(&self) -> &DateKey {
        &self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Sick,
    Vacation,
    Personal,
    Maternity,
    Paternity,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Sick,
        LeaveType::Vacation,
        LeaveType::Personal,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Vacation => "vacation",
            LeaveType::Personal => "personal",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Other => "other",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Vacation => "Vacation",
            LeaveType::Personal => "Personal",
            LeaveType::Maternity => "Maternity",
            LeaveType::Paternity => "Paternity",
            LeaveType::Other => "Other",
        }
    }

    /// Legend text: vacation and other stand alone, the rest read "X Leave".
    pub fn legend(&self) -> String {
        match self {
            LeaveType::Vacation | LeaveType::Other => self.title().to_string(),
            _ => format!("{} Leave", self.title()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Approved,
    Pending,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "approved",
            LeaveStatus::Pending => "pending",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: u32,
    pub employee_id: u32,
    pub date: DateKey,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
}

impl Dated for LeaveRecord {
    fn date_key(&self) -> &DateKey {
        &self.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn title(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub start_date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateKey>,
    pub salary: u64,
    pub address: String,
    pub status: EmployeeStatus,
}

impl Employee {
    /// Case-insensitive substring match on name, email, department or position.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.email, &self.department, &self.position]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn search_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    employees.iter().filter(|employee| employee.matches(term)).collect()
}

/// One of the current user's own leave applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: u32,
    pub leave_type: String,
    pub start_date: DateKey,
    pub end_date: DateKey,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateKey,
}

impl LeaveApplication {
    pub fn duration_label(&self) -> String {
        duration_label(&self.start_date, &self.end_date)
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status != LeaveStatus::Rejected
            && self.start_date.to_date().is_some_and(|start| start > today)
    }
}

pub fn duration_label(start: &DateKey, end: &DateKey) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start} to {end}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveBalance {
    pub label: String,
    pub remaining: u32,
    pub total: u32,
}

impl LeaveBalance {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((f64::from(self.remaining) / f64::from(self.total)) * 100.0).round() as u32
    }
}

/// Row of the dashboard's recent applications table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentLeave {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub leave_type: String,
    pub from: DateKey,
    pub to: DateKey,
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadcountFigures {
    pub total_employees: u32,
    pub present_today: u32,
    pub on_leave: u32,
    pub pending_requests: u32,
}

/// Everything the dashboard shows; immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct AppData {
    pub attendance: DateIndex<AttendanceRecord>,
    pub leaves: DateIndex<LeaveRecord>,
    pub team: Vec<TeamMember>,
    pub employees: Vec<Employee>,
    pub leave_history: Vec<LeaveApplication>,
    pub leave_balances: Vec<LeaveBalance>,
    pub recent_leaves: Vec<RecentLeave>,
    pub headcount: HeadcountFigures,
}

impl AppData {
    pub fn team_member(&self, id: u32) -> Option<&TeamMember> {
        self.team.iter().find(|member| member.id == id)
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}

#[derive(Debug, Serialize)]
pub struct AttendanceDay<'a> {
    pub date: &'a DateKey,
    pub record: Option<&'a AttendanceRecord>,
}

#[derive(Debug, Serialize)]
pub struct TeamLeaveEntry<'a> {
    #[serde(flatten)]
    pub record: &'a LeaveRecord,
    pub employee_name: Option<&'a str>,
    pub department: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse<T> {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub cells: Vec<crate::calendar::Cell<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, department: &str) -> Employee {
        Employee {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "(555) 000-0000".to_string(),
            department: department.to_string(),
            position: "Analyst".to_string(),
            start_date: DateKey::literal("2024-01-01"),
            end_date: None,
            salary: 50_000,
            address: "1 Test St".to_string(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn statuses_serialize_in_kebab_case() {
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"half-day\"");
        assert_eq!(AttendanceStatus::HalfDay.label(), "half day");
        let parsed: LeaveType = serde_json::from_str("\"paternity\"").unwrap();
        assert_eq!(parsed, LeaveType::Paternity);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let people = vec![employee("John Doe", "Engineering"), employee("Jane Smith", "Marketing")];
        assert_eq!(search_employees(&people, "JOHN").len(), 1);
        assert_eq!(search_employees(&people, "market")[0].name, "Jane Smith");
        assert_eq!(search_employees(&people, "example.com").len(), 2);
        assert_eq!(search_employees(&people, "  ").len(), 2);
        assert!(search_employees(&people, "payroll").is_empty());
    }

    #[test]
    fn duration_collapses_single_days() {
        let day = DateKey::literal("2025-03-10");
        assert_eq!(duration_label(&day, &day), "2025-03-10");
        let end = DateKey::literal("2025-03-12");
        assert_eq!(duration_label(&day, &end), "2025-03-10 to 2025-03-12");
    }

    #[test]
    fn upcoming_skips_rejected_and_past() {
        let mut application = LeaveApplication {
            id: 1,
            leave_type: "Vacation".to_string(),
            start_date: DateKey::literal("2025-05-15"),
            end_date: DateKey::literal("2025-05-20"),
            reason: "Family trip".to_string(),
            status: LeaveStatus::Pending,
            applied_on: DateKey::literal("2025-04-25"),
        };
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert!(application.is_upcoming(today));
        assert!(!application.is_upcoming(NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()));
        application.status = LeaveStatus::Rejected;
        assert!(!application.is_upcoming(today));
    }

    #[test]
    fn balance_percent_rounds() {
        let balance = LeaveBalance {
            label: "Casual Leave".to_string(),
            remaining: 5,
            total: 6,
        };
        assert_eq!(balance.percent(), 83);
    }
}
