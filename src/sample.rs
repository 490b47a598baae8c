use crate::calendar::DateKey;
use crate::index::DateIndex;
use crate::models::{
    AppData, AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, HeadcountFigures,
    LeaveApplication, LeaveBalance, LeaveRecord, LeaveStatus, LeaveType, RecentLeave, TeamMember,
};

impl AppData {
    pub fn sample() -> Self {
        Self {
            attendance: DateIndex::new(attendance_records()),
            leaves: DateIndex::new(leave_records()),
            team: team_members(),
            employees: employees(),
            leave_history: leave_history(),
            leave_balances: leave_balances(),
            recent_leaves: recent_leaves(),
            headcount: HeadcountFigures {
                total_employees: 48,
                present_today: 42,
                on_leave: 6,
                pending_requests: 3,
            },
        }
    }
}

fn key(value: &'static str) -> DateKey {
    DateKey::literal(value)
}

pub fn attendance_records() -> Vec<AttendanceRecord> {
    use AttendanceStatus::*;

    let plain = |date, status| AttendanceRecord {
        date: key(date),
        status,
        note: None,
    };
    let noted = |date, status, note: &str| AttendanceRecord {
        date: key(date),
        status,
        note: Some(note.to_string()),
    };

    vec![
        plain("2025-04-01", Present),
        plain("2025-04-02", Present),
        plain("2025-04-03", Present),
        plain("2025-04-04", Present),
        plain("2025-04-05", Weekend),
        plain("2025-04-06", Weekend),
        plain("2025-04-07", Present),
        plain("2025-04-08", Present),
        plain("2025-04-09", Present),
        noted("2025-04-10", HalfDay, "Left early - Doctor appointment"),
        plain("2025-04-11", Present),
        plain("2025-04-12", Weekend),
        plain("2025-04-13", Weekend),
        plain("2025-04-14", Present),
        plain("2025-04-15", Present),
        plain("2025-04-16", Present),
        plain("2025-04-17", Present),
        plain("2025-04-18", Present),
        plain("2025-04-19", Weekend),
        plain("2025-04-20", Weekend),
        noted("2025-04-21", Leave, "Sick leave"),
        noted("2025-04-22", Leave, "Sick leave"),
        noted("2025-04-23", Leave, "Sick leave"),
        plain("2025-04-24", Present),
        plain("2025-04-25", Present),
        plain("2025-04-26", Weekend),
        plain("2025-04-27", Weekend),
        plain("2025-04-28", Present),
        plain("2025-04-29", Present),
        plain("2025-04-30", Present),
    ]
}

pub fn leave_records() -> Vec<LeaveRecord> {
    use LeaveStatus::*;
    use LeaveType::*;

    [
        (1, 1, "2025-04-21", Sick, Approved),
        (2, 1, "2025-04-22", Sick, Approved),
        (3, 1, "2025-04-23", Sick, Approved),
        (4, 2, "2025-04-25", Vacation, Approved),
        (5, 2, "2025-04-26", Vacation, Approved),
        (6, 2, "2025-04-27", Vacation, Approved),
        (7, 2, "2025-04-28", Vacation, Approved),
        (8, 2, "2025-04-29", Vacation, Approved),
        (9, 3, "2025-04-15", Personal, Approved),
        (10, 4, "2025-04-10", Personal, Approved),
        (11, 5, "2025-04-05", Vacation, Approved),
        (12, 6, "2025-04-18", Sick, Approved),
        (13, 7, "2025-04-21", Personal, Approved),
        (14, 8, "2025-04-30", Vacation, Pending),
    ]
    .into_iter()
    .map(|(id, employee_id, date, leave_type, status)| LeaveRecord {
        id,
        employee_id,
        date: key(date),
        leave_type,
        status,
    })
    .collect()
}

pub fn team_members() -> Vec<TeamMember> {
    [
        (1, "John Doe", "Engineering"),
        (2, "Jane Smith", "Marketing"),
        (3, "Robert Johnson", "Finance"),
        (4, "Emily Davis", "HR"),
        (5, "Michael Wilson", "Engineering"),
        (6, "Sarah Brown", "Design"),
        (7, "David Miller", "Product"),
        (8, "Jennifer Taylor", "Sales"),
    ]
    .into_iter()
    .map(|(id, name, department)| TeamMember {
        id,
        name: name.to_string(),
        department: department.to_string(),
    })
    .collect()
}

pub fn employees() -> Vec<Employee> {
    let active = |id, name: &str, email: &str, phone: &str, department: &str, position: &str, start, salary, address: &str| Employee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        start_date: key(start),
        end_date: None,
        salary,
        address: address.to_string(),
        status: EmployeeStatus::Active,
    };

    let mut roster = vec![
        active(1, "John Doe", "john.doe@example.com", "(555) 123-4567", "Engineering", "Senior Developer", "2022-03-15", 85_000, "123 Main St, Anytown, USA"),
        active(2, "Jane Smith", "jane.smith@example.com", "(555) 987-6543", "Marketing", "Marketing Manager", "2021-06-10", 78_000, "456 Oak Ave, Somewhere, USA"),
        active(3, "Robert Johnson", "robert.johnson@example.com", "(555) 456-7890", "Finance", "Financial Analyst", "2023-01-05", 72_000, "789 Pine Rd, Elsewhere, USA"),
        active(4, "Emily Davis", "emily.davis@example.com", "(555) 234-5678", "HR", "HR Specialist", "2022-09-20", 65_000, "321 Elm St, Nowhere, USA"),
        active(5, "Michael Wilson", "michael.wilson@example.com", "(555) 876-5432", "Engineering", "Frontend Developer", "2023-04-12", 75_000, "654 Maple Dr, Anyplace, USA"),
    ];

    roster.push(Employee {
        end_date: Some(key("2023-10-15")),
        status: EmployeeStatus::Inactive,
        ..active(6, "Sarah Brown", "sarah.brown@example.com", "(555) 345-6789", "Design", "UI/UX Designer", "2022-11-08", 70_000, "987 Cedar Ln, Somewhere, USA")
    });

    roster
}

pub fn leave_history() -> Vec<LeaveApplication> {
    [
        (1, "Sick Leave", "2025-04-21", "2025-04-23", "Fever and cold", LeaveStatus::Approved, "2025-04-19"),
        (2, "Personal Leave", "2025-03-10", "2025-03-10", "Family function", LeaveStatus::Approved, "2025-03-05"),
        (3, "Vacation", "2025-05-15", "2025-05-20", "Family trip", LeaveStatus::Pending, "2025-04-25"),
    ]
    .into_iter()
    .map(|(id, leave_type, start, end, reason, status, applied_on)| LeaveApplication {
        id,
        leave_type: leave_type.to_string(),
        start_date: key(start),
        end_date: key(end),
        reason: reason.to_string(),
        status,
        applied_on: key(applied_on),
    })
    .collect()
}

pub fn leave_balances() -> Vec<LeaveBalance> {
    [("Sick Leave", 7, 10), ("Casual Leave", 5, 6), ("Vacation", 10, 15)]
        .into_iter()
        .map(|(label, remaining, total)| LeaveBalance {
            label: label.to_string(),
            remaining,
            total,
        })
        .collect()
}

pub fn recent_leaves() -> Vec<RecentLeave> {
    [
        (1, "John Doe", "Engineering", "Sick Leave", "2025-04-20", "2025-04-22", LeaveStatus::Approved),
        (2, "Jane Smith", "Marketing", "Vacation", "2025-04-25", "2025-04-30", LeaveStatus::Pending),
        (3, "Robert Johnson", "Finance", "Personal", "2025-05-01", "2025-05-02", LeaveStatus::Pending),
    ]
    .into_iter()
    .map(|(id, name, department, leave_type, from, to, status)| RecentLeave {
        id,
        name: name.to_string(),
        department: department.to_string(),
        leave_type: leave_type.to_string(),
        from: key(from),
        to: key(to),
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dates_are_canonical() {
        let data = AppData::sample();
        for record in data.attendance.records() {
            assert_eq!(DateKey::parse(record.date.as_str()).unwrap(), record.date);
        }
        for record in data.leaves.records() {
            assert_eq!(DateKey::parse(record.date.as_str()).unwrap(), record.date);
        }
    }

    #[test]
    fn every_leave_belongs_to_a_team_member() {
        let data = AppData::sample();
        for record in data.leaves.records() {
            assert!(data.team_member(record.employee_id).is_some(), "{record:?}");
        }
    }

    #[test]
    fn known_attendance_days() {
        let data = AppData::sample();

        let half_day = data.attendance.first(&key("2025-04-10")).unwrap();
        assert_eq!(half_day.status, AttendanceStatus::HalfDay);
        assert_eq!(half_day.note.as_deref(), Some("Left early - Doctor appointment"));

        let sunday = data.attendance.first(&key("2025-04-06")).unwrap();
        assert_eq!(sunday.status, AttendanceStatus::Weekend);

        assert_eq!(data.attendance.first(&key("2025-04-02")).unwrap().status, AttendanceStatus::Present);
        assert!(data.attendance.first(&key("2025-05-01")).is_none());
    }

    #[test]
    fn two_people_off_on_april_21() {
        let data = AppData::sample();
        let leaves = data.leaves.all(&key("2025-04-21"));
        let summary: Vec<_> = leaves.iter().map(|leave| (leave.employee_id, leave.leave_type)).collect();
        assert_eq!(summary, vec![(1, LeaveType::Sick), (7, LeaveType::Personal)]);
    }

    #[test]
    fn roster_has_one_former_employee() {
        let inactive: Vec<_> = employees()
            .into_iter()
            .filter(|employee| employee.status == EmployeeStatus::Inactive)
            .collect();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].end_date.as_ref().map(DateKey::as_str), Some("2023-10-15"));
    }
}
