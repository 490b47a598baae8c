use crate::calendar::{CalendarCursor, format_date_key};
use crate::index::DateIndex;
use crate::models::{AppData, AttendanceRecord, AttendanceStatus, HeadcountFigures, LeaveApplication};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub half_day: u32,
    pub weekend: u32,
    pub holiday: u32,
    pub leave: u32,
    /// Days of the month without any record.
    pub unrecorded: u32,
}

impl AttendanceSummary {
    pub fn count(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::HalfDay => self.half_day,
            AttendanceStatus::Weekend => self.weekend,
            AttendanceStatus::Holiday => self.holiday,
            AttendanceStatus::Leave => self.leave,
        }
    }

    fn bump(&mut self, status: AttendanceStatus) {
        let slot = match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Absent => &mut self.absent,
            AttendanceStatus::HalfDay => &mut self.half_day,
            AttendanceStatus::Weekend => &mut self.weekend,
            AttendanceStatus::Holiday => &mut self.holiday,
            AttendanceStatus::Leave => &mut self.leave,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Counts the first record of every day in the displayed month.
pub fn summarize_month(attendance: &DateIndex<AttendanceRecord>, cursor: CalendarCursor) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for day in 1..=cursor.days() {
        let key = format_date_key(cursor.year(), cursor.month(), day);
        match attendance.first(&key) {
            Some(record) => summary.bump(record.status),
            None => summary.unrecorded = summary.unrecorded.saturating_add(1),
        }
    }
    summary
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub date: String,
    pub headcount: HeadcountFigures,
    pub absent_today: u32,
    pub attendance_rate: f64,
    pub upcoming_leaves: usize,
}

pub fn dashboard_snapshot(data: &AppData) -> DashboardSnapshot {
    dashboard_snapshot_at(Local::now().date_naive(), data)
}

pub fn dashboard_snapshot_at(today: NaiveDate, data: &AppData) -> DashboardSnapshot {
    let headcount = data.headcount;
    DashboardSnapshot {
        date: crate::calendar::long_date_label(today),
        absent_today: headcount.total_employees.saturating_sub(headcount.present_today),
        attendance_rate: attendance_rate(headcount.present_today, headcount.total_employees),
        upcoming_leaves: upcoming_leaves(&data.leave_history, today).len(),
        headcount,
    }
}

/// Percentage rounded to one decimal; 0 for an empty workforce.
pub fn attendance_rate(present: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = f64::from(present) / f64::from(total) * 100.0;
    (rate * 10.0).round() / 10.0
}

pub fn upcoming_leaves(history: &[LeaveApplication], today: NaiveDate) -> Vec<&LeaveApplication> {
    history
        .iter()
        .filter(|application| application.is_upcoming(today))
        .collect()
}
