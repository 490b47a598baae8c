use crate::calendar::{Cell, DateKey, WEEKDAY_HEADERS, build_grid, is_weekend, long_date_label, preview};
use crate::forms::{DEPARTMENT_OPTIONS, LEAVE_TYPE_OPTIONS};
use crate::models::{AppData, AttendanceStatus, Employee, EmployeeStatus, LeaveStatus, LeaveType, search_employees};
use crate::stats::{AttendanceSummary, DashboardSnapshot, upcoming_leaves};
use crate::views::{CalendarView, EmployeesTab, EmployeesView, LeaveTab, LeaveView};
use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Attendance,
    Leave,
    TeamCalendar,
    Employees,
}

impl Page {
    pub const NAV: [Page; 5] = [
        Page::Dashboard,
        Page::Attendance,
        Page::Leave,
        Page::TeamCalendar,
        Page::Employees,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Attendance => "/attendance",
            Page::Leave => "/leave",
            Page::TeamCalendar => "/team-calendar",
            Page::Employees => "/employees",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Attendance => "Attendance",
            Page::Leave => "Leave Management",
            Page::TeamCalendar => "Team Calendar",
            Page::Employees => "Employees",
        }
    }
}

fn layout(active: Page, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (active.title()) " | EMS" }
                style { (PreEscaped(CSS)) }
            }
            body {
                aside.sidebar {
                    div.brand {
                        h1 { "EMS" }
                        p { "Employee Management System" }
                    }
                    nav {
                        @for page in Page::NAV {
                            a class=[(page == active).then_some("active")] href=(page.path()) { (page.title()) }
                        }
                    }
                }
                main.content { (body) }
            }
        }
    }
}

fn notice_banner(notice: Option<&str>, dismiss_action: &str) -> Markup {
    html! {
        @if let Some(message) = notice {
            form.notice method="post" action=(dismiss_action) role="status" {
                span { (message) }
                button.link type="submit" aria-label="Dismiss" { "×" }
            }
        }
    }
}

fn month_nav(base: &str, label: &str) -> Markup {
    html! {
        div.month-nav {
            form method="post" action={ (base) "/prev" } {
                button.round type="submit" aria-label="Previous month" { "‹" }
            }
            h2 { (label) }
            form method="post" action={ (base) "/next" } {
                button.round type="submit" aria-label="Next month" { "›" }
            }
        }
    }
}

fn weekday_header() -> Markup {
    html! {
        div.weekdays {
            @for name in WEEKDAY_HEADERS {
                div { (name) }
            }
        }
    }
}

fn status_badge_class(status: AttendanceStatus) -> String {
    format!("badge status-{}", status.as_str())
}

fn leave_type_class(leave_type: LeaveType) -> String {
    format!("badge leave-{}", leave_type.as_str())
}

fn approval_class(status: LeaveStatus) -> String {
    format!("badge approval-{}", status.as_str())
}

/// "$85,000"
pub fn format_salary(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

fn selected_label(selected: &DateKey) -> String {
    selected
        .to_date()
        .map(long_date_label)
        .unwrap_or_else(|| selected.to_string())
}

pub fn render_dashboard(data: &AppData, snapshot: &DashboardSnapshot) -> Markup {
    let headcount = snapshot.headcount;
    let cards = [
        ("Total Employees", headcount.total_employees, Page::Employees),
        ("Present Today", headcount.present_today, Page::Attendance),
        ("On Leave", headcount.on_leave, Page::Leave),
        ("Pending Requests", headcount.pending_requests, Page::Leave),
    ];
    // Share of the ring left unpainted; circumference of r=40 is 251.2.
    let ring_offset = 251.2 * (1.0 - snapshot.attendance_rate / 100.0);

    layout(
        Page::Dashboard,
        html! {
            header.page-header {
                h1 { "Dashboard" }
                span.muted { (snapshot.date) }
            }
            section.cards {
                @for (title, value, page) in cards {
                    a.card.stat href=(page.path()) {
                        span.label { (title) }
                        span.value { (value) }
                    }
                }
            }
            section.two-columns {
                div.card {
                    h2 { "Recent Leave Applications" }
                    table {
                        thead { tr { th { "Employee" } th { "Type" } th { "Duration" } th { "Status" } } }
                        tbody {
                            @for leave in &data.recent_leaves {
                                tr {
                                    td {
                                        div.strong { (leave.name) }
                                        div.muted { (leave.department) }
                                    }
                                    td { (leave.leave_type) }
                                    td { (leave.from.as_str()) " to " (leave.to.as_str()) }
                                    td { span class=(approval_class(leave.status)) { (leave.status.title()) } }
                                }
                            }
                        }
                    }
                }
                div.card {
                    h2 { "Today's Attendance Overview" }
                    div.ring {
                        svg viewBox="0 0 100 100" {
                            circle cx="50" cy="50" r="40" fill="none" stroke="#f3f4f6" stroke-width="10" {}
                            circle cx="50" cy="50" r="40" fill="none" stroke="#10b981" stroke-width="10"
                                stroke-dasharray="251.2" stroke-dashoffset=(format!("{ring_offset:.2}"))
                                transform="rotate(-90 50 50)" {}
                        }
                        div.ring-label {
                            span.value { (format!("{:.1}%", snapshot.attendance_rate)) }
                            span.muted { "Present" }
                        }
                    }
                    div.pair {
                        div.tile.tile-present { span.label { "Present" } span.value { (headcount.present_today) } }
                        div.tile.tile-absent { span.label { "Absent" } span.value { (snapshot.absent_today) } }
                    }
                }
            }
        },
    )
}

pub fn render_attendance(data: &AppData, view: &CalendarView, summary: &AttendanceSummary) -> Markup {
    let cells = build_grid(view.cursor, |key| data.attendance.first(key));
    let selected_record = view.selected.as_ref().and_then(|key| data.attendance.first(key));

    layout(
        Page::Attendance,
        html! {
            header.page-header {
                h1 { "Attendance Calendar" }
                (month_nav("/attendance", &view.cursor.label()))
            }
            div.card.calendar {
                (weekday_header())
                form.grid method="post" action="/attendance/select" {
                    @for cell in &cells {
                        @match cell {
                            Cell::Blank => { div.cell.blank {} }
                            Cell::Day { day, date_key, records } => {
                                button.cell.day.selected[view.selected.as_ref() == Some(date_key)]
                                    type="submit" name="date" value=(date_key.as_str()) {
                                    div.cell-head {
                                        span.day-number { (day) }
                                        @if let Some(record) = records {
                                            span class=(status_badge_class(record.status)) { (record.status.label()) }
                                        }
                                    }
                                    @if let Some(note) = records.and_then(|record| record.note.as_deref()) {
                                        p.note { (note) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(selected) = &view.selected {
                div.card.detail #selected-day {
                    h3 { (selected_label(selected)) }
                    @if let Some(record) = selected_record {
                        p {
                            "Status: "
                            span class=(status_badge_class(record.status)) { (record.status.label()) }
                        }
                        @if let Some(note) = &record.note {
                            p.strong { "Note:" }
                            p.muted { (note) }
                        }
                    } @else {
                        p.muted { "No attendance record for this date." }
                    }
                }
            }
            div.card {
                h3 { "Attendance Summary" }
                div.summary {
                    @for (status, label) in [
                        (AttendanceStatus::Present, "Present"),
                        (AttendanceStatus::Absent, "Absent"),
                        (AttendanceStatus::HalfDay, "Half Day"),
                        (AttendanceStatus::Leave, "Leave"),
                        (AttendanceStatus::Holiday, "Holiday"),
                        (AttendanceStatus::Weekend, "Weekend"),
                    ] {
                        div class={ "tile status-" (status.as_str()) } {
                            span.label { (label) }
                            span.value { (summary.count(status)) }
                        }
                    }
                }
            }
        },
    )
}

pub fn render_team_calendar(data: &AppData, view: &CalendarView) -> Markup {
    let cells = build_grid(view.cursor, |key| data.leaves.all(key));
    let selected_leaves = view
        .selected
        .as_ref()
        .map(|key| data.leaves.all(key))
        .unwrap_or_default();
    let member_name = |employee_id: u32| {
        data.team_member(employee_id)
            .map(|member| member.name.as_str())
            .unwrap_or("Unknown")
    };

    layout(
        Page::TeamCalendar,
        html! {
            header.page-header {
                h1 { "Team Leave Calendar" }
                (month_nav("/team-calendar", &view.cursor.label()))
            }
            div.card.calendar {
                (weekday_header())
                form.grid method="post" action="/team-calendar/select" {
                    @for cell in &cells {
                        @match cell {
                            Cell::Blank => { div.cell.blank {} }
                            Cell::Day { day, date_key, records } => {
                                @let weekend = date_key.to_date().is_some_and(is_weekend);
                                @let shown = preview(records);
                                button.cell.day.weekend[weekend].selected[view.selected.as_ref() == Some(date_key)]
                                    type="submit" name="date" value=(date_key.as_str()) {
                                    div.day-number { (day) }
                                    @for leave in shown.shown {
                                        div class={ (leave_type_class(leave.leave_type)) " chip" } { (member_name(leave.employee_id)) }
                                    }
                                    @if shown.overflow > 0 {
                                        div.more { "+" (shown.overflow) " more" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(selected) = &view.selected {
                div.card.detail #selected-day {
                    h3 { "Leaves on " (selected_label(selected)) }
                    @if selected_leaves.is_empty() {
                        p.muted { "No leaves scheduled for this date." }
                    } @else {
                        div.people {
                            @for leave in &selected_leaves {
                                @let member = data.team_member(leave.employee_id);
                                div.person {
                                    div.avatar { "👤" }
                                    div {
                                        div.strong { (member.map(|m| m.name.as_str()).unwrap_or("Unknown")) }
                                        div.muted { (member.map(|m| m.department.as_str()).unwrap_or("")) }
                                    }
                                    span class=(leave_type_class(leave.leave_type)) { (leave.leave_type.title()) " Leave" }
                                }
                            }
                        }
                    }
                }
            }
            div.card {
                h3 { "Leave Types" }
                div.legend {
                    @for leave_type in LeaveType::ALL {
                        span { span class={ "dot leave-" (leave_type.as_str()) } {} (leave_type.legend()) }
                    }
                }
            }
        },
    )
}

const LEAVE_POLICIES: [&str; 4] = [
    "Sick leave requires medical certificate for more than 2 days",
    "Apply for planned leaves at least 3 days in advance",
    "Unused leaves can be carried forward to next year (max 5)",
    "Maternity leave: 12 weeks, Paternity leave: 2 weeks",
];

pub fn render_leave(data: &AppData, view: &LeaveView, today: NaiveDate) -> Markup {
    let upcoming = upcoming_leaves(&data.leave_history, today);
    let form = &view.form;
    let missing = |field: &str| view.missing.iter().any(|name| *name == field);

    layout(
        Page::Leave,
        html! {
            header.page-header { h1 { "Leave Management" } }
            (notice_banner(view.notice.as_deref(), "/leave/notice/dismiss"))
            section.two-columns.wide-left {
                div.card {
                    form.tabs method="post" action="/leave/tab" {
                        button.tab.active[view.tab == LeaveTab::Apply] type="submit" name="tab" value="apply" { "Apply for Leave" }
                        button.tab.active[view.tab == LeaveTab::History] type="submit" name="tab" value="history" { "Leave History" }
                    }
                    @match view.tab {
                        LeaveTab::Apply => {
                            form.fields method="post" action="/leave/apply" {
                                label for="leave_type" { "Leave Type" }
                                select #leave_type name="leave_type" required {
                                    @for option in LEAVE_TYPE_OPTIONS {
                                        option value=(option) selected[form.leave_type == option] { (option) }
                                    }
                                }
                                div.pair {
                                    div {
                                        label for="start_date" { "Start Date" }
                                        input #start_date.missing[missing("start_date")] type="date" name="start_date" value=(form.start_date) required;
                                    }
                                    div {
                                        label for="end_date" { "End Date" }
                                        input #end_date.missing[missing("end_date")] type="date" name="end_date" value=(form.end_date) required;
                                    }
                                }
                                label for="reason" { "Reason" }
                                textarea #reason.missing[missing("reason")] name="reason" rows="4" required { (form.reason) }
                                button.primary type="submit" { "Submit Application" }
                            }
                        }
                        LeaveTab::History => {
                            table {
                                thead { tr { th { "Type" } th { "Duration" } th { "Reason" } th { "Applied On" } th { "Status" } } }
                                tbody {
                                    @for leave in &data.leave_history {
                                        tr {
                                            td { (leave.leave_type) }
                                            td { (leave.duration_label()) }
                                            td { (leave.reason) }
                                            td { (leave.applied_on.as_str()) }
                                            td { span class=(approval_class(leave.status)) { (leave.status.title()) } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div.stack {
                    div.card {
                        h3 { "Leave Balance" }
                        @for balance in &data.leave_balances {
                            div.balance {
                                div.balance-head {
                                    span.muted { (balance.label) }
                                    span.strong { (balance.remaining) " / " (balance.total) }
                                }
                                div.bar { div.fill style={ "width: " (balance.percent()) "%" } {} }
                            }
                        }
                    }
                    div.card {
                        h3 { "Upcoming Leaves" }
                        @if upcoming.is_empty() {
                            p.muted { "No upcoming leaves scheduled." }
                        } @else {
                            ul.upcoming {
                                @for leave in &upcoming {
                                    li {
                                        span class={ "dot approval-" (leave.status.as_str()) } {}
                                        div {
                                            div.strong { (leave.leave_type) }
                                            div.muted { (leave.duration_label()) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div.card {
                        h3 { "Leave Policies" }
                        ul.policies {
                            @for policy in LEAVE_POLICIES {
                                li { "✓ " (policy) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn employee_detail(employee: &Employee) -> Markup {
    html! {
        div.card.detail #employee-detail {
            h3 { "Employee Details" }
            div.strong.large { (employee.name) }
            div.muted { (employee.position) }
            ul.facts {
                li { "Email: " (employee.email) }
                li { "Phone: " (employee.phone) }
                li { "Address: " (employee.address) }
                li { "Start Date: " (employee.start_date.as_str()) }
                @if let Some(end_date) = &employee.end_date {
                    li { "End Date: " (end_date.as_str()) }
                }
                li { "Salary: " (format_salary(employee.salary)) }
            }
        }
    }
}

pub fn render_employees(data: &AppData, view: &EmployeesView) -> Markup {
    let form = &view.form;
    let missing = |field: &str| view.missing.iter().any(|name| *name == field);
    let selected = view.selected.and_then(|id| data.employee(id));

    layout(
        Page::Employees,
        html! {
            header.page-header {
                h1 { "Employee Details" }
                form method="post" action="/employees/tab" {
                    button.primary type="submit" name="tab" value="form" { "+ Add Employee" }
                }
            }
            (notice_banner(view.notice.as_deref(), "/employees/notice/dismiss"))
            @match view.tab {
                EmployeesTab::List => {
                    div.card {
                        form.search method="post" action="/employees/search" {
                            input type="search" name="q" value=(view.search)
                                placeholder="Search employees by name, email, department...";
                            button type="submit" { "Search" }
                        }
                        table {
                            thead { tr { th { "Employee" } th { "Department" } th { "Position" } th { "Start Date" } th { "Status" } th { "Actions" } } }
                            tbody {
                                @for employee in search_employees(&data.employees, &view.search) {
                                    tr {
                                        td {
                                            div.strong { (employee.name) }
                                            div.muted { (employee.email) }
                                        }
                                        td { (employee.department) }
                                        td { (employee.position) }
                                        td { (employee.start_date.as_str()) }
                                        td {
                                            span.badge.approval-approved[employee.status == EmployeeStatus::Active].approval-rejected[employee.status == EmployeeStatus::Inactive] {
                                                (employee.status.title())
                                            }
                                        }
                                        td {
                                            form method="post" action={ "/employees/" (employee.id) "/edit" } {
                                                button.link type="submit" aria-label={ "Edit " (employee.name) } { "Edit" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(employee) = selected {
                        (employee_detail(employee))
                    }
                }
                EmployeesTab::Form => {
                    div.card {
                        h2 { @if view.is_editing() { "Edit Employee" } @else { "Add New Employee" } }
                        form.fields.two-column method="post" action="/employees/submit" {
                            @for (name, label, kind, value) in [
                                ("name", "Full Name", "text", &form.name),
                                ("email", "Email Address", "email", &form.email),
                                ("phone", "Phone Number", "tel", &form.phone),
                            ] {
                                div {
                                    label for=(name) { (label) }
                                    input.missing[missing(name)] id=(name) type=(kind) name=(name) value=(value) required;
                                }
                            }
                            div {
                                label for="department" { "Department" }
                                select #department.missing[missing("department")] name="department" required {
                                    option value="" { "Select Department" }
                                    @for option in DEPARTMENT_OPTIONS {
                                        option value=(option) selected[form.department == option] { (option) }
                                    }
                                }
                            }
                            @for (name, label, kind, value) in [
                                ("position", "Position", "text", &form.position),
                                ("start_date", "Start Date", "date", &form.start_date),
                                ("salary", "Salary", "number", &form.salary),
                            ] {
                                div {
                                    label for=(name) { (label) }
                                    input.missing[missing(name)] id=(name) type=(kind) name=(name) value=(value) required;
                                }
                            }
                            div {
                                label for="end_date" { "End Date (if applicable)" }
                                input #end_date type="date" name="end_date" value=(form.end_date);
                            }
                            div.full {
                                label for="address" { "Address" }
                                textarea #address.missing[missing("address")] name="address" rows="3" required { (form.address) }
                            }
                            div.actions.full {
                                button type="submit" formaction="/employees/tab" formnovalidate name="tab" value="list" { "Cancel" }
                                button.primary type="submit" {
                                    @if view.is_editing() { "Update Employee" } @else { "Add Employee" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

const CSS: &str = r#"
:root {
  --bg: #f3f4f6;
  --ink: #1f2937;
  --muted: #6b7280;
  --line: #e5e7eb;
  --accent: #059669;
  --accent-soft: #ecfdf5;
  --card: #ffffff;
  --shadow: 0 4px 14px rgba(31, 41, 55, 0.08);
}

* { box-sizing: border-box; }

body {
  margin: 0;
  display: flex;
  min-height: 100vh;
  background: var(--bg);
  color: var(--ink);
  font-family: "Inter", "Segoe UI", sans-serif;
}

.sidebar { width: 16rem; background: var(--card); box-shadow: var(--shadow); }
.brand { padding: 1.5rem; }
.brand h1 { margin: 0; color: var(--accent); font-size: 1.5rem; }
.brand p { margin: 0; color: var(--muted); font-size: 0.85rem; }
.sidebar nav { display: grid; margin-top: 1.5rem; }
.sidebar nav a { padding: 0.75rem 1.5rem; color: var(--ink); text-decoration: none; }
.sidebar nav a:hover { background: var(--accent-soft); color: var(--accent); }
.sidebar nav a.active { background: var(--accent-soft); color: var(--accent); border-right: 4px solid var(--accent); }

.content { flex: 1; padding: 1.5rem; overflow: auto; display: grid; gap: 1.5rem; align-content: start; }
.page-header { display: flex; justify-content: space-between; align-items: center; }
.page-header h1 { margin: 0; font-size: 1.5rem; }

.card { background: var(--card); border-radius: 0.5rem; box-shadow: var(--shadow); padding: 1.5rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1.5rem; }
.card.stat { display: grid; gap: 0.5rem; color: inherit; text-decoration: none; }
.two-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 1.5rem; }
.two-columns.wide-left { grid-template-columns: 2fr 1fr; }
.stack { display: grid; gap: 1.5rem; align-content: start; }
.pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

.label { display: block; color: var(--muted); font-size: 0.85rem; }
.value { display: block; font-size: 1.8rem; font-weight: 700; }
.muted { color: var(--muted); font-size: 0.9rem; }
.strong { font-weight: 600; }
.large { font-size: 1.25rem; }

table { width: 100%; border-collapse: collapse; }
th { text-align: left; font-size: 0.75rem; text-transform: uppercase; color: var(--muted); background: #f9fafb; padding: 0.75rem; }
td { padding: 0.75rem; border-top: 1px solid var(--line); font-size: 0.9rem; }

button { font: inherit; cursor: pointer; border: 1px solid var(--line); background: var(--card); border-radius: 0.375rem; padding: 0.5rem 1rem; }
button.primary { background: var(--accent); color: white; border-color: var(--accent); }
button.round { border-radius: 999px; padding: 0.4rem 0.8rem; }
button.link { border: none; background: none; color: var(--accent); padding: 0; }

.month-nav { display: flex; align-items: center; gap: 1rem; }
.month-nav h2 { margin: 0; font-size: 1.1rem; min-width: 10rem; text-align: center; }
.calendar { padding: 0; overflow: hidden; }
.weekdays, .grid { display: grid; grid-template-columns: repeat(7, 1fr); }
.weekdays div { padding: 0.5rem; text-align: center; font-size: 0.85rem; background: #f9fafb; border-bottom: 1px solid var(--line); }
.cell { height: 6rem; border: 1px solid var(--line); border-radius: 0; padding: 0.5rem; text-align: left; vertical-align: top; overflow: hidden; }
.cell.blank { background: #f9fafb; }
.cell.day { display: flex; flex-direction: column; align-items: stretch; justify-content: flex-start; gap: 0.25rem; }
.cell.day:hover { background: #f9fafb; }
.cell.weekend { background: #f9fafb; }
.cell.selected { outline: 2px solid var(--accent); outline-offset: -2px; }
.cell-head { display: flex; justify-content: space-between; align-items: flex-start; }
.day-number { font-weight: 600; }
.note { margin: 0; font-size: 0.75rem; color: var(--muted); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.chip { display: block; border-radius: 0.25rem; font-size: 0.75rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.more { font-size: 0.75rem; color: var(--muted); }

.badge { display: inline-block; border-radius: 999px; padding: 0.1rem 0.5rem; font-size: 0.75rem; font-weight: 600; }
.status-present { background: #dcfce7; color: #166534; }
.status-absent { background: #fee2e2; color: #991b1b; }
.status-half-day { background: #fef9c3; color: #854d0e; }
.status-weekend { background: #f3f4f6; color: #6b7280; }
.status-holiday { background: #dbeafe; color: #1e40af; }
.status-leave { background: #f3e8ff; color: #6b21a8; }
.leave-sick { background: #fee2e2; color: #991b1b; }
.leave-vacation { background: #dbeafe; color: #1e40af; }
.leave-personal { background: #f3e8ff; color: #6b21a8; }
.leave-maternity { background: #fce7f3; color: #9d174d; }
.leave-paternity { background: #e0e7ff; color: #3730a3; }
.leave-other { background: #f3f4f6; color: #1f2937; }
.approval-approved { background: #dcfce7; color: #166534; }
.approval-pending { background: #fef9c3; color: #854d0e; }
.approval-rejected { background: #fee2e2; color: #991b1b; }

.summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); gap: 1rem; }
.tile { border-radius: 0.5rem; padding: 1rem; text-align: center; }
.tile .value { font-size: 1.25rem; }
.tile-present { background: var(--accent-soft); }
.tile-absent { background: #fef2f2; }

.ring { position: relative; width: 16rem; height: 16rem; margin: 0 auto; }
.ring svg { width: 100%; height: 100%; }
.ring-label { position: absolute; inset: 0; display: grid; place-content: center; text-align: center; }

.people { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
.person { border: 1px solid var(--line); border-radius: 0.5rem; padding: 1rem; display: grid; gap: 0.5rem; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 999px; background: var(--line); display: grid; place-content: center; }
.legend { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.legend > span { display: inline-flex; align-items: center; gap: 0.5rem; }
.dot { display: inline-block; width: 0.9rem; height: 0.9rem; border-radius: 999px; }

.tabs { display: flex; gap: 1rem; border-bottom: 1px solid var(--line); margin-bottom: 1.5rem; }
.tab { border: none; border-bottom: 2px solid transparent; border-radius: 0; background: none; color: var(--muted); }
.tab.active { color: var(--accent); border-bottom-color: var(--accent); }
.fields { display: grid; gap: 0.75rem; }
.fields.two-column { grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.fields .full { grid-column: 1 / -1; }
.fields label { display: block; font-size: 0.85rem; margin-bottom: 0.25rem; }
.fields input, .fields select, .fields textarea { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.375rem; font: inherit; }
.fields .missing { border-color: #dc2626; }
.actions { display: flex; justify-content: flex-end; gap: 0.75rem; }
.search { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.search input { flex: 1; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.375rem; }

.balance { margin-bottom: 1rem; }
.balance-head { display: flex; justify-content: space-between; margin-bottom: 0.25rem; }
.bar { height: 0.5rem; background: var(--line); border-radius: 999px; }
.fill { height: 100%; background: var(--accent); border-radius: 999px; }
.upcoming, .policies, .facts { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; }
.upcoming li { display: flex; gap: 0.75rem; align-items: flex-start; }
.policies li { font-size: 0.9rem; color: #374151; }

.notice { display: flex; justify-content: space-between; align-items: center; background: var(--accent-soft); color: var(--accent); border: 1px solid #a7f3d0; border-radius: 0.5rem; padding: 0.75rem 1rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarCursor;
    use crate::models::LeaveRecord;
    use crate::stats::summarize_month;
    use crate::views::CalendarEvent;

    fn april() -> CalendarView {
        CalendarView::new(CalendarCursor::new(2025, 3))
    }

    #[test]
    fn salary_groups_thousands() {
        assert_eq!(format_salary(85_000), "$85,000");
        assert_eq!(format_salary(999), "$999");
        assert_eq!(format_salary(1_234_567), "$1,234,567");
        assert_eq!(format_salary(0), "$0");
    }

    #[test]
    fn attendance_page_shows_selected_half_day() {
        let data = AppData::sample();
        let view = april().apply(CalendarEvent::Select(crate::calendar::DateKey::literal("2025-04-10")));
        let summary = summarize_month(&data.attendance, view.cursor);
        let page = render_attendance(&data, &view, &summary).into_string();
        assert!(page.contains("April 2025"));
        assert!(page.contains("selected-day"));
        assert!(page.contains("Thursday, April 10, 2025"));
        assert!(page.contains("Left early - Doctor appointment"));
        assert!(page.contains("half day"));
    }

    #[test]
    fn navigation_hides_detail_panel() {
        let data = AppData::sample();
        let view = april()
            .apply(CalendarEvent::Select(crate::calendar::DateKey::literal("2025-04-10")))
            .apply(CalendarEvent::NextMonth);
        let summary = summarize_month(&data.attendance, view.cursor);
        let page = render_attendance(&data, &view, &summary).into_string();
        assert!(page.contains("May 2025"));
        assert!(!page.contains("selected-day"));
    }

    #[test]
    fn empty_day_reports_no_record() {
        let data = AppData::sample();
        let view = CalendarView::new(CalendarCursor::new(2025, 4))
            .apply(CalendarEvent::Select(crate::calendar::DateKey::literal("2025-05-01")));
        let summary = summarize_month(&data.attendance, view.cursor);
        let page = render_attendance(&data, &view, &summary).into_string();
        assert!(page.contains("No attendance record for this date."));
    }

    #[test]
    fn crowded_day_shows_two_names_and_overflow() {
        let mut data = AppData::sample();
        let crowded: Vec<LeaveRecord> = (1..=5)
            .map(|employee_id| LeaveRecord {
                id: 100 + employee_id,
                employee_id,
                date: crate::calendar::DateKey::literal("2025-04-08"),
                leave_type: LeaveType::Vacation,
                status: LeaveStatus::Approved,
            })
            .collect();
        data.leaves = crowded.into_iter().collect();

        let page = render_team_calendar(&data, &april()).into_string();
        assert!(page.contains("John Doe"));
        assert!(page.contains("Jane Smith"));
        assert!(!page.contains("Robert Johnson"));
        assert!(page.contains("+3 more"));
    }

    #[test]
    fn four_leaves_collapse_to_two_and_overflow() {
        let mut data = AppData::sample();
        data.leaves = (1..=4)
            .map(|employee_id| LeaveRecord {
                id: 200 + employee_id,
                employee_id,
                date: crate::calendar::DateKey::literal("2025-04-09"),
                leave_type: LeaveType::Sick,
                status: LeaveStatus::Pending,
            })
            .collect();

        let page = render_team_calendar(&data, &april()).into_string();
        assert!(page.contains("John Doe"));
        assert!(page.contains("Jane Smith"));
        assert!(!page.contains("Robert Johnson"));
        assert!(!page.contains("Emily Davis"));
        assert!(page.contains("+2 more"));
    }

    #[test]
    fn form_controls_and_panels_carry_ids() {
        let data = AppData::sample();
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let leave = render_leave(&data, &LeaveView::default(), today).into_string();
        for id in ["leave_type", "start_date", "end_date", "reason"] {
            assert!(leave.contains(&format!(r#"id="{id}""#)), "missing id {id}");
        }

        let view = EmployeesView::default().apply(crate::views::EmployeesEvent::StartAdd);
        let form = render_employees(&data, &view).into_string();
        for id in ["department", "end_date", "address"] {
            assert!(form.contains(&format!(r#"id="{id}""#)), "missing id {id}");
        }

        let jane = data.employee(2).cloned().unwrap();
        let listed = EmployeesView::default()
            .apply(crate::views::EmployeesEvent::Edit(jane))
            .apply(crate::views::EmployeesEvent::ShowList);
        let list = render_employees(&data, &listed).into_string();
        assert!(list.contains(r#"id="employee-detail""#));

        let selected = april().apply(CalendarEvent::Select(crate::calendar::DateKey::literal("2025-04-21")));
        let team = render_team_calendar(&data, &selected).into_string();
        assert!(team.contains(r#"id="selected-day""#));
    }

    #[test]
    fn team_detail_lists_everyone_off() {
        let data = AppData::sample();
        let view = april().apply(CalendarEvent::Select(crate::calendar::DateKey::literal("2025-04-21")));
        let page = render_team_calendar(&data, &view).into_string();
        assert!(page.contains("Leaves on Monday, April 21, 2025"));
        assert!(page.contains("Sick Leave"));
        assert!(page.contains("Personal Leave"));
        assert!(page.contains("David Miller"));
    }

    #[test]
    fn nav_marks_current_page() {
        let data = AppData::sample();
        let page = render_employees(&data, &EmployeesView::default()).into_string();
        assert_eq!(page.matches(r#"class="active""#).count(), 1);
        assert!(page.contains(r#"href="/employees""#));
        assert!(page.contains(r#"href="/team-calendar""#));
    }

    #[test]
    fn markup_escapes_user_text() {
        let data = AppData::sample();
        let view = EmployeesView {
            search: "<script>".to_string(),
            ..EmployeesView::default()
        };
        let page = render_employees(&data, &view).into_string();
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("value=\"<script>\""));
    }
}
