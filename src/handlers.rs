use crate::calendar::{Cell, CalendarCursor, DateKey, build_grid};
use crate::errors::AppError;
use crate::forms::{EmployeeForm, LeaveForm};
use crate::models::{AttendanceDay, AttendanceRecord, Employee, GridResponse, LeaveRecord, TeamLeaveEntry, search_employees};
use crate::state::AppState;
use crate::stats::{dashboard_snapshot, summarize_month};
use crate::ui::{render_attendance, render_dashboard, render_employees, render_leave, render_team_calendar};
use crate::views::{CalendarEvent, CalendarView, EmployeesEvent, EmployeesTab, LeaveEvent, LeaveTab, ViewState};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct DateForm {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct TabForm<T> {
    pub tab: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Copy)]
pub enum CalendarKind {
    Attendance,
    Team,
}

impl CalendarKind {
    fn view_mut(self, views: &mut ViewState) -> &mut CalendarView {
        match self {
            CalendarKind::Attendance => &mut views.attendance,
            CalendarKind::Team => &mut views.team_calendar,
        }
    }

    fn path(self) -> &'static str {
        match self {
            CalendarKind::Attendance => "/attendance",
            CalendarKind::Team => "/team-calendar",
        }
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let snapshot = dashboard_snapshot(&state.data);
    Html(render_dashboard(&state.data, &snapshot).into_string())
}

pub async fn attendance_page(State(state): State<AppState>) -> Html<String> {
    let views = state.views.lock().await;
    let summary = summarize_month(&state.data.attendance, views.attendance.cursor);
    Html(render_attendance(&state.data, &views.attendance, &summary).into_string())
}

pub async fn team_calendar_page(State(state): State<AppState>) -> Html<String> {
    let views = state.views.lock().await;
    Html(render_team_calendar(&state.data, &views.team_calendar).into_string())
}

pub async fn leave_page(State(state): State<AppState>) -> Html<String> {
    let views = state.views.lock().await;
    let today = Local::now().date_naive();
    Html(render_leave(&state.data, &views.leave, today).into_string())
}

pub async fn employees_page(State(state): State<AppState>) -> Html<String> {
    let views = state.views.lock().await;
    Html(render_employees(&state.data, &views.employees).into_string())
}

async fn apply_calendar(state: &AppState, kind: CalendarKind, event: CalendarEvent) -> Redirect {
    let mut views = state.views.lock().await;
    let view = kind.view_mut(&mut views);
    *view = view.clone().apply(event);
    debug!(calendar = ?kind, cursor = ?view.cursor, selected = ?view.selected, "calendar view updated");
    Redirect::to(kind.path())
}

pub async fn attendance_prev(State(state): State<AppState>) -> Redirect {
    apply_calendar(&state, CalendarKind::Attendance, CalendarEvent::PrevMonth).await
}

pub async fn attendance_next(State(state): State<AppState>) -> Redirect {
    apply_calendar(&state, CalendarKind::Attendance, CalendarEvent::NextMonth).await
}

pub async fn attendance_select(
    State(state): State<AppState>,
    Form(form): Form<DateForm>,
) -> Result<Redirect, AppError> {
    let date = DateKey::parse(&form.date)?;
    Ok(apply_calendar(&state, CalendarKind::Attendance, CalendarEvent::Select(date)).await)
}

pub async fn team_prev(State(state): State<AppState>) -> Redirect {
    apply_calendar(&state, CalendarKind::Team, CalendarEvent::PrevMonth).await
}

pub async fn team_next(State(state): State<AppState>) -> Redirect {
    apply_calendar(&state, CalendarKind::Team, CalendarEvent::NextMonth).await
}

pub async fn team_select(
    State(state): State<AppState>,
    Form(form): Form<DateForm>,
) -> Result<Redirect, AppError> {
    let date = DateKey::parse(&form.date)?;
    Ok(apply_calendar(&state, CalendarKind::Team, CalendarEvent::Select(date)).await)
}

pub async fn leave_tab(State(state): State<AppState>, Form(form): Form<TabForm<LeaveTab>>) -> Redirect {
    let mut views = state.views.lock().await;
    views.leave = views.leave.clone().apply(LeaveEvent::ShowTab(form.tab));
    Redirect::to("/leave")
}

/// Accepted applications redirect back with a notice; incomplete ones
/// re-render the form with what was entered.
pub async fn leave_apply(State(state): State<AppState>, Form(form): Form<LeaveForm>) -> Response {
    let mut views = state.views.lock().await;
    views.leave = views.leave.clone().apply(LeaveEvent::Submit(form));

    if views.leave.missing.is_empty() {
        return Redirect::to("/leave").into_response();
    }

    let today = Local::now().date_naive();
    let page = render_leave(&state.data, &views.leave, today).into_string();
    (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
}

pub async fn leave_dismiss(State(state): State<AppState>) -> Redirect {
    let mut views = state.views.lock().await;
    views.leave = views.leave.clone().apply(LeaveEvent::DismissNotice);
    Redirect::to("/leave")
}

pub async fn employees_tab(
    State(state): State<AppState>,
    Form(form): Form<TabForm<EmployeesTab>>,
) -> Redirect {
    let event = match form.tab {
        EmployeesTab::List => EmployeesEvent::ShowList,
        EmployeesTab::Form => EmployeesEvent::StartAdd,
    };
    let mut views = state.views.lock().await;
    views.employees = views.employees.clone().apply(event);
    Redirect::to("/employees")
}

pub async fn employees_search(State(state): State<AppState>, Form(query): Form<SearchQuery>) -> Redirect {
    let mut views = state.views.lock().await;
    views.employees = views.employees.clone().apply(EmployeesEvent::Search(query.q));
    Redirect::to("/employees")
}

pub async fn employees_edit(State(state): State<AppState>, Path(id): Path<u32>) -> Result<Redirect, AppError> {
    let employee = state
        .data
        .employee(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("no employee with id {id}")))?;

    let mut views = state.views.lock().await;
    views.employees = views.employees.clone().apply(EmployeesEvent::Edit(employee));
    Ok(Redirect::to("/employees"))
}

pub async fn employees_submit(State(state): State<AppState>, Form(form): Form<EmployeeForm>) -> Response {
    let mut views = state.views.lock().await;
    views.employees = views.employees.clone().apply(EmployeesEvent::Submit(form));

    if views.employees.missing.is_empty() {
        return Redirect::to("/employees").into_response();
    }

    let page = render_employees(&state.data, &views.employees).into_string();
    (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
}

pub async fn employees_dismiss(State(state): State<AppState>) -> Redirect {
    let mut views = state.views.lock().await;
    views.employees = views.employees.clone().apply(EmployeesEvent::DismissNotice);
    Redirect::to("/employees")
}

/// `month` in the URL is 1-based, as people write it.
fn api_cursor(year: i32, month: u32) -> Result<CalendarCursor, AppError> {
    let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
    if !years.contains(&year) {
        return Err(AppError::bad_request(format!(
            "year must be between {} and {}",
            years.start(),
            years.end()
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }
    Ok(CalendarCursor::new(year, month as i32 - 1))
}

pub async fn api_attendance_grid(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<GridResponse<Option<AttendanceRecord>>>, AppError> {
    let cursor = api_cursor(year, month)?;
    let cells = build_grid(cursor, |key| state.data.attendance.first(key).cloned());
    Ok(Json(grid_response(cursor, cells)))
}

pub async fn api_team_grid(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<GridResponse<Vec<LeaveRecord>>>, AppError> {
    let cursor = api_cursor(year, month)?;
    let cells = build_grid(cursor, |key| {
        state.data.leaves.all(key).into_iter().cloned().collect::<Vec<_>>()
    });
    Ok(Json(grid_response(cursor, cells)))
}

fn grid_response<T>(cursor: CalendarCursor, cells: Vec<Cell<T>>) -> GridResponse<T> {
    GridResponse {
        year: cursor.year(),
        month: cursor.month_number(),
        label: cursor.label(),
        cells,
    }
}

pub async fn api_attendance_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, AppError> {
    let date = DateKey::parse(&date)?;
    let record = state.data.attendance.first(&date);
    Ok(Json(AttendanceDay { date: &date, record }).into_response())
}

pub async fn api_leaves_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, AppError> {
    let date = DateKey::parse(&date)?;
    let entries: Vec<TeamLeaveEntry<'_>> = state
        .data
        .leaves
        .all(&date)
        .into_iter()
        .map(|record| {
            let member = state.data.team_member(record.employee_id);
            TeamLeaveEntry {
                record,
                employee_name: member.map(|m| m.name.as_str()),
                department: member.map(|m| m.department.as_str()),
            }
        })
        .collect();
    Ok(Json(entries).into_response())
}

pub async fn api_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Employee>> {
    let matches = search_employees(&state.data.employees, &query.q)
        .into_iter()
        .cloned()
        .collect();
    Json(matches)
}

pub async fn fallback(uri: axum::http::Uri) -> AppError {
    info!("no route for {uri}");
    AppError::not_found("page not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppData;

    fn state() -> AppState {
        AppState::new(AppData::sample(), NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())
    }

    #[test]
    fn cursor_accepts_every_representable_month() {
        let cursor = api_cursor(2025, 4).unwrap();
        assert_eq!((cursor.year(), cursor.month()), (2025, 3));

        let last = api_cursor(NaiveDate::MAX.year(), 12).unwrap();
        assert_eq!(last.days(), 31);
        assert!(api_cursor(NaiveDate::MIN.year(), 1).is_ok());
    }

    #[test]
    fn cursor_rejects_out_of_range_years_and_months() {
        for (year, month) in [(300_000, 2), (i32::MAX, 12), (i32::MIN, 1), (2025, 0), (2025, 13)] {
            let err = api_cursor(year, month).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "{year}/{month}");
        }
    }

    #[tokio::test]
    async fn grid_for_unrepresentable_year_is_bad_request() {
        let response = api_attendance_grid(State(state()), Path((i32::MAX, 12)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = api_team_grid(State(state()), Path((300_000, 2)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn grid_for_valid_month_has_blanks_then_days() {
        let Json(grid) = api_attendance_grid(State(state()), Path((2025, 4))).await.unwrap();
        assert_eq!(grid.label, "April 2025");
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_blank()).count(), 2);
        assert_eq!(grid.cells.len(), 32);
    }
}
