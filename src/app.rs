use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/attendance", get(handlers::attendance_page))
        .route("/attendance/prev", post(handlers::attendance_prev))
        .route("/attendance/next", post(handlers::attendance_next))
        .route("/attendance/select", post(handlers::attendance_select))
        .route("/team-calendar", get(handlers::team_calendar_page))
        .route("/team-calendar/prev", post(handlers::team_prev))
        .route("/team-calendar/next", post(handlers::team_next))
        .route("/team-calendar/select", post(handlers::team_select))
        .route("/leave", get(handlers::leave_page))
        .route("/leave/tab", post(handlers::leave_tab))
        .route("/leave/apply", post(handlers::leave_apply))
        .route("/leave/notice/dismiss", post(handlers::leave_dismiss))
        .route("/employees", get(handlers::employees_page))
        .route("/employees/tab", post(handlers::employees_tab))
        .route("/employees/search", post(handlers::employees_search))
        .route("/employees/submit", post(handlers::employees_submit))
        .route("/employees/:id/edit", post(handlers::employees_edit))
        .route("/employees/notice/dismiss", post(handlers::employees_dismiss))
        .route("/api/calendar/attendance/:year/:month", get(handlers::api_attendance_grid))
        .route("/api/calendar/team/:year/:month", get(handlers::api_team_grid))
        .route("/api/attendance/:date", get(handlers::api_attendance_day))
        .route("/api/leaves/:date", get(handlers::api_leaves_day))
        .route("/api/employees", get(handlers::api_employees))
        .fallback(handlers::fallback)
        .with_state(state)
}
