use crate::models::AppData;
use crate::views::ViewState;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<AppData>,
    pub views: Arc<Mutex<ViewState>>,
}

impl AppState {
    pub fn new(data: AppData, today: NaiveDate) -> Self {
        Self {
            data: Arc::new(data),
            views: Arc::new(Mutex::new(ViewState::new(today))),
        }
    }
}
