use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days with more entries than this collapse into a preview plus an overflow count.
pub const PREVIEW_LIMIT: usize = 3;
pub const PREVIEW_SHOWN: usize = 2;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key joining grid days to records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub(crate) fn literal(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Accepts any `YYYY-MM-DD` calendar date and stores it zero-padded.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT)?;
        Ok(Self::from_date(date))
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// `month` is 0-based.
pub fn format_date_key(year: i32, month: u32, day: u32) -> DateKey {
    DateKey(format!("{year:04}-{:02}-{day:02}", month + 1))
}

/// Length of a 0-based month; 0 when the month or year is outside what
/// `NaiveDate` can represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month.saturating_add(1), 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // December of the last representable year.
        None => 31,
    }
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month.saturating_add(1), 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// "Monday, April 21, 2025"
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The (year, month) pair a calendar view is showing. `month` is 0-based and
/// always within `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    /// Normalizes any month offset, so `new(2025, -1)` is December 2024.
    pub fn new(year: i32, month: i32) -> Self {
        Self {
            year: year.saturating_add(month.div_euclid(12)),
            month: month.rem_euclid(12) as u32,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn shift(self, delta: i32) -> Self {
        Self::new(self.year, (self.month as i32).saturating_add(delta))
    }

    pub fn prev_month(self) -> Self {
        self.shift(-1)
    }

    pub fn next_month(self) -> Self {
        self.shift(1)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// "April 2025"
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month + 1, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell<T> {
    Blank,
    Day {
        day: u32,
        date_key: DateKey,
        records: T,
    },
}

impl<T> Cell<T> {
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Leading blanks for the weekday of the 1st, then one cell per day. No
/// trailing padding.
pub fn build_grid<T>(cursor: CalendarCursor, mut lookup: impl FnMut(&DateKey) -> T) -> Vec<Cell<T>> {
    let (year, month) = (cursor.year(), cursor.month());
    let blanks = first_weekday(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend((0..blanks).map(|_| Cell::Blank));
    for day in 1..=days {
        let date_key = format_date_key(year, month, day);
        let records = lookup(&date_key);
        cells.push(Cell::Day {
            day,
            date_key,
            records,
        });
    }
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a, T> {
    pub shown: &'a [T],
    pub overflow: usize,
}

pub fn preview<T>(items: &[T]) -> Preview<'_, T> {
    if items.len() <= PREVIEW_LIMIT {
        Preview {
            shown: items,
            overflow: 0,
        }
    } else {
        Preview {
            shown: &items[..PREVIEW_SHOWN],
            overflow: items.len() - PREVIEW_SHOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_count<T>(cells: &[Cell<T>]) -> usize {
        cells.iter().filter(|cell| !cell.is_blank()).count()
    }

    fn blank_count<T>(cells: &[Cell<T>]) -> usize {
        cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2025, 11), 31);
        assert_eq!(days_in_month(2025, 3), 30);
    }

    #[test]
    fn april_2025_starts_on_tuesday() {
        let cells = build_grid(CalendarCursor::new(2025, 3), |_| ());
        assert_eq!(blank_count(&cells), 2);
        assert_eq!(day_count(&cells), 30);
        assert_eq!(cells.len(), 32);
    }

    #[test]
    fn grid_matches_calendar_for_every_month() {
        for year in [1999, 2023, 2024, 2025, 2100] {
            for month in 0..12 {
                let cursor = CalendarCursor::new(year, month);
                let cells = build_grid(cursor, |_| ());
                let first = NaiveDate::from_ymd_opt(year, month as u32 + 1, 1).unwrap();
                assert_eq!(blank_count(&cells), first.weekday().num_days_from_sunday() as usize);
                assert_eq!(day_count(&cells), cursor.days() as usize);
                assert!(cells.iter().skip(blank_count(&cells)).all(|cell| !cell.is_blank()));
            }
        }
    }

    #[test]
    fn grid_cells_carry_padded_keys() {
        let cells = build_grid(CalendarCursor::new(2025, 0), |key| key.clone());
        let Some(Cell::Day { day, date_key, records }) = cells.iter().find(|cell| !cell.is_blank()) else {
            panic!("no day cells");
        };
        assert_eq!(*day, 1);
        assert_eq!(date_key.as_str(), "2025-01-01");
        assert_eq!(records, date_key);
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(days_in_month(i32::MAX, 11), 0);
        assert_eq!(first_weekday(i32::MAX, 11), 0);
        assert_eq!(days_in_month(2025, 12), 0);

        let last_year = NaiveDate::MAX.year();
        assert_eq!(days_in_month(last_year, 11), 31);
        let cells = build_grid(CalendarCursor::new(last_year, 11), |_| ());
        assert_eq!(day_count(&cells), 31);

        let first_year = NaiveDate::MIN.year();
        assert_eq!(days_in_month(first_year, 0), 31);

        let edge = CalendarCursor::new(i32::MAX, 11).next_month();
        assert_eq!(edge.year(), i32::MAX);
        assert_eq!(edge.month(), 0);
        assert_eq!(CalendarCursor::new(i32::MIN, 0).prev_month().year(), i32::MIN);
    }

    #[test]
    fn cursor_rolls_over_year_boundaries() {
        let december = CalendarCursor::new(2024, 11);
        assert_eq!(december.next_month(), CalendarCursor::new(2025, 0));
        assert_eq!(CalendarCursor::new(2025, 0).prev_month(), december);
        assert_eq!(CalendarCursor::new(2025, -1), december);
        assert_eq!(CalendarCursor::new(2025, 25), CalendarCursor::new(2027, 1));
        assert_eq!(CalendarCursor::new(2025, -13).year(), 2023);
        assert_eq!(CalendarCursor::new(2025, -13).month(), 11);
    }

    #[test]
    fn twelve_steps_forward_is_next_year() {
        for month in 0..12 {
            let start = CalendarCursor::new(2025, month);
            let end = (0..12).fold(start, |cursor, _| cursor.next_month());
            assert_eq!(end.year(), 2026);
            assert_eq!(end.month(), start.month());
            assert_eq!(start.prev_month().next_month(), start);
        }
    }

    #[test]
    fn date_keys_round_trip() {
        for month in 0..12u32 {
            for day in 1..=31u32 {
                if day > days_in_month(2024, month) {
                    continue;
                }
                let key = format_date_key(2024, month, day);
                let reparsed = DateKey::parse(key.as_str()).unwrap();
                assert_eq!(reparsed, key);
                assert_eq!(DateKey::from_date(key.to_date().unwrap()), key);
            }
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(DateKey::parse("2025-02-30").is_err());
        assert!(DateKey::parse("not-a-date").is_err());
        assert_eq!(DateKey::parse("2025-4-2").unwrap().as_str(), "2025-04-02");
    }

    #[test]
    fn labels_use_english_names() {
        assert_eq!(CalendarCursor::new(2025, 3).label(), "April 2025");
        let date = NaiveDate::from_ymd_opt(2025, 4, 21).unwrap();
        assert_eq!(long_date_label(date), "Monday, April 21, 2025");
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap()));
        assert!(!is_weekend(date));
    }

    #[test]
    fn preview_collapses_long_lists() {
        let three = [1, 2, 3];
        assert_eq!(preview(&three).shown, &three);
        assert_eq!(preview(&three).overflow, 0);

        let four = [1, 2, 3, 4];
        let collapsed = preview(&four);
        assert_eq!(collapsed.shown, &[1, 2]);
        assert_eq!(collapsed.overflow, 2);

        let five = [1, 2, 3, 4, 5];
        let collapsed = preview(&five);
        assert_eq!(collapsed.shown, &[1, 2]);
        assert_eq!(collapsed.overflow, 3);
    }
}
