use chrono::{Datelike, Days, Months, NaiveDate};

pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = GRID_CELLS / DAYS_PER_WEEK;

pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Six weeks starting on the Sunday on or before the 1st of the month.
pub fn generate_grid(month_reference: NaiveDate) -> [NaiveDate; GRID_CELLS] {
    let start = start_of_week(first_of_month(month_reference));
    std::array::from_fn(|i| {
        start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// The day is clamped to the target month's length.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
