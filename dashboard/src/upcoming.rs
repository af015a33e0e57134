use asana::types::Task;
use chrono::{Days, NaiveDate};

/// Tasks qualify when due at most this many days out, inclusive.
pub const WINDOW_DAYS: u64 = 30;

/// Incomplete, dated, and due within `[today, today + 30 days]`.
pub fn is_upcoming(task: &Task, today: NaiveDate) -> bool {
    if task.completed {
        return false;
    }

    let Some(due_on) = task.due_on else {
        return false;
    };

    let Some(horizon) = today.checked_add_days(Days::new(WINDOW_DAYS)) else {
        return false;
    };

    due_on >= today && due_on <= horizon
}
