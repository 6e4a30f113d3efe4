use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoStatus {
    Incomplete,
    Completed,
    /// A recurring item whose next due date has not yet arrived. Only ever
    /// set on items with a concrete repeat period.
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatPeriod {
    Never,
    Week,
    Month,
    Year,
}

impl RepeatPeriod {
    pub fn is_never(self) -> bool {
        self == RepeatPeriod::Never
    }
}

impl fmt::Display for RepeatPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RepeatPeriod::Never => "never",
            RepeatPeriod::Week => "week",
            RepeatPeriod::Month => "month",
            RepeatPeriod::Year => "year",
        };
        f.write_str(s)
    }
}

impl FromStr for RepeatPeriod {
    type Err = TodoError;

    /// Parses user input for the `repeat` command; `never` is deliberately
    /// not accepted here (stopping a schedule is a separate operation).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" | "weekly" => Ok(RepeatPeriod::Week),
            "month" | "monthly" => Ok(RepeatPeriod::Month),
            "year" | "yearly" => Ok(RepeatPeriod::Year),
            other => Err(TodoError::Api(format!(
                "Cannot set '--every' to '{}', expected week, month or year",
                other
            ))),
        }
    }
}

/// One task. The serde renames keep the on-disk JSON contract stable
/// (`ctime`, `dtime`, `event`, `s_date`, `n_date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation time, unix seconds. Sort key and de facto identity within a
    /// session; refreshed by `redo` so redone items surface at the top.
    #[serde(rename = "ctime")]
    pub created_at: i64,

    /// Terminal completion time, unix seconds; 0 means "not completed".
    /// Recurring items never record a completion time.
    #[serde(rename = "dtime", default)]
    pub done_at: i64,

    pub event: String,

    pub status: TodoStatus,

    pub repeat: RepeatPeriod,

    /// First-occurrence anchor, `YYYY-MM-DD`; empty when `repeat` is `Never`.
    #[serde(rename = "s_date", default)]
    pub start_date: String,

    /// Next date this item flips back to `Incomplete`; empty when `repeat`
    /// is `Never`.
    #[serde(rename = "n_date", default)]
    pub next_date: String,
}

impl TodoItem {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            created_at: now(),
            done_at: 0,
            event: event.into(),
            status: TodoStatus::Incomplete,
            repeat: RepeatPeriod::Never,
            start_date: String::new(),
            next_date: String::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done_at > 0
    }

    pub fn is_repeating(&self) -> bool {
        !self.repeat.is_never()
    }
}

/// The whole persisted document: one JSON file, read once at the start of an
/// invocation and written once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDb {
    /// `YYYY-MM-DD` of the last schedule refresh; empty when never
    /// refreshed. Guards the once-per-calendar-day scan.
    #[serde(rename = "u_date", default)]
    pub last_refreshed: String,

    /// Motivational one-liners; the first one, when present, is shown above
    /// the list output.
    #[serde(default)]
    pub mottos: Vec<String>,

    #[serde(default)]
    pub items: Vec<TodoItem>,
}

/// Current unix time in seconds.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_no_schedule() {
        let item = TodoItem::new("buy more beer");
        assert_eq!(item.status, TodoStatus::Incomplete);
        assert_eq!(item.repeat, RepeatPeriod::Never);
        assert!(item.start_date.is_empty());
        assert!(item.next_date.is_empty());
        assert!(!item.is_done());
        assert!(item.created_at > 0);
    }

    #[test]
    fn period_parses_user_spellings() {
        assert_eq!("week".parse::<RepeatPeriod>().unwrap(), RepeatPeriod::Week);
        assert_eq!(
            "Monthly".parse::<RepeatPeriod>().unwrap(),
            RepeatPeriod::Month
        );
        assert_eq!("YEAR".parse::<RepeatPeriod>().unwrap(), RepeatPeriod::Year);
        assert!("never".parse::<RepeatPeriod>().is_err());
        assert!("fortnight".parse::<RepeatPeriod>().is_err());
    }

    #[test]
    fn db_json_contract_uses_original_field_names() {
        let mut db = TodoDb::default();
        db.last_refreshed = "2024-06-01".to_string();
        let mut item = TodoItem::new("water the plants");
        item.repeat = RepeatPeriod::Week;
        item.start_date = "2024-06-03".to_string();
        item.next_date = "2024-06-10".to_string();
        db.items.push(item);

        let json = serde_json::to_string(&db).unwrap();
        assert!(json.contains("\"u_date\""));
        assert!(json.contains("\"ctime\""));
        assert!(json.contains("\"s_date\":\"2024-06-03\""));
        assert!(json.contains("\"n_date\":\"2024-06-10\""));
        assert!(json.contains("\"repeat\":\"Week\""));
        assert!(json.contains("\"status\":\"Incomplete\""));

        let parsed: TodoDb = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, db);
    }
}
