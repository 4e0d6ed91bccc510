use crate::models::Database;
use chrono::{Local, NaiveDate};
use std::{env, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::warn;

/// Source of "today" for all date arithmetic. `GYMIFY_TODAY=YYYY-MM-DD`
/// pins the date, which the integration tests rely on.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn from_env() -> Self {
        match env::var("GYMIFY_TODAY") {
            Ok(raw) => match raw.parse::<NaiveDate>() {
                Ok(date) => Clock::Fixed(date),
                Err(err) => {
                    warn!("ignoring unparseable GYMIFY_TODAY {raw:?}: {err}");
                    Clock::System
                }
            },
            Err(_) => Clock::System,
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub db: Arc<Mutex<Database>>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(data_path: PathBuf, db: Database, clock: Clock) -> Self {
        Self {
            data_path,
            db: Arc::new(Mutex::new(db)),
            clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_the_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(Clock::Fixed(date).today(), date);
    }
}
