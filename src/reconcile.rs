use crate::errors::ImportError;
use crate::models::{AppData, DayRecord};
use crate::state::AppState;
use crate::storage::persist_data;
use chrono::{Local, NaiveDate};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

/// How many calendar days of history are retained.
pub const HISTORY_DAYS: usize = 30;

/// How often the cached day key is compared against the clock.
const ROLLOVER_POLL: Duration = Duration::from_secs(60);

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local calendar date as a `YYYY-MM-DD` key. Keys in this format
/// sort chronologically as strings.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Guarantees a record for today exists, pruning history to the most recent
/// [`HISTORY_DAYS`] keys when a new one is inserted. Returns whether the
/// state changed, so callers persist only when needed; a second call on a
/// reconciled state is a no-op.
pub fn ensure_today(data: &mut AppData) -> bool {
    ensure_today_at(Local::now().date_naive(), data)
}

pub fn ensure_today_at(today: NaiveDate, data: &mut AppData) -> bool {
    let key = date_key(today);
    if data.history.contains_key(&key) {
        return false;
    }

    data.history.insert(key, DayRecord::default());
    while data.history.len() > HISTORY_DAYS {
        data.history.pop_first();
    }
    true
}

/// Parses and validates an imported document. The result replaces the live
/// state wholesale; callers must run [`ensure_today`] on it before use.
pub fn import_data(raw: &str) -> Result<AppData, ImportError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(ImportError::Parse)?;
    let Some(object) = value.as_object() else {
        return Err(ImportError::MissingSettings);
    };
    if !object.contains_key("settings") {
        return Err(ImportError::MissingSettings);
    }
    if !object.contains_key("history") {
        return Err(ImportError::MissingHistory);
    }

    serde_json::from_value(value).map_err(ImportError::Parse)
}

/// Periodic day-rollover check. The clock has no change notification, so the
/// cached day key is polled; on mismatch the history is reconciled for the
/// new day and persisted. The page picks the change up through its own API
/// polling.
pub fn spawn_rollover_poll(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(ROLLOVER_POLL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let key = today_key();
            let mut last_day = state.last_day.lock().await;
            if *last_day == key {
                continue;
            }
            info!("day rolled over to {key}");
            *last_day = key;
            drop(last_day);

            let mut data = state.data.lock().await;
            if ensure_today(&mut data) {
                if let Err(err) = persist_data(&state.data_path, &data).await {
                    error!("failed to persist state after rollover: {err}");
                }
            }
        }
    })
}
