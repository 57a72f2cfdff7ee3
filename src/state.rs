use crate::models::AppData;
use crate::reconcile;
use crate::reminder::ReminderScheduler;
use std::{
    path::PathBuf,
    sync::{atomic::AtomicBool, Arc},
};
use tokio::sync::Mutex;

/// Shared session state. `data` is the single mutable value every operation
/// works on; handlers hold its lock across mutate-and-persist so no request
/// observes a half-applied change.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Whether the page reported itself visible. Reminder ticks skip while
    /// this is false.
    pub visible: Arc<AtomicBool>,
    /// Pending reminder signal; set by the scheduler, drained by the page.
    pub reminder_due: Arc<AtomicBool>,
    /// Last day key the rollover poll saw.
    pub last_day: Arc<Mutex<String>>,
    pub reminders: Arc<ReminderScheduler>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            visible: Arc::new(AtomicBool::new(true)),
            reminder_due: Arc::new(AtomicBool::new(false)),
            last_day: Arc::new(Mutex::new(reconcile::today_key())),
            reminders: Arc::new(ReminderScheduler::new()),
        }
    }
}
