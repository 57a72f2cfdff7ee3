use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Repeating drink reminder. At most one timer task is armed at a time:
/// reconfiguring always stops the previous task before starting the next,
/// and a `None` interval leaves the scheduler idle.
#[derive(Default)]
pub struct ReminderScheduler {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms the timer. `minutes` must already be validated
    /// (positive finite), as by `Settings::effective_reminder_minutes`.
    ///
    /// Each tick while armed: if the page is hidden the tick is skipped
    /// silently; otherwise the pending flag is raised. The flag never
    /// queues, so missed reminders are dropped rather than caught up.
    pub async fn configure(
        &self,
        minutes: Option<f64>,
        visible: Arc<AtomicBool>,
        due: Arc<AtomicBool>,
    ) {
        let mut task = self.task.lock().await;
        if let Some(previous) = task.take() {
            previous.abort();
        }
        let Some(minutes) = minutes else {
            return;
        };

        // An interval too large to represent as a Duration would never fire.
        let Ok(period) = Duration::try_from_secs_f64(minutes * 60.0) else {
            return;
        };
        *task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of an interval completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !visible.load(Ordering::Relaxed) {
                    continue;
                }
                due.store(true, Ordering::Relaxed);
                info!("reminder due");
            }
        }));
    }

    pub async fn is_armed(&self) -> bool {
        self.task.lock().await.is_some()
    }
}
