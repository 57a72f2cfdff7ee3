use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TARGET_ML: f64 = 2000.0;
pub const DEFAULT_CUP_ML: f64 = 250.0;

/// Color scheme preference. `System` defers to the browser's
/// `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

/// User settings, stored in the persisted document under `settings`.
///
/// Field values are stored as given; consumers go through the `effective_*`
/// accessors, which apply the fallback rule in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub daily_target_ml: f64,
    pub cup_size_ml: f64,
    pub reminder_minutes: Option<f64>,
    pub theme: Option<Theme>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_target_ml: DEFAULT_TARGET_ML,
            cup_size_ml: DEFAULT_CUP_ML,
            reminder_minutes: None,
            theme: None,
        }
    }
}

impl Settings {
    /// Daily target in ml, falling back to the default unless positive finite.
    pub fn effective_target_ml(&self) -> f64 {
        positive_or(self.daily_target_ml, DEFAULT_TARGET_ML)
    }

    /// Cup size in ml, falling back to the default unless positive finite.
    pub fn effective_cup_ml(&self) -> f64 {
        positive_or(self.cup_size_ml, DEFAULT_CUP_ML)
    }

    /// Reminder interval in minutes; `None` means reminders are disabled.
    pub fn effective_reminder_minutes(&self) -> Option<f64> {
        self.reminder_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
    }

    /// Applies a settings update. Absent or invalid numeric fields keep the
    /// stored value; an absent or invalid reminder interval disables
    /// reminders; an absent theme keeps the stored theme.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(target) = update.daily_target_ml {
            if target.is_finite() && target > 0.0 {
                self.daily_target_ml = target;
            }
        }
        if let Some(cup) = update.cup_size_ml {
            if cup.is_finite() && cup > 0.0 {
                self.cup_size_ml = cup;
            }
        }
        self.reminder_minutes = update
            .reminder_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0);
        if let Some(theme) = update.theme {
            self.theme = Some(theme);
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// One calendar day of intake. `total_ml` and `cups` only move together,
/// through the ledger operations, and never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DayRecord {
    pub total_ml: f64,
    pub cups: u32,
}

pub type History = BTreeMap<String, DayRecord>;

/// Root persisted document: the single slot's full contents, and the exact
/// shape of exported/imported files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    pub settings: Settings,
    pub history: History,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub daily_target_ml: Option<f64>,
    pub cup_size_ml: Option<f64>,
    pub reminder_minutes: Option<f64>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub date: String,
    pub total_ml: f64,
    pub cups: u32,
    pub percent: u32,
    pub remaining_ml: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub days: Vec<DayPoint>,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub ml: f64,
}

/// Precomputed bar geometry for the history chart; the page only draws.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct SignalsResponse {
    pub reminder_due: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_values_fall_back_when_not_positive_finite() {
        let mut settings = Settings::default();
        settings.daily_target_ml = f64::INFINITY;
        settings.cup_size_ml = 0.0;
        settings.reminder_minutes = Some(-30.0);
        assert_eq!(settings.effective_target_ml(), DEFAULT_TARGET_ML);
        assert_eq!(settings.effective_cup_ml(), DEFAULT_CUP_ML);
        assert_eq!(settings.effective_reminder_minutes(), None);
    }

    #[test]
    fn apply_keeps_stored_values_for_absent_or_invalid_fields() {
        let mut settings = Settings {
            daily_target_ml: 1800.0,
            cup_size_ml: 200.0,
            reminder_minutes: Some(45.0),
            theme: Some(Theme::Dark),
        };
        settings.apply(&SettingsUpdate {
            daily_target_ml: Some(-5.0),
            cup_size_ml: None,
            reminder_minutes: Some(30.0),
            theme: None,
        });
        assert_eq!(settings.daily_target_ml, 1800.0);
        assert_eq!(settings.cup_size_ml, 200.0);
        assert_eq!(settings.reminder_minutes, Some(30.0));
        assert_eq!(settings.theme, Some(Theme::Dark));
    }

    #[test]
    fn apply_disables_reminders_when_interval_is_absent() {
        let mut settings = Settings::default();
        settings.reminder_minutes = Some(45.0);
        settings.apply(&SettingsUpdate::default());
        assert_eq!(settings.reminder_minutes, None);
    }

    #[test]
    fn stored_schema_uses_camel_case_keys() {
        let mut data = AppData::default();
        data.history.insert(
            "2026-08-05".to_string(),
            DayRecord {
                total_ml: 500.0,
                cups: 2,
            },
        );
        let json = serde_json::to_value(&data).unwrap();
        assert!(json["settings"].get("dailyTargetMl").is_some());
        assert!(json["settings"].get("cupSizeMl").is_some());
        assert_eq!(json["history"]["2026-08-05"]["totalMl"], 500.0);
        assert_eq!(json["history"]["2026-08-05"]["cups"], 2);
    }
}
