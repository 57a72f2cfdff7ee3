use crate::models::{AppData, DayRecord};
use crate::reconcile::{date_key, ensure_today_at};
use chrono::{Local, NaiveDate};

/// Daily total above which a mutation carries an advisory warning. The value
/// itself is never clamped.
pub const SOFT_LIMIT_ML: f64 = 10_000.0;

/// Result of one glass operation: the updated record for today and whether
/// the soft limit was exceeded by the new total.
#[derive(Debug, Clone, PartialEq)]
pub struct GlassOutcome {
    pub record: DayRecord,
    pub warned: bool,
}

/// Adds one cup (current effective cup size) to today's record.
pub fn add_glass(data: &mut AppData) -> GlassOutcome {
    add_glass_at(Local::now().date_naive(), data)
}

pub fn add_glass_at(today: NaiveDate, data: &mut AppData) -> GlassOutcome {
    ensure_today_at(today, data);
    let cup = data.settings.effective_cup_ml();
    let entry = data.history.entry(date_key(today)).or_default();
    entry.total_ml += cup;
    entry.cups = entry.cups.saturating_add(1);
    GlassOutcome {
        warned: entry.total_ml > SOFT_LIMIT_ML,
        record: entry.clone(),
    }
}

/// Removes one cup from today's record. Volume and cup count floor at zero
/// independently, so subtracting past zero pins both there even if the cup
/// size changed between operations.
pub fn subtract_glass(data: &mut AppData) -> GlassOutcome {
    subtract_glass_at(Local::now().date_naive(), data)
}

pub fn subtract_glass_at(today: NaiveDate, data: &mut AppData) -> GlassOutcome {
    ensure_today_at(today, data);
    let cup = data.settings.effective_cup_ml();
    let entry = data.history.entry(date_key(today)).or_default();
    entry.total_ml = (entry.total_ml - cup).max(0.0);
    entry.cups = entry.cups.saturating_sub(1);
    GlassOutcome {
        warned: false,
        record: entry.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn add_then_subtract_round_trips() {
        let mut data = AppData::default();
        let before = DayRecord {
            total_ml: 500.0,
            cups: 2,
        };
        data.history.insert("2026-08-05".to_string(), before.clone());

        add_glass_at(today(), &mut data);
        let outcome = subtract_glass_at(today(), &mut data);
        assert_eq!(outcome.record, before);
    }

    #[test]
    fn subtract_on_empty_day_stays_at_zero() {
        let mut data = AppData::default();
        let outcome = subtract_glass_at(today(), &mut data);
        assert_eq!(outcome.record, DayRecord::default());
        assert_eq!(
            data.history.get("2026-08-05"),
            Some(&DayRecord::default())
        );
    }

    #[test]
    fn four_glasses_accumulate_in_lockstep() {
        let mut data = AppData::default();
        for _ in 0..4 {
            add_glass_at(today(), &mut data);
        }
        let record = data.history.get("2026-08-05").unwrap();
        assert_eq!(record.total_ml, 1000.0);
        assert_eq!(record.cups, 4);
    }

    #[test]
    fn soft_limit_warns_on_every_call_past_threshold() {
        let mut data = AppData::default();
        for n in 1..=40 {
            let outcome = add_glass_at(today(), &mut data);
            assert!(!outcome.warned, "call {n} should stay under the limit");
        }
        let over = add_glass_at(today(), &mut data);
        assert!(over.warned);
        assert_eq!(over.record.total_ml, 10_250.0);
        // Not clamped, and the next call warns again.
        assert!(add_glass_at(today(), &mut data).warned);
    }

    #[test]
    fn invalid_cup_size_falls_back_to_default() {
        let mut data = AppData::default();
        data.settings.cup_size_ml = f64::NAN;
        let outcome = add_glass_at(today(), &mut data);
        assert_eq!(outcome.record.total_ml, 250.0);

        data.settings.cup_size_ml = -10.0;
        let outcome = add_glass_at(today(), &mut data);
        assert_eq!(outcome.record.total_ml, 500.0);
    }

    #[test]
    fn cup_size_change_applies_only_to_later_operations() {
        let mut data = AppData::default();
        add_glass_at(today(), &mut data);
        data.settings.cup_size_ml = 100.0;
        let outcome = add_glass_at(today(), &mut data);
        assert_eq!(outcome.record.total_ml, 350.0);
        assert_eq!(outcome.record.cups, 2);
    }

    #[test]
    fn subtract_past_zero_keeps_cups_and_volume_pinned() {
        let mut data = AppData::default();
        data.history.insert(
            "2026-08-05".to_string(),
            DayRecord {
                total_ml: 100.0,
                cups: 1,
            },
        );
        subtract_glass_at(today(), &mut data);
        subtract_glass_at(today(), &mut data);
        let record = data.history.get("2026-08-05").unwrap();
        assert_eq!(record.total_ml, 0.0);
        assert_eq!(record.cups, 0);
    }
}
