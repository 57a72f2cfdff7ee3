use crate::models::{AppData, ChartBar, DayPoint};
use crate::reconcile::date_key;
use chrono::{Duration, Local, NaiveDate};

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 220.0;

const CHART_PADDING: f64 = 12.0;
const BAR_GAP: f64 = 8.0;

/// Minimum chart scale in ml, so an all-zero week still produces a sane
/// layout with a non-zero denominator.
const SCALE_FLOOR_ML: f64 = 250.0;

/// Today's standing against the daily target.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub date: String,
    pub total_ml: f64,
    pub cups: u32,
    pub percent: u32,
    pub remaining_ml: f64,
}

pub fn compute_progress(data: &AppData) -> Progress {
    compute_progress_at(Local::now().date_naive(), data)
}

pub fn compute_progress_at(today: NaiveDate, data: &AppData) -> Progress {
    let date = date_key(today);
    let record = data.history.get(&date).cloned().unwrap_or_default();
    let target = data.settings.effective_target_ml();
    let percent = (100.0 * record.total_ml / target).round().min(100.0) as u32;

    Progress {
        date,
        total_ml: record.total_ml,
        cups: record.cups,
        percent,
        remaining_ml: (target - record.total_ml).max(0.0),
    }
}

/// The `n` consecutive calendar days ending today, oldest first. Days with
/// no history entry contribute zero; the walk never consults which keys the
/// pruned history happens to hold.
pub fn last_n_days(data: &AppData, n: usize) -> Vec<DayPoint> {
    last_n_days_at(Local::now().date_naive(), data, n)
}

pub fn last_n_days_at(today: NaiveDate, data: &AppData, n: usize) -> Vec<DayPoint> {
    let mut days = Vec::with_capacity(n);
    for offset in (0..n).rev() {
        let date = today - Duration::days(offset as i64);
        let key = date_key(date);
        let ml = data.history.get(&key).map_or(0.0, |record| record.total_ml);
        days.push(DayPoint { date: key, ml });
    }
    days
}

/// Bar geometry for the history chart, as a pure function of the series and
/// the drawing area. Bars are scaled against the largest observed value,
/// floored at [`SCALE_FLOOR_ML`].
pub fn layout_bars(days: &[DayPoint], width: f64, height: f64) -> Vec<ChartBar> {
    if days.is_empty() {
        return Vec::new();
    }

    let slots = days.len() as f64;
    let bar_width = (width - CHART_PADDING * 2.0 - (slots - 1.0) * BAR_GAP) / slots;
    let max_ml = days
        .iter()
        .map(|day| day.ml)
        .fold(SCALE_FLOOR_ML, f64::max);
    let usable = height - CHART_PADDING * 2.0;

    days.iter()
        .enumerate()
        .map(|(index, day)| {
            let bar_height = day.ml / max_ml * usable;
            ChartBar {
                x: CHART_PADDING + index as f64 * (bar_width + BAR_GAP),
                y: height - CHART_PADDING - bar_height,
                width: bar_width,
                height: bar_height,
                label: day.date.get(5..).unwrap_or(&day.date).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn data_with_today(total_ml: f64, cups: u32) -> AppData {
        let mut data = AppData::default();
        data.history
            .insert("2026-08-05".to_string(), DayRecord { total_ml, cups });
        data
    }

    #[test]
    fn progress_halfway_to_target() {
        let progress = compute_progress_at(today(), &data_with_today(1000.0, 4));
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.remaining_ml, 1000.0);
        assert_eq!(progress.cups, 4);
        assert_eq!(progress.date, "2026-08-05");
    }

    #[test]
    fn percent_is_clamped_to_hundred() {
        let progress = compute_progress_at(today(), &data_with_today(1.0e9, 12));
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.remaining_ml, 0.0);
    }

    #[test]
    fn empty_history_reads_as_zero_progress() {
        let progress = compute_progress_at(today(), &AppData::default());
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.total_ml, 0.0);
        assert_eq!(progress.remaining_ml, 2000.0);
    }

    #[test]
    fn invalid_target_falls_back_to_default() {
        let mut data = data_with_today(1000.0, 4);
        data.settings.daily_target_ml = 0.0;
        let progress = compute_progress_at(today(), &data);
        assert_eq!(progress.percent, 50);
    }

    #[test]
    fn last_seven_days_are_contiguous_even_with_empty_history() {
        let days = last_n_days_at(today(), &AppData::default(), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days.first().unwrap().date, "2026-07-30");
        assert_eq!(days.last().unwrap().date, "2026-08-05");
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert!(days.iter().all(|day| day.ml == 0.0));
    }

    #[test]
    fn last_seven_days_fills_gaps_with_zero() {
        let mut data = data_with_today(750.0, 3);
        data.history.insert(
            "2026-08-03".to_string(),
            DayRecord {
                total_ml: 500.0,
                cups: 2,
            },
        );
        let days = last_n_days_at(today(), &data, 7);
        let by_date: Vec<f64> = days.iter().map(|day| day.ml).collect();
        assert_eq!(by_date, vec![0.0, 0.0, 0.0, 0.0, 500.0, 0.0, 750.0]);
    }

    #[test]
    fn layout_scales_against_largest_value() {
        let days = vec![
            DayPoint {
                date: "2026-08-04".to_string(),
                ml: 500.0,
            },
            DayPoint {
                date: "2026-08-05".to_string(),
                ml: 1000.0,
            },
        ];
        let bars = layout_bars(&days, CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(bars.len(), 2);
        let usable = CHART_HEIGHT - 24.0;
        assert_eq!(bars[1].height, usable);
        assert_eq!(bars[0].height, usable / 2.0);
        assert_eq!(bars[1].y, CHART_HEIGHT - 12.0 - usable);
        assert_eq!(bars[0].label, "08-04");
    }

    #[test]
    fn layout_of_all_zero_series_uses_scale_floor() {
        let days = last_n_days_at(today(), &AppData::default(), 7);
        let bars = layout_bars(&days, CHART_WIDTH, CHART_HEIGHT);
        assert_eq!(bars.len(), 7);
        assert!(bars.iter().all(|bar| bar.height == 0.0));
        assert!(bars.iter().all(|bar| bar.y == CHART_HEIGHT - 12.0));
        assert!(bars.iter().all(|bar| bar.width > 0.0));
    }

    #[test]
    fn layout_of_empty_series_is_empty() {
        assert!(layout_bars(&[], CHART_WIDTH, CHART_HEIGHT).is_empty());
    }
}
