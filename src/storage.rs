use crate::models::{AppData, History, Settings};
use serde::Deserialize;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Data file location: `HYDRATION_DATA_PATH` or the default slot under
/// `data/`.
pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("HYDRATION_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/hydration-state-v1.json")
}

/// Stored document with both top-level fields optional, so a document missing
/// one of them can be repaired field by field instead of discarded.
#[derive(Deserialize)]
struct StoredData {
    settings: Option<Settings>,
    history: Option<History>,
}

/// Reads the persisted state. A missing file is first run; anything
/// unreadable or unparsable falls back to the default state. A document
/// missing only `settings` or `history` keeps whatever is present.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<StoredData>(&bytes) {
            Ok(stored) => AppData {
                settings: stored.settings.unwrap_or_default(),
                history: stored.history.unwrap_or_default(),
            },
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

/// Writes the full state in one pretty-printed write. Persistence is
/// best-effort: callers log a failure and carry on with the in-memory state.
pub async fn persist_data(path: &Path, data: &AppData) -> std::io::Result<()> {
    let payload = serde_json::to_vec_pretty(data).map_err(std::io::Error::other)?;
    fs::write(path, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRecord, DEFAULT_CUP_ML, DEFAULT_TARGET_ML};

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "hydration_storage_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_yields_default_state() {
        let data = load_data(&scratch_path("missing")).await;
        assert_eq!(data, AppData::default());
    }

    #[tokio::test]
    async fn corrupt_file_yields_default_state() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let data = load_data(&path).await;
        assert_eq!(data, AppData::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_history_is_repaired_without_touching_settings() {
        let path = scratch_path("partial");
        fs::write(&path, br#"{"settings":{"dailyTargetMl":1500,"cupSizeMl":300}}"#)
            .await
            .unwrap();
        let data = load_data(&path).await;
        assert_eq!(data.settings.daily_target_ml, 1500.0);
        assert_eq!(data.settings.cup_size_ml, 300.0);
        assert!(data.history.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_settings_is_repaired_without_touching_history() {
        let path = scratch_path("history_only");
        fs::write(
            &path,
            br#"{"history":{"2026-08-01":{"totalMl":750,"cups":3}}}"#,
        )
        .await
        .unwrap();
        let data = load_data(&path).await;
        assert_eq!(data.settings.daily_target_ml, DEFAULT_TARGET_ML);
        assert_eq!(data.settings.cup_size_ml, DEFAULT_CUP_ML);
        assert_eq!(
            data.history.get("2026-08-01"),
            Some(&DayRecord {
                total_ml: 750.0,
                cups: 3
            })
        );
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_state_round_trips() {
        let path = scratch_path("roundtrip");
        let mut data = AppData::default();
        data.history.insert(
            "2026-08-02".to_string(),
            DayRecord {
                total_ml: 500.0,
                cups: 2,
            },
        );
        persist_data(&path, &data).await.unwrap();
        assert_eq!(load_data(&path).await, data);
        let _ = fs::remove_file(&path).await;
    }
}
