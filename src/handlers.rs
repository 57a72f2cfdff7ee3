use crate::errors::AppError;
use crate::ledger;
use crate::models::{
    HistoryResponse, ProgressResponse, Settings, SettingsUpdate, SignalsResponse,
    VisibilityRequest,
};
use crate::reconcile;
use crate::state::AppState;
use crate::stats::{self, Progress};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use std::sync::atomic::Ordering;
use tracing::{error, warn};

const SOFT_LIMIT_MESSAGE: &str =
    "Daily total is over 10 liters. Check your cup size and target.";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let progress = stats::compute_progress(&data);
    Html(render_index(&progress))
}

pub async fn get_today(State(state): State<AppState>) -> Json<ProgressResponse> {
    let data = state.data.lock().await;
    Json(to_response(stats::compute_progress(&data), None))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let data = state.data.lock().await;
    let days = stats::last_n_days(&data, 7);
    let bars = stats::layout_bars(&days, stats::CHART_WIDTH, stats::CHART_HEIGHT);
    Json(HistoryResponse { days, bars })
}

pub async fn api_add_glass(State(state): State<AppState>) -> Json<ProgressResponse> {
    Json(apply_glass(&state, Glass::Add).await)
}

pub async fn api_subtract_glass(State(state): State<AppState>) -> Json<ProgressResponse> {
    Json(apply_glass(&state, Glass::Subtract).await)
}

pub async fn add_glass(State(state): State<AppState>) -> Redirect {
    apply_glass(&state, Glass::Add).await;
    Redirect::to("/")
}

pub async fn subtract_glass(State(state): State<AppState>) -> Redirect {
    apply_glass(&state, Glass::Subtract).await;
    Redirect::to("/")
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let data = state.data.lock().await;
    Json(data.settings.clone())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Json<Settings> {
    let mut data = state.data.lock().await;
    data.settings.apply(&update);
    if let Err(err) = persist_data(&state.data_path, &data).await {
        error!("failed to persist state: {err}");
    }
    let settings = data.settings.clone();
    drop(data);

    rearm_reminders(&state, &settings).await;
    Json(settings)
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let payload = serde_json::to_string_pretty(&*data).map_err(AppError::internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"hydration-data.json\"",
            ),
        ],
        payload,
    ))
}

/// Replaces the live state with an imported document. A rejected document
/// leaves the live state untouched.
pub async fn import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Settings>, AppError> {
    let mut imported = reconcile::import_data(&body)?;
    reconcile::ensure_today(&mut imported);

    let mut data = state.data.lock().await;
    *data = imported;
    if let Err(err) = persist_data(&state.data_path, &data).await {
        error!("failed to persist state: {err}");
    }
    let settings = data.settings.clone();
    drop(data);

    rearm_reminders(&state, &settings).await;
    Ok(Json(settings))
}

pub async fn set_visibility(
    State(state): State<AppState>,
    Json(request): Json<VisibilityRequest>,
) -> StatusCode {
    state.visible.store(request.visible, Ordering::Relaxed);
    StatusCode::NO_CONTENT
}

/// Drains the pending reminder signal.
pub async fn get_signals(State(state): State<AppState>) -> Json<SignalsResponse> {
    Json(SignalsResponse {
        reminder_due: state.reminder_due.swap(false, Ordering::Relaxed),
    })
}

enum Glass {
    Add,
    Subtract,
}

async fn apply_glass(state: &AppState, glass: Glass) -> ProgressResponse {
    let mut data = state.data.lock().await;
    let outcome = match glass {
        Glass::Add => ledger::add_glass(&mut data),
        Glass::Subtract => ledger::subtract_glass(&mut data),
    };
    if outcome.warned {
        warn!(
            total_ml = outcome.record.total_ml,
            "daily total exceeds the soft limit"
        );
    }
    if let Err(err) = persist_data(&state.data_path, &data).await {
        error!("failed to persist state: {err}");
    }

    let warning = outcome.warned.then(|| SOFT_LIMIT_MESSAGE.to_string());
    to_response(stats::compute_progress(&data), warning)
}

async fn rearm_reminders(state: &AppState, settings: &Settings) {
    state
        .reminders
        .configure(
            settings.effective_reminder_minutes(),
            state.visible.clone(),
            state.reminder_due.clone(),
        )
        .await;
}

fn to_response(progress: Progress, warning: Option<String>) -> ProgressResponse {
    ProgressResponse {
        date: progress.date,
        total_ml: progress.total_ml,
        cups: progress.cups,
        percent: progress.percent,
        remaining_ml: progress.remaining_ml,
        warning,
    }
}
