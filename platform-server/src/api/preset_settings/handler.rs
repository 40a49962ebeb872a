//! Preset Settings API Handlers

use axum::Json;
use axum::extract::State;
use shared::models::{PresetCategory, PresetSettingsUpdate, PresetSettingsUpdated};

use crate::core::ServerState;
use crate::db::repository::{RepoError, preset};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/preset-settings - all preset categories
pub async fn collect(State(state): State<ServerState>) -> AppResult<Json<Vec<PresetCategory>>> {
    let categories = preset::find_all(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load preset settings");
        AppError::from(e)
    })?;
    Ok(Json(categories))
}

/// PUT /api/preset-settings - update one category's subcategory flags
pub async fn edit(
    State(state): State<ServerState>,
    Json(payload): Json<PresetSettingsUpdate>,
) -> AppResult<Json<PresetSettingsUpdated>> {
    let category = payload.category.trim();
    if category.is_empty() {
        return Err(AppError::invalid_request("Preset category is required"));
    }

    let updated = preset::update_category(&state.pool, category, &payload.subcategories)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::with_message(
                ErrorCode::PresetCategoryNotFound,
                format!("Preset category {category} not found"),
            )
            .with_detail("category", category),
            other => {
                tracing::error!(category = %category, error = %other, "Failed to update preset settings");
                AppError::from(other)
            }
        })?;

    tracing::info!(
        category = %updated.name,
        subcategories = payload.subcategories.len(),
        "Preset settings updated"
    );
    Ok(Json(PresetSettingsUpdated {
        result: "success".into(),
        settings: updated,
    }))
}
