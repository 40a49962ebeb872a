//! Install API Handler

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use shared::install::InstallRequest;

use crate::core::ServerState;
use crate::install::Installer;
use crate::utils::AppError;

/// POST /api/install - create the administrator and platform settings
pub async fn install(
    State(state): State<ServerState>,
    payload: Result<Json<InstallRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed install request");
            return AppError::invalid_request(rejection.body_text()).into_response();
        }
    };

    tracing::info!(
        username = %request.data.account.username,
        platform_name = %request.data.platform.platform_name,
        "Installing application"
    );

    let installer = Installer::new(
        &state.pool,
        state.config.preset_failure_policy,
        state.config.logo_dir(),
    );
    match installer.run(&request.data).await {
        Ok(success) => Json(success).into_response(),
        Err(failure) => failure.into_response(),
    }
}
