// handlers/public/profile.rs - POST /profile (signup)

use axum::extract::State;
use serde::Deserialize;

use crate::app::AppState;
use crate::database::models::{NewProfile, Profile};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser, OptionalSession};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// POST /profile - create the profile row for a freshly signed-up user.
///
/// With a session, the profile can only be created for the session's own
/// user id. Without one, the request is accepted only where anonymous signup
/// is enabled.
pub async fn profile_create(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    ApiJson(payload): ApiJson<CreateProfileRequest>,
) -> ApiResult<Profile> {
    let user_id = payload
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("User ID is required"))?;

    check_signup_binding(session.as_ref(), &user_id, state.config.security.allow_anonymous_signup)?;

    let expose = state.config.api.expose_error_details;

    let existing = state
        .store
        .find_profile(&user_id)
        .await
        .map_err(|e| creation_failure(e, expose))?;
    if existing.is_some() {
        return Err(ApiError::conflict("Profile already exists"));
    }

    let new_profile = NewProfile::signup(
        user_id,
        non_empty(payload.first_name),
        non_empty(payload.last_name),
        non_empty(payload.avatar_url),
    );

    let profile = state
        .store
        .create_profile(new_profile)
        .await
        .map_err(|e| creation_failure(e, expose))?;

    tracing::info!("Created profile for {}", profile.user_id);
    Ok(ApiResponse::created(profile))
}

fn check_signup_binding(session: Option<&AuthUser>, user_id: &str, allow_anonymous: bool) -> Result<(), ApiError> {
    match session {
        Some(user) if user.user_id != user_id => {
            tracing::warn!(
                "Signup rejected: session user '{}' tried to create profile for '{}'",
                user.user_id,
                user_id
            );
            Err(ApiError::forbidden("Profile user ID must match the signed-in user"))
        }
        Some(_) => Ok(()),
        None if allow_anonymous => Ok(()),
        None => Err(ApiError::unauthorized("Not authenticated")),
    }
}

fn creation_failure(err: DatabaseError, expose: bool) -> ApiError {
    match err {
        // Lost a race with a concurrent signup for the same user
        DatabaseError::UniqueViolation(_) => ApiError::conflict("Profile already exists"),
        other => {
            tracing::error!("Database error creating profile: {}", other);
            ApiError::internal_server_error("Database error creating profile").with_details(other, expose)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
