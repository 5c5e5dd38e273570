// handlers/protected/profile.rs - GET/PUT /profile for the session's own user

use axum::extract::{Extension, State};
use serde::{Deserialize, Deserializer};

use crate::app::AppState;
use crate::database::models::{Profile, ProfileChanges};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser};

/// PUT /profile body. Absent keys are left alone; `null` clears a name or avatar.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default)]
    pub active: Option<bool>,
}

// Only called for keys that exist in the body, so wrap in `Some` to tell
// `null` apart from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            avatar_url: request.avatar_url,
            active: request.active,
        }
    }
}

/// GET /profile
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Profile> {
    let profile = state
        .store
        .find_profile(&user.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching profile: {}", e);
            ApiError::internal_server_error("Failed to fetch profile")
        })?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(ApiResponse::success(profile))
}

/// PUT /profile
pub async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Profile> {
    let changes = ProfileChanges::from(payload);

    let profile = state
        .store
        .update_profile(&user.user_id, changes)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound(_) => ApiError::not_found("Profile not found"),
            other => {
                tracing::error!("Error updating profile: {}", other);
                ApiError::internal_server_error("Failed to update profile")
            }
        })?;

    tracing::info!("Updated profile for {}", user.user_id);
    Ok(ApiResponse::success(profile))
}
