// handlers/elevated/profiles.rs - GET /profiles?role=&active=

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::database::models::{Profile, ProfileFilter, Role};
use crate::error::{ApiError, FieldError};
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct ProfileListQuery {
    pub role: Option<String>,
    pub active: Option<String>,
}

impl TryFrom<ProfileListQuery> for ProfileFilter {
    type Error = ApiError;

    fn try_from(query: ProfileListQuery) -> Result<Self, Self::Error> {
        let role = match query.role.as_deref().filter(|r| !r.is_empty()) {
            Some(raw) => Some(raw.parse::<Role>().map_err(|msg: String| {
                ApiError::validation_error("Invalid filter", vec![FieldError::new("role", msg)])
            })?),
            None => None,
        };

        // Any value other than "true" filters for inactive profiles
        let active = query.active.map(|v| v == "true");

        Ok(ProfileFilter { role, active })
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileList {
    pub profiles: Vec<Profile>,
}

/// GET /profiles - newest first
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProfileListQuery>,
) -> ApiResult<ProfileList> {
    let filter = ProfileFilter::try_from(query)?;

    let profiles = state.store.list_profiles(filter).await.map_err(|e| {
        tracing::error!("Error fetching profiles: {}", e);
        ApiError::internal_server_error("Internal server error")
    })?;

    Ok(ApiResponse::success(ProfileList { profiles }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_means_no_filter() {
        let filter = ProfileFilter::try_from(ProfileListQuery::default()).unwrap();
        assert_eq!(filter, ProfileFilter::default());
    }

    #[test]
    fn active_is_true_only_for_literal_true() {
        let parse = |v: &str| {
            ProfileFilter::try_from(ProfileListQuery {
                role: None,
                active: Some(v.to_string()),
            })
            .unwrap()
            .active
        };
        assert_eq!(parse("true"), Some(true));
        assert_eq!(parse("false"), Some(false));
        assert_eq!(parse("yes"), Some(false));
    }

    #[test]
    fn role_must_be_known() {
        let filter = ProfileFilter::try_from(ProfileListQuery {
            role: Some("SUPERADMIN".to_string()),
            active: None,
        })
        .unwrap();
        assert_eq!(filter.role, Some(Role::SuperAdmin));

        let err = ProfileFilter::try_from(ProfileListQuery {
            role: Some("ROOT".to_string()),
            active: None,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
