use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::database::models::{Profile, Role};
use crate::error::ApiError;

use super::auth::AuthUser;

/// State for `enforce_role`: the shared app state plus the role a route requires
#[derive(Clone)]
pub struct RoleGate {
    pub state: AppState,
    pub required: Role,
}

impl RoleGate {
    pub fn new(state: AppState, required: Role) -> Self {
        Self { state, required }
    }
}

/// Role middleware. Must run after `require_session`.
///
/// Loads the caller's profile and lets the request through only on an exact
/// role match. Lookup failures are logged and answered with 403.
pub async fn enforce_role(
    State(gate): State<RoleGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let profile = authorize(&gate, &auth_user).await?;

    tracing::debug!("Role check passed: {} as {}", auth_user.user_id, profile.role);
    request.extensions_mut().insert(profile);
    Ok(next.run(request).await)
}

async fn authorize(gate: &RoleGate, auth_user: &AuthUser) -> Result<Profile, ApiError> {
    let forbidden = || ApiError::forbidden(format!("Forbidden: Requires {} access", gate.required));

    let profile = match gate.state.store.find_profile(&auth_user.user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!("Role check failed: no profile for user '{}'", auth_user.user_id);
            return Err(forbidden());
        }
        Err(e) => {
            tracing::error!("Failed to check user role for '{}': {}", auth_user.user_id, e);
            return Err(forbidden());
        }
    };

    if profile.role != gate.required {
        tracing::warn!(
            "Role check failed: user '{}' has {} but route requires {}",
            auth_user.user_id,
            profile.role,
            gate.required
        );
        return Err(forbidden());
    }

    Ok(profile)
}
