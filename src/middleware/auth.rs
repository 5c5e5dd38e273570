use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{validate_jwt, Claims};
use crate::config::SecurityConfig;
use crate::error::ApiError;

/// Authenticated caller, resolved from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
    pub email: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Session middleware: rejects the request with 401 unless it carries a valid
/// session, otherwise injects `AuthUser` into the request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = authenticate(request.headers(), &state.config.security)?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Resolve the caller from request credentials.
///
/// `Ok(None)` means no credentials were presented at all; a credential that is
/// present but fails verification is an error.
pub fn authenticate(headers: &HeaderMap, security: &SecurityConfig) -> Result<Option<AuthUser>, ApiError> {
    let token = match extract_token(headers, &security.session_cookie).map_err(ApiError::unauthorized)? {
        Some(token) => token,
        None => return Ok(None),
    };

    let claims = validate_jwt(&token, security).map_err(|e| {
        tracing::debug!("Session rejected: {}", e);
        ApiError::unauthorized("Unauthorized")
    })?;

    Ok(Some(AuthUser::from(claims)))
}

/// Bearer header first, then the session cookie
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Result<Option<String>, &'static str> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| "Invalid Authorization header format")?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or("Authorization header must use Bearer token format")?
            .trim();
        if token.is_empty() {
            return Err("Empty session token");
        }
        return Ok(Some(token.to_string()));
    }

    Ok(headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.to_string()))
}

/// Extractor for routes that accept, but do not require, a session
#[derive(Clone, Debug)]
pub struct OptionalSession(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.config.security).map(OptionalSession)
    }
}
