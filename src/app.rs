use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::models::Role;
use crate::database::Store;
use crate::handlers::{elevated, protected, public};
use crate::middleware::{enforce_role, require_session, RoleGate};

/// Shared per-process state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let body_limit = state.config.api.max_request_size_bytes;
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(public_routes())
        .merge(profile_routes(&state))
        .merge(admin_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/navigation", get(public::navigation_get))
}

/// `/profile`: GET and PUT need a session; POST is signup and checks the
/// session itself, so it is added after the session layer.
fn profile_routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(protected::profile_get)
            .put(protected::profile_put)
            .route_layer(from_fn_with_state(state.clone(), require_session))
            .post(public::profile_create),
    )
}

/// Super-admin surface. Layers run bottom-up: session first, then role.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(elevated::companies_list).post(elevated::companies_create),
        )
        .route("/profiles", get(elevated::profiles_list))
        .route_layer(from_fn_with_state(
            RoleGate::new(state.clone(), Role::SuperAdmin),
            enforce_role,
        ))
        .route_layer(from_fn_with_state(state.clone(), require_session))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Browsers refuse credentialed responses with a wildcard origin
    if config.security.cors_origins.iter().any(|origin| origin.trim() == "*") {
        tracing::warn!("CORS allows any origin; cookies will not be sent cross-origin");
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    base.allow_origin(origins).allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::database::MemoryStore;

    fn app_with_origins(origins: &[&str]) -> Router {
        let mut config = AppConfig::development();
        config.security.cors_origins = origins.iter().map(|o| o.to_string()).collect();
        app(AppState::new(Arc::new(MemoryStore::new()), config))
    }

    #[tokio::test]
    async fn wildcard_origin_allows_any_without_credentials() {
        let response = app_with_origins(&["*"])
            .oneshot(
                Request::builder()
                    .uri("/navigation")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn listed_origin_is_echoed_with_credentials() {
        let response = app_with_origins(&["http://localhost:5173", "not a header\n"])
            .oneshot(
                Request::builder()
                    .uri("/navigation")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
