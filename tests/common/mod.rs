#![allow(dead_code)]

use std::sync::Arc;

use admin_dashboard_api::app::{app, AppState};
use admin_dashboard_api::auth::{generate_jwt, Claims};
use admin_dashboard_api::config::AppConfig;
use admin_dashboard_api::database::models::{
    Company, NewCompany, NewProfile, Profile, ProfileChanges, ProfileFilter, Role,
};
use admin_dashboard_api::database::{CompanyStore, DatabaseError, MemoryStore, ProfileStore, Store};
use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

/// In-process app over a fresh in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        Self::build(Faults::default(), adjust)
    }

    /// Router over a store whose selected tables fail every call.
    /// Seeding still goes straight to the healthy in-memory tables.
    pub fn with_faults(faults: Faults, adjust: impl FnOnce(&mut AppConfig)) -> Self {
        Self::build(faults, adjust)
    }

    fn build(faults: Faults, adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::development();
        config.security.jwt_secret = SECRET.to_string();
        adjust(&mut config);

        let store = MemoryStore::new();
        let state_store: Arc<dyn Store> = if faults.any() {
            Arc::new(FaultyStore {
                inner: store.clone(),
                faults,
            })
        } else {
            Arc::new(store.clone())
        };
        let router = app(AppState::new(state_store, config.clone()));

        Self { router, store, config }
    }

    pub fn token(&self, user_id: &str) -> String {
        let claims = Claims::new(
            user_id,
            None,
            self.config.security.jwt_audience.clone(),
            Duration::hours(1),
        );
        generate_jwt(&claims, &self.config.security).expect("token")
    }

    pub async fn seed_profile(&self, user_id: &str, role: Role) -> Profile {
        let mut profile = NewProfile::signup(user_id, None, None, None);
        profile.role = role;
        self.store.create_profile(profile).await.expect("seed profile")
    }

    /// Seeded super admin, returns a bearer token for them
    pub async fn super_admin(&self, user_id: &str) -> String {
        self.seed_profile(user_id, Role::SuperAdmin).await;
        self.token(user_id)
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }
}

/// Which tables a `FaultyStore` breaks
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    pub profiles: bool,
    pub companies: bool,
}

impl Faults {
    fn any(&self) -> bool {
        self.profiles || self.companies
    }
}

/// `MemoryStore` wrapper that fails like an exhausted connection pool
pub struct FaultyStore {
    inner: MemoryStore,
    faults: Faults,
}

fn pool_down() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ProfileStore for FaultyStore {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, DatabaseError> {
        if self.faults.profiles {
            return Err(pool_down());
        }
        self.inner.find_profile(user_id).await
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, DatabaseError> {
        if self.faults.profiles {
            return Err(pool_down());
        }
        self.inner.create_profile(profile).await
    }

    async fn update_profile(&self, user_id: &str, changes: ProfileChanges) -> Result<Profile, DatabaseError> {
        if self.faults.profiles {
            return Err(pool_down());
        }
        self.inner.update_profile(user_id, changes).await
    }

    async fn list_profiles(&self, filter: ProfileFilter) -> Result<Vec<Profile>, DatabaseError> {
        if self.faults.profiles {
            return Err(pool_down());
        }
        self.inner.list_profiles(filter).await
    }
}

#[async_trait]
impl CompanyStore for FaultyStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        if self.faults.companies {
            return Err(pool_down());
        }
        self.inner.list_companies().await
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, DatabaseError> {
        if self.faults.companies {
            return Err(pool_down());
        }
        self.inner.create_company(company).await
    }
}

#[async_trait]
impl Store for FaultyStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(pool_down())
    }
}
