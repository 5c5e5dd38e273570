use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{
    Company, NewCompany, NewProfile, Profile, ProfileChanges, ProfileFilter, ProfileRow,
};
use crate::database::store::{CompanyStore, ProfileStore, Store};

const PROFILE_COLUMNS: &str =
    "id, user_id, role, first_name, last_name, avatar_url, active, created_at, updated_at";

const COMPANY_COLUMNS: &str = "id, name, address, phone, created_at, updated_at";

/// `Store` backed by the shared Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(manager: &DatabaseManager) -> Self {
        Self {
            pool: manager.pool().clone(),
        }
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, DatabaseError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {} FROM profiles WHERE user_id = $1",
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, DatabaseError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profiles (id, user_id, role, first_name, last_name, avatar_url, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            PROFILE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&profile.user_id)
        .bind(profile.role.as_str())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.avatar_url)
        .bind(profile.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::conflict_or(e, "Profile already exists"))?;

        Profile::try_from(row)
    }

    async fn update_profile(&self, user_id: &str, changes: ProfileChanges) -> Result<Profile, DatabaseError> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE profiles SET updated_at = NOW()");

        if let Some(first_name) = changes.first_name {
            query.push(", first_name = ").push_bind(first_name);
        }
        if let Some(last_name) = changes.last_name {
            query.push(", last_name = ").push_bind(last_name);
        }
        if let Some(avatar_url) = changes.avatar_url {
            query.push(", avatar_url = ").push_bind(avatar_url);
        }
        if let Some(active) = changes.active {
            query.push(", active = ").push_bind(active);
        }

        query
            .push(" WHERE user_id = ")
            .push_bind(user_id)
            .push(" RETURNING ")
            .push(PROFILE_COLUMNS);

        let row = query
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("Profile not found".to_string()))?;

        Profile::try_from(row)
    }

    async fn list_profiles(&self, filter: ProfileFilter) -> Result<Vec<Profile>, DatabaseError> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM profiles WHERE TRUE", PROFILE_COLUMNS));

        if let Some(role) = filter.role {
            query.push(" AND role = ").push_bind(role.as_str());
        }
        if let Some(active) = filter.active {
            query.push(" AND active = ").push_bind(active);
        }
        query.push(" ORDER BY created_at DESC");

        query
            .build_query_as::<ProfileRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Profile::try_from)
            .collect()
    }
}

#[async_trait]
impl CompanyStore for PgStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let companies = sqlx::query_as::<_, Company>(&format!(
            "SELECT {} FROM companies ORDER BY name ASC",
            COMPANY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, DatabaseError> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (id, name, address, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            COMPANY_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&company.name)
        .bind(&company.address)
        .bind(&company.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
