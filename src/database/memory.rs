use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Company, NewCompany, NewProfile, Profile, ProfileChanges, ProfileFilter};
use crate::database::store::{CompanyStore, ProfileStore, Store};

#[derive(Default)]
struct Tables {
    profiles: HashMap<String, Profile>,
    companies: Vec<Company>,
}

/// Process-local `Store` with the uniqueness rules of the Postgres schema.
/// Company names sort case-insensitively, which matches the usual locale
/// collations but not a `C` collation database. Used by tests and
/// `STORE_BACKEND=memory` dev runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, DatabaseError> {
        Ok(self.tables.read().await.profiles.get(user_id).cloned())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.profiles.contains_key(&profile.user_id) {
            return Err(DatabaseError::UniqueViolation("Profile already exists".to_string()));
        }

        let profile = profile.into_profile(Utc::now());
        tables.profiles.insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    async fn update_profile(&self, user_id: &str, changes: ProfileChanges) -> Result<Profile, DatabaseError> {
        let mut tables = self.tables.write().await;
        let profile = tables
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| DatabaseError::NotFound("Profile not found".to_string()))?;

        changes.apply(profile);
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn list_profiles(&self, filter: ProfileFilter) -> Result<Vec<Profile>, DatabaseError> {
        let tables = self.tables.read().await;
        let mut profiles: Vec<Profile> = tables
            .profiles
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let mut companies = self.tables.read().await.companies.clone();
        // Case-insensitive first, like a locale collation, then bytewise for ties
        companies.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(companies)
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, DatabaseError> {
        let company = company.into_company(Utc::now());
        self.tables.write().await.companies.push(company.clone());
        Ok(company)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Role;

    fn company(name: &str) -> NewCompany {
        NewCompany {
            name: name.to_string(),
            address: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn companies_come_back_sorted_by_name() {
        let store = MemoryStore::new();
        store.create_company(company("Zeta")).await.unwrap();
        store.create_company(company("Alpha")).await.unwrap();
        store.create_company(company("mid")).await.unwrap();

        let names: Vec<String> = store
            .list_companies()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "mid", "Zeta"]);
    }

    #[tokio::test]
    async fn duplicate_profile_is_a_unique_violation() {
        let store = MemoryStore::new();
        store
            .create_profile(NewProfile::signup("u1", None, None, None))
            .await
            .unwrap();

        let err = store
            .create_profile(NewProfile::signup("u1", None, None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn update_of_missing_profile_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_profile("ghost", ProfileChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_profiles_filters_and_orders_newest_first() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store
                .create_profile(NewProfile::signup(id, None, None, None))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        store
            .update_profile(
                "b",
                ProfileChanges {
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let all: Vec<String> = store
            .list_profiles(ProfileFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(all, vec!["c", "b", "a"]);

        let active = store
            .list_profiles(ProfileFilter {
                role: Some(Role::User),
                active: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|p| p.active));
    }
}
