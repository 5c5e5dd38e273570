use async_trait::async_trait;

use crate::database::models::{Company, NewCompany, NewProfile, Profile, ProfileChanges, ProfileFilter};
use crate::database::DatabaseError;

/// Profile persistence. Each call is a single read or write.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile(&self, user_id: &str) -> Result<Option<Profile>, DatabaseError>;

    /// Fails with `UniqueViolation` when a profile already exists for the user id
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, DatabaseError>;

    /// Fails with `NotFound` when the user has no profile
    async fn update_profile(&self, user_id: &str, changes: ProfileChanges) -> Result<Profile, DatabaseError>;

    /// Newest first
    async fn list_profiles(&self, filter: ProfileFilter) -> Result<Vec<Profile>, DatabaseError>;
}

/// Company persistence
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Ordered by name ascending
    async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError>;

    async fn create_company(&self, company: NewCompany) -> Result<Company, DatabaseError>;
}

/// Everything the HTTP layer needs from persistence
#[async_trait]
pub trait Store: ProfileStore + CompanyStore {
    async fn ping(&self) -> Result<(), DatabaseError>;
}
