use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a company
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl NewCompany {
    pub fn into_company(self, now: DateTime<Utc>) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: self.name,
            address: self.address,
            phone: self.phone,
            created_at: now,
            updated_at: now,
        }
    }
}
