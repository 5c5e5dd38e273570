pub mod auth;
pub mod json;
pub mod response;
pub mod role;

pub use auth::{require_session, AuthUser, OptionalSession};
pub use json::ApiJson;
pub use response::{ApiResponse, ApiResult};
pub use role::{enforce_role, RoleGate};
