// handlers/elevated/mod.rs - super-admin handlers
//
// Routed behind `require_session` and `enforce_role(SUPERADMIN)`.

pub mod companies;
pub mod profiles;

pub use companies::create as companies_create;
pub use companies::list as companies_list;
pub use profiles::list as profiles_list;
