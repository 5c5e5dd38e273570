// handlers/protected/mod.rs - handlers behind `require_session`
//
// Every handler here can rely on an `AuthUser` in the request extensions.

pub mod profile;

pub use profile::get as profile_get;
pub use profile::put as profile_put;
