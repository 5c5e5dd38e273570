// handlers/public/mod.rs - handlers reachable without a session
//
// POST /profile is public because signup happens before a session exists;
// it still binds the profile to the session when one is presented.

pub mod navigation;
pub mod profile;
pub mod system;

pub use navigation::navigation_get;
pub use profile::profile_create;
pub use system::{health, root};
