// handlers/mod.rs - three access tiers
//
// public    - no session required (/, /health, /navigation, POST /profile)
// protected - session required (/profile)
// elevated  - session plus SUPERADMIN role (/companies, /profiles)
//
// Tiers are enforced by the route layers in `app.rs`, never inside handlers.

pub mod elevated;
pub mod protected;
pub mod public;
