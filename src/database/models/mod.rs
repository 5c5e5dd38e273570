pub mod company;
pub mod profile;

pub use company::{Company, NewCompany};
pub use profile::{NewProfile, Profile, ProfileChanges, ProfileFilter, ProfileRow, Role};
