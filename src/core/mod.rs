//! Core player types

pub mod profile;
pub mod types;

pub use profile::Profile;
pub use types::{PlayerName, MAX_NAME_LEN};
