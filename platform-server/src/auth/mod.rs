//! Authorization module
//!
//! - [`privileges`] - system privilege catalogue
//! - [`password`] - argon2 password hashing

pub mod password;
pub mod privileges;

pub use password::hash_password;
pub use privileges::{ALL_PRIVILEGES, all_privileges, is_valid_privilege};
