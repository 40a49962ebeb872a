//! Privilege Definitions
//!
//! Every system privilege. The administrator role is granted the full list
//! at install time.

/// All system privileges
pub const ALL_PRIVILEGES: &[&str] = &[
    // === Rooms ===
    "rooms:view",
    "rooms:manage",
    "rooms:moderate",
    // === Recordings ===
    "recordings:view",
    "recordings:manage",
    // === Users & roles ===
    "users:view",
    "users:manage",
    "roles:view",
    "roles:manage",
    // === Platform ===
    "presets:view",
    "presets:manage",
    "settings:manage",
    "labels:manage",
    "logs:view",
];

/// Owned copy of [`ALL_PRIVILEGES`]
pub fn all_privileges() -> Vec<String> {
    ALL_PRIVILEGES.iter().map(|p| p.to_string()).collect()
}

pub fn is_valid_privilege(privilege: &str) -> bool {
    ALL_PRIVILEGES.contains(&privilege)
}
