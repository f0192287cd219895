use serde::{Deserialize, Serialize};

/// The single local user this ledger belongs to.
/// There is exactly zero or one profile — no multi-user support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name shown on the dashboard
    pub name: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
