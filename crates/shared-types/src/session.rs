use serde::{Deserialize, Serialize};

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the credential token.
pub const TOKEN_KEY: &str = "token";

/// Client-side classification of the current user.
///
/// - `Patient`: anonymous visitor browsing doctors.
/// - `LoggedPatient`: patient who signed in and holds a token.
/// - `Doctor`: doctor with a token.
/// - `Admin`: administrator with a token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Patient,
    LoggedPatient,
    Doctor,
    Admin,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Patient, Role::LoggedPatient, Role::Doctor, Role::Admin];

impl Role {
    /// Key persisted under [`ROLE_KEY`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// Parse a persisted role key. Unknown keys yield `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "patient" => Some(Role::Patient),
            "loggedPatient" => Some(Role::LoggedPatient),
            "doctor" => Some(Role::Doctor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Whether this role is only valid alongside a credential.
    pub fn requires_token(&self) -> bool {
        !matches!(self, Role::Patient)
    }
}

/// Snapshot of the persisted session entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Option<Role>,
    pub token: Option<String>,
}

impl Session {
    /// Build a snapshot from raw storage values. Empty strings count as absent.
    pub fn from_entries(role: Option<String>, token: Option<String>) -> Self {
        Self {
            role: role.as_deref().and_then(Role::from_key),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// A session is expired when its role demands a token it does not have.
    pub fn is_expired(&self) -> bool {
        match self.role {
            Some(role) => role.requires_token() && self.token.is_none(),
            None => false,
        }
    }
}
