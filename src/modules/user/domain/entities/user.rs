use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub authority: String,
}

impl Role {
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            authority: authority.into(),
        }
    }
}

/// A registered user. `password` holds the stored hash and is never
/// interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub roles: Vec<Role>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            roles,
        }
    }

    pub fn has_role(&self, authority: &str) -> bool {
        self.roles.iter().any(|r| r.authority == authority)
    }

    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.authority.clone()).collect()
    }
}

/// What an authentication layer needs to verify a login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub password: String,
    pub authorities: Vec<String>,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
            authorities: user.authorities(),
        }
    }
}
