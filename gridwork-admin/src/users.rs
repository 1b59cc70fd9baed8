//! User domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        status: UserStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            status,
            created_at: Utc::now(),
        }
    }

    /// Stable row key used by selection and cell addressing.
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Deterministic sample population for demos and tests.
pub fn sample_users(count: usize) -> Vec<User> {
    let roles = [Role::Member, Role::Member, Role::Manager, Role::Admin];
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let mut user = User::new(
                format!("User {:03}", i + 1),
                format!("user{:03}@example.com", i + 1),
                roles[i % roles.len()],
                if i % 3 == 0 {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
            );
            user.created_at = now - Duration::days(i as i64);
            user
        })
        .collect()
}
