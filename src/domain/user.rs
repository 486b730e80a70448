use std::fmt;
use serde::{Deserialize, Serialize};

/// Identity fields shared by every kind of user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A fan who can book tickets and accumulate booking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fan {
    pub profile: UserProfile,
    /// Booking ids in the order they were made.
    #[serde(default)]
    booking_history: Vec<String>,
}

/// An admin with read-only access to aggregate sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub profile: UserProfile,
}

/// A registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum User {
    Fan(Fan),
    Admin(Admin),
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User ID: {}, Name: {}, Email: {}", self.id, self.name, self.email)
    }
}

impl Fan {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            profile: UserProfile::new(id, name, email),
            booking_history: Vec::new(),
        }
    }

    pub fn record_booking(&mut self, booking_id: impl Into<String>) {
        self.booking_history.push(booking_id.into());
    }

    pub fn booking_history(&self) -> &[String] {
        &self.booking_history
    }
}

impl Admin {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            profile: UserProfile::new(id, name, email),
        }
    }
}

impl User {
    pub fn fan(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User::Fan(Fan::new(id, name, email))
    }

    pub fn admin(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User::Admin(Admin::new(id, name, email))
    }

    pub fn profile(&self) -> &UserProfile {
        match self {
            User::Fan(fan) => &fan.profile,
            User::Admin(admin) => &admin.profile,
        }
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        match self {
            User::Fan(fan) => &mut fan.profile,
            User::Admin(admin) => &mut admin.profile,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub fn as_fan(&self) -> Option<&Fan> {
        match self {
            User::Fan(fan) => Some(fan),
            User::Admin(_) => None,
        }
    }

    pub fn as_fan_mut(&mut self) -> Option<&mut Fan> {
        match self {
            User::Fan(fan) => Some(fan),
            User::Admin(_) => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, User::Admin(_))
    }

    /// One-line account summary shown on the account dashboard.
    pub fn account_details(&self) -> String {
        match self {
            User::Fan(fan) => format!(
                "Fan Account - Name: {}, Email: {}, Bookings: {}",
                fan.profile.name,
                fan.profile.email,
                fan.booking_history.len()
            ),
            User::Admin(admin) => format!(
                "Admin Account - Name: {}, Email: {}",
                admin.profile.name, admin.profile.email
            ),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            User::Fan(fan) => write!(f, "Fan: {} | Bookings: {}", fan.profile, fan.booking_history.len()),
            User::Admin(admin) => write!(f, "Admin: {}", admin.profile),
        }
    }
}
