//! User account types.

use serde::{Deserialize, Serialize};

/// Account role chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Tenant browsing and renting properties.
    #[default]
    User,
    /// Owner listing properties.
    Owner,
}

impl UserType {
    /// All roles, in display order.
    pub const ALL: [Self; 2] = [Self::User, Self::Owner];

    /// Get display name for the role.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "Normal User",
            Self::Owner => "House Owner",
        }
    }

    /// Wire value of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Owner => "owner",
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "owner" => Ok(Self::Owner),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

/// A user profile as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the email has been verified.
    pub is_verified: bool,
    /// Account role.
    pub user_type: UserType,
}

impl User {
    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true for property owners.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.user_type == UserType::Owner
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "_id": "u1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "isVerified": true,
            "userType": "owner"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(user.is_owner());
    }

    #[test]
    fn test_user_type_parsing() {
        assert_eq!("owner".parse::<UserType>().unwrap(), UserType::Owner);
        assert!("admin".parse::<UserType>().is_err());
        assert_eq!(UserType::User.display_name(), "Normal User");
        assert_eq!(
            serde_json::to_string(&UserType::Owner).unwrap(),
            r#""owner""#
        );
    }
}
