//! # User model
//!
//! [`User`] is what `/api/v1/login` returns and what the client keeps as the
//! signed-in identity. The server's login response also echoes the password;
//! it is not part of this struct, so it is dropped on decode and never stored.
//!
//! [`Credentials`] and [`NewUser`] are the request bodies for login and signup.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A Yummly account as seen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Generated avatar image keyed on the display name.
    pub fn avatar_url(&self) -> String {
        avatar_url_for(self.display_name())
    }
}

/// Generated avatar for any author name (posts only carry the name).
pub fn avatar_url_for(name: &str) -> String {
    let seed: String = if name.is_empty() { "user" } else { name }
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("https://api.dicebear.com/7.x/thumbs/svg?seed={seed}")
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_drops_password() {
        let user: User = serde_json::from_str(
            r#"{"id":4,"name":"Ada","email":"ada@example.com","password":"hunter2"}"#,
        )
        .unwrap();
        assert_eq!(user.id, 4);

        let stored = serde_json::to_string(&user).unwrap();
        assert!(!stored.contains("hunter2"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User { id: 1, name: "".into(), email: "ada@example.com".into() };
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_avatar_seed_is_url_safe() {
        assert_eq!(
            avatar_url_for("Ada L"),
            "https://api.dicebear.com/7.x/thumbs/svg?seed=Ada-L"
        );
        assert!(avatar_url_for("").ends_with("seed=user"));
    }
}
