use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DiscussionId, User};

/// A titled thread inside a group.
///
/// The server embeds the full author record; the embedded group is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: DiscussionId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Discussion {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.display_name())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown User")
    }

    /// `Mar 1, 2024`, or empty when the server sent no timestamp.
    pub fn display_date(&self) -> String {
        self.created_at
            .map(|t| t.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscussionDraft {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_nested_author() {
        let d: Discussion = serde_json::from_str(
            r#"{"id":3,"title":"Best flour?","content":"Tipo 00 or bread flour",
                "createdAt":"2024-03-01T10:15:30",
                "user":{"id":2,"name":"Ada","email":"ada@example.com","password":"x"},
                "group":{"id":5}}"#,
        )
        .unwrap();
        assert_eq!(d.author_name(), "Ada");
        assert_eq!(d.display_date(), "Mar 1, 2024");
    }

    #[test]
    fn test_missing_author() {
        let d: Discussion = serde_json::from_str(r#"{"id":3,"title":"t"}"#).unwrap();
        assert_eq!(d.author_name(), "Unknown User");
        assert_eq!(d.display_date(), "");
    }
}
