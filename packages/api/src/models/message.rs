use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{GroupId, MessageId, UserId};

/// A group chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub group_id: GroupId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    pub content: String,
    /// Server-local timestamp (`2024-03-01T10:15:30`).
    pub created_at: NaiveDateTime,
}

impl Message {
    pub fn author_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown User")
    }

    /// `10:15 Mar 1`
    pub fn display_time(&self) -> String {
        self.created_at.format("%H:%M %b %-d").to_string()
    }
}

/// Chat display order: oldest first by `created_at`. The sort is stable, so
/// messages with equal timestamps keep the order the server sent them in.
pub fn in_display_order(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by_key(|m| m.created_at);
    messages
}

/// Body of `POST /api/groups/{id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_iso_timestamp() {
        let msg: Message = serde_json::from_str(
            r#"{"id":1,"groupId":5,"userId":2,"userName":"Ada","content":"hi",
                "createdAt":"2024-03-01T10:15:30.123"}"#,
        )
        .unwrap();
        assert_eq!(msg.display_time(), "10:15 Mar 1");
        assert_eq!(msg.author_name(), "Ada");
    }

    #[test]
    fn test_display_order_is_stable() {
        let at = |s: &str| s.parse::<NaiveDateTime>().unwrap();
        let msg = |id, t: &str| Message {
            id,
            group_id: 5,
            user_id: 1,
            user_name: None,
            content: String::new(),
            created_at: at(t),
        };
        let sorted = in_display_order(vec![
            msg(1, "2024-03-01T10:00:05"),
            msg(2, "2024-03-01T10:00:00"),
            msg(3, "2024-03-01T10:00:05"),
        ]);
        let ids: Vec<_> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_author_name() {
        let msg: Message = serde_json::from_str(
            r#"{"id":1,"groupId":5,"userId":2,"content":"hi","createdAt":"2024-03-01T10:15:30"}"#,
        )
        .unwrap();
        assert_eq!(msg.author_name(), "Unknown User");
    }
}
