//! Group chat ordering and polling helpers.
//!
//! The chat pane re-fetches the whole message list on a fixed interval and
//! re-sorts it on every poll. There is no cursor or delta fetch.

use std::time::Duration;

use api::Message;
use store::ClientConfig;

/// Oldest first by timestamp; ties keep server order.
pub fn sort_messages(messages: Vec<Message>) -> Vec<Message> {
    api::in_display_order(messages)
}

/// Trimmed outgoing text, or `None` when there is nothing to send.
pub fn prepare_outgoing(draft: &str) -> Option<String> {
    let text = draft.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Poll period, never shorter than one second.
pub fn poll_interval(config: &ClientConfig) -> Duration {
    Duration::from_secs(config.chat.poll_interval_secs.max(1))
}

/// Platform sleep for polling loops.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, created_at: &str) -> Message {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "groupId": 5,
            "userId": 1,
            "content": "hi",
            "createdAt": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_poll_response_is_shown_oldest_first() {
        let polled = vec![message(1, "2024-03-01T10:00:05"), message(2, "2024-03-01T10:00:00")];
        let ids: Vec<_> = sort_messages(polled).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_resort_is_idempotent() {
        let once = sort_messages(vec![
            message(3, "2024-03-01T10:00:02"),
            message(1, "2024-03-01T10:00:01"),
            message(2, "2024-03-01T10:00:01"),
        ]);
        let twice = sort_messages(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_prepare_outgoing() {
        assert_eq!(prepare_outgoing("  hello \n"), Some("hello".to_string()));
        assert_eq!(prepare_outgoing("   "), None);
        assert_eq!(prepare_outgoing(""), None);
    }

    #[test]
    fn test_poll_interval() {
        assert_eq!(poll_interval(&ClientConfig::default()), Duration::from_secs(5));
        let zero = ClientConfig::default().with_poll_interval(0);
        assert_eq!(poll_interval(&zero), Duration::from_secs(1));
    }
}
