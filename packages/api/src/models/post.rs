//! Feed posts. Media is uploaded as multipart parts and served back from the
//! uploads base as relative paths.

use serde::{Deserialize, Serialize};

use super::{CommentId, PostId, UserId};

/// A post as listed in the feed.
///
/// The server identifies the author by name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.user_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Anonymous")
    }

    /// Absolute image URL under `uploads_url`, if the post has one.
    pub fn image_url(&self, uploads_url: &str) -> Option<String> {
        media_url(uploads_url, self.image_path.as_deref())
    }

    pub fn video_url(&self, uploads_url: &str) -> Option<String> {
        media_url(uploads_url, self.video_path.as_deref())
    }

    pub fn is_authored_by(&self, name: &str) -> bool {
        self.user_name.as_deref() == Some(name)
    }
}

fn media_url(uploads_url: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        uploads_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

/// A comment under a feed post.
///
/// The server flattens the author into `userId`/`userName` and may leave
/// either out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostComment {
    pub id: CommentId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl PostComment {
    pub fn author_name(&self) -> &str {
        self.user_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Anonymous")
    }

    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.user_id == Some(user)
    }
}

/// A file picked in the browser, read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Form state for creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub image: Option<MediaUpload>,
    pub video: Option<MediaUpload>,
}

/// Like count and whether the viewer is among the likers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeState {
    pub count: i64,
    pub liked: bool,
}

impl LikeState {
    /// Apply the server's answer to a toggle: whether the post is now liked.
    pub fn apply_toggle(self, liked: bool) -> Self {
        let count = match (self.liked, liked) {
            (false, true) => self.count + 1,
            (true, false) => (self.count - 1).max(0),
            _ => self.count,
        };
        Self { count, liked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_urls() {
        let post: Post = serde_json::from_str(
            r#"{"id":1,"title":"Brunch","imagePath":"abc.jpg","videoPath":null,
                "description":"eggs","userName":"Ada"}"#,
        )
        .unwrap();
        assert_eq!(
            post.image_url("http://localhost:8080/uploads/").as_deref(),
            Some("http://localhost:8080/uploads/abc.jpg")
        );
        assert!(post.video_url("http://localhost:8080/uploads").is_none());
        assert!(post.is_authored_by("Ada"));
    }

    #[test]
    fn test_sparse_comment_decodes() {
        let comment: PostComment =
            serde_json::from_str(r#"{"id":4,"content":"Looks great"}"#).unwrap();
        assert_eq!(comment.author_name(), "Anonymous");
        assert!(!comment.is_authored_by(2));

        let comment: PostComment = serde_json::from_str(
            r#"{"id":5,"content":"Thanks","userId":2,"userName":"Ada","postId":1}"#,
        )
        .unwrap();
        assert_eq!(comment.author_name(), "Ada");
        assert!(comment.is_authored_by(2));
    }

    #[test]
    fn test_like_toggle() {
        let state = LikeState { count: 2, liked: false };
        let liked = state.apply_toggle(true);
        assert_eq!(liked, LikeState { count: 3, liked: true });
        assert_eq!(liked.apply_toggle(false), state);
        assert_eq!(LikeState::default().apply_toggle(false).count, 0);
        // A repeated answer leaves the count alone.
        assert_eq!(liked.apply_toggle(true), liked);
    }
}
