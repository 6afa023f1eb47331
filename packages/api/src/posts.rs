//! # Post service
//!
//! Posts carry media, so create and update go out as `multipart/form-data`
//! rather than JSON. Likes and comments live under `/api/posts/{id}/likes` and
//! `/api/posts/{id}/comments`; both take their arguments as query parameters,
//! the user included, instead of a JSON body.

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CommentId, LikeState, MediaUpload, Post, PostComment, PostDraft, PostId, UserId,
};

const BASE: &str = "/api/posts";

#[derive(Clone, Debug)]
pub struct PostService {
    client: ApiClient,
}

impl PostService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Every post, in server order. Sort with the feed helpers before display.
    pub async fn list(&self) -> Result<Vec<Post>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/")))
            .await
    }

    pub async fn get(&self, id: PostId) -> Result<Post, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}")))
            .await
    }

    pub async fn by_user(&self, user: UserId) -> Result<Vec<Post>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/user/{user}")))
            .await
    }

    pub async fn create(&self, draft: PostDraft, author: UserId) -> Result<Post, ApiError> {
        let form = draft_form(draft)?.text("userId", author.to_string());
        let post: Post = self
            .client
            .send_json(self.client.post(&format!("{BASE}/create")).multipart(form))
            .await?;
        tracing::info!("Created post {}", post.id);
        Ok(post)
    }

    /// Replaces title and description; media parts are only sent when a new
    /// file was picked.
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, ApiError> {
        let form = draft_form(draft)?;
        self.client
            .send_json(self.client.put(&format!("{BASE}/{id}")).multipart(form))
            .await
    }

    pub async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        self.client
            .send_empty(self.client.delete(&format!("{BASE}/{id}")))
            .await
    }

    /// Returns the new state as reported by the server (`"Liked"`/`"Unliked"`).
    pub async fn toggle_like(&self, post: PostId, user: UserId) -> Result<bool, ApiError> {
        let answer = self
            .client
            .send_text(
                self.client
                    .post(&format!("{BASE}/{post}/likes"))
                    .query(&[("userId", user)]),
            )
            .await?;
        Ok(answer.trim().eq_ignore_ascii_case("liked"))
    }

    pub async fn like_count(&self, post: PostId) -> Result<i64, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{post}/likes/count")))
            .await
    }

    pub async fn has_liked(&self, post: PostId, user: UserId) -> Result<bool, ApiError> {
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/{post}/likes/check"))
                    .query(&[("userId", user)]),
            )
            .await
    }

    /// Count and viewer flag in one call, both requests in flight together.
    pub async fn like_state(&self, post: PostId, user: UserId) -> Result<LikeState, ApiError> {
        let (count, liked) = futures::join!(self.like_count(post), self.has_liked(post, user));
        Ok(LikeState {
            count: count?,
            liked: liked?,
        })
    }

    pub async fn comments(&self, post: PostId) -> Result<Vec<PostComment>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{post}/comments")))
            .await
    }

    pub async fn add_comment(
        &self,
        post: PostId,
        user: UserId,
        content: &str,
    ) -> Result<PostComment, ApiError> {
        let content = comment_text(content)?;
        let comment: PostComment = self
            .client
            .send_json(add_comment_request(&self.client, post, user, &content))
            .await?;
        tracing::info!("Added comment {} to post {}", comment.id, post);
        Ok(comment)
    }

    pub async fn delete_comment(&self, post: PostId, comment: CommentId) -> Result<(), ApiError> {
        self.client
            .send_empty(self.client.delete(&format!("{BASE}/{post}/comments/{comment}")))
            .await
    }

    pub async fn comment_count(&self, post: PostId) -> Result<i64, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{post}/comments/count")))
            .await
    }
}

fn comment_text(content: &str) -> Result<String, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::Validation("comment is empty".to_string()));
    }
    Ok(content.to_string())
}

fn add_comment_request(
    client: &ApiClient,
    post: PostId,
    user: UserId,
    content: &str,
) -> reqwest::RequestBuilder {
    client
        .post(&format!("{BASE}/{post}/comments"))
        .query(&[("userId", user.to_string()), ("content", content.to_string())])
}

fn draft_form(draft: PostDraft) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("title", draft.title.trim().to_string())
        .text("description", draft.description.trim().to_string());
    if let Some(image) = draft.image {
        form = form.part("image", media_part(image)?);
    }
    if let Some(video) = draft.video {
        form = form.part("video", media_part(video)?);
    }
    Ok(form)
}

fn media_part(upload: MediaUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(upload.bytes).file_name(upload.file_name);
    match upload.content_type {
        Some(mime) => part
            .mime_str(&mime)
            .map_err(|e| ApiError::Validation(format!("bad media type {mime}: {e}"))),
        None => Ok(part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_request_shape() {
        let client = ApiClient::with_base_url("http://localhost:8080");
        let draft = PostDraft {
            title: " Brunch ".into(),
            description: "eggs".into(),
            image: Some(MediaUpload {
                file_name: "eggs.jpg".into(),
                content_type: Some("image/jpeg".into()),
                bytes: vec![0xff, 0xd8],
            }),
            video: None,
        };
        let form = draft_form(draft).unwrap().text("userId", "3");
        let request = client
            .post("/api/posts/create")
            .multipart(form)
            .build()
            .unwrap();

        let content_type = request.headers()[reqwest::header::CONTENT_TYPE]
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(request.url().path(), "/api/posts/create");
    }

    #[test]
    fn test_add_comment_sends_query_params() {
        let client = ApiClient::with_base_url("http://localhost:8080");
        let request = add_comment_request(&client, 7, 3, "so good").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/api/posts/7/comments");
        assert_eq!(request.url().query(), Some("userId=3&content=so+good"));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        assert!(matches!(comment_text("  \n"), Err(ApiError::Validation(_))));
        assert_eq!(comment_text(" yum ").unwrap(), "yum");
    }

    #[test]
    fn test_invalid_mime_is_a_validation_error() {
        let upload = MediaUpload {
            file_name: "x".into(),
            content_type: Some("not a mime".into()),
            bytes: vec![],
        };
        assert!(matches!(media_part(upload), Err(ApiError::Validation(_))));
    }
}
