//! Entities as the REST API transports them.
//!
//! The backend owns persistence; these types only mirror its JSON (camelCase
//! field names, numeric ids). Fields the server may omit are `Option` or
//! `#[serde(default)]` so a sparse response still decodes.

mod discussion;
mod group;
mod message;
mod post;
mod recipe;
mod user;

pub use discussion::{Discussion, DiscussionDraft};
pub use group::{Group, GroupDraft, RoleFlags, TransferOwnership};
pub use message::{in_display_order, Message, NewMessage};
pub use post::{LikeState, MediaUpload, Post, PostComment, PostDraft};
pub use recipe::{Comment, NewComment, Recipe, RecipeDraft, RecipeSearch};
pub use user::{avatar_url_for, Credentials, NewUser, User};

pub type UserId = i64;
pub type GroupId = i64;
pub type MessageId = i64;
pub type RecipeId = i64;
pub type PostId = i64;
pub type DiscussionId = i64;
pub type CommentId = i64;
