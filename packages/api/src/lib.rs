//! # API crate — typed client for the Yummly REST backend
//!
//! The backend owns all data and all authorization. This crate only knows how to
//! reach it: the entity shapes it sends back, the error taxonomy for a failed call,
//! and one service per REST resource. Every service method issues exactly one HTTP
//! request (or, for [`GroupService::role_flags`] and [`PostService::like_state`],
//! a fixed set of concurrent ones) and returns the decoded result.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: shared `reqwest::Client`, base URL, the `userid` acting-user header |
//! | [`error`] | `ApiError`: transport, non-2xx status, decode and validation failures |
//! | [`models`] | `User`, `Group`, `Message`, `Recipe`, `Comment`, `Post`, `PostComment`, `Discussion` and request drafts |
//! | [`accounts`] | `AuthService`: login and signup under `/api/v1` |
//! | [`groups`] | `GroupService`: groups, membership, roles, chat and discussions |
//! | [`recipes`] | `RecipeService`: recipes, search and comments |
//! | [`posts`] | `PostService`: multipart post upload, feed listing, likes and comments |
//!
//! [`Services`] bundles all four around one client so views can pull a single
//! value out of context.

pub mod accounts;
pub mod client;
pub mod error;
pub mod groups;
pub mod models;
pub mod posts;
pub mod recipes;

pub use accounts::AuthService;
pub use client::{ApiClient, ACTING_USER_HEADER};
pub use error::ApiError;
pub use groups::GroupService;
pub use models::*;
pub use posts::PostService;
pub use recipes::RecipeService;

pub use store::ClientConfig;

/// All services, sharing one connection pool.
#[derive(Clone, Debug)]
pub struct Services {
    pub auth: AuthService,
    pub groups: GroupService,
    pub recipes: RecipeService,
    pub posts: PostService,
    pub uploads_url: String,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        let client = ApiClient::new(config);
        tracing::debug!("API base {}", client.base_url());
        Self {
            auth: AuthService::new(client.clone()),
            groups: GroupService::new(client.clone()),
            recipes: RecipeService::new(client.clone()),
            posts: PostService::new(client),
            uploads_url: config.api.uploads_url.clone(),
        }
    }
}
