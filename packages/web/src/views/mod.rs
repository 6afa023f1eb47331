use api::MediaUpload;
use dioxus::prelude::*;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod profile;
pub use profile::Profile;

mod create_post;
pub use create_post::CreatePost;

mod recipes;
pub use recipes::Recipes;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod recipe_editor;
pub use recipe_editor::{CreateRecipe, EditRecipe};

mod group_lists;
pub use group_lists::{AllGroups, ManagedGroups, MyGroups};

mod group_form;
pub use group_form::{CreateGroup, EditGroup};

mod group_detail;
pub use group_detail::GroupDetail;

mod create_discussion;
pub use create_discussion::CreateDiscussion;

mod not_found;
pub use not_found::NotFound;

/// Read the first picked file from a file input.
pub(crate) async fn read_upload(evt: &FormEvent) -> Option<MediaUpload> {
    let file = evt.files().into_iter().next()?;
    match file.read_bytes().await {
        Ok(bytes) => Some(MediaUpload {
            file_name: file.name(),
            content_type: file.content_type(),
            bytes: bytes.to_vec(),
        }),
        Err(e) => {
            tracing::error!("Failed to read {}: {}", file.name(), e);
            None
        }
    }
}
