//! The signed-in user's page: their posts (edit inline, delete), their recipes,
//! and logout.

use api::{MediaUpload, Post, PostDraft, PostId};
use dioxus::prelude::*;
use ui::feed::newest_first;
use ui::forms::validate_post;
use ui::icons::{FaPenToSquare, FaRightFromBracket, FaTrashCan};
use ui::{use_alerts, use_services, use_session, ConfirmDialog, Icon, PostCard};

use super::read_upload;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();

    let viewer = session.user_id();
    let mut editing = use_signal(|| Option::<PostId>::None);
    let mut pending_delete = use_signal(|| Option::<PostId>::None);

    let user_posts = services.posts.clone();
    let mut posts = use_resource(move || {
        let posts = user_posts.clone();
        async move {
            match viewer {
                Some(user) => posts.by_user(user).await.map(newest_first),
                None => Ok(Vec::new()),
            }
        }
    });

    let user_recipes = services.recipes.clone();
    let recipes = use_resource(move || {
        let recipes = user_recipes.clone();
        async move {
            match viewer {
                Some(user) => recipes.by_user(user).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let delete_posts = services.posts.clone();
    let confirm_delete = move |_| {
        let Some(post_id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let api = delete_posts.clone();
        spawn(async move {
            match api.delete(post_id).await {
                Ok(()) => posts.restart(),
                Err(e) => alerts.api_error("delete post", &e, "Failed to delete post."),
            }
        });
    };

    let logout = move |_| {
        nav.replace(Route::Login {});
        session.set_user(None);
    };

    let Some(user) = session.get_user() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "narrow",
            div {
                class: "card profile-header",
                img { class: "avatar avatar-lg", src: "{user.avatar_url()}", alt: "" }
                div {
                    h1 { "{user.display_name()}" }
                    p { class: "muted", "{user.email}" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: logout,
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    " Log out"
                }
            }

            h2 { "My posts" }
            match &*posts.read() {
                None => rsx! { p { class: "muted", "Loading posts..." } },
                Some(Err(_)) => rsx! { p { class: "error-text", "Failed to load your posts." } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p {
                        class: "muted",
                        "You haven't posted anything yet. "
                        Link { to: Route::CreatePost {}, "Create your first post" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    for post in list.iter().cloned() {
                        if editing() == Some(post.id) {
                            EditPostForm {
                                key: "edit-{post.id}",
                                post: post.clone(),
                                on_saved: move |_| {
                                    editing.set(None);
                                    posts.restart();
                                },
                                on_cancel: move |_| editing.set(None),
                            }
                        } else {
                            PostCard {
                                key: "{post.id}",
                                post: post.clone(),
                                viewer,
                                actions: rsx! {
                                    button {
                                        class: "btn btn-ghost",
                                        title: "Edit",
                                        onclick: move |_| editing.set(Some(post.id)),
                                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                    }
                                    button {
                                        class: "btn btn-ghost",
                                        title: "Delete",
                                        onclick: move |_| pending_delete.set(Some(post.id)),
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                    }
                                },
                            }
                        }
                    }
                },
            }

            h2 { "My recipes" }
            match &*recipes.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    ul {
                        class: "plain-list",
                        for recipe in list.iter().cloned() {
                            li {
                                key: "{recipe.id}",
                                Link { to: Route::RecipeDetail { id: recipe.id }, "{recipe.title}" }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! { p { class: "muted", "No recipes yet." } },
                Some(Err(_)) => rsx! { p { class: "error-text", "Failed to load your recipes." } },
                None => rsx! { p { class: "muted", "Loading..." } },
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete post?",
                message: "This post will be permanently removed.",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Inline editor replacing a post card on the profile page. New media is only
/// uploaded when a file is picked.
#[component]
fn EditPostForm(post: Post, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let services = use_services();
    let alerts = use_alerts();

    let mut title = use_signal(|| post.title.clone());
    let mut description = use_signal(|| post.description.clone());
    let mut image = use_signal(|| Option::<MediaUpload>::None);
    let mut video = use_signal(|| Option::<MediaUpload>::None);
    let mut saving = use_signal(|| false);

    let post_id = post.id;
    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let (title, description) = match validate_post(&title(), &description()) {
            Ok(fields) => fields,
            Err(errors) => {
                alerts.error("Missing details", &errors.to_string());
                return;
            }
        };
        let draft = PostDraft {
            title,
            description,
            image: image(),
            video: video(),
        };
        let posts = services.posts.clone();
        spawn(async move {
            saving.set(true);
            match posts.update(post_id, draft).await {
                Ok(_) => on_saved.call(()),
                Err(e) => alerts.api_error("update post", &e, "Failed to update post."),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "card post-edit",
            onsubmit: save,
            div {
                class: "form-group",
                label { "Title" }
                input {
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                class: "form-group",
                label { "Description" }
                textarea {
                    rows: "3",
                    value: "{description}",
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-group",
                    label { "Replace image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| async move {
                            image.set(read_upload(&evt).await);
                        },
                    }
                }
                div {
                    class: "form-group",
                    label { "Replace video" }
                    input {
                        r#type: "file",
                        accept: "video/*",
                        onchange: move |evt: FormEvent| async move {
                            video.set(read_upload(&evt).await);
                        },
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
