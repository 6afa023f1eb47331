use api::{avatar_url_for, CommentId, LikeState, Post, PostComment, PostId, UserId};
use dioxus::prelude::*;

use crate::icons::{FaComment, FaHeart, FaTrashCan};
use crate::{use_alerts, use_services, Icon};

/// One post in a feed, with its like button and comment thread.
///
/// `actions` is rendered in the card footer; the profile page uses it for the
/// owner's edit and delete buttons.
#[component]
pub fn PostCard(
    post: Post,
    viewer: Option<UserId>,
    actions: Option<Element>,
) -> Element {
    let services = use_services();
    let alerts = use_alerts();
    let mut likes = use_signal(LikeState::default);

    let post_id = post.id;
    let like_posts = services.posts.clone();
    let _likes_loader = use_resource(move || {
        let posts = like_posts.clone();
        async move {
            let result = match viewer {
                Some(user) => posts.like_state(post_id, user).await,
                None => posts.like_count(post_id).await.map(|count| LikeState { count, liked: false }),
            };
            match result {
                Ok(state) => likes.set(state),
                Err(e) => tracing::debug!("Like state for post {} unavailable: {}", post_id, e),
            }
        }
    });

    let toggle_posts = services.posts.clone();
    let toggle_like = move |_| {
        let Some(user) = viewer else {
            return;
        };
        let posts = toggle_posts.clone();
        spawn(async move {
            match posts.toggle_like(post_id, user).await {
                Ok(liked) => {
                    let next = likes().apply_toggle(liked);
                    likes.set(next);
                }
                Err(e) => alerts.api_error("toggle like", &e, "Could not update like."),
            }
        });
    };

    let image = post.image_url(&services.uploads_url);
    let video = post.video_url(&services.uploads_url);
    let author = post.author_name().to_string();
    let heart_class = if likes().liked { "like-btn liked" } else { "like-btn" };

    rsx! {
        article {
            class: "card post-card",
            header {
                class: "post-header",
                img { class: "avatar", src: "{avatar_url_for(&author)}", alt: "" }
                span { class: "post-author", "{author}" }
            }
            if let Some(src) = image {
                img { class: "post-media", src: "{src}", alt: "{post.title}" }
            }
            if let Some(src) = video {
                video { class: "post-media", src: "{src}", controls: true }
            }
            div {
                class: "post-body",
                h3 { "{post.title}" }
                p { "{post.description}" }
            }
            footer {
                class: "post-footer",
                button {
                    class: "{heart_class}",
                    disabled: viewer.is_none(),
                    onclick: toggle_like,
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    " {likes().count}"
                }
                {actions}
            }
            PostComments { post_id, viewer }
        }
    }
}

/// Comment count for a post; expands into the thread and, for a signed-in
/// viewer, a form to add one. Authors can delete their own comments.
#[component]
fn PostComments(post_id: PostId, viewer: Option<UserId>) -> Element {
    let services = use_services();
    let alerts = use_alerts();
    let mut count = use_signal(|| 0_i64);
    let mut open = use_signal(|| false);
    let mut comments = use_signal(|| Option::<Vec<PostComment>>::None);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let count_posts = services.posts.clone();
    let _count_loader = use_resource(move || {
        let posts = count_posts.clone();
        async move {
            match posts.comment_count(post_id).await {
                Ok(n) => count.set(n),
                Err(e) => tracing::debug!("Comment count for post {} unavailable: {}", post_id, e),
            }
        }
    });

    let list_posts = services.posts.clone();
    let toggle_open = move |_| {
        let now_open = !open();
        open.set(now_open);
        if !now_open || comments.peek().is_some() {
            return;
        }
        let posts = list_posts.clone();
        spawn(async move {
            match posts.comments(post_id).await {
                Ok(list) => {
                    count.set(list.len() as i64);
                    comments.set(Some(list));
                }
                Err(e) => alerts.api_error("load comments", &e, "Could not load comments."),
            }
        });
    };

    let add_posts = services.posts.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(user) = viewer else {
            return;
        };
        let content = draft();
        let posts = add_posts.clone();
        spawn(async move {
            sending.set(true);
            match posts.add_comment(post_id, user, &content).await {
                Ok(comment) => {
                    comments.write().get_or_insert_with(Vec::new).push(comment);
                    count.set(count() + 1);
                    draft.set(String::new());
                }
                Err(e) => alerts.api_error("add comment", &e, "Could not add comment."),
            }
            sending.set(false);
        });
    };

    let delete_posts = services.posts.clone();
    let delete_comment = use_callback(move |comment_id: CommentId| {
        let posts = delete_posts.clone();
        spawn(async move {
            match posts.delete_comment(post_id, comment_id).await {
                Ok(()) => {
                    if let Some(list) = comments.write().as_mut() {
                        list.retain(|c: &PostComment| c.id != comment_id);
                    }
                    count.set((count() - 1).max(0));
                }
                Err(e) => alerts.api_error("delete comment", &e, "Could not delete comment."),
            }
        });
    });

    rsx! {
        div {
            class: "post-comments",
            button {
                class: "like-btn",
                onclick: toggle_open,
                Icon { icon: FaComment, width: 14, height: 14 }
                " {count}"
            }
            if open() {
                {match comments() {
                    None => rsx! { p { class: "muted", "Loading comments..." } },
                    Some(list) => rsx! {
                        for comment in list {
                            div {
                                key: "{comment.id}",
                                class: "comment",
                                strong { "{comment.author_name()}" }
                                if viewer.is_some_and(|v| comment.is_authored_by(v)) {
                                    button {
                                        class: "btn-icon",
                                        title: "Delete comment",
                                        onclick: move |_| delete_comment.call(comment.id),
                                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                                    }
                                }
                                p { "{comment.content}" }
                            }
                        }
                    },
                }}
                if viewer.is_some() {
                    form {
                        class: "comment-form",
                        onsubmit: submit,
                        textarea {
                            rows: "2",
                            placeholder: "Write a comment...",
                            value: "{draft}",
                            oninput: move |evt: FormEvent| draft.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: sending() || draft().trim().is_empty(),
                            if sending() { "Sending..." } else { "Comment" }
                        }
                    }
                }
            }
        }
    }
}
