use api::{MediaUpload, PostDraft};
use dioxus::prelude::*;
use ui::forms::validate_post;
use ui::{use_alerts, use_services, use_session};

use super::read_upload;
use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(|| Option::<MediaUpload>::None);
    let mut video = use_signal(|| Option::<MediaUpload>::None);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(author) = session.user_id() else {
            return;
        };
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
            submitting.set(true);
            match posts.create(draft, author).await {
                Ok(_) => {
                    alerts.success("Posted", "Your post has been shared.");
                    nav.push(Route::Home {});
                }
                Err(e) => alerts.api_error("create post", &e, "Failed to create post."),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Create a post" }
            form {
                class: "card",
                onsubmit: submit,
                div {
                    class: "form-group",
                    label { r#for: "post-title", "Title *" }
                    input {
                        id: "post-title",
                        r#type: "text",
                        value: "{title}",
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "post-description", "Description *" }
                    textarea {
                        id: "post-description",
                        rows: "4",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "post-image", "Image" }
                    input {
                        id: "post-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| async move {
                            image.set(read_upload(&evt).await);
                        },
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "post-video", "Video" }
                    input {
                        id: "post-video",
                        r#type: "file",
                        accept: "video/*",
                        onchange: move |evt: FormEvent| async move {
                            video.set(read_upload(&evt).await);
                        },
                    }
                }
                div {
                    class: "form-actions",
                    Link { class: "btn btn-secondary", to: Route::Home {}, "Cancel" }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Posting..." } else { "Post" }
                    }
                }
            }
        }
    }
}
