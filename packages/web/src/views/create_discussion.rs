use api::{DiscussionDraft, GroupId};
use dioxus::prelude::*;
use ui::forms::{validate_discussion, FormErrors};
use ui::{use_alerts, use_services, use_session};

use crate::Route;

/// New discussion form. Only members get the form; everyone else sees a link
/// back to the group.
#[component]
pub fn CreateDiscussion(group_id: GroupId) -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let viewer = session.user_id();

    let mut draft = use_signal(DiscussionDraft::default);
    let mut errors = use_signal(FormErrors::new);
    let mut saving = use_signal(|| false);

    let check_api = services.groups.clone();
    let membership = use_resource(use_reactive!(|(group_id,)| {
        let api = check_api.clone();
        async move {
            match viewer {
                Some(viewer) => api.is_member(group_id, viewer).await,
                None => Ok(false),
            }
        }
    }));

    let create_api = services.groups.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(viewer) = viewer else {
            return;
        };
        let valid = match validate_discussion(&draft.read()) {
            Ok(valid) => valid,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::new());
        let api = create_api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_discussion(group_id, &valid, viewer).await {
                Ok(_) => {
                    alerts.success("Discussion created", "Your discussion has been posted.");
                    nav.replace(Route::GroupDetail { group_id });
                }
                Err(e) => alerts.api_error("create discussion", &e, "Failed to create discussion."),
            }
            saving.set(false);
        });
    };

    let body = match &*membership.read() {
        None => rsx! { p { class: "muted", "Checking membership..." } },
        Some(Err(e)) => {
            tracing::error!("Membership check for group {} failed: {}", group_id, e);
            rsx! { p { class: "error-text", "Failed to load group details" } }
        }
        Some(Ok(false)) => rsx! {
            div {
                class: "empty-state",
                p { "Only group members can start discussions." }
                Link { class: "btn btn-primary", to: Route::GroupDetail { group_id }, "Back to group" }
            }
        },
        Some(Ok(true)) => {
            let form = draft.read().clone();
            rsx! {
                form {
                    class: "card",
                    onsubmit: submit,
                    div {
                        class: "form-group",
                        label { r#for: "discussion-title", "Title *" }
                        input {
                            id: "discussion-title",
                            r#type: "text",
                            value: "{form.title}",
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                        if let Some(msg) = errors.read().get("title") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "discussion-content", "Content *" }
                        textarea {
                            id: "discussion-content",
                            rows: "8",
                            value: "{form.content}",
                            oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                        }
                        if let Some(msg) = errors.read().get("content") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                    div {
                        class: "form-actions",
                        Link { class: "btn btn-secondary", to: Route::GroupDetail { group_id }, "Cancel" }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving(),
                            if saving() { "Posting..." } else { "Create discussion" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Start a discussion" }
            {body}
        }
    }
}
