//! # Group chat pane
//!
//! Shows a group's messages, oldest first, and keeps them fresh by polling.
//!
//! ## Polling
//!
//! A single task owned by this component fetches the full list, sorts it, then
//! sleeps for the configured interval before the next fetch. The task is
//! dropped when the component unmounts (tab switch or navigation). Because each
//! fetch completes before the sleep starts, two polls never overlap.
//!
//! ## Sending and deleting
//!
//! Sending trims the text, refuses an empty message, posts it and re-fetches at
//! once instead of echoing the message locally. Deleting asks for confirmation
//! first and re-fetches afterwards.

use api::{GroupId, GroupService, Message, MessageId, RoleFlags, UserId};
use dioxus::prelude::*;

use crate::chat::{poll_interval, prepare_outgoing, sleep, sort_messages};
use crate::icons::{FaPaperPlane, FaTrashCan};
use crate::permissions::{can_delete_message, can_post_message};
use crate::{use_alerts, use_client_config, use_services, use_session, ConfirmDialog, Icon};

async fn refresh(
    groups: &GroupService,
    group_id: GroupId,
    viewer: UserId,
    mut messages: Signal<Vec<Message>>,
) -> Result<(), api::ApiError> {
    let fetched = groups.messages(group_id, viewer).await?;
    messages.set(sort_messages(fetched));
    Ok(())
}

#[component]
pub fn GroupMessages(group_id: GroupId, flags: RoleFlags) -> Element {
    let session = use_session();
    let services = use_services();
    let config = use_client_config();
    let alerts = use_alerts();

    let messages = use_signal(Vec::<Message>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<MessageId>::None);
    let mut poll_failed = use_signal(|| false);

    let viewer = session.user_id();
    let interval = poll_interval(&config);

    let poll_groups = services.groups.clone();
    use_future(move || {
        let groups = poll_groups.clone();
        async move {
            let Some(viewer) = viewer else {
                return;
            };
            loop {
                match refresh(&groups, group_id, viewer, messages).await {
                    Ok(()) => poll_failed.set(false),
                    Err(e) => {
                        tracing::warn!("Polling messages for group {} failed: {}", group_id, e);
                        poll_failed.set(true);
                    }
                }
                sleep(interval).await;
            }
        }
    });

    let send_groups = services.groups.clone();
    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let (Some(viewer), Some(content)) = (viewer, prepare_outgoing(&draft())) else {
            return;
        };
        let groups = send_groups.clone();
        spawn(async move {
            sending.set(true);
            match groups.post_message(group_id, &content, viewer).await {
                Ok(_) => {
                    draft.set(String::new());
                    if let Err(e) = refresh(&groups, group_id, viewer, messages).await {
                        tracing::warn!("Refresh after send failed: {}", e);
                    }
                }
                Err(e) => alerts.api_error("send message", &e, "Failed to send message."),
            }
            sending.set(false);
        });
    };

    let delete_groups = services.groups.clone();
    let confirm_delete = move |_| {
        let (Some(viewer), Some(message_id)) = (viewer, pending_delete()) else {
            return;
        };
        pending_delete.set(None);
        let groups = delete_groups.clone();
        spawn(async move {
            match groups.delete_message(group_id, message_id, viewer).await {
                Ok(()) => {
                    if let Err(e) = refresh(&groups, group_id, viewer, messages).await {
                        tracing::warn!("Refresh after delete failed: {}", e);
                    }
                }
                Err(e) => alerts.api_error("delete message", &e, "Failed to delete message."),
            }
        });
    };

    rsx! {
        div {
            class: "chat",
            if poll_failed() {
                p { class: "chat-warning", "Unable to refresh messages. Retrying..." }
            }
            div {
                class: "chat-log",
                if messages.read().is_empty() {
                    p { class: "muted", "No messages yet. Start the conversation!" }
                }
                for message in messages() {
                    div {
                        key: "{message.id}",
                        class: if Some(message.user_id) == viewer { "chat-message own" } else { "chat-message" },
                        div {
                            class: "chat-meta",
                            strong { "{message.author_name()}" }
                            span { class: "muted", " {message.display_time()}" }
                            if can_delete_message(viewer, flags, &message) {
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete message",
                                    onclick: move |_| pending_delete.set(Some(message.id)),
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                        p { class: "chat-content", "{message.content}" }
                    }
                }
            }
            if can_post_message(viewer, flags) {
                form {
                    class: "chat-form",
                    onsubmit: send,
                    input {
                        r#type: "text",
                        placeholder: "Type a message...",
                        value: "{draft}",
                        disabled: sending(),
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending() || draft().trim().is_empty(),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    }
                }
            }
        }
        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete message?",
                message: "This message will be removed for everyone in the group.",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
