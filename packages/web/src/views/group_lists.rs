//! The three group listings: every group, the viewer's groups, and the groups
//! the viewer administers.

use std::collections::HashSet;

use api::{Group, GroupId};
use dioxus::prelude::*;
use ui::icons::{FaMagnifyingGlass, FaPenToSquare, FaRightFromBracket, FaTrashCan, FaUserPlus, FaUsers};
use ui::{use_alerts, use_services, use_session, ConfirmDialog, GroupNav, GroupTab, Icon};

use crate::Route;

#[component]
fn GroupCard(group: Group, actions: Element) -> Element {
    rsx! {
        div {
            class: "card group-card",
            div {
                class: "group-card-header",
                if let Some(src) = group.image_url.clone().filter(|s| !s.is_empty()) {
                    img { class: "group-thumb", src: "{src}", alt: "{group.name}" }
                } else {
                    div { class: "group-thumb placeholder", "{group.initial()}" }
                }
                div {
                    h3 {
                        Link { to: Route::GroupDetail { group_id: group.id }, "{group.name}" }
                    }
                    if !group.cuisine_type.is_empty() {
                        span { class: "badge", "{group.cuisine_type}" }
                    }
                }
            }
            p { class: "group-description", "{group.description}" }
            div {
                class: "group-card-footer",
                if let Some(count) = group.member_count {
                    span {
                        class: "muted",
                        Icon { icon: FaUsers, width: 12, height: 12 }
                        " {count} members"
                    }
                }
                div { class: "card-actions", {actions} }
            }
        }
    }
}

#[component]
pub fn AllGroups() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let viewer = session.user_id();

    let mut filter = use_signal(String::new);
    let mut pending_leave = use_signal(|| Option::<GroupId>::None);

    let list_api = services.groups.clone();
    let mut groups = use_resource(move || {
        let api = list_api.clone();
        async move { api.list().await }
    });

    let member_api = services.groups.clone();
    let mut memberships = use_resource(move || {
        let api = member_api.clone();
        async move {
            let Some(viewer) = viewer else {
                return HashSet::new();
            };
            match api.by_member(viewer).await {
                Ok(list) => list.into_iter().map(|g| g.id).collect::<HashSet<GroupId>>(),
                Err(e) => {
                    tracing::warn!("Failed to load memberships: {}", e);
                    HashSet::new()
                }
            }
        }
    });

    let join_api = services.groups.clone();
    let join = move |group_id: GroupId| {
        let Some(viewer) = viewer else {
            return;
        };
        let api = join_api.clone();
        spawn(async move {
            match api.join(group_id, viewer).await {
                Ok(()) => {
                    alerts.success("Joined", "You joined the group.");
                    groups.restart();
                    memberships.restart();
                }
                Err(e) => alerts.api_error("join group", &e, "Failed to join group."),
            }
        });
    };

    let leave_api = services.groups.clone();
    let confirm_leave = move |_| {
        let (Some(viewer), Some(group_id)) = (viewer, pending_leave()) else {
            return;
        };
        pending_leave.set(None);
        let api = leave_api.clone();
        spawn(async move {
            match api.leave(group_id, viewer).await {
                Ok(()) => {
                    alerts.success("Left group", "You left the group.");
                    groups.restart();
                    memberships.restart();
                }
                Err(e) => alerts.api_error("leave group", &e, "Failed to leave group."),
            }
        });
    };

    let joined = memberships.read().clone().unwrap_or_default();

    rsx! {
        GroupNav { current: GroupTab::All }
        div {
            class: "search-form card",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "Filter by name, cuisine or description...",
                value: "{filter}",
                oninput: move |evt: FormEvent| filter.set(evt.value()),
            }
        }

        match &*groups.read() {
            None => rsx! { p { class: "muted", "Loading groups..." } },
            Some(Err(e)) => {
                tracing::error!("Failed to load groups: {}", e);
                rsx! { p { class: "error-text", "Failed to load groups." } }
            }
            Some(Ok(list)) => {
                let term = filter();
                let shown: Vec<Group> = list.iter().filter(|g| g.matches(&term)).cloned().collect();
                let empty = shown.is_empty();
                let cards = shown.into_iter().map(|group| {
                    let group_id = group.id;
                    let actions = if joined.contains(&group_id) {
                        let admin = viewer == Some(group.admin_id);
                        rsx! {
                            span { class: "badge badge-soft", "Member" }
                            if !admin {
                                button {
                                    class: "btn btn-secondary btn-sm",
                                    onclick: move |_| pending_leave.set(Some(group_id)),
                                    Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                                    " Leave"
                                }
                            }
                        }
                    } else {
                        let join = join.clone();
                        rsx! {
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| join(group_id),
                                Icon { icon: FaUserPlus, width: 12, height: 12 }
                                " Join"
                            }
                        }
                    };
                    rsx! { GroupCard { key: "{group_id}", group, actions } }
                });
                rsx! {
                    if empty {
                        p { class: "muted", "No groups match your search." }
                    }
                    div { class: "grid", {cards} }
                }
            }
        }

        if pending_leave().is_some() {
            ConfirmDialog {
                title: "Leave group?",
                message: "You will lose access to the group's messages until you join again.",
                confirm_label: "Leave",
                on_confirm: confirm_leave,
                on_cancel: move |_| pending_leave.set(None),
            }
        }
    }
}

/// Groups the viewer belongs to.
#[component]
pub fn MyGroups() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let viewer = session.user_id();
    let mut pending_leave = use_signal(|| Option::<GroupId>::None);

    let list_api = services.groups.clone();
    let mut groups = use_resource(move || {
        let api = list_api.clone();
        async move {
            match viewer {
                Some(viewer) => api.by_member(viewer).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let leave_api = services.groups.clone();
    let confirm_leave = move |_| {
        let (Some(viewer), Some(group_id)) = (viewer, pending_leave()) else {
            return;
        };
        pending_leave.set(None);
        let api = leave_api.clone();
        spawn(async move {
            match api.leave(group_id, viewer).await {
                Ok(()) => {
                    alerts.success("Left group", "You left the group.");
                    groups.restart();
                }
                Err(e) => alerts.api_error("leave group", &e, "Failed to leave group."),
            }
        });
    };

    rsx! {
        GroupNav { current: GroupTab::Member }
        match &*groups.read() {
            None => rsx! { p { class: "muted", "Loading your groups..." } },
            Some(Err(e)) => {
                tracing::error!("Failed to load member groups: {}", e);
                rsx! { p { class: "error-text", "Failed to load your groups." } }
            }
            Some(Ok(list)) if list.is_empty() => rsx! {
                div {
                    class: "empty-state",
                    p { "You haven't joined any groups yet." }
                    Link { class: "btn btn-primary", to: Route::AllGroups {}, "Browse groups" }
                }
            },
            Some(Ok(list)) => {
                let cards = list.iter().cloned().map(|group| {
                    let group_id = group.id;
                    let actions = if viewer == Some(group.admin_id) {
                        rsx! { span { class: "badge", "Admin" } }
                    } else {
                        rsx! {
                            button {
                                class: "btn btn-secondary btn-sm",
                                onclick: move |_| pending_leave.set(Some(group_id)),
                                Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                                " Leave"
                            }
                        }
                    };
                    rsx! { GroupCard { key: "{group_id}", group, actions } }
                });
                rsx! {
                    div { class: "grid", {cards} }
                }
            }
        }

        if pending_leave().is_some() {
            ConfirmDialog {
                title: "Leave group?",
                message: "You will lose access to the group's messages until you join again.",
                confirm_label: "Leave",
                on_confirm: confirm_leave,
                on_cancel: move |_| pending_leave.set(None),
            }
        }
    }
}

/// Groups the viewer administers, with edit and delete.
#[component]
pub fn ManagedGroups() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let viewer = session.user_id();
    let mut pending_delete = use_signal(|| Option::<GroupId>::None);

    let list_api = services.groups.clone();
    let mut groups = use_resource(move || {
        let api = list_api.clone();
        async move {
            match viewer {
                Some(viewer) => api.by_admin(viewer).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let delete_api = services.groups.clone();
    let confirm_delete = move |_| {
        let (Some(viewer), Some(group_id)) = (viewer, pending_delete()) else {
            return;
        };
        pending_delete.set(None);
        let api = delete_api.clone();
        spawn(async move {
            match api.delete(group_id, viewer).await {
                Ok(()) => {
                    alerts.success("Deleted", "Group deleted.");
                    groups.restart();
                }
                Err(e) => alerts.api_error("delete group", &e, "Failed to delete group."),
            }
        });
    };

    rsx! {
        GroupNav { current: GroupTab::Admin }
        match &*groups.read() {
            None => rsx! { p { class: "muted", "Loading managed groups..." } },
            Some(Err(e)) => {
                tracing::error!("Failed to load managed groups: {}", e);
                rsx! { p { class: "error-text", "Failed to load managed groups." } }
            }
            Some(Ok(list)) if list.is_empty() => rsx! {
                div {
                    class: "empty-state",
                    p { "You don't manage any groups yet." }
                    Link { class: "btn btn-primary", to: Route::CreateGroup {}, "Create a group" }
                }
            },
            Some(Ok(list)) => {
                let cards = list.iter().cloned().map(|group| {
                    let group_id = group.id;
                    let actions = rsx! {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| { nav.push(Route::EditGroup { group_id }); },
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                            " Edit"
                        }
                        button {
                            class: "btn btn-danger btn-sm",
                            onclick: move |_| pending_delete.set(Some(group_id)),
                            Icon { icon: FaTrashCan, width: 12, height: 12 }
                            " Delete"
                        }
                    };
                    rsx! { GroupCard { key: "{group_id}", group, actions } }
                });
                rsx! {
                    div { class: "grid", {cards} }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete group?",
                message: "The group, its messages and its discussions will be permanently removed.",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
