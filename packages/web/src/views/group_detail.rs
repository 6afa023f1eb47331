//! # Group detail
//!
//! Profile, roster and the role-gated group actions, plus the Messages and
//! Discussions tabs for members.
//!
//! The page loads in two steps: group, members and moderators one after the
//! other, then the viewer's three role checks concurrently. Any failure leaves
//! the page showing "Failed to load group details". Every successful mutation
//! restarts the load so the roster and flags come from the server again.

use api::{
    ApiError, Discussion, DiscussionId, Group, GroupId, GroupService, RoleFlags, User, UserId,
};
use dioxus::prelude::*;
use ui::icons::{
    FaCrown, FaPenToSquare, FaPlus, FaRightFromBracket, FaShieldHalved, FaTrashCan, FaUserMinus,
    FaUserPlus,
};
use ui::permissions::{
    can_delete_discussion, can_join, can_leave, can_manage_group, member_actions, member_role,
    transfer_candidates, MemberRole,
};
use ui::{use_alerts, use_services, use_session, ConfirmDialog, GroupMessages, Icon};

use crate::Route;

#[derive(Debug, Clone, PartialEq)]
struct GroupPage {
    group: Group,
    members: Vec<User>,
    moderators: Vec<User>,
    flags: RoleFlags,
}

async fn load_page(
    api: &GroupService,
    group_id: GroupId,
    viewer: Option<UserId>,
) -> Result<GroupPage, ApiError> {
    let group = api.get(group_id).await?;
    let members = api.members(group_id).await?;
    let moderators = api.moderators(group_id).await?;
    let flags = match viewer {
        Some(viewer) => api.role_flags(group_id, viewer).await?,
        None => RoleFlags::default(),
    };
    Ok(GroupPage {
        group,
        members,
        moderators,
        flags,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    About,
    Messages,
    Discussions,
}

/// An action waiting on the confirm dialog.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Leave,
    DeleteGroup,
    Transfer { to: UserId, name: String },
    RemoveMember { user: UserId, name: String },
    DeleteDiscussion(DiscussionId),
}

impl Pending {
    fn title(&self) -> &'static str {
        match self {
            Pending::Leave => "Leave group?",
            Pending::DeleteGroup => "Delete group?",
            Pending::Transfer { .. } => "Transfer ownership?",
            Pending::RemoveMember { .. } => "Remove member?",
            Pending::DeleteDiscussion(_) => "Delete discussion?",
        }
    }

    fn message(&self) -> String {
        match self {
            Pending::Leave => {
                "You will lose access to the group's messages until you join again.".to_string()
            }
            Pending::DeleteGroup => {
                "This cannot be undone. Messages, discussions and memberships are removed."
                    .to_string()
            }
            Pending::Transfer { name, .. } => {
                format!("{name} will become the group admin. You stay a member.")
            }
            Pending::RemoveMember { name, .. } => format!("{name} will be removed from the group."),
            Pending::DeleteDiscussion(_) => "This discussion will be permanently removed.".to_string(),
        }
    }

    fn confirm_label(&self) -> &'static str {
        match self {
            Pending::Leave => "Leave",
            Pending::Transfer { .. } => "Transfer",
            Pending::RemoveMember { .. } => "Remove",
            Pending::DeleteGroup | Pending::DeleteDiscussion(_) => "Delete",
        }
    }

    /// Transfer hands the group over rather than removing anything.
    fn is_destructive(&self) -> bool {
        !matches!(self, Pending::Transfer { .. })
    }
}

#[component]
pub fn GroupDetail(group_id: GroupId) -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let viewer = session.user_id();

    let mut tab = use_signal(|| Tab::About);
    let mut pending = use_signal(|| Option::<Pending>::None);
    let mut transfer_to = use_signal(|| Option::<UserId>::None);

    let load_api = services.groups.clone();
    let mut page = use_resource(use_reactive!(|(group_id,)| {
        let api = load_api.clone();
        async move { load_page(&api, group_id, viewer).await }
    }));

    let discussions_api = services.groups.clone();
    let mut discussions = use_resource(use_reactive!(|(group_id,)| {
        let api = discussions_api.clone();
        async move { api.discussions(group_id).await }
    }));

    let join_api = services.groups.clone();
    let join = move |_| {
        let Some(viewer) = viewer else {
            return;
        };
        let api = join_api.clone();
        spawn(async move {
            match api.join(group_id, viewer).await {
                Ok(()) => {
                    alerts.success("Joined", "Welcome to the group!");
                    page.restart();
                }
                Err(e) => alerts.api_error("join group", &e, "Failed to join group."),
            }
        });
    };

    let moderator_api = services.groups.clone();
    let toggle_moderator = move |(user, is_moderator): (UserId, bool)| {
        let Some(viewer) = viewer else {
            return;
        };
        let api = moderator_api.clone();
        spawn(async move {
            let result = if is_moderator {
                api.remove_moderator(group_id, user, viewer).await
            } else {
                api.add_moderator(group_id, user, viewer).await
            };
            match result {
                Ok(()) => page.restart(),
                Err(e) => alerts.api_error("update moderators", &e, "Failed to update moderators."),
            }
        });
    };

    let action_api = services.groups.clone();
    let confirm = move |_| {
        let (Some(viewer), Some(action)) = (viewer, pending()) else {
            return;
        };
        pending.set(None);
        let api = action_api.clone();
        spawn(async move {
            match action {
                Pending::Leave => match api.leave(group_id, viewer).await {
                    Ok(()) => {
                        alerts.success("Left group", "You left the group.");
                        tab.set(Tab::About);
                        page.restart();
                    }
                    Err(e) => alerts.api_error("leave group", &e, "Failed to leave group."),
                },
                Pending::DeleteGroup => match api.delete(group_id, viewer).await {
                    Ok(()) => {
                        alerts.success("Deleted", "Group deleted.");
                        nav.replace(Route::ManagedGroups {});
                    }
                    Err(e) => alerts.api_error("delete group", &e, "Failed to delete group."),
                },
                Pending::Transfer { to, name } => {
                    match api.transfer_ownership(group_id, to, viewer).await {
                        Ok(_) => {
                            alerts.success("Ownership transferred", &format!("{name} is now the admin."));
                            transfer_to.set(None);
                            page.restart();
                        }
                        Err(e) => alerts.api_error("transfer ownership", &e, "Failed to transfer ownership."),
                    }
                }
                Pending::RemoveMember { user, .. } => {
                    match api.remove_member(group_id, user, viewer).await {
                        Ok(()) => page.restart(),
                        Err(e) => alerts.api_error("remove member", &e, "Failed to remove member."),
                    }
                }
                Pending::DeleteDiscussion(id) => {
                    match api.delete_discussion(group_id, id, viewer).await {
                        Ok(()) => discussions.restart(),
                        Err(e) => alerts.api_error("delete discussion", &e, "Failed to delete discussion."),
                    }
                }
            }
        });
    };

    let loaded = match &*page.read() {
        None => return rsx! { p { class: "muted", "Loading group..." } },
        Some(Err(e)) => {
            tracing::error!("Failed to load group {}: {}", group_id, e);
            return rsx! {
                div {
                    class: "empty-state",
                    p { class: "error-text", "Failed to load group details" }
                    Link { to: Route::AllGroups {}, "Back to groups" }
                }
            };
        }
        Some(Ok(loaded)) => loaded.clone(),
    };
    let GroupPage {
        group,
        members,
        moderators,
        flags,
    } = loaded;

    // Non-members only ever see the About tab.
    let current_tab = if flags.is_member { tab() } else { Tab::About };
    let tab_class = |t: Tab| if t == current_tab { "tab active" } else { "tab" };
    let candidates = viewer.map(|v| transfer_candidates(v, &members)).unwrap_or_default();

    let roster = members.iter().cloned().map(|member| {
        let role = member_role(&group, &moderators, &member);
        let actions = viewer
            .map(|v| member_actions(v, flags, &group, &member, &moderators))
            .unwrap_or_default();
        let member_id = member.id;
        let is_moderator = role != MemberRole::Member;
        let name = member.display_name().to_string();
        let toggle_moderator = toggle_moderator.clone();
        let remove_name = name.clone();
        rsx! {
            li {
                key: "{member_id}",
                class: "member-row",
                img { class: "avatar", src: "{member.avatar_url()}", alt: "{name}" }
                span { class: "member-name", "{name}" }
                span {
                    class: "badge role-{role.label().to_lowercase()}",
                    match role {
                        MemberRole::Admin => rsx! { Icon { icon: FaCrown, width: 10, height: 10 } },
                        MemberRole::Moderator => rsx! { Icon { icon: FaShieldHalved, width: 10, height: 10 } },
                        MemberRole::Member => rsx! {},
                    }
                    " {role.label()}"
                }
                div {
                    class: "member-actions",
                    if actions.toggle_moderator {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| toggle_moderator((member_id, is_moderator)),
                            if is_moderator { "Remove moderator" } else { "Make moderator" }
                        }
                    }
                    if actions.remove {
                        button {
                            class: "btn btn-danger btn-sm",
                            title: "Remove member",
                            onclick: move |_| pending.set(Some(Pending::RemoveMember { user: member_id, name: remove_name.clone() })),
                            Icon { icon: FaUserMinus, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    });

    let discussion_list = match &*discussions.read() {
        None => rsx! { p { class: "muted", "Loading discussions..." } },
        Some(Err(e)) => {
            tracing::warn!("Failed to load discussions for group {}: {}", group_id, e);
            rsx! { p { class: "error-text", "Failed to load discussions." } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No discussions yet." }
        },
        Some(Ok(list)) => {
            let items = list.iter().cloned().map(|d: Discussion| {
                let deletable = can_delete_discussion(viewer, flags, &d);
                let id = d.id;
                rsx! {
                    div {
                        key: "{id}",
                        class: "card discussion",
                        div {
                            class: "discussion-header",
                            h3 { "{d.title}" }
                            if deletable {
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete discussion",
                                    onclick: move |_| pending.set(Some(Pending::DeleteDiscussion(id))),
                                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                                }
                            }
                        }
                        p { class: "muted", "{d.author_name()} · {d.display_date()}" }
                        p { "{d.content}" }
                    }
                }
            });
            rsx! { {items} }
        }
    };

    rsx! {
        div {
            class: "group-detail",
            div {
                class: "group-hero card",
                if let Some(src) = group.image_url.clone().filter(|s| !s.is_empty()) {
                    img { class: "group-banner", src: "{src}", alt: "{group.name}" }
                } else {
                    div { class: "group-thumb placeholder large", "{group.initial()}" }
                }
                div {
                    class: "group-hero-body",
                    h1 { "{group.name}" }
                    if !group.cuisine_type.is_empty() {
                        span { class: "badge", "{group.cuisine_type}" }
                    }
                    p { class: "muted", "{members.len()} members" }
                }
                div {
                    class: "header-actions",
                    if can_join(flags) && viewer.is_some() {
                        button {
                            class: "btn btn-primary",
                            onclick: join,
                            Icon { icon: FaUserPlus, width: 14, height: 14 }
                            " Join group"
                        }
                    }
                    if can_leave(flags) {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| pending.set(Some(Pending::Leave)),
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            " Leave"
                        }
                    }
                    if can_manage_group(flags) {
                        Link {
                            class: "btn btn-secondary",
                            to: Route::EditGroup { group_id },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            " Edit"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| pending.set(Some(Pending::DeleteGroup)),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                            " Delete"
                        }
                    }
                }
            }

            div {
                class: "tabs",
                button { class: tab_class(Tab::About), onclick: move |_| tab.set(Tab::About), "About" }
                if flags.is_member {
                    button { class: tab_class(Tab::Messages), onclick: move |_| tab.set(Tab::Messages), "Messages" }
                    button { class: tab_class(Tab::Discussions), onclick: move |_| tab.set(Tab::Discussions), "Discussions" }
                }
            }

            match current_tab {
                Tab::About => rsx! {
                    section {
                        class: "card",
                        h2 { "About" }
                        p { "{group.description}" }
                        if let Some(admin) = group.admin_name.clone() {
                            p { class: "muted", "Admin: {admin}" }
                        }
                    }
                    section {
                        class: "card",
                        h2 { "Members ({members.len()})" }
                        ul { class: "member-list", {roster} }
                    }
                    if can_manage_group(flags) && !candidates.is_empty() {
                        section {
                            class: "card transfer",
                            h2 { "Transfer ownership" }
                            div {
                                class: "form-row",
                                select {
                                    onchange: move |evt: FormEvent| transfer_to.set(evt.value().parse().ok()),
                                    option { value: "", "Choose a new admin" }
                                    for member in candidates.iter() {
                                        option {
                                            key: "{member.id}",
                                            value: "{member.id}",
                                            selected: transfer_to() == Some(member.id),
                                            "{member.display_name()}"
                                        }
                                    }
                                }
                                button {
                                    class: "btn btn-danger",
                                    disabled: transfer_to().is_none(),
                                    onclick: {
                                        let candidates = candidates.clone();
                                        move |_| {
                                            let Some(to) = transfer_to() else {
                                                return;
                                            };
                                            let name = candidates
                                                .iter()
                                                .find(|m| m.id == to)
                                                .map(|m| m.display_name().to_string())
                                                .unwrap_or_default();
                                            pending.set(Some(Pending::Transfer { to, name }));
                                        }
                                    },
                                    "Transfer"
                                }
                            }
                        }
                    }
                },
                Tab::Messages => rsx! {
                    GroupMessages { key: "{group_id}", group_id, flags }
                },
                Tab::Discussions => rsx! {
                    section {
                        class: "discussions",
                        div {
                            class: "page-header",
                            h2 { "Discussions" }
                            Link {
                                class: "btn btn-primary btn-sm",
                                to: Route::CreateDiscussion { group_id },
                                Icon { icon: FaPlus, width: 12, height: 12 }
                                " New discussion"
                            }
                        }
                        {discussion_list}
                    }
                },
            }
        }

        if let Some(action) = pending() {
            ConfirmDialog {
                title: action.title(),
                message: action.message(),
                confirm_label: action.confirm_label(),
                danger: action.is_destructive(),
                on_confirm: confirm,
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transfer_confirms_without_danger_styling() {
        let transfer = Pending::Transfer { to: 3, name: "Grace".into() };
        assert!(!transfer.is_destructive());
        assert_eq!(transfer.confirm_label(), "Transfer");

        for action in [
            Pending::Leave,
            Pending::DeleteGroup,
            Pending::RemoveMember { user: 3, name: "Grace".into() },
            Pending::DeleteDiscussion(4),
        ] {
            assert!(action.is_destructive(), "{action:?}");
        }
    }
}
