//! # Role gating for the group detail page
//!
//! Pure functions deciding which controls a viewer is offered. They read the
//! [`RoleFlags`] from the three role-check endpoints plus the fetched roster.
//! None of this is a security boundary: the server re-validates every call,
//! and a control hidden here only saves the user a rejected request.
//!
//! | Control | Offered when |
//! |---------|--------------|
//! | Join | viewer is not a member |
//! | Leave | member, not admin |
//! | Edit / transfer / delete group | admin |
//! | Remove member | admin, or moderator acting on a plain member; never on the admin or self |
//! | Make / revoke moderator | admin, never on self or on the admin |
//! | Delete message | author, moderator or admin |
//! | Post message | signed-in member |
//! | Delete discussion | author, moderator or admin |

use api::{Discussion, Group, Message, RoleFlags, User, UserId};

/// A member's badge in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Admin,
    Moderator,
    Member,
}

impl MemberRole {
    pub fn label(self) -> &'static str {
        match self {
            MemberRole::Admin => "Admin",
            MemberRole::Moderator => "Moderator",
            MemberRole::Member => "Member",
        }
    }
}

/// Per-member controls in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberActions {
    pub remove: bool,
    pub toggle_moderator: bool,
}

pub fn can_join(flags: RoleFlags) -> bool {
    !flags.is_member
}

pub fn can_leave(flags: RoleFlags) -> bool {
    flags.is_member && !flags.is_admin
}

/// Edit, transfer ownership and delete.
pub fn can_manage_group(flags: RoleFlags) -> bool {
    flags.is_admin
}

fn is_listed(users: &[User], id: UserId) -> bool {
    users.iter().any(|u| u.id == id)
}

/// Admin first, then moderators (the admin is always one), then everyone else.
pub fn member_role(group: &Group, moderators: &[User], member: &User) -> MemberRole {
    if member.id == group.admin_id {
        MemberRole::Admin
    } else if is_listed(moderators, member.id) {
        MemberRole::Moderator
    } else {
        MemberRole::Member
    }
}

pub fn member_actions(
    viewer: UserId,
    flags: RoleFlags,
    group: &Group,
    member: &User,
    moderators: &[User],
) -> MemberActions {
    if member.id == viewer || member.id == group.admin_id {
        return MemberActions::default();
    }
    let member_is_moderator = is_listed(moderators, member.id);
    MemberActions {
        remove: flags.is_admin || (flags.is_moderator && !member_is_moderator),
        toggle_moderator: flags.is_admin,
    }
}

/// New-admin choices for the transfer select: every member but the viewer.
pub fn transfer_candidates(viewer: UserId, members: &[User]) -> Vec<User> {
    members.iter().filter(|m| m.id != viewer).cloned().collect()
}

pub fn can_delete_message(viewer: Option<UserId>, flags: RoleFlags, message: &Message) -> bool {
    match viewer {
        Some(viewer) => viewer == message.user_id || flags.is_moderator || flags.is_admin,
        None => false,
    }
}

pub fn can_post_message(viewer: Option<UserId>, flags: RoleFlags) -> bool {
    viewer.is_some() && flags.is_member
}

pub fn can_delete_discussion(viewer: Option<UserId>, flags: RoleFlags, discussion: &Discussion) -> bool {
    let author = discussion.user.as_ref().map(|u| u.id);
    viewer.is_some() && (author == viewer || flags.is_moderator || flags.is_admin)
}
