//! Shared UI for the Yummly client: context providers, view-state logic and
//! reusable widgets. Route-level pages live in the platform package.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

pub mod chat;
pub mod feed;
pub mod forms;
pub mod guard;
pub mod permissions;

mod session;
pub use session::{
    apply_user, platform_store, provide_session, restore_user, use_session, SessionContext,
    SessionProvider, SessionStore,
};

mod services;
pub use services::{load_client_config, use_client_config, use_services, ServicesProvider};

mod alert;
pub use alert::{use_alerts, AlertHost, Alerts, Notice, NoticeKind};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod navbar;
pub use navbar::Navbar;

mod group_nav;
pub use group_nav::{GroupNav, GroupTab};

mod group_messages;
pub use group_messages::GroupMessages;

mod recipe_form;
pub use recipe_form::RecipeForm;

mod post_card;
pub use post_card::PostCard;
