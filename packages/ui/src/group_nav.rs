use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::Icon;

/// Which group listing is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTab {
    All,
    Member,
    Admin,
}

/// Tabs shared by the three group listing pages.
#[component]
pub fn GroupNav(current: GroupTab) -> Element {
    let tab = |t: GroupTab| if t == current { "tab active" } else { "tab" };

    rsx! {
        div {
            class: "group-nav",
            div {
                class: "tabs",
                Link { class: tab(GroupTab::All), to: "/groups", "All Groups" }
                Link { class: tab(GroupTab::Member), to: "/groups/my-groups", "My Groups" }
                Link { class: tab(GroupTab::Admin), to: "/groups/managed", "Managed Groups" }
            }
            Link {
                class: "btn btn-primary",
                to: "/groups/create",
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Create Group"
            }
        }
    }
}
