use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::{use_session, Icon, UI_CSS};

/// Top bar. The platform passes its route links as `children`; the bar adds the
/// brand, the signed-in user and a logout button.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let logout = move |_| {
        nav.replace("/");
        session.set_user(None);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            Link { class: "navbar-logo", to: "/home", "Yummly" }
            div { class: "navbar-links", {children} }
            if let Some(user) = session.get_user() {
                div {
                    class: "navbar-user",
                    img { class: "avatar avatar-sm", src: "{user.avatar_url()}", alt: "" }
                    span { "{user.display_name()}" }
                    button {
                        class: "btn btn-ghost",
                        title: "Log out",
                        onclick: logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
