//! Gate for pages that need a signed-in user.

use api::User;
use dioxus::prelude::*;

use crate::{use_alerts, use_session};

/// Title of the notice shown when a guarded page is opened without a session.
pub const AUTH_REQUIRED_TITLE: &str = "Authentication Required";
pub const AUTH_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Show the notice, replace the route with the login page and render
    /// nothing, so the page never fetches.
    Denied,
}

pub fn check_access(user: Option<&User>) -> Access {
    match user {
        Some(_) => Access::Granted,
        None => Access::Denied,
    }
}

/// Renders `children` only while someone is signed in.
///
/// Without a session the children are never mounted, so their resources never
/// start. An info notice is raised and `on_denied` runs once per render where
/// access is refused; the router layout uses it to replace the route with the
/// login page.
#[component]
pub fn RequireSession(on_denied: EventHandler<()>, children: Element) -> Element {
    let session = use_session();
    let alerts = use_alerts();

    use_effect(move || {
        if check_access(session.get_user().as_ref()) == Access::Denied {
            tracing::info!("Unauthenticated access, redirecting to login");
            alerts.info(AUTH_REQUIRED_TITLE, AUTH_REQUIRED_MESSAGE);
            on_denied.call(());
        }
    });

    match check_access(session.get_user().as_ref()) {
        Access::Granted => rsx! {
            {children}
        },
        Access::Denied => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use store::{KeyValueStore, MemoryStore, Session};

    use super::*;
    use crate::{apply_user, provide_session, AlertHost, Notice, NoticeKind};

    thread_local! {
        static PAGE_RENDERS: Cell<u32> = const { Cell::new(0) };
        static DENIALS: Cell<u32> = const { Cell::new(0) };
        static LAST_NOTICE: RefCell<Option<Notice>> = const { RefCell::new(None) };
    }

    fn ada() -> User {
        User {
            id: 2,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[component]
    fn GroupPage() -> Element {
        PAGE_RENDERS.with(|n| n.set(n.get() + 1));
        rsx! { "group data" }
    }

    #[component]
    fn NoticeRecorder() -> Element {
        let alerts = use_alerts();
        LAST_NOTICE.with(|n| *n.borrow_mut() = alerts.current());
        rsx! {}
    }

    fn guarded_tree(user: Option<User>) -> Element {
        let backing: Rc<dyn KeyValueStore> = use_hook(|| {
            let backing: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
            apply_user(&Session::new(backing.clone()), user.clone());
            backing
        });
        provide_session(backing);

        rsx! {
            AlertHost {
                NoticeRecorder {}
                RequireSession {
                    on_denied: move |_| DENIALS.with(|n| n.set(n.get() + 1)),
                    GroupPage {}
                }
            }
        }
    }

    fn signed_out_app() -> Element {
        guarded_tree(None)
    }

    fn signed_in_app() -> Element {
        guarded_tree(Some(ada()))
    }

    fn mount(app: fn() -> Element) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
    }


    #[test]
    fn test_check_access() {
        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert_eq!(check_access(Some(&user)), Access::Granted);
        assert_eq!(check_access(None), Access::Denied);
    }

    #[test]
    fn test_signed_out_page_never_renders() {
        mount(signed_out_app);

        assert_eq!(PAGE_RENDERS.with(Cell::get), 0);
        assert_eq!(DENIALS.with(Cell::get), 1);
        let notice = LAST_NOTICE.with(|n| n.borrow().clone()).unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Authentication Required");
        assert_eq!(notice.message, AUTH_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_signed_in_page_renders_without_notice() {
        mount(signed_in_app);

        assert_eq!(PAGE_RENDERS.with(Cell::get), 1);
        assert_eq!(DENIALS.with(Cell::get), 0);
        assert!(LAST_NOTICE.with(|n| n.borrow().is_none()));
    }
}
