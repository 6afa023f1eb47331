//! Signed-in user context for the UI.
//!
//! [`SessionProvider`] is mounted once at the root. It restores the user from
//! durable storage, then hands a [`SessionContext`] to every view through Dioxus
//! context. Login calls [`SessionContext::set_user`] with `Some`, logout with
//! `None`; both write through to storage before updating the signal.

use std::rc::Rc;

use api::{User, UserId};
use dioxus::prelude::*;
use store::{KeyValueStore, Session};

/// Persistence handle shared by the provider.
pub type SessionStore = Session<Rc<dyn KeyValueStore>>;

/// Read the persisted user, if any.
pub fn restore_user<S: KeyValueStore>(session: &Session<S>) -> Option<User> {
    session.restore::<User>()
}

/// Write `user` through to storage and return the user views should see.
///
/// A storage failure is logged; the in-memory session still changes so the
/// user is not stuck on the login page.
pub fn apply_user<S: KeyValueStore>(session: &Session<S>, user: Option<User>) -> Option<User> {
    if let Err(e) = session.persist(user.as_ref()) {
        tracing::error!("Failed to persist session: {}", e);
    }
    user
}

/// Platform store for the session: `localStorage` on web, a JSON file under the
/// data directory on native.
pub fn platform_store() -> Rc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileStore::in_data_dir())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}

/// Copyable handle to the session, obtained with [`use_session`].
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: Signal<Option<User>>,
    store: CopyValue<SessionStore>,
}

impl SessionContext {
    pub fn get_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.read().as_ref().map(|u| u.id)
    }

    /// Login (`Some`) or logout (`None`).
    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(u) => tracing::info!("Session started for user {}", u.id),
            None => tracing::info!("Session cleared"),
        }
        let next = apply_user(&self.store.read(), user);
        let mut current = self.user;
        current.set(next);
    }
}

/// Get the session context. Panics outside [`SessionProvider`], like any
/// missing Dioxus context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Restore the user persisted in `backing` and provide the session to the
/// calling component's subtree. `backing` is only read on first render.
pub fn provide_session(backing: Rc<dyn KeyValueStore>) -> SessionContext {
    let store = use_hook(|| CopyValue::new(Session::new(backing)));
    let user = use_signal(|| restore_user(&store.read()));

    use_context_provider(|| SessionContext { user, store })
}

/// Restores the persisted user and provides [`SessionContext`] to `children`.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    provide_session(platform_store());

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn ada() -> User {
        User {
            id: 2,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn test_login_survives_reload() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());

        let current = apply_user(&session, Some(ada()));
        assert_eq!(current, Some(ada()));

        let reloaded = restore_user(&Session::new(backing));
        assert_eq!(reloaded, Some(ada()));
    }

    #[test]
    fn test_logout_clears_storage() {
        let backing = MemoryStore::new();
        let session = Session::new(backing.clone());
        apply_user(&session, Some(ada()));

        let current = apply_user(&session, None);
        assert!(current.is_none());
        assert!(backing.get(store::session::USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_shared_store_through_rc() {
        let shared: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
        let session = Session::new(shared.clone());
        apply_user(&session, Some(ada()));

        assert!(shared.get(store::session::USER_KEY).unwrap().is_some());
    }
}
