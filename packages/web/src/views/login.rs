//! Login page: email and password against `/api/v1/login`.

use dioxus::prelude::*;
use ui::forms::validate_login;
use ui::{use_alerts, use_services, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in (restored session): go straight to the feed
    use_effect(move || {
        if session.get_user().is_some() {
            nav.replace(Route::Home {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(errors) = validate_login(&email(), &password()) {
            alerts.error("Missing details", &errors.to_string());
            return;
        }
        let auth = services.auth.clone();
        spawn(async move {
            loading.set(true);
            match auth.login(&email(), &password()).await {
                Ok(user) => {
                    session.set_user(Some(user));
                    nav.replace(Route::Home {});
                }
                Err(e) => alerts.api_error("login", &e, "Login failed. Please try again."),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "card auth-card",
                onsubmit: submit,
                h1 { class: "auth-title", "Yummly" }
                p { class: "muted", "Sign in to share recipes with your groups." }

                div {
                    class: "form-group",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
                p {
                    class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
