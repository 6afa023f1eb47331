use dioxus::prelude::*;
use ui::forms::validate_signup;
use ui::{use_alerts, use_services};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(errors) = validate_signup(&name(), &email(), &password()) {
            alerts.error("Check your details", &errors.to_string());
            return;
        }
        let auth = services.auth.clone();
        spawn(async move {
            loading.set(true);
            match auth.signup(&name(), &email(), &password()).await {
                Ok(_) => {
                    alerts.success("Account created", "You can now log in.");
                    nav.replace(Route::Login {});
                }
                Err(e) => alerts.api_error("signup", &e, "Sign up failed. Please try again."),
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
                h1 { class: "auth-title", "Create an account" }

                div {
                    class: "form-group",
                    label { r#for: "signup-name", "Name" }
                    input {
                        id: "signup-name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "signup-email", "Email" }
                    input {
                        id: "signup-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
