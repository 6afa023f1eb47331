use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "page empty-state",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to home" }
        }
    }
}
