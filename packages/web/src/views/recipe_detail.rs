use api::{Comment, Recipe, RecipeId};
use dioxus::prelude::*;
use ui::icons::{FaPenToSquare, FaTrashCan};
use ui::{use_alerts, use_services, use_session, ConfirmDialog, Icon};

use crate::Route;

/// A recipe with its comments. The owner gets edit and delete.
#[component]
pub fn RecipeDetail(id: RecipeId) -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let viewer = session.user_id();

    let mut comments = use_signal(Vec::<Comment>::new);
    let mut new_comment = use_signal(String::new);
    let mut posting = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let load_api = services.recipes.clone();
    let recipe = use_resource(use_reactive!(|(id,)| {
        let api = load_api.clone();
        async move {
            let recipe = api.get(id).await?;
            match api.comments(id).await {
                Ok(list) => comments.set(list),
                Err(e) => tracing::warn!("Comments for recipe {} unavailable: {}", id, e),
            }
            Ok::<Recipe, api::ApiError>(recipe)
        }
    }));

    let comment_api = services.recipes.clone();
    let submit_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(viewer) = viewer else {
            return;
        };
        let content = new_comment().trim().to_string();
        if content.is_empty() {
            return;
        }
        let api = comment_api.clone();
        spawn(async move {
            posting.set(true);
            match api.add_comment(id, &content, viewer).await {
                Ok(comment) => {
                    comments.write().insert(0, comment);
                    new_comment.set(String::new());
                }
                Err(e) => alerts.api_error("add comment", &e, "Failed to add comment."),
            }
            posting.set(false);
        });
    };

    let delete_api = services.recipes.clone();
    let delete_recipe = move |_| {
        confirm_delete.set(false);
        let Some(viewer) = viewer else {
            return;
        };
        let api = delete_api.clone();
        spawn(async move {
            match api.delete(id, viewer).await {
                Ok(()) => {
                    alerts.success("Deleted", "Recipe deleted.");
                    nav.push(Route::Recipes {});
                }
                Err(e) => alerts.api_error("delete recipe", &e, "Failed to delete recipe."),
            }
        });
    };

    let recipe = match &*recipe.read() {
        None => return rsx! { p { class: "muted", "Loading recipe..." } },
        Some(Err(e)) => {
            tracing::error!("Failed to load recipe {}: {}", id, e);
            return rsx! {
                div {
                    class: "empty-state",
                    p { class: "error-text", "Recipe not found." }
                    Link { to: Route::Recipes {}, "Back to recipes" }
                }
            };
        }
        Some(Ok(recipe)) => recipe.clone(),
    };
    let owned = viewer.is_some_and(|v| recipe.is_owned_by(v));

    rsx! {
        article {
            class: "narrow recipe-detail",
            Link { class: "back-link", to: Route::Recipes {}, "← All recipes" }
            div {
                class: "page-header",
                h1 { "{recipe.title}" }
                if owned {
                    div {
                        class: "header-actions",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::EditRecipe { id: recipe.id },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            " Edit"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| confirm_delete.set(true),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                            " Delete"
                        }
                    }
                }
            }
            p {
                class: "muted",
                "By {recipe.author_name()}"
                if !recipe.display_date().is_empty() {
                    " · {recipe.display_date()}"
                }
            }
            if let Some(src) = recipe.image_url.clone().filter(|s| !s.is_empty()) {
                img { class: "recipe-hero", src: "{src}", alt: "{recipe.title}" }
            }
            div {
                class: "recipe-facts",
                if let Some(c) = recipe.cuisine.clone().filter(|c| !c.is_empty()) {
                    span { class: "badge", "{c}" }
                }
                span { "Prep {recipe.prep_time_minutes} min" }
                span { "Cook {recipe.cook_time_minutes} min" }
                span { "Serves {recipe.servings}" }
            }
            if !recipe.dietary_preferences.is_empty() {
                div {
                    class: "tags",
                    for pref in recipe.dietary_preferences.iter() {
                        span { key: "{pref}", class: "badge badge-soft", "{pref}" }
                    }
                }
            }

            h2 { "Ingredients" }
            ul {
                for (i, item) in recipe.ingredients.iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }

            h2 { "Instructions" }
            p { class: "instructions", "{recipe.instructions}" }

            section {
                class: "comments",
                h2 { "Comments ({comments.read().len()})" }
                form {
                    class: "comment-form",
                    onsubmit: submit_comment,
                    textarea {
                        rows: "3",
                        placeholder: "Share your thoughts...",
                        value: "{new_comment}",
                        oninput: move |evt: FormEvent| new_comment.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: posting() || new_comment().trim().is_empty(),
                        if posting() { "Posting..." } else { "Post comment" }
                    }
                }
                for comment in comments() {
                    div {
                        key: "{comment.id}",
                        class: "comment",
                        div {
                            class: "chat-meta",
                            strong { "{comment.author_name()}" }
                            span { class: "muted", " {comment.display_date()}" }
                        }
                        p { "{comment.content}" }
                    }
                }
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete recipe?",
                message: "This recipe and its comments will be permanently removed.",
                confirm_label: "Delete",
                on_confirm: delete_recipe,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}
