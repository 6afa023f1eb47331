use api::{RecipeId, RecipeSearch};
use dioxus::prelude::*;
use ui::forms::CUISINE_TYPES;
use ui::icons::{FaMagnifyingGlass, FaPlus, FaTrashCan};
use ui::{use_alerts, use_services, use_session, ConfirmDialog, Icon};

use crate::Route;

fn optional(s: String) -> Option<String> {
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

/// All recipes, with a search form. The owner of a recipe can delete it here.
#[component]
pub fn Recipes() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let viewer = session.user_id();

    let mut query = use_signal(String::new);
    let mut ingredient = use_signal(String::new);
    let mut cuisine = use_signal(String::new);
    let mut dietary = use_signal(String::new);
    let mut search = use_signal(RecipeSearch::default);
    let mut pending_delete = use_signal(|| Option::<RecipeId>::None);

    let list_recipes = services.recipes.clone();
    let mut recipes = use_resource(move || {
        let api = list_recipes.clone();
        let search = search();
        async move { api.search(&search).await }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        search.set(RecipeSearch {
            query: optional(query()),
            ingredient: optional(ingredient()),
            cuisine: optional(cuisine()),
            dietary_preference: optional(dietary()),
        });
    };

    let clear = move |_| {
        query.set(String::new());
        ingredient.set(String::new());
        cuisine.set(String::new());
        dietary.set(String::new());
        search.set(RecipeSearch::default());
    };

    let delete_recipes = services.recipes.clone();
    let confirm_delete = move |_| {
        let (Some(id), Some(viewer)) = (pending_delete(), viewer) else {
            return;
        };
        pending_delete.set(None);
        let api = delete_recipes.clone();
        spawn(async move {
            match api.delete(id, viewer).await {
                Ok(()) => {
                    alerts.success("Deleted", "Recipe deleted.");
                    recipes.restart();
                }
                Err(e) => alerts.api_error("delete recipe", &e, "Failed to delete recipe."),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Recipes" }
            Link {
                class: "btn btn-primary",
                to: Route::CreateRecipe {},
                Icon { icon: FaPlus, width: 12, height: 12 }
                " New recipe"
            }
        }

        form {
            class: "card search-form",
            onsubmit: submit,
            input {
                r#type: "search",
                placeholder: "Search recipes...",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Ingredient",
                value: "{ingredient}",
                oninput: move |evt: FormEvent| ingredient.set(evt.value()),
            }
            select {
                value: "{cuisine}",
                onchange: move |evt: FormEvent| cuisine.set(evt.value()),
                option { value: "", "Any cuisine" }
                for c in CUISINE_TYPES.iter() {
                    option { key: "{c}", value: "{c}", selected: cuisine() == *c, "{c}" }
                }
            }
            input {
                r#type: "text",
                placeholder: "Dietary preference",
                value: "{dietary}",
                oninput: move |evt: FormEvent| dietary.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                " Search"
            }
            if !search.read().is_empty() {
                button { r#type: "button", class: "btn btn-secondary", onclick: clear, "Clear" }
            }
        }

        match &*recipes.read() {
            None => rsx! { p { class: "muted", "Loading recipes..." } },
            Some(Err(e)) => {
                tracing::error!("Failed to load recipes: {}", e);
                rsx! { p { class: "error-text", "Failed to load recipes." } }
            }
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "No recipes found." }
            },
            Some(Ok(list)) => rsx! {
                div {
                    class: "grid",
                    for recipe in list.iter().cloned() {
                        div {
                            key: "{recipe.id}",
                            class: "card recipe-card",
                            if let Some(src) = recipe.image_url.clone().filter(|s| !s.is_empty()) {
                                img { class: "recipe-thumb", src: "{src}", alt: "{recipe.title}" }
                            }
                            h3 {
                                Link { to: Route::RecipeDetail { id: recipe.id }, "{recipe.title}" }
                            }
                            p {
                                class: "muted",
                                if let Some(c) = recipe.cuisine.clone().filter(|c| !c.is_empty()) {
                                    span { class: "badge", "{c}" }
                                }
                                " {recipe.total_minutes()} min · serves {recipe.servings} · by {recipe.author_name()}"
                            }
                            if viewer.is_some_and(|v| recipe.is_owned_by(v)) {
                                button {
                                    class: "btn btn-ghost",
                                    title: "Delete recipe",
                                    onclick: move |_| pending_delete.set(Some(recipe.id)),
                                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            },
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete recipe?",
                message: "This recipe and its comments will be permanently removed.",
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
