use api::{RecipeDraft, RecipeId};
use dioxus::prelude::*;
use ui::forms::RecipeInput;
use ui::{use_alerts, use_services, use_session, RecipeForm};

use crate::Route;

#[component]
pub fn CreateRecipe() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let mut saving = use_signal(|| false);

    let create_api = services.recipes.clone();
    let create = move |draft: RecipeDraft| {
        let Some(viewer) = session.user_id() else {
            return;
        };
        let api = create_api.clone();
        spawn(async move {
            saving.set(true);
            match api.create(&draft, viewer).await {
                Ok(recipe) => {
                    alerts.success("Recipe created", "Your recipe has been published.");
                    nav.replace(Route::RecipeDetail { id: recipe.id });
                }
                Err(e) => alerts.api_error("create recipe", &e, "Failed to create recipe."),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Create a recipe" }
            RecipeForm {
                initial: RecipeInput::default(),
                submit_label: "Create recipe",
                busy: saving(),
                on_submit: create,
                on_cancel: move |_| { nav.push(Route::Recipes {}); },
            }
        }
    }
}

/// Edit form for a recipe the viewer owns. Anyone else is sent back to the
/// recipe page.
#[component]
pub fn EditRecipe(id: RecipeId) -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let mut saving = use_signal(|| false);
    let viewer = session.user_id();

    let load_api = services.recipes.clone();
    let recipe = use_resource(use_reactive!(|(id,)| {
        let api = load_api.clone();
        async move { api.get(id).await }
    }));

    let not_owner = matches!(
        &*recipe.read(),
        Some(Ok(r)) if !viewer.is_some_and(|v| r.is_owned_by(v))
    );
    use_effect(use_reactive!(|(not_owner,)| {
        if not_owner {
            alerts.error("Not allowed", "You can only edit your own recipes.");
            nav.replace(Route::RecipeDetail { id });
        }
    }));

    let save_api = services.recipes.clone();
    let save = move |draft: RecipeDraft| {
        let Some(viewer) = viewer else {
            return;
        };
        let api = save_api.clone();
        spawn(async move {
            saving.set(true);
            match api.update(id, &draft, viewer).await {
                Ok(_) => {
                    alerts.success("Saved", "Recipe updated.");
                    nav.replace(Route::RecipeDetail { id });
                }
                Err(e) => alerts.api_error("update recipe", &e, "Failed to update recipe."),
            }
            saving.set(false);
        });
    };

    let body = match &*recipe.read() {
        None => rsx! { p { class: "muted", "Loading recipe..." } },
        Some(Err(e)) => {
            tracing::error!("Failed to load recipe {} for editing: {}", id, e);
            rsx! { p { class: "error-text", "Recipe not found." } }
        }
        Some(Ok(_)) if not_owner => rsx! {},
        Some(Ok(r)) => rsx! {
            RecipeForm {
                key: "{r.id}",
                initial: RecipeInput::from(r.to_draft()),
                submit_label: "Save changes",
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| { nav.push(Route::RecipeDetail { id }); },
            }
        },
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Edit recipe" }
            {body}
        }
    }
}
