use dioxus::prelude::*;
use ui::feed::newest_first;
use ui::icons::FaPlus;
use ui::{use_services, use_session, Icon, PostCard};

use crate::Route;

/// Post feed plus the latest recipes.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let services = use_services();
    let viewer = session.user_id();

    let feed_posts = services.posts.clone();
    let posts = use_resource(move || {
        let posts = feed_posts.clone();
        async move { posts.list().await.map(newest_first) }
    });

    let latest_recipes = services.recipes.clone();
    let recipes = use_resource(move || {
        let recipes = latest_recipes.clone();
        async move { recipes.latest().await }
    });

    rsx! {
        div {
            class: "home-layout",
            section {
                class: "feed",
                div {
                    class: "page-header",
                    h1 { "Home" }
                    Link {
                        class: "btn btn-primary",
                        to: Route::CreatePost {},
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " New post"
                    }
                }
                match &*posts.read() {
                    None => rsx! { p { class: "muted", "Loading posts..." } },
                    Some(Err(e)) => {
                        tracing::error!("Failed to load feed: {}", e);
                        rsx! { p { class: "error-text", "Failed to load posts." } }
                    }
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "muted", "No posts yet. Be the first to share something!" }
                    },
                    Some(Ok(list)) => rsx! {
                        for post in list.iter().cloned() {
                            PostCard { key: "{post.id}", post, viewer }
                        }
                    },
                }
            }
            aside {
                class: "sidebar card",
                h3 { "Latest recipes" }
                match &*recipes.read() {
                    Some(Ok(list)) => rsx! {
                        ul {
                            class: "plain-list",
                            for recipe in list.iter().take(5).cloned() {
                                li {
                                    key: "{recipe.id}",
                                    Link { to: Route::RecipeDetail { id: recipe.id }, "{recipe.title}" }
                                    span { class: "muted", " by {recipe.author_name()}" }
                                }
                            }
                        }
                    },
                    Some(Err(_)) => rsx! { p { class: "muted", "Recipes unavailable." } },
                    None => rsx! { p { class: "muted", "Loading..." } },
                }
                Link { to: Route::Recipes {}, "Browse all recipes" }
            }
        }
    }
}
