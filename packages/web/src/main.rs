use dioxus::prelude::*;

use ui::guard::RequireSession;
use ui::{AlertHost, Navbar, ServicesProvider, SessionProvider};
use views::{
    AllGroups, CreateDiscussion, CreateGroup, CreatePost, CreateRecipe, EditGroup, EditRecipe,
    GroupDetail, Home, Login, ManagedGroups, MyGroups, NotFound, Profile, RecipeDetail, Recipes,
    Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AuthGuard)]
        #[route("/home")]
        Home {},
        #[route("/profile")]
        Profile {},
        #[route("/create")]
        CreatePost {},
        #[route("/recipes")]
        Recipes {},
        #[route("/recipes/create")]
        CreateRecipe {},
        #[route("/recipes/:id")]
        RecipeDetail { id: i64 },
        #[route("/recipes/:id/edit")]
        EditRecipe { id: i64 },
        #[route("/groups")]
        AllGroups {},
        #[route("/groups/my-groups")]
        MyGroups {},
        #[route("/groups/managed")]
        ManagedGroups {},
        #[route("/groups/create")]
        CreateGroup {},
        #[route("/groups/:group_id")]
        GroupDetail { group_id: i64 },
        #[route("/groups/:group_id/edit")]
        EditGroup { group_id: i64 },
        #[route("/groups/:group_id/discussions/create")]
        CreateDiscussion { group_id: i64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            SessionProvider {
                AlertHost {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Layout for every page that needs a signed-in user.
///
/// Without one the page below never mounts; the route is replaced with login.
#[component]
fn AuthGuard() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireSession {
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            Navbar {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Recipes {}, "Recipes" }
                Link { to: Route::AllGroups {}, "Groups" }
                Link { to: Route::Profile {}, "Profile" }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}
