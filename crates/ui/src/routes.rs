use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use prep_core::model::Difficulty;

use crate::views::{DashboardView, ProfileView, QuizView, SearchView, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/topic/:topic_id", TopicView)] Topic { topic_id: String },
        #[route("/topic/:topic_id/:level", QuizView)] Quiz { topic_id: String, level: Difficulty },
        #[route("/search", SearchView)] Search {},
        #[route("/profile", ProfileView)] Profile {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "DevOps Prep" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Search {}, "Search" } }
                li { Link { to: Route::Profile {}, "Profile" } }
            }
        }
    }
}
