use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{SearchHitVm, map_search_hit};

#[component]
pub fn SearchView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut query = use_signal(String::new);

    let hits: Vec<SearchHitVm> = catalog
        .search(&query())
        .iter()
        .map(map_search_hit)
        .collect();
    let has_query = !query().trim().is_empty();

    rsx! {
        div { class: "page search-page",
            header { class: "view-header",
                h2 { class: "view-title", "Search" }
                p { class: "view-subtitle", "Free-text search across the whole question bank." }
            }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search questions and answers...",
                value: "{query}",
                oninput: move |event| query.set(event.value()),
            }
            if !has_query {
                p { class: "empty-note", "Type to search {catalog.total_count()} questions." }
            } else if hits.is_empty() {
                p { class: "empty-note", "No questions match that search." }
            } else {
                p { class: "search-count", "{hits.len()} matches" }
                ul { class: "search-results",
                    for hit in hits {
                        SearchHit { hit }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchHit(hit: SearchHitVm) -> Element {
    rsx! {
        li { class: "search-hit",
            Link {
                to: Route::Quiz { topic_id: hit.topic_id.clone(), level: hit.level },
                div { class: "search-hit-meta",
                    span { class: "search-hit-topic", "{hit.topic_name}" }
                    span { class: "search-hit-level", "{hit.level}" }
                }
                h3 { class: "search-hit-prompt", "{hit.prompt}" }
                p { class: "search-hit-answer", "{hit.answer}" }
            }
        }
    }
}
