use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{TopicCardVm, map_topic_card};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();

    let topic_count = catalog.topics().len();
    let question_count = catalog.total_count();

    let cards: Vec<TopicCardVm> = catalog
        .topics()
        .iter()
        .map(|topic| {
            map_topic_card(
                topic,
                catalog.topic_count(&topic.id),
                progress.topic_percentage(&topic.id),
            )
        })
        .collect();

    rsx! {
        div { class: "page dashboard-page",
            section { class: "hero",
                span { class: "hero-kicker", "DevOps Mastery Hub" }
                h2 { class: "hero-title", "Master the DevOps Lifecycle" }
                p { class: "hero-subtitle",
                    "Preparation for SRE, Platform, and DevOps roles across the industry's most in-demand technologies."
                }
                div { class: "hero-stats",
                    span { class: "hero-stat", "{topic_count} Tech Stacks" }
                    span { class: "hero-stat", "{question_count} Questions" }
                }
            }
            header { class: "view-header",
                h2 { class: "view-title", "Select Tech Stack" }
                p { class: "view-subtitle", "{topic_count} categories available" }
            }
            div { class: "topic-grid",
                for card in cards {
                    TopicCard { card }
                }
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let topic_id = card.id.as_str().to_string();
    rsx! {
        Link {
            class: "topic-card topic-card--{card.accent}",
            to: Route::Topic { topic_id },
            div { class: "topic-card-header",
                span { class: "topic-avatar", "{card.avatar}" }
                div {
                    h3 { class: "topic-name", "{card.name}" }
                    span { class: "topic-total", "{card.total_label}" }
                }
            }
            p { class: "topic-description", "{card.description}" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {card.percent}%" }
            }
            span { class: "topic-percent", "{card.percent}% mastered" }
        }
    }
}
