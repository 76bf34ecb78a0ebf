use dioxus::prelude::*;
use dioxus_router::Link;

use prep_core::model::{Difficulty, TopicId};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn TopicView(topic_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut refresh = use_signal(|| 0u32);

    let id = TopicId::new(topic_id.clone());
    let Some(topic) = catalog.topic(&id).cloned() else {
        return rsx! {
            div { class: "page",
                h2 { "Topic not found" }
                Link { class: "back-link", to: Route::Dashboard {}, "← Back to Dashboard" }
            }
        };
    };

    // Reads below re-run whenever a reset lands.
    let _ = refresh();
    let topic_total = catalog.topic_count(&id);
    let mastery = progress.topic_percentage(&id);
    let rows: Vec<_> = Difficulty::ALL
        .into_iter()
        .map(|level| {
            let lp = progress.level_progress(&id, level);
            (level, lp.completed, catalog.level_count(&id, level), lp.percentage)
        })
        .collect();

    rsx! {
        div { class: "page topic-page",
            Link { class: "back-link", to: Route::Dashboard {}, "← Back to Dashboard" }
            header { class: "view-header",
                h2 { class: "view-title", "{topic.name}" }
                p { class: "view-subtitle", "{topic.description}" }
            }
            div { class: "mastery-card",
                span { class: "mastery-percent", "{mastery}%" }
                span { class: "mastery-label", "Topic mastery · {topic_total} questions" }
            }
            div { class: "level-list",
                for (level, completed, total, percentage) in rows {
                    LevelRow {
                        topic_id: topic_id.clone(),
                        level,
                        completed,
                        total,
                        percentage,
                        on_reset: {
                            let progress = progress.clone();
                            let id = id.clone();
                            move |()| {
                                let progress = progress.clone();
                                let id = id.clone();
                                spawn(async move {
                                    progress.reset_level(&id, level).await;
                                    refresh.set(refresh() + 1);
                                });
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn LevelRow(
    topic_id: String,
    level: Difficulty,
    completed: usize,
    total: usize,
    percentage: u8,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "level-row",
            Link {
                class: "level-link",
                to: Route::Quiz { topic_id, level },
                div {
                    h3 { class: "level-name", "{level}" }
                    p { class: "level-counts", "{completed} of {total} questions mastered" }
                }
                span { class: "level-percent", "{percentage}%" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: completed == 0,
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}
