use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut refresh = use_signal(|| 0u32);
    // Reset-all is irreversible, so the first click only arms it.
    let mut reset_armed = use_signal(|| false);

    let _ = refresh();
    let total = catalog.total_count();
    let completed = progress.completed_total();
    let overall = progress.overall_percentage();
    let snapshot = progress.snapshot();

    let rows: Vec<_> = catalog
        .topics()
        .iter()
        .map(|topic| {
            (
                topic.name.clone(),
                progress.topic_percentage(&topic.id),
                snapshot.completed_in_topic(&topic.id),
                catalog.topic_count(&topic.id),
            )
        })
        .collect();

    let on_reset = {
        let progress = progress.clone();
        move |_: MouseEvent| {
            if !reset_armed() {
                reset_armed.set(true);
                return;
            }
            let progress = progress.clone();
            spawn(async move {
                progress.reset_all().await;
                reset_armed.set(false);
                refresh.set(refresh() + 1);
            });
        }
    };

    rsx! {
        div { class: "page profile-page",
            header { class: "view-header",
                h2 { class: "view-title", "Profile" }
                p { class: "view-subtitle", "Your progress across the whole bank." }
            }
            div { class: "profile-stats",
                div { class: "stat-card",
                    span { class: "stat-value", "{completed}" }
                    span { class: "stat-label", "Questions mastered" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{total}" }
                    span { class: "stat-label", "Questions in the bank" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{overall}%" }
                    span { class: "stat-label", "Overall mastery" }
                }
            }
            ul { class: "profile-topics",
                for (name, percent, done, topic_total) in rows {
                    li { class: "profile-topic-row",
                        span { class: "profile-topic-name", "{name}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {percent}%" }
                        }
                        span { class: "profile-topic-counts", "{done} / {topic_total}" }
                    }
                }
            }
            div { class: "danger-zone",
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: on_reset,
                    if reset_armed() { "Click again to confirm" } else { "Reset All Progress" }
                }
                if reset_armed() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| reset_armed.set(false),
                        "Keep my progress"
                    }
                }
            }
        }
    }
}
