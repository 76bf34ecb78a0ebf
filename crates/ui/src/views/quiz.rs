use dioxus::prelude::*;
use dioxus_router::Link;

use prep_core::model::{Difficulty, Question, TopicId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::markdown_to_html;

/// Lifecycle of the on-demand AI explanation for the question in view.
#[derive(Clone, Debug, PartialEq)]
enum ExplanationState {
    Idle,
    Loading,
    Ready(String),
}

#[component]
pub fn QuizView(topic_id: String, level: Difficulty) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();

    let mut index = use_signal(|| 0usize);
    let mut show_answer = use_signal(|| false);
    let mut explanation = use_signal(|| ExplanationState::Idle);
    // Tags each explanation request; a response only applies while its tag is
    // still current, so a late reply never lands on a different question.
    let mut explain_generation = use_signal(|| 0u32);
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

    let questions: Vec<Question> = catalog
        .questions_for(&id, level)
        .into_iter()
        .cloned()
        .collect();

    if questions.is_empty() {
        return rsx! {
            div { class: "page quiz-page",
                p { class: "empty-note", "No questions available for this level yet." }
                Link {
                    class: "back-link",
                    to: Route::Topic { topic_id: topic_id.clone() },
                    "← Back to {topic.name}"
                }
            }
        };
    }

    let total = questions.len();
    let current_index = index().min(total - 1);
    let current = questions[current_index].clone();
    let position = current_index + 1;
    let bar_percent = position * 100 / total;

    let _ = refresh();
    let is_completed = progress.is_completed(&id, level, &current.id);
    let level_progress = progress.level_progress(&id, level);

    // Stepping invalidates the answer reveal and any in-flight explanation.
    let mut step_to = move |next: usize| {
        index.set(next);
        show_answer.set(false);
        explanation.set(ExplanationState::Idle);
        explain_generation.set(explain_generation() + 1);
    };

    let on_mark = {
        let progress = progress.clone();
        let id = id.clone();
        let question_id = current.id.clone();
        move |_: MouseEvent| {
            let progress = progress.clone();
            let id = id.clone();
            let question_id = question_id.clone();
            spawn(async move {
                if progress.mark_completed(&id, level, question_id).await.is_ok() {
                    refresh.set(refresh() + 1);
                }
            });
        }
    };

    let on_explain = {
        let explanations = ctx.explanations();
        let topic_name = topic.name.clone();
        let prompt = current.prompt.clone();
        let answer = current.answer.clone();
        move |_: MouseEvent| {
            let explanations = explanations.clone();
            let topic_name = topic_name.clone();
            let prompt = prompt.clone();
            let answer = answer.clone();
            let generation = explain_generation() + 1;
            explain_generation.set(generation);
            explanation.set(ExplanationState::Loading);
            spawn(async move {
                let text = explanations.explain(&topic_name, &prompt, &answer).await;
                if explain_generation() == generation {
                    explanation.set(ExplanationState::Ready(markdown_to_html(&text)));
                }
            });
        }
    };

    rsx! {
        div { class: "page quiz-page",
            div { class: "quiz-header",
                Link {
                    class: "back-link",
                    to: Route::Topic { topic_id: topic_id.clone() },
                    "← Exit Session"
                }
                div { class: "quiz-position",
                    span { class: "quiz-scope", "{topic.name} · {level}" }
                    span { class: "quiz-counter", "Question {position} of {total}" }
                }
            }
            div { class: "progress-track progress-track--session",
                div { class: "progress-fill", style: "width: {bar_percent}%" }
            }
            div { class: "question-card",
                h2 { class: "question-prompt", "{current.prompt}" }
                if let Some(snippet) = current.snippet.clone() {
                    pre { class: "question-snippet question-snippet--{snippet.language}",
                        code { "{snippet.code}" }
                    }
                }
                if show_answer() {
                    div { class: "answer-block",
                        h4 { class: "answer-heading", "Suggested Answer" }
                        p { class: "answer-text", "{current.answer}" }
                        div { class: "answer-actions",
                            button {
                                class: "btn btn-ai",
                                r#type: "button",
                                disabled: explanation() == ExplanationState::Loading,
                                onclick: on_explain,
                                if explanation() == ExplanationState::Loading {
                                    "Thinking..."
                                } else {
                                    "Explain with AI"
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: is_completed,
                                onclick: on_mark,
                                if is_completed { "Completed" } else { "Mark Done" }
                            }
                        }
                    }
                } else {
                    button {
                        class: "btn btn-reveal",
                        r#type: "button",
                        onclick: move |_| show_answer.set(true),
                        "Show Expert Answer"
                    }
                }
                if let ExplanationState::Ready(html) = explanation() {
                    div { class: "explanation", dangerous_inner_html: "{html}" }
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: current_index == 0,
                    onclick: move |_| step_to(current_index.saturating_sub(1)),
                    "Previous"
                }
                span { class: "quiz-mastered", "{level_progress.completed} mastered at this level" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: position == total,
                    onclick: move |_| step_to(current_index + 1),
                    "Next"
                }
            }
        }
    }
}
