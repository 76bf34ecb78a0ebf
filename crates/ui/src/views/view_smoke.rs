use prep_core::model::{Difficulty, QuestionId, TopicId};

use super::test_harness::{ViewKind, setup_view_harness};

fn linux() -> TopicId {
    TopicId::new("linux")
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_topic_cards() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Select Tech Stack"), "missing heading in {html}");
    assert!(html.contains("Linux"), "missing Linux card in {html}");
    assert!(html.contains("Docker"), "missing Docker card in {html}");
    assert!(html.contains("0% mastered"), "missing fresh percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_smoke_reflects_seeded_progress() {
    let mut harness = setup_view_harness(ViewKind::Topic("linux".into())).await;
    let progress = harness.services.progress();
    for raw in ["l-b-1", "l-b-2", "l-b-3"] {
        progress
            .mark_completed(&linux(), Difficulty::Basic, QuestionId::new(raw))
            .await
            .expect("mark");
    }

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("3 of 10 questions mastered"),
        "missing basic counts in {html}"
    );
    // 3 of the 20 linux questions = 15% topic mastery.
    assert!(html.contains("15%"), "missing topic mastery in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_first_question() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz("linux".into(), Difficulty::Basic)).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
    assert!(
        html.contains("What is the &quot;root&quot; user?") || html.contains("What is the \"root\" user?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Show Expert Answer"), "missing reveal button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_handles_unknown_topic() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz("kubernetes".into(), Difficulty::Basic)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Topic not found"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn search_smoke_renders_empty_prompt() {
    let mut harness = setup_view_harness(ViewKind::Search).await;
    harness.rebuild();
    let html = harness.render();

    let total = harness.services.catalog().total_count();
    let expected = format!("Type to search {total} questions.");
    assert!(html.contains(&expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_smoke_counts_seeded_progress() {
    let mut harness = setup_view_harness(ViewKind::Profile).await;
    harness
        .services
        .progress()
        .mark_completed(&linux(), Difficulty::Basic, QuestionId::new("l-b-1"))
        .await
        .expect("mark");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Questions mastered"), "missing stat label in {html}");
    assert!(html.contains("Reset All Progress"), "missing reset button in {html}");
}
