use prep_core::SearchResult;
use prep_core::model::Difficulty;

/// One row in the search results list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHitVm {
    pub topic_id: String,
    pub topic_name: String,
    pub level: Difficulty,
    pub prompt: String,
    pub answer: String,
}

#[must_use]
pub fn map_search_hit(hit: &SearchResult) -> SearchHitVm {
    SearchHitVm {
        topic_id: hit.question.topic_id.as_str().to_string(),
        topic_name: hit.topic_name.clone(),
        level: hit.question.difficulty,
        prompt: hit.question.prompt.clone(),
        answer: hit.question.answer.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::Question;

    #[test]
    fn maps_route_fields_from_the_question() {
        let hit = SearchResult {
            question: Question::new(
                "l-i-1",
                "linux",
                Difficulty::Intermediate,
                "What is an \"Inode\"?",
                "A data structure describing a filesystem object.",
            ),
            topic_name: "Linux".to_string(),
        };
        let vm = map_search_hit(&hit);
        assert_eq!(vm.topic_id, "linux");
        assert_eq!(vm.level, Difficulty::Intermediate);
        assert_eq!(vm.topic_name, "Linux");
    }
}
