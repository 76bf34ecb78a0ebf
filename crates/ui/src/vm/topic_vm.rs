use prep_core::model::{Topic, TopicId};

/// Everything the dashboard needs to draw one topic card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub name: String,
    pub description: String,
    pub accent: String,
    pub avatar: String,
    pub total_label: String,
    pub percent: u8,
}

#[must_use]
pub fn map_topic_card(topic: &Topic, total: usize, percent: u8) -> TopicCardVm {
    let avatar = topic
        .name
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |ch| ch.to_string());

    let total_label = if total == 1 {
        "1 Question".to_string()
    } else {
        format!("{total} Questions")
    };

    TopicCardVm {
        id: topic.id.clone(),
        name: topic.name.clone(),
        description: topic.description.clone(),
        accent: topic.accent.clone(),
        avatar,
        total_label,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_avatar_and_labels() {
        let topic = Topic::new("linux", "Linux", "Core OS fundamentals.", "terminal", "emerald");
        let vm = map_topic_card(&topic, 20, 45);
        assert_eq!(vm.avatar, "L");
        assert_eq!(vm.total_label, "20 Questions");
        assert_eq!(vm.percent, 45);
    }

    #[test]
    fn single_question_label_is_singular() {
        let topic = Topic::new("sre", "SRE", "Reliability.", "shield-check", "cyan");
        let vm = map_topic_card(&topic, 1, 0);
        assert_eq!(vm.total_label, "1 Question");
    }
}
