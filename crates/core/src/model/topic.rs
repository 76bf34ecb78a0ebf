use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// A technology/domain category grouping questions.
///
/// The topic set is fixed at build time; `icon` and `accent` are display
/// metadata consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub accent: String,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            id: TopicId::new(id),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            accent: accent.into(),
        }
    }
}
