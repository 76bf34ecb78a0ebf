mod ids;
mod progress;
mod question;
mod topic;

pub use ids::{ParseIdError, QuestionId, TopicId};
pub use progress::{LevelProgress, ProgressData, TopicProgress, UserProgress};
pub use question::{CodeSnippet, Difficulty, ParseDifficultyError, Question};
pub use topic::Topic;
