mod dashboard;
mod profile;
mod quiz;
mod search;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use profile::ProfileView;
pub use quiz::QuizView;
pub use search::SearchView;
pub use topic::TopicView;
