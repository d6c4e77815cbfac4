mod curriculum;
mod feedback;
mod home;
mod lesson;
mod mentors;
mod portfolio;
mod progress;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use curriculum::CurriculumView;
pub use feedback::FeedbackView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use mentors::MentorsView;
pub use portfolio::PortfolioView;
pub use progress::ProgressView;
pub use state::{ViewError, ViewState, view_error, view_state_from_resource};
