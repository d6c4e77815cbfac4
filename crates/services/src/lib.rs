#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod contact_service;
pub mod error;
pub mod feedback_service;
pub mod mentorship_service;
pub mod portfolio_service;
pub mod progress_service;

pub use studio_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, LessonView, LevelOverview};
pub use contact_service::{Acknowledgement, ContactService};
pub use error::{
    AppServicesError, FeedbackServiceError, MentorshipServiceError, PortfolioServiceError,
    ProgressServiceError,
};
pub use feedback_service::{FeedbackReport, FeedbackService, RecommendedLesson};
pub use mentorship_service::{MentorshipService, SessionListing, SessionSchedule};
pub use portfolio_service::PortfolioService;
pub use progress_service::{ProgressDashboard, ProgressService, load_progress_file};
