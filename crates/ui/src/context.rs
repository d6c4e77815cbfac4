use std::sync::Arc;

use services::{
    CatalogService, ContactService, FeedbackService, MentorshipService, PortfolioService,
    ProgressService,
};
use studio_core::model::StudentId;

/// What the composition root hands to the views.
pub trait UiApp: Send + Sync {
    /// The student whose dashboards are shown.
    fn student_id(&self) -> StudentId;

    fn catalog(&self) -> CatalogService;
    fn contact(&self) -> ContactService;
    fn progress(&self) -> Arc<ProgressService>;
    fn portfolio(&self) -> Arc<PortfolioService>;
    fn mentorship(&self) -> Arc<MentorshipService>;
    fn feedback(&self) -> Arc<FeedbackService>;
}

#[derive(Clone)]
pub struct AppContext {
    student_id: StudentId,
    catalog: CatalogService,
    contact: ContactService,
    progress: Arc<ProgressService>,
    portfolio: Arc<PortfolioService>,
    mentorship: Arc<MentorshipService>,
    feedback: Arc<FeedbackService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            student_id: app.student_id(),
            catalog: app.catalog(),
            contact: app.contact(),
            progress: app.progress(),
            portfolio: app.portfolio(),
            mentorship: app.mentorship(),
            feedback: app.feedback(),
        }
    }

    #[must_use]
    pub fn student_id(&self) -> StudentId {
        self.student_id.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogService {
        self.catalog
    }

    #[must_use]
    pub fn contact(&self) -> ContactService {
        self.contact
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn portfolio(&self) -> Arc<PortfolioService> {
        Arc::clone(&self.portfolio)
    }

    #[must_use]
    pub fn mentorship(&self) -> Arc<MentorshipService> {
        Arc::clone(&self.mentorship)
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<FeedbackService> {
        Arc::clone(&self.feedback)
    }
}

// Provided by the composition root (`crates/app`) and by the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
