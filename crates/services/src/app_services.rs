use std::sync::Arc;

use storage::repository::Storage;
use studio_core::catalog::Catalog;
use studio_core::model::{ProgressRecord, StudentId};

use crate::catalog_service::CatalogService;
use crate::contact_service::ContactService;
use crate::error::AppServicesError;
use crate::feedback_service::FeedbackService;
use crate::mentorship_service::MentorshipService;
use crate::portfolio_service::PortfolioService;
use crate::progress_service::ProgressService;
use crate::Clock;

/// Assembles app-facing services for one student.
#[derive(Clone)]
pub struct AppServices {
    student_id: StudentId,
    catalog: CatalogService,
    contact: ContactService,
    progress: Arc<ProgressService>,
    portfolio: Arc<PortfolioService>,
    mentorship: Arc<MentorshipService>,
    feedback: Arc<FeedbackService>,
}

impl AppServices {
    /// Build services over an existing storage bundle.
    #[must_use]
    pub fn new(
        storage: &Storage,
        catalog: &'static Catalog,
        clock: Clock,
        student_id: StudentId,
    ) -> Self {
        Self {
            student_id,
            catalog: CatalogService::new(catalog),
            contact: ContactService::new(clock),
            progress: Arc::new(ProgressService::new(
                clock,
                catalog,
                Arc::clone(&storage.progress),
            )),
            portfolio: Arc::new(PortfolioService::new(clock, Arc::clone(&storage.portfolio))),
            mentorship: Arc::new(MentorshipService::new(
                clock,
                Arc::clone(&storage.mentors),
                Arc::clone(&storage.sessions),
            )),
            feedback: Arc::new(FeedbackService::new(catalog, Arc::clone(&storage.feedback))),
        }
    }

    /// Services over seeded in-memory storage and the built-in curriculum.
    ///
    /// A supplied progress record replaces the demo record and sets the
    /// active student.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if seeding or importing the record fails.
    pub async fn demo(
        clock: Clock,
        student_id: StudentId,
        record: Option<ProgressRecord>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::seeded(clock.now())?;
        let student_id = record
            .as_ref()
            .map_or(student_id, |record| record.student_id.clone());
        let services = Self::new(&storage, studio_core::curriculum(), clock, student_id);
        if let Some(record) = record {
            services.progress.import_record(&record).await?;
        }
        tracing::info!(student = %services.student_id, "app services ready");
        Ok(services)
    }

    #[must_use]
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
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
