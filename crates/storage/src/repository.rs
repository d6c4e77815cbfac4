use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use studio_core::model::{
    AiAnalysisResult, AiFeedback, Deadline, ExpertMentor, FeedbackId, MentorId, MentorshipSession,
    PortfolioItem, PortfolioItemId, ProgressRecord, StudentId, Submission, SubmissionId,
};
use thiserror::Error;

use crate::memory::InMemoryRepository;
use crate::seed;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Read access to the mentor directory.
#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// All mentors, in directory order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_mentors(&self) -> Result<Vec<ExpertMentor>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no mentor has this id.
    async fn get_mentor(&self, id: &MentorId) -> Result<ExpertMentor, StorageError>;

    /// Insert a mentor, or replace the one with the same id in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mentor cannot be stored.
    async fn upsert_mentor(&self, mentor: &ExpertMentor) -> Result<(), StorageError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn upsert_session(&self, session: &MentorshipSession) -> Result<(), StorageError>;

    /// Sessions booked by a student, ordered by scheduled time.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn sessions_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<MentorshipSession>, StorageError>;
}

/// Portfolio projects, kept in insertion order.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_items(&self) -> Result<Vec<PortfolioItem>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the item is missing.
    async fn get_item(&self, id: PortfolioItemId) -> Result<PortfolioItem, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if an item with the same id exists.
    async fn insert_item(&self, item: &PortfolioItem) -> Result<(), StorageError>;

    /// Replace an existing item, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the item is missing.
    async fn update_item(&self, item: &PortfolioItem) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the item is missing.
    async fn delete_item(&self, id: PortfolioItemId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the student has no record.
    async fn get_progress(&self, student_id: &StudentId) -> Result<ProgressRecord, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the deadline cannot be stored.
    async fn add_deadline(
        &self,
        student_id: &StudentId,
        deadline: &Deadline,
    ) -> Result<(), StorageError>;

    /// Deadlines due at or after `from`, soonest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn upcoming_deadlines(
        &self,
        student_id: &StudentId,
        from: DateTime<Utc>,
    ) -> Result<Vec<Deadline>, StorageError>;
}

/// Submissions plus the analysis and feedback produced for them.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the submission cannot be stored.
    async fn upsert_submission(&self, submission: &Submission) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the submission is missing.
    async fn get_submission(&self, id: &SubmissionId) -> Result<Submission, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the analysis cannot be stored.
    async fn upsert_analysis(&self, analysis: &AiAnalysisResult) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the submission has no analysis.
    async fn get_analysis(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<AiAnalysisResult, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the feedback cannot be stored.
    async fn upsert_feedback(&self, feedback: &AiFeedback) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the feedback is missing.
    async fn get_feedback(&self, id: &FeedbackId) -> Result<AiFeedback, StorageError>;

    /// A student's feedback, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn feedback_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AiFeedback>, StorageError>;
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub mentors: Arc<dyn MentorRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub portfolio: Arc<dyn PortfolioRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// In-memory storage filled with the demo directory, portfolio, progress
    /// and feedback, with session and deadline times relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidSeed` if a demo URL does not parse.
    pub fn seeded(now: DateTime<Utc>) -> Result<Self, StorageError> {
        let data = seed::demo_data(now)?;
        Ok(Self::from_repository(InMemoryRepository::with_data(data)))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let mentors: Arc<dyn MentorRepository> = Arc::new(repo.clone());
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo.clone());
        let portfolio: Arc<dyn PortfolioRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let feedback: Arc<dyn FeedbackRepository> = Arc::new(repo);
        Self {
            mentors,
            sessions,
            portfolio,
            progress,
            feedback,
        }
    }
}
