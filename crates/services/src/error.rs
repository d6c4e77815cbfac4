//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use storage::repository::StorageError;
use studio_core::model::{LessonId, PortfolioDraftError};

/// Errors emitted by `ProgressService` and progress file loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("lesson {0} is not part of the curriculum")]
    UnknownLesson(LessonId),
    #[error("failed to read progress file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("progress file {path} is not a valid progress record")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PortfolioService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PortfolioServiceError {
    #[error(transparent)]
    Draft(#[from] PortfolioDraftError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `MentorshipService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MentorshipServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `FeedbackService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedbackServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}
