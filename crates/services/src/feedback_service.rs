use std::sync::Arc;

use storage::repository::{FeedbackRepository, StorageError};
use studio_core::catalog::Catalog;
use studio_core::model::{
    AiAnalysisResult, AiFeedback, FeedbackId, LessonId, ScoreBand, StudentId, Submission,
};

use crate::error::FeedbackServiceError;

/// A recommended lesson id with its catalog title, if the catalog knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedLesson {
    pub id: LessonId,
    pub title: Option<String>,
}

impl RecommendedLesson {
    /// Title when known, otherwise the raw id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }
}

/// AI feedback with its submission, analysis and resolved lesson names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub feedback: AiFeedback,
    pub band: ScoreBand,
    pub lesson_title: Option<String>,
    pub recommended_lessons: Vec<RecommendedLesson>,
    pub submission: Option<Submission>,
    pub analysis: Option<AiAnalysisResult>,
}

/// Resolve lesson ids against the catalog, keeping their order.
#[must_use]
pub fn resolve_lessons(catalog: &Catalog, ids: &[LessonId]) -> Vec<RecommendedLesson> {
    ids.iter()
        .map(|id| RecommendedLesson {
            id: id.clone(),
            title: catalog
                .find_lesson(id.as_str())
                .map(|found| found.lesson.title.clone()),
        })
        .collect()
}

#[derive(Clone)]
pub struct FeedbackService {
    catalog: &'static Catalog,
    feedback: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    #[must_use]
    pub fn new(catalog: &'static Catalog, feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { catalog, feedback }
    }

    /// Report for one feedback entry, or `None` if it does not exist.
    ///
    /// A missing submission or analysis leaves that part of the report empty.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackServiceError::Storage` if repository access fails.
    pub async fn report(
        &self,
        id: &FeedbackId,
    ) -> Result<Option<FeedbackReport>, FeedbackServiceError> {
        let feedback = match self.feedback.get_feedback(id).await {
            Ok(feedback) => feedback,
            Err(StorageError::NotFound) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        self.build_report(feedback).await.map(Some)
    }

    /// Report for the student's most recent feedback.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackServiceError::Storage` if repository access fails.
    pub async fn latest_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<FeedbackReport>, FeedbackServiceError> {
        let newest = self
            .feedback
            .feedback_for_student(student_id)
            .await?
            .into_iter()
            .next();
        match newest {
            Some(feedback) => self.build_report(feedback).await.map(Some),
            None => Ok(None),
        }
    }

    async fn build_report(
        &self,
        feedback: AiFeedback,
    ) -> Result<FeedbackReport, FeedbackServiceError> {
        let submission = optional(self.feedback.get_submission(&feedback.submission_id).await)?;
        let analysis = optional(self.feedback.get_analysis(&feedback.submission_id).await)?;

        Ok(FeedbackReport {
            band: ScoreBand::for_score(feedback.overall_score),
            lesson_title: self
                .catalog
                .find_lesson(feedback.lesson_id.as_str())
                .map(|found| found.lesson.title.clone()),
            recommended_lessons: resolve_lessons(
                self.catalog,
                &feedback.next_steps.recommended_lessons,
            ),
            submission,
            analysis,
            feedback,
        })
    }
}

fn optional<T>(result: Result<T, StorageError>) -> Result<Option<T>, FeedbackServiceError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
