use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use storage::repository::ProgressRepository;
use studio_core::catalog::Catalog;
use studio_core::model::{Deadline, LessonId, ProgressRecord, StudentId};
use studio_core::progress::{self, SkillCategoryScores, StreakBand};

use crate::error::ProgressServiceError;
use crate::Clock;

/// Derived values for the progress dashboard. Recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDashboard {
    pub record: ProgressRecord,
    pub completion: f64,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub current_level_name: Option<String>,
    pub current_term_title: Option<String>,
    pub total_minutes: u64,
    pub streak_band: StreakBand,
    pub skill_categories: Vec<SkillCategoryScores>,
    pub deadlines: Vec<Deadline>,
    pub days_since_activity: u32,
}

impl ProgressDashboard {
    /// Build the dashboard for `record` against `catalog`.
    ///
    /// Completed ids that are not catalog lessons do not count.
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        record: ProgressRecord,
        deadlines: Vec<Deadline>,
        now: DateTime<Utc>,
    ) -> Self {
        let completed_lessons = record
            .completed_lessons
            .iter()
            .filter(|id| catalog.contains_lesson(id.as_str()))
            .count();
        let level = catalog.level_by_id(record.current_level.as_str());
        let term = level.and_then(|level| level.term(record.current_term.as_str()));

        Self {
            completion: progress::completion_percent(catalog, &record.completed_lessons),
            completed_lessons,
            total_lessons: progress::total_lessons(catalog),
            current_level_name: level.map(|level| level.name.clone()),
            current_term_title: term.map(|term| term.title.clone()),
            total_minutes: progress::total_minutes(&record),
            streak_band: StreakBand::for_days(record.streak),
            skill_categories: progress::skill_category_scores(&record),
            deadlines,
            days_since_activity: Clock::fixed(now).days_since(record.last_activity),
            record,
        }
    }
}

/// Reads and updates student progress records.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    catalog: &'static Catalog,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: &'static Catalog,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            clock,
            catalog,
            progress,
        }
    }

    /// Fetch a student's record.
    ///
    /// Returns `Ok(None)` when the student has no record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn record(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<ProgressRecord>, ProgressServiceError> {
        match self.progress.get_progress(student_id).await {
            Ok(record) => Ok(Some(record)),
            Err(storage::repository::StorageError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Dashboard for a student, or `None` when the student has no record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn dashboard(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<ProgressDashboard>, ProgressServiceError> {
        let Some(record) = self.record(student_id).await? else {
            return Ok(None);
        };
        let now = self.clock.now();
        let deadlines = self.progress.upcoming_deadlines(student_id, now).await?;
        Ok(Some(ProgressDashboard::build(
            self.catalog,
            record,
            deadlines,
            now,
        )))
    }

    /// Store a record, replacing any existing one for the same student.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub async fn import_record(&self, record: &ProgressRecord) -> Result<(), ProgressServiceError> {
        self.progress.upsert_progress(record).await?;
        tracing::info!(
            student = %record.student_id,
            completed = record.completed_lessons.len(),
            "progress record imported"
        );
        Ok(())
    }

    /// Mark a lesson complete and touch the record's last activity.
    ///
    /// Returns `false` if the lesson was already complete.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::UnknownLesson` if the lesson is not in the catalog.
    /// Returns `ProgressServiceError::Storage` if the record is missing or persistence fails.
    pub async fn mark_lesson_complete(
        &self,
        student_id: &StudentId,
        lesson_id: &LessonId,
    ) -> Result<bool, ProgressServiceError> {
        if !self.catalog.contains_lesson(lesson_id.as_str()) {
            return Err(ProgressServiceError::UnknownLesson(lesson_id.clone()));
        }

        let mut record = self.progress.get_progress(student_id).await?;
        let newly_completed = record.mark_completed(lesson_id.clone());
        record.last_activity = self.clock.now();
        self.progress.upsert_progress(&record).await?;

        if newly_completed {
            tracing::info!(student = %student_id, lesson = %lesson_id, "lesson completed");
        }
        Ok(newly_completed)
    }
}

/// Read a progress record from a JSON file.
///
/// # Errors
///
/// Returns `ProgressServiceError::Read` if the file cannot be read and
/// `ProgressServiceError::Parse` if it is not a valid record.
pub fn load_progress_file(path: &Path) -> Result<ProgressRecord, ProgressServiceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ProgressServiceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let record: ProgressRecord =
        serde_json::from_str(&raw).map_err(|source| ProgressServiceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), student = %record.student_id, "loaded progress file");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use storage::memory::InMemoryRepository;
    use studio_core::curriculum;
    use studio_core::model::{LevelId, Score, TermId};
    use studio_core::time::fixed_now;

    fn record() -> ProgressRecord {
        let mut record = ProgressRecord::new(
            StudentId::new("student1"),
            LevelId::new("beginner"),
            TermId::new("term2"),
            fixed_now() - Duration::days(2),
        );
        record.mark_completed(LessonId::new("lesson1-1"));
        record.mark_completed(LessonId::new("retired-lesson"));
        record
            .skill_scores
            .insert("Perspective".into(), Score::new(60).unwrap());
        record.time_spent.insert(LessonId::new("lesson1-1"), 45);
        record.streak = 12;
        record
    }

    fn service(repo: InMemoryRepository) -> ProgressService {
        ProgressService::new(Clock::Fixed(fixed_now()), curriculum(), Arc::new(repo))
    }

    #[test]
    fn dashboard_ignores_unknown_completed_ids() {
        let dashboard = ProgressDashboard::build(curriculum(), record(), Vec::new(), fixed_now());
        assert_eq!(dashboard.completed_lessons, 1);
        assert_eq!(dashboard.total_lessons, 17);
        assert!((dashboard.completion - 100.0 / 17.0).abs() < 1e-9);
        assert_eq!(dashboard.current_level_name.as_deref(), Some("Beginner Level"));
        assert_eq!(
            dashboard.current_term_title.as_deref(),
            Some("Sketching Fundamentals")
        );
        assert_eq!(dashboard.total_minutes, 45);
        assert_eq!(dashboard.streak_band, StreakBand::Steady);
        assert_eq!(dashboard.days_since_activity, 2);
    }

    #[test]
    fn dashboard_tolerates_unknown_level() {
        let mut record = record();
        record.current_level = LevelId::new("expert");
        let dashboard = ProgressDashboard::build(curriculum(), record, Vec::new(), fixed_now());
        assert!(dashboard.current_level_name.is_none());
        assert!(dashboard.current_term_title.is_none());
    }

    #[tokio::test]
    async fn missing_record_has_no_dashboard() {
        let service = service(InMemoryRepository::new());
        let dashboard = service.dashboard(&StudentId::new("nobody")).await.unwrap();
        assert!(dashboard.is_none());
    }

    #[tokio::test]
    async fn mark_lesson_complete_updates_activity() {
        let repo = InMemoryRepository::new();
        let service = service(repo.clone());
        service.import_record(&record()).await.unwrap();

        let student = StudentId::new("student1");
        let lesson = LessonId::new("lesson1-2");
        assert!(service.mark_lesson_complete(&student, &lesson).await.unwrap());
        assert!(!service.mark_lesson_complete(&student, &lesson).await.unwrap());

        let stored = repo.get_progress(&student).await.unwrap();
        assert!(stored.has_completed("lesson1-2"));
        assert_eq!(stored.last_activity, fixed_now());
    }

    #[tokio::test]
    async fn mark_lesson_complete_rejects_unknown_lesson() {
        let service = service(InMemoryRepository::new());
        let err = service
            .mark_lesson_complete(&StudentId::new("student1"), &LessonId::new("nonexistent"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressServiceError::UnknownLesson(_)));
    }

    #[test]
    fn load_progress_file_reports_missing_file() {
        let err = load_progress_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ProgressServiceError::Read { .. }));
    }
}
