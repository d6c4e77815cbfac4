use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use studio_core::model::{
    AiAnalysisResult, AiFeedback, Deadline, ExpertMentor, FeedbackId, MentorId, MentorshipSession,
    PortfolioItem, PortfolioItemId, ProgressRecord, StudentId, Submission, SubmissionId,
};

use crate::repository::{
    FeedbackRepository, MentorRepository, PortfolioRepository, ProgressRepository,
    SessionRepository, StorageError,
};
use crate::seed::DemoData;

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Clones share the same maps.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    mentors: Arc<Mutex<Vec<ExpertMentor>>>,
    sessions: Arc<Mutex<Vec<MentorshipSession>>>,
    portfolio: Arc<Mutex<Vec<PortfolioItem>>>,
    progress: Arc<Mutex<HashMap<StudentId, ProgressRecord>>>,
    deadlines: Arc<Mutex<HashMap<StudentId, Vec<Deadline>>>>,
    submissions: Arc<Mutex<HashMap<SubmissionId, Submission>>>,
    analyses: Arc<Mutex<HashMap<SubmissionId, AiAnalysisResult>>>,
    feedback: Arc<Mutex<Vec<AiFeedback>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data(data: DemoData) -> Self {
        let DemoData {
            mentors,
            sessions,
            portfolio,
            progress,
            deadlines,
            submissions,
            analyses,
            feedback,
        } = data;

        let progress_by_student = progress
            .into_iter()
            .map(|record| (record.student_id.clone(), record))
            .collect();
        let submissions = submissions
            .into_iter()
            .map(|submission| (submission.id.clone(), submission))
            .collect();
        let analyses = analyses
            .into_iter()
            .map(|analysis| (analysis.submission_id.clone(), analysis))
            .collect();

        Self {
            mentors: Arc::new(Mutex::new(mentors)),
            sessions: Arc::new(Mutex::new(sessions)),
            portfolio: Arc::new(Mutex::new(portfolio)),
            progress: Arc::new(Mutex::new(progress_by_student)),
            deadlines: Arc::new(Mutex::new(deadlines)),
            submissions: Arc::new(Mutex::new(submissions)),
            analyses: Arc::new(Mutex::new(analyses)),
            feedback: Arc::new(Mutex::new(feedback)),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

#[async_trait]
impl MentorRepository for InMemoryRepository {
    async fn list_mentors(&self) -> Result<Vec<ExpertMentor>, StorageError> {
        Ok(lock(&self.mentors)?.clone())
    }

    async fn get_mentor(&self, id: &MentorId) -> Result<ExpertMentor, StorageError> {
        let guard = lock(&self.mentors)?;
        guard
            .iter()
            .find(|mentor| &mentor.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn upsert_mentor(&self, mentor: &ExpertMentor) -> Result<(), StorageError> {
        let mut guard = lock(&self.mentors)?;
        match guard.iter_mut().find(|existing| existing.id == mentor.id) {
            Some(existing) => *existing = mentor.clone(),
            None => guard.push(mentor.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn upsert_session(&self, session: &MentorshipSession) -> Result<(), StorageError> {
        let mut guard = lock(&self.sessions)?;
        match guard.iter_mut().find(|existing| existing.id == session.id) {
            Some(existing) => *existing = session.clone(),
            None => guard.push(session.clone()),
        }
        Ok(())
    }

    async fn sessions_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<MentorshipSession>, StorageError> {
        let guard = lock(&self.sessions)?;
        let mut found: Vec<MentorshipSession> = guard
            .iter()
            .filter(|session| &session.student_id == student_id)
            .cloned()
            .collect();
        found.sort_by_key(|session| session.scheduled_time);
        Ok(found)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryRepository {
    async fn list_items(&self) -> Result<Vec<PortfolioItem>, StorageError> {
        Ok(lock(&self.portfolio)?.clone())
    }

    async fn get_item(&self, id: PortfolioItemId) -> Result<PortfolioItem, StorageError> {
        let guard = lock(&self.portfolio)?;
        guard
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_item(&self, item: &PortfolioItem) -> Result<(), StorageError> {
        let mut guard = lock(&self.portfolio)?;
        if guard.iter().any(|existing| existing.id == item.id) {
            return Err(StorageError::Conflict);
        }
        guard.push(item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &PortfolioItem) -> Result<(), StorageError> {
        let mut guard = lock(&self.portfolio)?;
        let existing = guard
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(StorageError::NotFound)?;
        *existing = item.clone();
        Ok(())
    }

    async fn delete_item(&self, id: PortfolioItemId) -> Result<(), StorageError> {
        let mut guard = lock(&self.portfolio)?;
        let position = guard
            .iter()
            .position(|item| item.id == id)
            .ok_or(StorageError::NotFound)?;
        guard.remove(position);
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(&self, student_id: &StudentId) -> Result<ProgressRecord, StorageError> {
        let guard = lock(&self.progress)?;
        guard.get(student_id).cloned().ok_or(StorageError::NotFound)
    }

    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = lock(&self.progress)?;
        guard.insert(record.student_id.clone(), record.clone());
        Ok(())
    }

    async fn add_deadline(
        &self,
        student_id: &StudentId,
        deadline: &Deadline,
    ) -> Result<(), StorageError> {
        let mut guard = lock(&self.deadlines)?;
        let entries = guard.entry(student_id.clone()).or_default();
        if entries.iter().any(|existing| existing.id == deadline.id) {
            return Err(StorageError::Conflict);
        }
        entries.push(deadline.clone());
        Ok(())
    }

    async fn upcoming_deadlines(
        &self,
        student_id: &StudentId,
        from: DateTime<Utc>,
    ) -> Result<Vec<Deadline>, StorageError> {
        let guard = lock(&self.deadlines)?;
        let mut found: Vec<Deadline> = guard
            .get(student_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|deadline| deadline.due_date >= from)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        found.sort_by_key(|deadline| deadline.due_date);
        Ok(found)
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryRepository {
    async fn upsert_submission(&self, submission: &Submission) -> Result<(), StorageError> {
        let mut guard = lock(&self.submissions)?;
        guard.insert(submission.id.clone(), submission.clone());
        Ok(())
    }

    async fn get_submission(&self, id: &SubmissionId) -> Result<Submission, StorageError> {
        let guard = lock(&self.submissions)?;
        guard.get(id).cloned().ok_or(StorageError::NotFound)
    }

    async fn upsert_analysis(&self, analysis: &AiAnalysisResult) -> Result<(), StorageError> {
        let mut guard = lock(&self.analyses)?;
        guard.insert(analysis.submission_id.clone(), analysis.clone());
        Ok(())
    }

    async fn get_analysis(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<AiAnalysisResult, StorageError> {
        let guard = lock(&self.analyses)?;
        guard.get(submission_id).cloned().ok_or(StorageError::NotFound)
    }

    async fn upsert_feedback(&self, feedback: &AiFeedback) -> Result<(), StorageError> {
        let mut guard = lock(&self.feedback)?;
        match guard.iter_mut().find(|existing| existing.id == feedback.id) {
            Some(existing) => *existing = feedback.clone(),
            None => guard.push(feedback.clone()),
        }
        Ok(())
    }

    async fn get_feedback(&self, id: &FeedbackId) -> Result<AiFeedback, StorageError> {
        let guard = lock(&self.feedback)?;
        guard
            .iter()
            .find(|feedback| &feedback.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn feedback_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AiFeedback>, StorageError> {
        let guard = lock(&self.feedback)?;
        let mut found: Vec<AiFeedback> = guard
            .iter()
            .filter(|feedback| &feedback.student_id == student_id)
            .cloned()
            .collect();
        found.sort_by_key(|feedback| std::cmp::Reverse(feedback.timestamp));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use studio_core::model::{PortfolioCategory, SessionStatus, SessionType};
    use studio_core::time::fixed_now;
    use uuid::Uuid;

    fn item(n: u128, title: &str) -> PortfolioItem {
        PortfolioItem {
            id: PortfolioItemId::new(Uuid::from_u128(n)),
            title: title.into(),
            description: String::new(),
            category: PortfolioCategory::Sketch,
            images: vec![],
            videos: vec![],
            documents: vec![],
            tags: vec![],
            created_at: fixed_now(),
            updated_at: fixed_now(),
            is_public: false,
            likes: 0,
            views: 0,
            comments: 0,
        }
    }

    fn session(id: &str, student: &str, offset_days: i64) -> MentorshipSession {
        MentorshipSession {
            id: id.parse().unwrap(),
            mentor_id: MentorId::new("1"),
            student_id: StudentId::new(student),
            kind: SessionType::SkillGuidance,
            scheduled_time: fixed_now() + Duration::days(offset_days),
            duration: 45,
            status: SessionStatus::Scheduled,
            notes: None,
            feedback: None,
            recording_url: None,
        }
    }

    #[tokio::test]
    async fn portfolio_keeps_insertion_order_across_updates() {
        let repo = InMemoryRepository::new();
        repo.insert_item(&item(1, "first")).await.unwrap();
        repo.insert_item(&item(2, "second")).await.unwrap();

        let mut edited = item(1, "first, edited");
        edited.likes = 3;
        repo.update_item(&edited).await.unwrap();

        let titles: Vec<String> = repo
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["first, edited", "second"]);
    }

    #[tokio::test]
    async fn duplicate_insert_conflicts_and_missing_update_is_not_found() {
        let repo = InMemoryRepository::new();
        repo.insert_item(&item(1, "a")).await.unwrap();
        assert!(matches!(
            repo.insert_item(&item(1, "again")).await,
            Err(StorageError::Conflict)
        ));
        assert!(matches!(
            repo.update_item(&item(9, "ghost")).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            repo.delete_item(PortfolioItemId::new(Uuid::from_u128(9))).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn sessions_are_filtered_by_student_and_ordered() {
        let repo = InMemoryRepository::new();
        repo.upsert_session(&session("late", "student1", 5)).await.unwrap();
        repo.upsert_session(&session("other", "student2", 1)).await.unwrap();
        repo.upsert_session(&session("early", "student1", -2)).await.unwrap();

        let ids: Vec<String> = repo
            .sessions_for_student(&StudentId::new("student1"))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.insert_item(&item(1, "shared")).await.unwrap();
        assert_eq!(other.list_items().await.unwrap().len(), 1);
    }
}
