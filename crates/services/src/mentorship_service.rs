use std::collections::HashMap;
use std::sync::Arc;

use storage::repository::{MentorRepository, SessionRepository, StorageError};
use studio_core::model::{ExpertMentor, MentorId, MentorshipSession, StudentId};

use crate::error::MentorshipServiceError;
use crate::Clock;

/// A session with its mentor's display name, when the mentor is still listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionListing {
    pub session: MentorshipSession,
    pub mentor_name: Option<String>,
}

/// A student's sessions split around the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSchedule {
    /// Scheduled sessions still ahead, soonest first.
    pub upcoming: Vec<SessionListing>,
    /// Everything else, most recent first.
    pub past: Vec<SessionListing>,
}

/// Mentor directory and a student's booked sessions.
#[derive(Clone)]
pub struct MentorshipService {
    clock: Clock,
    mentors: Arc<dyn MentorRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl MentorshipService {
    #[must_use]
    pub fn new(
        clock: Clock,
        mentors: Arc<dyn MentorRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            clock,
            mentors,
            sessions,
        }
    }

    /// # Errors
    ///
    /// Returns `MentorshipServiceError::Storage` if repository access fails.
    pub async fn list_mentors(&self) -> Result<Vec<ExpertMentor>, MentorshipServiceError> {
        Ok(self.mentors.list_mentors().await?)
    }

    /// Fetch a mentor by id.
    ///
    /// Returns `Ok(None)` when no mentor has this id.
    ///
    /// # Errors
    ///
    /// Returns `MentorshipServiceError::Storage` if repository access fails.
    pub async fn mentor(
        &self,
        id: &MentorId,
    ) -> Result<Option<ExpertMentor>, MentorshipServiceError> {
        match self.mentors.get_mentor(id).await {
            Ok(mentor) => Ok(Some(mentor)),
            Err(StorageError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `MentorshipServiceError::Storage` if repository access fails.
    pub async fn schedule(
        &self,
        student_id: &StudentId,
    ) -> Result<SessionSchedule, MentorshipServiceError> {
        let names: HashMap<MentorId, String> = self
            .mentors
            .list_mentors()
            .await?
            .into_iter()
            .map(|mentor| (mentor.id, mentor.name))
            .collect();
        let sessions = self.sessions.sessions_for_student(student_id).await?;
        Ok(split_schedule(sessions, &names, self.clock))
    }
}

fn split_schedule(
    mut sessions: Vec<MentorshipSession>,
    names: &HashMap<MentorId, String>,
    clock: Clock,
) -> SessionSchedule {
    let now = clock.now();
    sessions.sort_by_key(|session| session.scheduled_time);

    let mut schedule = SessionSchedule::default();
    for session in sessions {
        let listing = SessionListing {
            mentor_name: names.get(&session.mentor_id).cloned(),
            session,
        };
        if listing.session.is_upcoming(now) {
            schedule.upcoming.push(listing);
        } else {
            schedule.past.push(listing);
        }
    }
    schedule.past.reverse();
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use storage::repository::Storage;
    use storage::seed::DEMO_STUDENT;
    use studio_core::model::{MentorshipSessionId, SessionStatus, SessionType};
    use studio_core::time::{fixed_clock, fixed_now};

    fn session(id: &str, mentor: &str, offset_hours: i64, status: SessionStatus) -> MentorshipSession {
        MentorshipSession {
            id: MentorshipSessionId::new(id),
            mentor_id: MentorId::new(mentor),
            student_id: StudentId::new("student1"),
            kind: SessionType::CareerAdvice,
            scheduled_time: fixed_now() + Duration::hours(offset_hours),
            duration: 30,
            status,
            notes: None,
            feedback: None,
            recording_url: None,
        }
    }

    fn ids(listings: &[SessionListing]) -> Vec<&str> {
        listings.iter().map(|l| l.session.id.as_str()).collect()
    }

    #[test]
    fn split_orders_upcoming_ascending_and_past_descending() {
        let names = HashMap::from([(MentorId::new("1"), "Sarah Chen".to_owned())]);
        let sessions = vec![
            session("later", "1", 48, SessionStatus::Scheduled),
            session("old", "1", -72, SessionStatus::Completed),
            session("soon", "1", 2, SessionStatus::Scheduled),
            session("recent", "1", -1, SessionStatus::Completed),
        ];
        let schedule = split_schedule(sessions, &names, fixed_clock());
        assert_eq!(ids(&schedule.upcoming), ["soon", "later"]);
        assert_eq!(ids(&schedule.past), ["recent", "old"]);
    }

    #[test]
    fn cancelled_future_session_counts_as_past() {
        let sessions = vec![session("x", "1", 24, SessionStatus::Cancelled)];
        let schedule = split_schedule(sessions, &HashMap::new(), fixed_clock());
        assert!(schedule.upcoming.is_empty());
        assert_eq!(ids(&schedule.past), ["x"]);
    }

    #[test]
    fn missing_mentor_keeps_session_without_name() {
        let names = HashMap::from([(MentorId::new("1"), "Sarah Chen".to_owned())]);
        let sessions = vec![session("orphan", "99", 5, SessionStatus::Scheduled)];
        let schedule = split_schedule(sessions, &names, fixed_clock());
        assert_eq!(schedule.upcoming.len(), 1);
        assert!(schedule.upcoming[0].mentor_name.is_none());
    }

    #[tokio::test]
    async fn seeded_schedule_joins_mentor_names() {
        let storage = Storage::seeded(fixed_now()).unwrap();
        let service = MentorshipService::new(
            fixed_clock(),
            Arc::clone(&storage.mentors),
            Arc::clone(&storage.sessions),
        );
        let schedule = service.schedule(&StudentId::new(DEMO_STUDENT)).await.unwrap();
        assert_eq!(schedule.upcoming.len(), 1);
        assert_eq!(schedule.upcoming[0].mentor_name.as_deref(), Some("Sarah Chen"));
        assert_eq!(schedule.past[0].mentor_name.as_deref(), Some("Marcus Rodriguez"));

        assert!(service.mentor(&MentorId::new("3")).await.unwrap().is_some());
        assert!(service.mentor(&MentorId::new("nope")).await.unwrap().is_none());
    }
}
