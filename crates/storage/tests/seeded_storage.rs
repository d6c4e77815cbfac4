use chrono::Duration;
use storage::repository::{Storage, StorageError};
use storage::seed::DEMO_STUDENT;
use studio_core::model::{FeedbackId, MentorId, StudentId, SubmissionId};
use studio_core::time::fixed_now;

#[tokio::test]
async fn seeded_storage_serves_demo_directory() {
    let storage = Storage::seeded(fixed_now()).expect("seed");

    let mentors = storage.mentors.list_mentors().await.unwrap();
    let names: Vec<&str> = mentors.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Sarah Chen", "Marcus Rodriguez", "Dr. Elena Volkov"]);

    let marcus = storage.mentors.get_mentor(&MentorId::new("2")).await.unwrap();
    assert_eq!(marcus.company, "BMW");
    assert!(marcus.portfolio_url.is_none());
    assert_eq!(marcus.availability.weekly_slot_count(), 12);

    assert!(matches!(
        storage.mentors.get_mentor(&MentorId::new("42")).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn seeded_storage_serves_student_records() {
    let now = fixed_now();
    let storage = Storage::seeded(now).expect("seed");
    let student = StudentId::new(DEMO_STUDENT);

    let record = storage.progress.get_progress(&student).await.unwrap();
    assert_eq!(record.completed_lessons.len(), 5);
    assert_eq!(record.streak, 9);

    let sessions = storage.sessions.sessions_for_student(&student).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions[0].scheduled_time < sessions[1].scheduled_time);

    let deadlines = storage
        .progress
        .upcoming_deadlines(&student, now + Duration::days(5))
        .await
        .unwrap();
    assert_eq!(deadlines.len(), 1);
    assert_eq!(deadlines[0].title, "Silhouette portfolio upload");

    let submission = storage
        .feedback
        .get_submission(&SubmissionId::new("sub1"))
        .await
        .unwrap();
    assert_eq!(submission.files.total(), 2);
    let analysis = storage.feedback.get_analysis(&submission.id).await.unwrap();
    assert_eq!(analysis.confidence.value(), 87);

    let feedback = storage.feedback.feedback_for_student(&student).await.unwrap();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].id, FeedbackId::new("fb1"));
}

#[tokio::test]
async fn unknown_student_has_no_records() {
    let storage = Storage::seeded(fixed_now()).expect("seed");
    let stranger = StudentId::new("student404");

    assert!(matches!(
        storage.progress.get_progress(&stranger).await,
        Err(StorageError::NotFound)
    ));
    assert!(storage
        .sessions
        .sessions_for_student(&stranger)
        .await
        .unwrap()
        .is_empty());
    assert!(storage
        .progress
        .upcoming_deadlines(&stranger, fixed_now())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn empty_storage_starts_blank() {
    let storage = Storage::in_memory();
    assert!(storage.mentors.list_mentors().await.unwrap().is_empty());
    assert!(storage.portfolio.list_items().await.unwrap().is_empty());
}
