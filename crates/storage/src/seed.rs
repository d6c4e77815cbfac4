//! Demo records for the in-memory backend: the mentor directory, a student's
//! sessions, a small portfolio, one progress record and one reviewed sketch.

use chrono::{DateTime, Duration, Utc, Weekday};
use std::collections::HashMap;
use studio_core::model::{
    AiAnalysisResult, AiFeedback, AnalysisFindings, AnalysisRecommendations, AssessmentKind,
    Availability, Deadline, DeadlineId, DeadlineKind, ExpertMentor, FeedbackId, FeedbackNotes,
    LessonId, LevelId, MentorId, MentorshipSession, MentorshipSessionId, NextSteps,
    PortfolioCategory, PortfolioItem, PortfolioItemId, ProgressRecord, QualityMetrics, Score,
    SessionStatus, SessionType, SkillLevel, StudentId, Submission, SubmissionFiles, SubmissionId,
    SubmissionStatus, TechnicalAssessment, TermId,
};
use url::Url;
use uuid::Uuid;

use crate::repository::StorageError;

pub const DEMO_STUDENT: &str = "student1";

/// Everything the seeded backend starts with.
#[derive(Debug, Clone, Default)]
pub struct DemoData {
    pub mentors: Vec<ExpertMentor>,
    pub sessions: Vec<MentorshipSession>,
    pub portfolio: Vec<PortfolioItem>,
    pub progress: Vec<ProgressRecord>,
    pub deadlines: HashMap<StudentId, Vec<Deadline>>,
    pub submissions: Vec<Submission>,
    pub analyses: Vec<AiAnalysisResult>,
    pub feedback: Vec<AiFeedback>,
}

/// # Errors
///
/// Returns `StorageError::InvalidSeed` if a demo URL or score is malformed.
pub fn demo_data(now: DateTime<Utc>) -> Result<DemoData, StorageError> {
    let student = StudentId::new(DEMO_STUDENT);
    Ok(DemoData {
        mentors: mentors()?,
        sessions: sessions(&student, now)?,
        portfolio: portfolio(now),
        progress: vec![progress(&student, now)?],
        deadlines: HashMap::from([(student.clone(), deadlines(now))]),
        submissions: vec![submission(&student, now)],
        analyses: vec![analysis()?],
        feedback: vec![feedback(&student, now)?],
    })
}

fn url(raw: &str) -> Result<Url, StorageError> {
    Url::parse(raw).map_err(|e| StorageError::InvalidSeed(format!("{raw}: {e}")))
}

fn score(value: u32) -> Result<Score, StorageError> {
    Score::new(value).map_err(|e| StorageError::InvalidSeed(e.to_string()))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn weekdays(timezone: &str, long: &[&str], short: &[&str]) -> Availability {
    Availability::new(timezone)
        .with_day(Weekday::Mon, long)
        .with_day(Weekday::Tue, short)
        .with_day(Weekday::Wed, long)
        .with_day(Weekday::Thu, short)
        .with_day(Weekday::Fri, long)
}

fn mentors() -> Result<Vec<ExpertMentor>, StorageError> {
    Ok(vec![
        ExpertMentor {
            id: MentorId::new("1"),
            name: "Sarah Chen".into(),
            title: "Senior Exterior Designer".into(),
            company: "Tesla".into(),
            experience: 8,
            specialties: strings(&[
                "Electric Vehicle Design",
                "Sustainable Materials",
                "Aerodynamics",
            ]),
            availability: weekdays(
                "PST",
                &["9:00 AM", "2:00 PM", "4:00 PM"],
                &["10:00 AM", "3:00 PM"],
            )
            .with_day(Weekday::Fri, &["9:00 AM", "2:00 PM"]),
            rating: 4.9,
            bio: "Sarah has been designing electric vehicles for over 8 years, with expertise in sustainable design and aerodynamics. She's passionate about mentoring the next generation of automotive designers.".into(),
            profile_image: "/api/placeholder/100/100".into(),
            linkedin_url: Some(url("https://linkedin.com/in/sarahchen")?),
            portfolio_url: Some(url("https://sarahchen.design")?),
        },
        ExpertMentor {
            id: MentorId::new("2"),
            name: "Marcus Rodriguez".into(),
            title: "Lead Interior Designer".into(),
            company: "BMW".into(),
            experience: 12,
            specialties: strings(&["Luxury Interiors", "User Experience", "Ergonomics"]),
            availability: weekdays(
                "CET",
                &["10:00 AM", "3:00 PM"],
                &["9:00 AM", "2:00 PM", "4:00 PM"],
            ),
            rating: 4.8,
            bio: "Marcus brings 12 years of experience in luxury automotive interiors, focusing on user experience and ergonomic design. He's worked on award-winning BMW interiors.".into(),
            profile_image: "/api/placeholder/100/100".into(),
            linkedin_url: Some(url("https://linkedin.com/in/marcusrodriguez")?),
            portfolio_url: None,
        },
        ExpertMentor {
            id: MentorId::new("3"),
            name: "Dr. Elena Volkov".into(),
            title: "Design Director".into(),
            company: "Aston Martin".into(),
            experience: 15,
            specialties: strings(&["Concept Design", "Brand Identity", "Advanced Materials"]),
            availability: weekdays("GMT", &["9:00 AM", "2:00 PM"], &["10:00 AM", "3:00 PM"]),
            rating: 5.0,
            bio: "Dr. Volkov is a design director with 15 years of experience in luxury automotive design. She holds a PhD in Industrial Design and has led numerous award-winning projects.".into(),
            profile_image: "/api/placeholder/100/100".into(),
            linkedin_url: Some(url("https://linkedin.com/in/elenavolkov")?),
            portfolio_url: Some(url("https://elenavolkov.design")?),
        },
    ])
}

fn sessions(
    student: &StudentId,
    now: DateTime<Utc>,
) -> Result<Vec<MentorshipSession>, StorageError> {
    Ok(vec![
        MentorshipSession {
            id: MentorshipSessionId::new("1"),
            mentor_id: MentorId::new("1"),
            student_id: student.clone(),
            kind: SessionType::PortfolioReview,
            scheduled_time: now + Duration::days(3),
            duration: 60,
            status: SessionStatus::Scheduled,
            notes: Some("Portfolio review focusing on exterior design projects".into()),
            feedback: None,
            recording_url: None,
        },
        MentorshipSession {
            id: MentorshipSessionId::new("2"),
            mentor_id: MentorId::new("2"),
            student_id: student.clone(),
            kind: SessionType::SkillGuidance,
            scheduled_time: now - Duration::days(5),
            duration: 45,
            status: SessionStatus::Completed,
            notes: Some("Interior design techniques and ergonomics".into()),
            feedback: Some(
                "Great progress on interior design concepts. Focus on material selection and user experience.".into(),
            ),
            recording_url: Some(url("https://example.com/recording1")?),
        },
    ])
}

fn portfolio(now: DateTime<Utc>) -> Vec<PortfolioItem> {
    let item = |n: u128,
                title: &str,
                description: &str,
                category: PortfolioCategory,
                tags: &[&str],
                age_days: i64,
                (likes, views, comments): (u32, u32, u32)| {
        let created_at = now - Duration::days(age_days);
        PortfolioItem {
            id: PortfolioItemId::new(Uuid::from_u128(n)),
            title: title.into(),
            description: description.into(),
            category,
            images: vec![format!("portfolio/{n}.jpg")],
            videos: Vec::new(),
            documents: Vec::new(),
            tags: strings(tags),
            created_at,
            updated_at: created_at,
            is_public: true,
            likes,
            views,
            comments,
        }
    };

    vec![
        item(
            1,
            "Sports Car",
            "Low-slung coupe exploring a single continuous shoulder line.",
            PortfolioCategory::Exterior,
            &["coupe", "Silhouette"],
            21,
            (24, 310, 5),
        ),
        item(
            2,
            "Dashboard",
            "Driver-focused cockpit with a floating center display.",
            PortfolioCategory::Interior,
            &["ergonomics", "HMI"],
            14,
            (12, 140, 2),
        ),
        item(
            3,
            "Box Perspective Studies",
            "Two-point perspective warm-ups from the geometry lessons.",
            PortfolioCategory::Sketch,
            &["perspective", "warm-up"],
            30,
            (3, 45, 0),
        ),
        item(
            4,
            "Electric Crossover Concept",
            "Modular EV platform study with swappable body panels.",
            PortfolioCategory::Concept,
            &["EV", "modular"],
            3,
            (40, 520, 11),
        ),
    ]
}

fn progress(student: &StudentId, now: DateTime<Utc>) -> Result<ProgressRecord, StorageError> {
    let mut record = ProgressRecord::new(
        student.clone(),
        LevelId::new("beginner"),
        TermId::new("term2"),
        now - Duration::hours(6),
    );
    for lesson in ["lesson1-1", "lesson1-2", "lesson1-3", "lesson1-4", "lesson2-1"] {
        record.mark_completed(LessonId::new(lesson));
    }
    for (skill, value) in [
        ("Line Quality", 72),
        ("Perspective", 65),
        ("Composition", 58),
        ("CAD Modeling", 20),
        ("Presentation", 35),
    ] {
        record.skill_scores.insert(skill.into(), score(value)?);
    }
    for (lesson, minutes) in [
        ("lesson1-1", 90),
        ("lesson1-2", 120),
        ("lesson1-3", 105),
        ("lesson1-4", 150),
        ("lesson2-1", 80),
    ] {
        record.time_spent.insert(LessonId::new(lesson), minutes);
    }
    record.achievements = ["First Sketch", "Geometry Graduate", "Week Streak"]
        .into_iter()
        .map(String::from)
        .collect();
    record.streak = 9;
    Ok(record)
}

fn deadlines(now: DateTime<Utc>) -> Vec<Deadline> {
    vec![
        Deadline {
            id: DeadlineId::new("d1"),
            title: "Perspective Side View".into(),
            due_date: now + Duration::days(4),
            kind: DeadlineKind::Lesson,
        },
        Deadline {
            id: DeadlineId::new("d2"),
            title: "Silhouette portfolio upload".into(),
            due_date: now + Duration::days(9),
            kind: DeadlineKind::Assignment,
        },
    ]
}

fn submission(student: &StudentId, now: DateTime<Utc>) -> Submission {
    Submission {
        id: SubmissionId::new("sub1"),
        student_id: student.clone(),
        lesson_id: LessonId::new("lesson2-1"),
        kind: AssessmentKind::Sketch,
        files: SubmissionFiles {
            images: vec!["submissions/sub1-front.jpg".into(), "submissions/sub1-side.jpg".into()],
            ..SubmissionFiles::default()
        },
        description: Some("Line weight practice on a sedan side view".into()),
        timestamp: now - Duration::days(1),
        status: SubmissionStatus::Reviewed,
    }
}

fn analysis() -> Result<AiAnalysisResult, StorageError> {
    Ok(AiAnalysisResult {
        submission_id: SubmissionId::new("sub1"),
        findings: AnalysisFindings {
            detected_elements: strings(&["Wheel arches", "Beltline", "Greenhouse"]),
            common_mistakes: strings(&["Wheels drawn as circles in perspective"]),
            strengths: strings(&["Confident line weight variation"]),
            improvement_suggestions: strings(&["Ellipse the wheels to match the viewing angle"]),
        },
        quality_metrics: QualityMetrics {
            clarity: score(78)?,
            technique: score(70)?,
            creativity: score(82)?,
            accuracy: score(64)?,
        },
        recommendations: AnalysisRecommendations {
            next_lessons: vec![LessonId::new("lesson2-2")],
            practice_exercises: strings(&["Ellipse drills, 50 per day"]),
            skill_focus: strings(&["Perspective"]),
        },
        confidence: score(87)?,
    })
}

fn feedback(student: &StudentId, now: DateTime<Utc>) -> Result<AiFeedback, StorageError> {
    Ok(AiFeedback {
        id: FeedbackId::new("fb1"),
        lesson_id: LessonId::new("lesson2-1"),
        student_id: student.clone(),
        submission_id: SubmissionId::new("sub1"),
        timestamp: now - Duration::hours(20),
        overall_score: score(74)?,
        notes: FeedbackNotes {
            strengths: strings(&[
                "Line weight separates the silhouette from the details",
                "Good sense of stance",
            ]),
            improvements: strings(&["Wheel ellipses do not follow the perspective"]),
            specific_recommendations: strings(&["Redraw the side view with a 3 degree tilt"]),
        },
        technical_assessment: TechnicalAssessment {
            perspective: score(62)?,
            proportions: score(71)?,
            line_quality: score(84)?,
            composition: score(76)?,
            creativity: score(80)?,
        },
        skill_level: SkillLevel::Beginner,
        next_steps: NextSteps {
            recommended_lessons: vec![LessonId::new("lesson2-2"), LessonId::new("lesson9-9")],
            practice_areas: strings(&["Ellipses", "Side view proportions"]),
            resources: strings(&["How to Draw Cars Like a Pro"]),
        },
        ai_confidence: score(87)?,
    })
}
