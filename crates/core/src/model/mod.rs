mod contact;
mod curriculum;
mod feedback;
mod ids;
mod kind;
mod mentor;
mod portfolio;
mod progress;
mod score;

pub use ids::{
    DeadlineId, FeedbackId, LessonId, LevelId, MentorId, MentorshipSessionId, ParseIdError,
    PortfolioItemId, StudentId, SubmissionId, TermId,
};
pub use kind::ParseKindError;
pub use score::{Score, ScoreError};

pub use contact::{ContactError, ContactForm, ContactRequest};
pub use curriculum::{Assessment, AssessmentKind, Lesson, Level, LevelColor, Term};
pub use feedback::{
    AiAnalysisResult, AiFeedback, AnalysisFindings, AnalysisRecommendations, FeedbackNotes,
    NextSteps, QualityMetrics, ScoreBand, SkillLevel, Submission, SubmissionFiles,
    SubmissionStatus, TechnicalAssessment,
};
pub use mentor::{Availability, ExpertMentor, MentorshipSession, SessionStatus, SessionType};
pub use portfolio::{
    PortfolioCategory, PortfolioDraft, PortfolioDraftError, PortfolioItem, PortfolioPatch,
};
pub use progress::{Deadline, DeadlineKind, ProgressRecord};
