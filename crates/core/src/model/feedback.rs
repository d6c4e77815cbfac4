use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::curriculum::AssessmentKind;
use crate::model::ids::{FeedbackId, LessonId, StudentId, SubmissionId};
use crate::model::kind::ParseKindError;
use crate::model::score::Score;

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Processing,
    Reviewed,
    Completed,
}

impl SubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Reviewed => "reviewed",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Reviewed => "Reviewed",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "reviewed" => Ok(Self::Reviewed),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseKindError::new("submission status", s)),
        }
    }
}

/// File references attached to a submission. Contents are never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFiles {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
}

impl SubmissionFiles {
    #[must_use]
    pub fn total(&self) -> usize {
        self.images.len() + self.videos.len() + self.documents.len() + self.models.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub student_id: StudentId,
    pub lesson_id: LessonId,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
    pub files: SubmissionFiles,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: SubmissionStatus,
}

//
// ─── ANALYSIS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub clarity: Score,
    pub technique: Score,
    pub creativity: Score,
    pub accuracy: Score,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFindings {
    pub detected_elements: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecommendations {
    pub next_lessons: Vec<LessonId>,
    pub practice_exercises: Vec<String>,
    pub skill_focus: Vec<String>,
}

/// Pre-computed output of the analysis provider for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    pub submission_id: SubmissionId,
    pub findings: AnalysisFindings,
    pub quality_metrics: QualityMetrics,
    pub recommendations: AnalysisRecommendations,
    pub confidence: Score,
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseKindError::new("skill level", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAssessment {
    pub perspective: Score,
    pub proportions: Score,
    pub line_quality: Score,
    pub composition: Score,
    pub creativity: Score,
}

impl TechnicalAssessment {
    /// Named sub-scores in display order.
    #[must_use]
    pub fn scores(&self) -> [(&'static str, Score); 5] {
        [
            ("Perspective", self.perspective),
            ("Proportions", self.proportions),
            ("Line Quality", self.line_quality),
            ("Composition", self.composition),
            ("Creativity", self.creativity),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackNotes {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub specific_recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSteps {
    pub recommended_lessons: Vec<LessonId>,
    pub practice_areas: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFeedback {
    pub id: FeedbackId,
    pub lesson_id: LessonId,
    pub student_id: StudentId,
    pub submission_id: SubmissionId,
    pub timestamp: DateTime<Utc>,
    pub overall_score: Score,
    pub notes: FeedbackNotes,
    pub technical_assessment: TechnicalAssessment,
    pub skill_level: SkillLevel,
    pub next_steps: NextSteps,
    pub ai_confidence: Score,
}

//
// ─── SCORE BANDS ───────────────────────────────────────────────────────────────
//

/// Coarse grading of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// Below 60.
    NeedsPractice,
}

impl ScoreBand {
    pub const EXCELLENT_FROM: u8 = 80;
    pub const GOOD_FROM: u8 = 60;

    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            v if v >= Self::EXCELLENT_FROM => Self::Excellent,
            v if v >= Self::GOOD_FROM => Self::Good,
            _ => Self::NeedsPractice,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! You're demonstrating strong design skills.",
            Self::Good => "Good progress! Focus on the areas for improvement.",
            Self::NeedsPractice => "Keep practicing! Focus on the fundamentals and keep learning.",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsPractice => "needs-practice",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u32) -> Score {
        Score::new(v).unwrap()
    }

    #[test]
    fn score_band_boundaries() {
        assert_eq!(ScoreBand::for_score(score(100)), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(score(80)), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(score(79)), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(score(60)), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(score(59)), ScoreBand::NeedsPractice);
        assert_eq!(ScoreBand::for_score(Score::ZERO), ScoreBand::NeedsPractice);
    }

    #[test]
    fn technical_scores_keep_display_order() {
        let tech = TechnicalAssessment {
            perspective: score(70),
            proportions: score(65),
            line_quality: score(82),
            composition: score(75),
            creativity: score(88),
        };
        let names: Vec<_> = tech.scores().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Perspective", "Proportions", "Line Quality", "Composition", "Creativity"]
        );
        assert_eq!(tech.scores()[2].1.value(), 82);
    }

    #[test]
    fn submission_files_total_counts_every_bucket() {
        let files = SubmissionFiles {
            images: vec!["a.png".into(), "b.png".into()],
            videos: vec![],
            documents: vec!["notes.pdf".into()],
            models: vec!["car.obj".into()],
        };
        assert_eq!(files.total(), 4);
    }

    #[test]
    fn skill_level_parses() {
        assert_eq!("advanced".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
        assert!("expert".parse::<SkillLevel>().is_err());
    }
}
