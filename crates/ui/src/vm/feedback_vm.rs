use services::FeedbackReport;
use studio_core::model::ScoreBand;

use crate::vm::markdown::markdown_to_html;
use crate::vm::progress_vm::ScoreBarVm;
use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackTab {
    #[default]
    Overview,
    Technical,
    NextSteps,
}

impl FeedbackTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Technical, Self::NextSteps];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Technical => "Technical Analysis",
            Self::NextSteps => "Next Steps",
        }
    }
}

#[must_use]
pub fn score_band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "score score--excellent",
        ScoreBand::Good => "score score--good",
        ScoreBand::NeedsPractice => "score score--needs-practice",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendedLessonVm {
    pub id: String,
    pub name: String,
    /// Only catalog lessons get a link.
    pub linkable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionVm {
    pub kind_label: &'static str,
    pub status_label: &'static str,
    pub files_label: String,
    /// Sanitized HTML.
    pub description_html: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisVm {
    pub confidence_label: String,
    pub quality: Vec<ScoreBarVm>,
    pub detected_elements: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub practice_exercises: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub overall: u8,
    pub band_class: &'static str,
    pub headline: &'static str,
    pub lesson_title: String,
    pub skill_level: &'static str,
    pub reviewed_label: String,
    pub confidence_label: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub specific_recommendations: Vec<String>,
    pub technical: Vec<ScoreBarVm>,
    pub recommended_lessons: Vec<RecommendedLessonVm>,
    pub practice_areas: Vec<String>,
    pub resources: Vec<String>,
    pub submission: Option<SubmissionVm>,
    pub analysis: Option<AnalysisVm>,
}

#[must_use]
pub fn map_feedback(report: &FeedbackReport) -> FeedbackVm {
    let feedback = &report.feedback;
    FeedbackVm {
        overall: feedback.overall_score.value(),
        band_class: score_band_class(report.band),
        headline: report.band.headline(),
        lesson_title: report
            .lesson_title
            .clone()
            .unwrap_or_else(|| feedback.lesson_id.as_str().to_owned()),
        skill_level: feedback.skill_level.label(),
        reviewed_label: format_datetime(feedback.timestamp),
        confidence_label: format!("AI confidence {}%", feedback.ai_confidence),
        strengths: feedback.notes.strengths.clone(),
        improvements: feedback.notes.improvements.clone(),
        specific_recommendations: feedback.notes.specific_recommendations.clone(),
        technical: feedback
            .technical_assessment
            .scores()
            .into_iter()
            .map(|(label, score)| ScoreBarVm::new(label, score))
            .collect(),
        recommended_lessons: report
            .recommended_lessons
            .iter()
            .map(|lesson| RecommendedLessonVm {
                id: lesson.id.as_str().to_owned(),
                name: lesson.display_name().to_owned(),
                linkable: lesson.title.is_some(),
            })
            .collect(),
        practice_areas: feedback.next_steps.practice_areas.clone(),
        resources: feedback.next_steps.resources.clone(),
        submission: report.submission.as_ref().map(|submission| SubmissionVm {
            kind_label: submission.kind.label(),
            status_label: submission.status.label(),
            files_label: match submission.files.total() {
                1 => "1 file".to_owned(),
                n => format!("{n} files"),
            },
            description_html: submission.description.as_deref().map(markdown_to_html),
        }),
        analysis: report.analysis.as_ref().map(|analysis| {
            let metrics = &analysis.quality_metrics;
            AnalysisVm {
                confidence_label: format!("Analysis confidence {}%", analysis.confidence),
                quality: vec![
                    ScoreBarVm::new("Clarity", metrics.clarity),
                    ScoreBarVm::new("Technique", metrics.technique),
                    ScoreBarVm::new("Creativity", metrics.creativity),
                    ScoreBarVm::new("Accuracy", metrics.accuracy),
                ],
                detected_elements: analysis.findings.detected_elements.clone(),
                common_mistakes: analysis.findings.common_mistakes.clone(),
                practice_exercises: analysis.recommendations.practice_exercises.clone(),
            }
        }),
    }
}
