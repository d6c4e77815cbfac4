use std::collections::BTreeSet;

use services::{LessonView, LevelOverview};
use studio_core::catalog::{Catalog, LessonLocation};
use studio_core::model::{Lesson, LessonId, LevelColor, Term};

use crate::vm::markdown::markdown_to_html;

/// Whole-number percentage label, e.g. "29%".
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Inline style for a progress bar fill.
#[must_use]
pub fn bar_width(percent: f64) -> String {
    format!("width: {:.1}%", percent.clamp(0.0, 100.0))
}

#[must_use]
pub fn level_color_class(color: LevelColor) -> &'static str {
    match color {
        LevelColor::Green => "level level--green",
        LevelColor::Yellow => "level level--yellow",
        LevelColor::Red => "level level--red",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub lessons: Vec<LessonRowVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelCardVm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub student_status: String,
    pub goal: String,
    pub icon: String,
    pub class: &'static str,
    pub totals_label: String,
    pub completion: f64,
    pub completion_label: String,
    pub terms: Vec<TermCardVm>,
}

fn map_term(term: &Term, completed: &BTreeSet<LessonId>) -> TermCardVm {
    TermCardVm {
        id: term.id.as_str().to_owned(),
        title: term.title.clone(),
        description: term.description.clone(),
        duration: term.duration.clone(),
        objectives: term.objectives.clone(),
        lessons: term
            .lessons
            .iter()
            .map(|lesson| LessonRowVm {
                id: lesson.id.as_str().to_owned(),
                title: lesson.title.clone(),
                duration: lesson.duration.clone(),
                completed: completed.contains(&lesson.id),
            })
            .collect(),
    }
}

#[must_use]
pub fn map_level_cards(
    overviews: &[LevelOverview<'_>],
    completed: &BTreeSet<LessonId>,
) -> Vec<LevelCardVm> {
    overviews
        .iter()
        .map(|overview| {
            let level = overview.level;
            let totals = overview.totals;
            LevelCardVm {
                id: level.id.as_str().to_owned(),
                name: level.name.clone(),
                description: level.description.clone(),
                student_status: level.student_status.clone(),
                goal: level.goal.clone(),
                icon: level.icon.clone(),
                class: level_color_class(level.color),
                totals_label: format!(
                    "{} terms · {} lessons · {} weeks",
                    totals.terms, totals.lessons, totals.weeks
                ),
                completion: overview.completion,
                completion_label: format_percent(overview.completion),
                terms: level.terms.iter().map(|term| map_term(term, completed)).collect(),
            }
        })
        .collect()
}

//
// ─── LESSON DETAIL ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonLinkVm {
    pub id: String,
    pub title: String,
}

impl From<&LessonLocation<'_>> for LessonLinkVm {
    fn from(location: &LessonLocation<'_>) -> Self {
        Self::from(location.lesson)
    }
}

impl From<&Lesson> for LessonLinkVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.as_str().to_owned(),
            title: lesson.title.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrerequisiteVm {
    pub id: String,
    /// Falls back to the id when the catalog does not know the lesson.
    pub title: String,
    pub met: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentVm {
    pub label: &'static str,
    pub criteria: Vec<String>,
    pub ai_feedback: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level_name: String,
    pub term_title: String,
    pub skills: Vec<String>,
    pub equipment: Vec<String>,
    pub prerequisites: Vec<PrerequisiteVm>,
    pub assessment: Option<AssessmentVm>,
    pub video_url: Option<String>,
    pub document_url: Option<String>,
    /// Sanitized HTML.
    pub interactive_html: Option<String>,
    pub completed: bool,
    pub unlocked: bool,
    pub previous: Option<LessonLinkVm>,
    pub next: Option<LessonLinkVm>,
}

#[must_use]
pub fn map_lesson_detail(catalog: &Catalog, view: &LessonView<'_>) -> LessonDetailVm {
    let lesson = view.location.lesson;
    let prerequisites = lesson
        .prerequisites
        .iter()
        .map(|id| PrerequisiteVm {
            id: id.as_str().to_owned(),
            title: catalog
                .find_lesson(id.as_str())
                .map_or_else(|| id.as_str().to_owned(), |found| found.lesson.title.clone()),
            met: !view.missing_prerequisites.iter().any(|missing| missing.id == *id),
        })
        .collect();

    LessonDetailVm {
        id: lesson.id.as_str().to_owned(),
        title: lesson.title.clone(),
        description: lesson.description.clone(),
        duration: lesson.duration.clone(),
        level_name: view.location.level.name.clone(),
        term_title: view.location.term.title.clone(),
        skills: lesson.skills.clone(),
        equipment: lesson.equipment.clone(),
        prerequisites,
        assessment: lesson.assessment.as_ref().map(|assessment| AssessmentVm {
            label: assessment.kind.label(),
            criteria: assessment.criteria.clone(),
            ai_feedback: assessment.ai_feedback,
        }),
        video_url: lesson.video_url.as_ref().map(ToString::to_string),
        document_url: lesson.document_url.as_ref().map(ToString::to_string),
        interactive_html: lesson.interactive_content.as_deref().map(markdown_to_html),
        completed: view.completed,
        unlocked: view.is_unlocked(),
        previous: view.previous.as_ref().map(LessonLinkVm::from),
        next: view.next.as_ref().map(LessonLinkVm::from),
    }
}
