use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::model::ids::{LessonId, LevelId, TermId};
use crate::model::kind::ParseKindError;

//
// ─── ASSESSMENT ────────────────────────────────────────────────────────────────
//

/// The kind of work a lesson's assessment asks for.
///
/// Submissions carry the same kind, so it doubles as the submission type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentKind {
    #[serde(rename = "sketch")]
    Sketch,
    #[serde(rename = "3d_model")]
    Model3d,
    #[serde(rename = "presentation")]
    Presentation,
    #[serde(rename = "portfolio")]
    Portfolio,
}

impl AssessmentKind {
    pub const ALL: [Self; 4] = [
        Self::Sketch,
        Self::Model3d,
        Self::Presentation,
        Self::Portfolio,
    ];

    /// Wire form, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sketch => "sketch",
            Self::Model3d => "3d_model",
            Self::Presentation => "presentation",
            Self::Portfolio => "portfolio",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sketch => "Sketch",
            Self::Model3d => "3D Model",
            Self::Presentation => "Presentation",
            Self::Portfolio => "Portfolio",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::new("assessment kind", s))
    }
}

/// Grading rubric attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub kind: AssessmentKind,
    pub criteria: Vec<String>,
    /// Whether submissions for this assessment receive automated feedback.
    pub ai_feedback: bool,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// Atomic unit of instructional content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    /// Free-text label, e.g. "2.5 hours".
    pub duration: String,
    pub skills: Vec<String>,
    /// Lessons that should be completed first, in declared order.
    pub prerequisites: Vec<LessonId>,
    pub equipment: Vec<String>,
    pub video_url: Option<Url>,
    pub document_url: Option<Url>,
    pub interactive_content: Option<String>,
    pub assessment: Option<Assessment>,
}

impl Lesson {
    #[must_use]
    pub fn has_ai_feedback(&self) -> bool {
        self.assessment.as_ref().is_some_and(|a| a.ai_feedback)
    }
}

//
// ─── TERM ──────────────────────────────────────────────────────────────────────
//

/// A teaching module grouping lessons inside a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub title: String,
    pub description: String,
    /// Free-text label, e.g. "4 weeks".
    pub duration: String,
    pub lessons: Vec<Lesson>,
    pub objectives: Vec<String>,
}

impl Term {
    #[must_use]
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Color tag used to badge a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelColor {
    Green,
    Yellow,
    Red,
}

impl LevelColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl FromStr for LevelColor {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            _ => Err(ParseKindError::new("level color", s)),
        }
    }
}

/// A top-level proficiency tier. Term order is progression order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub description: String,
    pub student_status: String,
    pub goal: String,
    pub theme: Option<String>,
    pub terms: Vec<Term>,
    pub color: LevelColor,
    pub icon: String,
}

impl Level {
    #[must_use]
    pub fn term(&self, term_id: &str) -> Option<&Term> {
        self.terms.iter().find(|term| term.id == term_id)
    }

    /// Lessons of every term, in progression order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.terms.iter().flat_map(|term| term.lessons.iter())
    }
}
