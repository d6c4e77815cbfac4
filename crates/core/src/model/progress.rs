use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::model::ids::{DeadlineId, LessonId, LevelId, StudentId, TermId};
use crate::model::kind::ParseKindError;
use crate::model::score::Score;

/// A student's completion and skill state, supplied from outside the catalog.
///
/// Only read by the aggregator; nothing in this crate mutates a record it
/// did not build itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub student_id: StudentId,
    pub current_level: LevelId,
    pub current_term: TermId,
    #[serde(default)]
    pub completed_lessons: BTreeSet<LessonId>,
    /// Fractional or out-of-range scores are rounded and clamped on read.
    #[serde(default, deserialize_with = "lenient_scores")]
    pub skill_scores: BTreeMap<String, Score>,
    /// Minutes spent per lesson, rounded to whole minutes on read.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub time_spent: BTreeMap<LessonId, u32>,
    #[serde(default)]
    pub achievements: BTreeSet<String>,
    /// Consecutive active days.
    #[serde(default)]
    pub streak: u32,
    pub last_activity: DateTime<Utc>,
}

impl ProgressRecord {
    /// A record with nothing completed yet.
    #[must_use]
    pub fn new(
        student_id: StudentId,
        current_level: LevelId,
        current_term: TermId,
        last_activity: DateTime<Utc>,
    ) -> Self {
        Self {
            student_id,
            current_level,
            current_term,
            completed_lessons: BTreeSet::new(),
            skill_scores: BTreeMap::new(),
            time_spent: BTreeMap::new(),
            achievements: BTreeSet::new(),
            streak: 0,
            last_activity,
        }
    }

    #[must_use]
    pub fn has_completed(&self, lesson_id: &str) -> bool {
        self.completed_lessons.contains(lesson_id)
    }

    /// Records a lesson as completed. Returns `false` if it already was.
    pub fn mark_completed(&mut self, lesson_id: LessonId) -> bool {
        self.completed_lessons.insert(lesson_id)
    }
}

fn lenient_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(skill, value)| (skill, Score::saturating(value)))
        .collect())
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<BTreeMap<LessonId, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<LessonId, f64>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(lesson, minutes)| (lesson, whole_minutes(minutes)))
        .collect())
}

/// Negative or non-finite durations count as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_minutes(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}

/// What an upcoming deadline is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    Lesson,
    Assignment,
    Session,
}

impl DeadlineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Assignment => "assignment",
            Self::Session => "session",
        }
    }
}

impl fmt::Display for DeadlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeadlineKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(Self::Lesson),
            "assignment" => Ok(Self::Assignment),
            "session" => Ok(Self::Session),
            _ => Err(ParseKindError::new("deadline kind", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub id: DeadlineId,
    pub title: String,
    pub due_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: DeadlineKind,
}
