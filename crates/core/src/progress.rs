//! Read-only statistics derived from a [`ProgressRecord`] and the catalog.
//!
//! Every function here is total: malformed or missing inputs fall back to the
//! named defaults below instead of failing. Nothing is cached; callers
//! recompute on every read.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::model::{LessonId, Level, ProgressRecord, Score};

/// Weeks assumed for a term whose duration label has no leading number.
pub const DEFAULT_TERM_WEEKS: u32 = 4;

/// Score reported for a skill that has not been assessed yet.
pub const UNASSESSED_SKILL_SCORE: Score = Score::ZERO;

/// Number of lessons across every term of every level.
#[must_use]
pub fn total_lessons(catalog: &Catalog) -> usize {
    catalog
        .levels()
        .iter()
        .map(level_lesson_count)
        .sum()
}

/// Percentage of catalog lessons present in `completed`, in `[0, 100]`.
///
/// Identifiers that are not part of the catalog are ignored. An empty catalog
/// yields 0.
#[must_use]
pub fn completion_percent(catalog: &Catalog, completed: &BTreeSet<LessonId>) -> f64 {
    let total = total_lessons(catalog);
    let done = completed
        .iter()
        .filter(|id| catalog.contains_lesson(id.as_str()))
        .count();
    percent(done, total)
}

/// Completion restricted to the lessons of one level.
#[must_use]
pub fn level_completion_percent(level: &Level, completed: &BTreeSet<LessonId>) -> f64 {
    let total = level_lesson_count(level);
    let done = level
        .lessons()
        .filter(|lesson| completed.contains(lesson.id.as_str()))
        .count();
    percent(done, total)
}

#[allow(clippy::cast_precision_loss)]
fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (done as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Score recorded for `skill`, or [`UNASSESSED_SKILL_SCORE`] when absent.
#[must_use]
pub fn skill_score(record: &ProgressRecord, skill: &str) -> Score {
    record
        .skill_scores
        .get(skill)
        .copied()
        .unwrap_or(UNASSESSED_SKILL_SCORE)
}

/// Leading integer of a duration label such as "4 weeks" or "12 Weeks".
///
/// Leading whitespace and a `+` sign are skipped. Labels without leading
/// digits give [`DEFAULT_TERM_WEEKS`]. So do negative labels ("-3 weeks")
/// and values too large for `u32`; the number is never returned as-is
/// in those cases.
#[must_use]
pub fn parse_duration_weeks(label: &str) -> u32 {
    let rest = label.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse().unwrap_or(DEFAULT_TERM_WEEKS)
}

/// Size of a level: term count, lesson count and estimated weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelTotals {
    pub terms: usize,
    pub lessons: usize,
    pub weeks: u32,
}

#[must_use]
pub fn level_totals(level: &Level) -> LevelTotals {
    LevelTotals {
        terms: level.terms.len(),
        lessons: level_lesson_count(level),
        weeks: level
            .terms
            .iter()
            .map(|term| parse_duration_weeks(&term.duration))
            .sum(),
    }
}

fn level_lesson_count(level: &Level) -> usize {
    level.terms.iter().map(|term| term.lessons.len()).sum()
}

/// Sum of minutes spent across all lessons.
#[must_use]
pub fn total_minutes(record: &ProgressRecord) -> u64 {
    record.time_spent.values().map(|m| u64::from(*m)).sum()
}

//
// ─── SKILL CATEGORIES ──────────────────────────────────────────────────────────
//

/// A named group of tracked skills shown together on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Sketching",
        skills: &["Line Quality", "Perspective", "Composition"],
    },
    SkillCategory {
        name: "Digital Design",
        skills: &["CAD Modeling", "Rendering", "Visualization"],
    },
    SkillCategory {
        name: "Materials",
        skills: &["Material Science", "Manufacturing", "Sustainability"],
    },
    SkillCategory {
        name: "Professional",
        skills: &["Presentation", "Portfolio", "Communication"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategoryScores {
    pub name: &'static str,
    pub skills: Vec<(&'static str, Score)>,
    /// Mean of the skill scores, unassessed skills counting as zero.
    pub average: f64,
}

#[must_use]
pub fn skill_category_scores(record: &ProgressRecord) -> Vec<SkillCategoryScores> {
    SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let skills: Vec<_> = category
                .skills
                .iter()
                .map(|skill| (*skill, skill_score(record, skill)))
                .collect();
            let sum: u32 = skills.iter().map(|(_, s)| u32::from(s.value())).sum();
            let average = if skills.is_empty() {
                0.0
            } else {
                f64::from(sum) / skills.len() as f64
            };
            SkillCategoryScores {
                name: category.name,
                skills,
                average,
            }
        })
        .collect()
}

//
// ─── STREAK ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreakBand {
    /// 30 days or more.
    OnFire,
    /// 7 to 29 days.
    Steady,
    Building,
}

impl StreakBand {
    #[must_use]
    pub fn for_days(days: u32) -> Self {
        match days {
            30.. => Self::OnFire,
            7..=29 => Self::Steady,
            _ => Self::Building,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnFire => "on-fire",
            Self::Steady => "steady",
            Self::Building => "building",
        }
    }
}
