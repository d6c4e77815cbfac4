use services::ProgressDashboard;
use studio_core::model::{Deadline, DeadlineKind, Score};
use studio_core::progress::{SkillCategoryScores, StreakBand};

use crate::vm::curriculum_vm::{bar_width, format_percent};
use crate::vm::time_fmt::{format_date, format_days_ago, format_minutes};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressTab {
    #[default]
    Overview,
    Skills,
    Achievements,
    Schedule,
}

impl ProgressTab {
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Skills,
        Self::Achievements,
        Self::Schedule,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Skills => "Skills",
            Self::Achievements => "Achievements",
            Self::Schedule => "Schedule",
        }
    }
}

/// A labelled 0-100 bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBarVm {
    pub label: String,
    pub value: u8,
    pub width: String,
}

impl ScoreBarVm {
    #[must_use]
    pub fn new(label: impl Into<String>, score: Score) -> Self {
        Self {
            label: label.into(),
            value: score.value(),
            width: bar_width(f64::from(score.value())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategoryVm {
    pub name: &'static str,
    pub average_label: String,
    pub skills: Vec<ScoreBarVm>,
}

impl From<&SkillCategoryScores> for SkillCategoryVm {
    fn from(category: &SkillCategoryScores) -> Self {
        Self {
            name: category.name,
            average_label: format!("{:.0}", category.average),
            skills: category
                .skills
                .iter()
                .map(|(name, score)| ScoreBarVm::new(*name, *score))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeadlineVm {
    pub title: String,
    pub due_label: String,
    pub kind_label: &'static str,
    pub kind_class: &'static str,
}

impl From<&Deadline> for DeadlineVm {
    fn from(deadline: &Deadline) -> Self {
        let (kind_label, kind_class) = match deadline.kind {
            DeadlineKind::Lesson => ("Lesson", "deadline deadline--lesson"),
            DeadlineKind::Assignment => ("Assignment", "deadline deadline--assignment"),
            DeadlineKind::Session => ("Session", "deadline deadline--session"),
        };
        Self {
            title: deadline.title.clone(),
            due_label: format_date(deadline.due_date),
            kind_label,
            kind_class,
        }
    }
}

#[must_use]
pub fn streak_class(band: StreakBand) -> &'static str {
    match band {
        StreakBand::OnFire => "streak streak--on-fire",
        StreakBand::Steady => "streak streak--steady",
        StreakBand::Building => "streak streak--building",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub student_id: String,
    pub completion_label: String,
    pub completion_width: String,
    pub lessons_label: String,
    pub level_name: String,
    pub term_title: String,
    pub time_label: String,
    pub streak_label: String,
    pub streak_class: &'static str,
    pub last_active_label: String,
    pub categories: Vec<SkillCategoryVm>,
    pub achievements: Vec<String>,
    pub deadlines: Vec<DeadlineVm>,
}

#[must_use]
pub fn map_progress(dashboard: &ProgressDashboard) -> ProgressVm {
    let record = &dashboard.record;
    let streak = record.streak;
    ProgressVm {
        student_id: record.student_id.as_str().to_owned(),
        completion_label: format_percent(dashboard.completion),
        completion_width: bar_width(dashboard.completion),
        lessons_label: format!(
            "{} / {} lessons",
            dashboard.completed_lessons, dashboard.total_lessons
        ),
        level_name: dashboard
            .current_level_name
            .clone()
            .unwrap_or_else(|| record.current_level.as_str().to_owned()),
        term_title: dashboard
            .current_term_title
            .clone()
            .unwrap_or_else(|| record.current_term.as_str().to_owned()),
        time_label: format_minutes(dashboard.total_minutes),
        streak_label: if streak == 1 {
            "1 day".to_owned()
        } else {
            format!("{streak} days")
        },
        streak_class: streak_class(dashboard.streak_band),
        last_active_label: format_days_ago(dashboard.days_since_activity),
        categories: dashboard
            .skill_categories
            .iter()
            .map(SkillCategoryVm::from)
            .collect(),
        achievements: record.achievements.iter().cloned().collect(),
        deadlines: dashboard.deadlines.iter().map(DeadlineVm::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    use chrono::Duration;
    use studio_core::curriculum;
    use studio_core::model::{DeadlineId, LessonId, LevelId, ProgressRecord, StudentId, TermId};
    use studio_core::time::fixed_now;

    fn record(streak: u32) -> ProgressRecord {
        ProgressRecord {
            student_id: StudentId::new("student1"),
            current_level: LevelId::new("beginner"),
            current_term: TermId::new("term2"),
            completed_lessons: ["lesson1-1", "lesson1-2"]
                .into_iter()
                .map(LessonId::new)
                .collect(),
            skill_scores: BTreeMap::from([("Line Control".to_owned(), Score::new(70).unwrap())]),
            time_spent: BTreeMap::from([
                (LessonId::new("lesson1-1"), 90),
                (LessonId::new("lesson1-2"), 45),
            ]),
            achievements: BTreeSet::from(["First Sketch".to_owned()]),
            streak,
            last_activity: fixed_now() - Duration::days(1),
        }
    }

    #[test]
    fn dashboard_maps_to_labels() {
        let deadline = Deadline {
            id: DeadlineId::new("d1"),
            title: "Perspective drills".into(),
            due_date: fixed_now() + Duration::days(2),
            kind: DeadlineKind::Assignment,
        };
        let dashboard =
            ProgressDashboard::build(curriculum(), record(9), vec![deadline], fixed_now());
        let vm = map_progress(&dashboard);

        assert_eq!(vm.lessons_label, "2 / 17 lessons");
        assert_eq!(vm.completion_label, "12%");
        assert_eq!(vm.level_name, "Beginner Level");
        assert_eq!(vm.time_label, "2h 15m");
        assert_eq!(vm.streak_label, "9 days");
        assert_eq!(vm.streak_class, "streak streak--steady");
        assert_eq!(vm.last_active_label, "Yesterday");
        assert_eq!(vm.achievements, ["First Sketch"]);
        assert_eq!(vm.deadlines[0].kind_label, "Assignment");
        assert_eq!(vm.deadlines[0].due_label, "Nov 16, 2023");
        assert_eq!(vm.categories.len(), 4);
    }

    #[test]
    fn single_day_streak_is_singular() {
        let dashboard = ProgressDashboard::build(curriculum(), record(1), Vec::new(), fixed_now());
        let vm = map_progress(&dashboard);
        assert_eq!(vm.streak_label, "1 day");
        assert_eq!(vm.streak_class, "streak streak--building");
    }

    #[test]
    fn score_bar_width_tracks_value() {
        let bar = ScoreBarVm::new("Perspective", Score::new(85).unwrap());
        assert_eq!(bar.value, 85);
        assert_eq!(bar.width, "width: 85.0%");
    }
}
