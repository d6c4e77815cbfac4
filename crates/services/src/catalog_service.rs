use std::collections::BTreeSet;

use studio_core::catalog::{Catalog, LessonLocation};
use studio_core::model::{Lesson, LessonId, Level};
use studio_core::progress::{self, LevelTotals};

/// A level card on the curriculum page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOverview<'a> {
    pub level: &'a Level,
    pub totals: LevelTotals,
    /// Percent of this level's lessons the student completed.
    pub completion: f64,
}

/// Everything the lesson page shows around one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonView<'a> {
    pub location: LessonLocation<'a>,
    pub completed: bool,
    /// Prerequisites not yet completed, resolved to lessons, in declared order.
    pub missing_prerequisites: Vec<&'a Lesson>,
    pub previous: Option<LessonLocation<'a>>,
    pub next: Option<LessonLocation<'a>>,
}

impl LessonView<'_> {
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.missing_prerequisites.is_empty()
    }
}

/// Read-only queries over the curriculum, joined with a student's completed set.
#[derive(Debug, Clone, Copy)]
pub struct CatalogService {
    catalog: &'static Catalog,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(studio_core::curriculum())
    }
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    #[must_use]
    pub fn overall_completion(&self, completed: &BTreeSet<LessonId>) -> f64 {
        progress::completion_percent(self.catalog, completed)
    }

    #[must_use]
    pub fn level_overviews(&self, completed: &BTreeSet<LessonId>) -> Vec<LevelOverview<'static>> {
        self.catalog
            .levels()
            .iter()
            .map(|level| LevelOverview {
                level,
                totals: progress::level_totals(level),
                completion: progress::level_completion_percent(level, completed),
            })
            .collect()
    }

    /// The lesson page for `lesson_id`, or `None` if the catalog has no such lesson.
    #[must_use]
    pub fn lesson_view(
        &self,
        lesson_id: &str,
        completed: &BTreeSet<LessonId>,
    ) -> Option<LessonView<'static>> {
        let catalog = self.catalog;
        let location = catalog.find_lesson(lesson_id)?;
        let missing_prerequisites = catalog
            .missing_prerequisites(location.lesson, completed)
            .into_iter()
            .filter_map(|id| catalog.find_lesson(id.as_str()))
            .map(|found| found.lesson)
            .collect();

        Some(LessonView {
            location,
            completed: completed.contains(lesson_id),
            missing_prerequisites,
            previous: catalog.previous_lesson(lesson_id),
            next: catalog.next_lesson(lesson_id),
        })
    }
}
