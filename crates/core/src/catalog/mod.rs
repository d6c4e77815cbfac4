//! The curriculum catalog: an immutable Level → Term → Lesson hierarchy.
//!
//! The built-in catalog is constructed once per process by [`curriculum`] and
//! only ever handed out by shared reference, so it can be read from any thread
//! without synchronization.

mod data;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{Lesson, LessonId, Level, LevelId, Term, TermId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate level id: {0}")]
    DuplicateLevel(LevelId),

    #[error("duplicate term id {term} in level {level}")]
    DuplicateTerm { level: LevelId, term: TermId },

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(LessonId),

    #[error("lesson {lesson} requires unknown lesson {prerequisite}")]
    UnknownPrerequisite {
        lesson: LessonId,
        prerequisite: LessonId,
    },

    #[error("lesson {lesson} has an invalid url: {url}")]
    InvalidUrl { lesson: LessonId, url: String },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// A lesson together with the level and term that contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonLocation<'a> {
    pub level: &'a Level,
    pub term: &'a Term,
    pub lesson: &'a Lesson,
}

/// Position of a lesson: indices of its level, term and lesson.
type Slot = (usize, usize, usize);

/// Validated curriculum hierarchy with a lesson index in progression order.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
    order: Vec<Slot>,
    index: HashMap<LessonId, usize>,
}

impl Catalog {
    /// Build a catalog from levels in progression order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a level id repeats, a term id repeats within
    /// its level, a lesson id repeats anywhere, or a prerequisite names a
    /// lesson that is not part of the catalog.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        let mut level_ids = HashSet::new();
        let mut order = Vec::new();
        let mut index = HashMap::new();

        for (li, level) in levels.iter().enumerate() {
            if !level_ids.insert(level.id.clone()) {
                return Err(CatalogError::DuplicateLevel(level.id.clone()));
            }

            let mut term_ids = HashSet::new();
            for (ti, term) in level.terms.iter().enumerate() {
                if !term_ids.insert(term.id.clone()) {
                    return Err(CatalogError::DuplicateTerm {
                        level: level.id.clone(),
                        term: term.id.clone(),
                    });
                }

                for (si, lesson) in term.lessons.iter().enumerate() {
                    if index.insert(lesson.id.clone(), order.len()).is_some() {
                        return Err(CatalogError::DuplicateLesson(lesson.id.clone()));
                    }
                    order.push((li, ti, si));
                }
            }
        }

        let catalog = Self {
            levels,
            order,
            index,
        };

        for lesson in catalog.lessons() {
            if let Some(missing) = lesson
                .prerequisites
                .iter()
                .find(|prerequisite| !catalog.contains_lesson(prerequisite.as_str()))
            {
                return Err(CatalogError::UnknownPrerequisite {
                    lesson: lesson.id.clone(),
                    prerequisite: missing.clone(),
                });
            }
        }

        Ok(catalog)
    }

    /// The built-in automotive design curriculum.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in data is inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::levels()?)
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Every lesson, ordered by level, then term, then position in the term.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.order.iter().map(|&slot| self.slot(slot).lesson)
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn contains_lesson(&self, lesson_id: &str) -> bool {
        self.index.contains_key(lesson_id)
    }

    /// Exact-match lookup of a level.
    #[must_use]
    pub fn level_by_id(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == level_id)
    }

    /// Looks the level up first, then the term inside it.
    #[must_use]
    pub fn term_by_id(&self, level_id: &str, term_id: &str) -> Option<&Term> {
        self.level_by_id(level_id)?.term(term_id)
    }

    #[must_use]
    pub fn lesson_by_id(&self, level_id: &str, term_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.term_by_id(level_id, term_id)?.lesson(lesson_id)
    }

    /// Locate a lesson by its id alone.
    #[must_use]
    pub fn find_lesson(&self, lesson_id: &str) -> Option<LessonLocation<'_>> {
        let position = *self.index.get(lesson_id)?;
        Some(self.slot(self.order[position]))
    }

    /// The lesson after `lesson_id` in progression order, crossing term and
    /// level boundaries.
    #[must_use]
    pub fn next_lesson(&self, lesson_id: &str) -> Option<LessonLocation<'_>> {
        let position = *self.index.get(lesson_id)?;
        self.order.get(position + 1).map(|&slot| self.slot(slot))
    }

    #[must_use]
    pub fn previous_lesson(&self, lesson_id: &str) -> Option<LessonLocation<'_>> {
        let position = *self.index.get(lesson_id)?;
        let previous = position.checked_sub(1)?;
        Some(self.slot(self.order[previous]))
    }

    /// Prerequisites of `lesson` that are not in `completed`, in declared order.
    #[must_use]
    pub fn missing_prerequisites<'a>(
        &self,
        lesson: &'a Lesson,
        completed: &BTreeSet<LessonId>,
    ) -> Vec<&'a LessonId> {
        lesson
            .prerequisites
            .iter()
            .filter(|prerequisite| !completed.contains(prerequisite.as_str()))
            .collect()
    }

    fn slot(&self, (li, ti, si): Slot) -> LessonLocation<'_> {
        let level = &self.levels[li];
        let term = &level.terms[ti];
        LessonLocation {
            level,
            term,
            lesson: &term.lessons[si],
        }
    }
}

static CURRICULUM: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::builtin().expect("built-in curriculum should be consistent"));

/// The process-wide curriculum, built on first use.
///
/// # Panics
///
/// Panics if the built-in curriculum data fails validation.
#[must_use]
pub fn curriculum() -> &'static Catalog {
    &CURRICULUM
}

/// Level of the built-in curriculum with the given id.
#[must_use]
pub fn level_by_id(level_id: &str) -> Option<&'static Level> {
    curriculum().level_by_id(level_id)
}

#[must_use]
pub fn term_by_id(level_id: &str, term_id: &str) -> Option<&'static Term> {
    curriculum().term_by_id(level_id, term_id)
}

#[must_use]
pub fn lesson_by_id(level_id: &str, term_id: &str, lesson_id: &str) -> Option<&'static Lesson> {
    curriculum().lesson_by_id(level_id, term_id, lesson_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssessmentKind, LevelColor};

    fn lesson(id: &str, prerequisites: &[&str]) -> Lesson {
        Lesson {
            id: LessonId::new(id),
            title: id.to_uppercase(),
            description: String::new(),
            duration: "1 hour".into(),
            skills: vec![],
            prerequisites: prerequisites.iter().copied().map(LessonId::new).collect(),
            equipment: vec![],
            video_url: None,
            document_url: None,
            interactive_content: None,
            assessment: None,
        }
    }

    fn term(id: &str, lessons: Vec<Lesson>) -> Term {
        Term {
            id: TermId::new(id),
            title: id.into(),
            description: String::new(),
            duration: "4 weeks".into(),
            lessons,
            objectives: vec![],
        }
    }

    fn level(id: &str, terms: Vec<Term>) -> Level {
        Level {
            id: LevelId::new(id),
            name: id.into(),
            description: String::new(),
            student_status: String::new(),
            goal: String::new(),
            theme: None,
            terms,
            color: LevelColor::Green,
            icon: String::new(),
        }
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.levels().len(), 3);
        assert_eq!(catalog.lesson_count(), 17);
    }

    #[test]
    fn every_level_is_found_by_its_own_id() {
        for level in curriculum().levels() {
            assert_eq!(level_by_id(level.id.as_str()), Some(level));
        }
    }

    #[test]
    fn every_lesson_is_found_through_its_level_and_term() {
        for level in curriculum().levels() {
            for term in &level.terms {
                for lesson in &term.lessons {
                    let found =
                        lesson_by_id(level.id.as_str(), term.id.as_str(), lesson.id.as_str());
                    assert_eq!(found, Some(lesson));
                }
            }
        }
    }

    #[test]
    fn lookups_are_absent_for_unknown_ids() {
        assert!(level_by_id("nonexistent").is_none());
        assert!(level_by_id("Beginner").is_none());
        assert!(term_by_id("nonexistent", "term1").is_none());
        assert!(term_by_id("beginner", "term4").is_none());
        assert!(lesson_by_id("nonexistent", "term1", "lesson1-1").is_none());
        assert!(lesson_by_id("beginner", "term1", "lesson2-1").is_none());
        assert!(lesson_by_id("beginner", "term1", "lesson1").is_none());
    }

    #[test]
    fn term_lookup_resolves_within_level() {
        let term = term_by_id("intermediate", "term5").unwrap();
        assert_eq!(term.title, "Materials and Manufacturing");
        let lesson = lesson_by_id("advanced", "term7", "lesson7-1").unwrap();
        assert_eq!(lesson.assessment.as_ref().unwrap().kind, AssessmentKind::Model3d);
    }

    #[test]
    fn find_lesson_returns_location() {
        let location = curriculum().find_lesson("lesson5-1").unwrap();
        assert_eq!(location.level.id, "intermediate");
        assert_eq!(location.term.id, "term5");
        assert_eq!(location.lesson.title, "Materials Used in Automotive Design");
        assert!(curriculum().find_lesson("lesson0-0").is_none());
    }

    #[test]
    fn navigation_crosses_term_and_level_boundaries() {
        let catalog = curriculum();
        let next = catalog.next_lesson("lesson1-4").unwrap();
        assert_eq!(next.lesson.id, "lesson2-1");
        assert_eq!(next.term.id, "term2");

        let next = catalog.next_lesson("lesson3-2").unwrap();
        assert_eq!(next.level.id, "intermediate");
        assert_eq!(next.lesson.id, "lesson4-1");

        let previous = catalog.previous_lesson("lesson4-1").unwrap();
        assert_eq!(previous.lesson.id, "lesson3-2");
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let catalog = curriculum();
        assert!(catalog.previous_lesson("lesson1-1").is_none());
        assert!(catalog.next_lesson("lesson9-2").is_none());
        assert!(catalog.next_lesson("missing").is_none());
    }

    #[test]
    fn missing_prerequisites_in_declared_order() {
        let catalog = Catalog::new(vec![level(
            "l",
            vec![term(
                "t",
                vec![lesson("a", &[]), lesson("b", &[]), lesson("c", &["b", "a"])],
            )],
        )])
        .unwrap();
        let c = catalog.find_lesson("c").unwrap().lesson;

        let none = BTreeSet::new();
        let missing: Vec<_> = catalog
            .missing_prerequisites(c, &none)
            .into_iter()
            .map(LessonId::as_str)
            .collect();
        assert_eq!(missing, ["b", "a"]);

        let done: BTreeSet<_> = [LessonId::new("a"), LessonId::new("b")].into();
        assert!(catalog.missing_prerequisites(c, &done).is_empty());
    }

    #[test]
    fn rejects_duplicate_level() {
        let err = Catalog::new(vec![level("x", vec![]), level("x", vec![])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateLevel(LevelId::new("x")));
    }

    #[test]
    fn same_term_id_is_allowed_in_different_levels() {
        let catalog = Catalog::new(vec![
            level("a", vec![term("t", vec![lesson("a1", &[])])]),
            level("b", vec![term("t", vec![lesson("b1", &[])])]),
        ]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn rejects_duplicate_term_within_level() {
        let err = Catalog::new(vec![level("a", vec![term("t", vec![]), term("t", vec![])])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTerm { .. }));
    }

    #[test]
    fn rejects_duplicate_lesson_across_levels() {
        let err = Catalog::new(vec![
            level("a", vec![term("t1", vec![lesson("same", &[])])]),
            level("b", vec![term("t2", vec![lesson("same", &[])])]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateLesson(LessonId::new("same")));
    }

    #[test]
    fn rejects_unknown_prerequisite() {
        let err = Catalog::new(vec![level(
            "a",
            vec![term("t", vec![lesson("one", &["ghost"])])],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownPrerequisite {
                lesson: LessonId::new("one"),
                prerequisite: LessonId::new("ghost"),
            }
        );
    }
}
