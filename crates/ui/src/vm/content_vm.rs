use studio_core::content::{COURSES, Course, GALLERY, GalleryItem, GalleryTone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub weeks: u32,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title,
            description: course.description,
            duration: course.duration,
            level: course.level,
            weeks: course.weeks(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryTileVm {
    pub title: &'static str,
    pub category: &'static str,
    pub class: &'static str,
}

impl From<&GalleryItem> for GalleryTileVm {
    fn from(item: &GalleryItem) -> Self {
        Self {
            title: item.title,
            category: item.category,
            class: match item.tone() {
                GalleryTone::Accent => "gallery-tile gallery-tile--accent",
                GalleryTone::Blend => "gallery-tile gallery-tile--blend",
                GalleryTone::Primary => "gallery-tile gallery-tile--primary",
            },
        }
    }
}

#[must_use]
pub fn course_cards() -> Vec<CourseCardVm> {
    COURSES.iter().map(CourseCardVm::from).collect()
}

#[must_use]
pub fn gallery_tiles() -> Vec<GalleryTileVm> {
    GALLERY.iter().map(GalleryTileVm::from).collect()
}

/// Total weeks across every course offering.
#[must_use]
pub fn total_course_weeks(cards: &[CourseCardVm]) -> u32 {
    cards.iter().map(|card| card.weeks).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courses_parse_their_week_counts() {
        let cards = course_cards();
        let weeks: Vec<u32> = cards.iter().map(|c| c.weeks).collect();
        assert_eq!(weeks, [12, 10, 14]);
        assert_eq!(total_course_weeks(&cards), 36);
    }

    #[test]
    fn gallery_tones_cycle_by_id() {
        let tiles = gallery_tiles();
        assert_eq!(tiles.len(), 6);
        // ids 1..=6: 3 and 6 are accents, 2 and 4 blend.
        assert_eq!(tiles[0].class, "gallery-tile gallery-tile--primary");
        assert_eq!(tiles[1].class, "gallery-tile gallery-tile--blend");
        assert_eq!(tiles[2].class, "gallery-tile gallery-tile--accent");
        assert_eq!(tiles[5].class, "gallery-tile gallery-tile--accent");
    }
}
