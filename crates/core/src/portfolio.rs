//! Filtering and ordering of portfolio items for the portfolio manager.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::model::{ParseKindError, PortfolioCategory, PortfolioItem};

/// Selected category, or every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PortfolioCategory),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: PortfolioCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Descending creation time.
    #[default]
    Newest,
    /// Ascending creation time.
    Oldest,
    /// Descending likes + views.
    Popular,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Popular];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Popular => "Most Popular",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseKindError::new("sort order", s))
    }
}

/// Current filter bar state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioQuery {
    pub category: CategoryFilter,
    pub text: String,
    pub sort: SortOrder,
}

impl PortfolioQuery {
    /// Whether `item` passes both the category and the text filter.
    #[must_use]
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        self.category.matches(item.category) && matches_text(item, &self.text.to_lowercase())
    }
}

// `needle` must already be lowercase.
fn matches_text(item: &PortfolioItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Items passing `query`, ordered by its sort key.
///
/// Sorting is stable: items with equal keys keep their input order.
#[must_use]
pub fn filter_and_sort<'a>(items: &'a [PortfolioItem], query: &PortfolioQuery) -> Vec<&'a PortfolioItem> {
    let needle = query.text.to_lowercase();
    let mut view: Vec<&PortfolioItem> = items
        .iter()
        .filter(|item| query.category.matches(item.category) && matches_text(item, &needle))
        .collect();

    match query.sort {
        SortOrder::Newest => view.sort_by_key(|item| Reverse(item.created_at)),
        SortOrder::Oldest => view.sort_by_key(|item| item.created_at),
        SortOrder::Popular => view.sort_by_key(|item| Reverse(item.popularity())),
    }
    view
}

/// Item count per filter entry, `All` first, then each category.
#[must_use]
pub fn category_counts(items: &[PortfolioItem]) -> Vec<(CategoryFilter, usize)> {
    let mut counts = Vec::with_capacity(PortfolioCategory::ALL.len() + 1);
    counts.push((CategoryFilter::All, items.len()));
    for category in PortfolioCategory::ALL {
        let count = items.iter().filter(|item| item.category == category).count();
        counts.push((CategoryFilter::Only(category), count));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioItemId;
    use crate::time::fixed_now;
    use chrono::Duration;
    use uuid::Uuid;

    fn item(n: u128, category: PortfolioCategory, title: &str) -> PortfolioItem {
        let created = fixed_now() + Duration::days(i64::try_from(n).unwrap());
        PortfolioItem {
            id: PortfolioItemId::new(Uuid::from_u128(n)),
            title: title.to_owned(),
            description: String::new(),
            category,
            images: vec![],
            videos: vec![],
            documents: vec![],
            tags: vec![],
            created_at: created,
            updated_at: created,
            is_public: true,
            likes: 0,
            views: 0,
            comments: 0,
        }
    }

    fn titles<'a>(view: &[&'a PortfolioItem]) -> Vec<&'a str> {
        view.iter().map(|item| item.title.as_str()).collect()
    }

    fn sample() -> Vec<PortfolioItem> {
        vec![
            item(1, PortfolioCategory::Exterior, "Sports Car"),
            item(2, PortfolioCategory::Interior, "Dashboard"),
        ]
    }

    #[test]
    fn category_filter_keeps_matching_items() {
        let items = sample();
        let query = PortfolioQuery {
            category: CategoryFilter::Only(PortfolioCategory::Exterior),
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &query)), ["Sports Car"]);
    }

    #[test]
    fn all_keeps_every_item() {
        let items = sample();
        let view = filter_and_sort(&items, &PortfolioQuery::default());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let items = sample();
        let query = PortfolioQuery {
            text: "dash".into(),
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &query)), ["Dashboard"]);

        let query = PortfolioQuery {
            text: "SPORTS".into(),
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &query)), ["Sports Car"]);
    }

    #[test]
    fn text_filter_matches_description_and_tags() {
        let mut items = sample();
        items[0].description = "An aerodynamic coupe".into();
        items[1].tags = vec!["Luxury".into(), "Ergonomics".into()];

        let by_description = PortfolioQuery {
            text: "AERO".into(),
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &by_description)), ["Sports Car"]);

        let by_tag = PortfolioQuery {
            text: "ergo".into(),
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &by_tag)), ["Dashboard"]);
        assert!(by_tag.matches(&items[1]));
        assert!(!by_tag.matches(&items[0]));
    }

    #[test]
    fn filters_combine() {
        let items = sample();
        let query = PortfolioQuery {
            category: CategoryFilter::Only(PortfolioCategory::Exterior),
            text: "dash".into(),
            sort: SortOrder::Newest,
        };
        assert!(filter_and_sort(&items, &query).is_empty());
    }

    #[test]
    fn sorts_by_creation_time() {
        let items = vec![
            item(2, PortfolioCategory::Sketch, "middle"),
            item(1, PortfolioCategory::Sketch, "first"),
            item(3, PortfolioCategory::Sketch, "last"),
        ];
        let newest = PortfolioQuery::default();
        assert_eq!(titles(&filter_and_sort(&items, &newest)), ["last", "middle", "first"]);

        let oldest = PortfolioQuery {
            sort: SortOrder::Oldest,
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &oldest)), ["first", "middle", "last"]);
    }

    #[test]
    fn popular_sort_is_stable_on_ties() {
        let mut items = vec![
            item(1, PortfolioCategory::Concept, "a"),
            item(2, PortfolioCategory::Concept, "b"),
            item(3, PortfolioCategory::Concept, "c"),
            item(4, PortfolioCategory::Concept, "d"),
        ];
        (items[0].likes, items[0].views) = (10, 90);
        (items[1].likes, items[1].views) = (5, 300);
        (items[2].likes, items[2].views) = (60, 40);
        (items[3].likes, items[3].views) = (0, 100);

        let query = PortfolioQuery {
            sort: SortOrder::Popular,
            ..PortfolioQuery::default()
        };
        assert_eq!(titles(&filter_and_sort(&items, &query)), ["b", "a", "c", "d"]);
    }

    #[test]
    fn creation_time_ties_keep_input_order() {
        let mut items = vec![
            item(1, PortfolioCategory::Concept, "x"),
            item(1, PortfolioCategory::Concept, "y"),
        ];
        items[1].id = PortfolioItemId::new(Uuid::from_u128(99));
        for sort in SortOrder::ALL {
            let query = PortfolioQuery {
                sort,
                ..PortfolioQuery::default()
            };
            assert_eq!(titles(&filter_and_sort(&items, &query)), ["x", "y"], "{sort}");
        }
    }

    #[test]
    fn counts_per_category() {
        let mut items = sample();
        items.push(item(3, PortfolioCategory::Exterior, "Concept Supercar"));
        let counts = category_counts(&items);
        assert_eq!(counts[0], (CategoryFilter::All, 3));
        assert_eq!(
            counts[1],
            (CategoryFilter::Only(PortfolioCategory::Exterior), 2)
        );
        assert_eq!(
            counts[5],
            (CategoryFilter::Only(PortfolioCategory::Model3d), 0)
        );
    }

    #[test]
    fn filter_and_sort_strings_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "interior".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(PortfolioCategory::Interior)
        );
        assert!("boats".parse::<CategoryFilter>().is_err());
        assert_eq!("popular".parse::<SortOrder>().unwrap(), SortOrder::Popular);
        assert!("random".parse::<SortOrder>().is_err());
    }
}
