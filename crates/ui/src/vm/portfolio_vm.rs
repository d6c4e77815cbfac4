use studio_core::model::{PortfolioCategory, PortfolioItem, PortfolioItemId, PortfolioPatch};
use studio_core::portfolio::CategoryFilter;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioCardVm {
    pub id: PortfolioItemId,
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub tags: Vec<String>,
    pub created_label: String,
    pub stats_label: String,
    pub is_public: bool,
    pub visibility_label: &'static str,
    pub toggle_label: &'static str,
}

impl From<&PortfolioItem> for PortfolioCardVm {
    fn from(item: &PortfolioItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category,
            category_label: item.category.label(),
            icon: item.category.icon(),
            tags: item.tags.clone(),
            created_label: format_date(item.created_at),
            stats_label: format!(
                "♥ {} · 👁 {} · 💬 {}",
                item.likes, item.views, item.comments
            ),
            is_public: item.is_public,
            visibility_label: if item.is_public { "Public" } else { "Private" },
            toggle_label: if item.is_public { "Make private" } else { "Make public" },
        }
    }
}

#[must_use]
pub fn map_portfolio_cards(items: &[PortfolioItem]) -> Vec<PortfolioCardVm> {
    items.iter().map(PortfolioCardVm::from).collect()
}

/// Layout of the project collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const ALL: [Self; 2] = [Self::Grid, Self::List];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }

    #[must_use]
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Grid => "portfolio-grid",
            Self::List => "portfolio-list",
        }
    }

    #[must_use]
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Grid => "portfolio-card",
            Self::List => "portfolio-card portfolio-card--row",
        }
    }
}

/// Editable fields of a card, prefilled from the card itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditFormVm {
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub tags: String,
}

impl From<&PortfolioCardVm> for EditFormVm {
    fn from(card: &PortfolioCardVm) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            category: card.category,
            tags: card.tags.join(", "),
        }
    }
}

impl EditFormVm {
    /// Patch carrying only the fields that differ from `original`.
    #[must_use]
    pub fn into_patch(self, original: &PortfolioCardVm) -> PortfolioPatch {
        let before = Self::from(original);
        PortfolioPatch {
            title: (self.title != before.title).then_some(self.title),
            description: (self.description != before.description).then_some(self.description),
            category: (self.category != before.category).then_some(self.category),
            tags: (self.tags != before.tags).then_some(self.tags),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTabVm {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

#[must_use]
pub fn map_category_tabs(counts: &[(CategoryFilter, usize)]) -> Vec<CategoryTabVm> {
    counts
        .iter()
        .map(|&(filter, count)| CategoryTabVm {
            filter,
            label: filter.label(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::model::PortfolioCategory;
    use studio_core::time::fixed_now;

    fn item(is_public: bool) -> PortfolioItem {
        PortfolioItem {
            id: PortfolioItemId::generate(),
            title: "Sports Car".into(),
            description: "Low and wide".into(),
            category: PortfolioCategory::Exterior,
            images: vec![],
            videos: vec![],
            documents: vec![],
            tags: vec!["aero".into()],
            created_at: fixed_now(),
            updated_at: fixed_now(),
            is_public,
            likes: 24,
            views: 310,
            comments: 5,
        }
    }

    #[test]
    fn card_reflects_visibility() {
        let public = PortfolioCardVm::from(&item(true));
        assert_eq!(public.visibility_label, "Public");
        assert_eq!(public.toggle_label, "Make private");
        assert_eq!(public.category_label, "Exterior Design");
        assert_eq!(public.stats_label, "♥ 24 · 👁 310 · 💬 5");

        let private = PortfolioCardVm::from(&item(false));
        assert_eq!(private.visibility_label, "Private");
        assert_eq!(private.toggle_label, "Make public");
    }

    #[test]
    fn edit_form_patches_only_changed_fields() {
        let card = PortfolioCardVm::from(&item(true));
        let untouched = EditFormVm::from(&card);
        assert_eq!(untouched.tags, "aero");
        assert_eq!(untouched.clone().into_patch(&card), PortfolioPatch::default());

        let mut form = untouched;
        form.title = "Sports Car II".into();
        form.category = PortfolioCategory::Concept;
        form.tags = "aero, carbon".into();
        let patch = form.into_patch(&card);
        assert_eq!(patch.title.as_deref(), Some("Sports Car II"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.category, Some(PortfolioCategory::Concept));
        assert_eq!(patch.tags.as_deref(), Some("aero, carbon"));
    }

    #[test]
    fn view_mode_switches_layout_classes() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.container_class(), "portfolio-grid");
        assert_eq!(ViewMode::List.container_class(), "portfolio-list");
        assert_eq!(ViewMode::List.card_class(), "portfolio-card portfolio-card--row");
    }

    #[test]
    fn tabs_keep_count_order() {
        let tabs = map_category_tabs(&[
            (CategoryFilter::All, 3),
            (CategoryFilter::Only(PortfolioCategory::Sketch), 1),
        ]);
        assert_eq!(tabs[0].label, "All Projects");
        assert_eq!(tabs[0].count, 3);
        assert_eq!(tabs[1].label, "Sketches");
    }
}
