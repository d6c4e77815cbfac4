use std::sync::Arc;

use storage::repository::PortfolioRepository;
use studio_core::model::{PortfolioDraft, PortfolioItem, PortfolioItemId, PortfolioPatch};
use studio_core::portfolio::{self, CategoryFilter, PortfolioQuery};

use crate::error::PortfolioServiceError;
use crate::Clock;

/// Portfolio manager: the filtered listing plus add, edit, delete and
/// visibility toggles.
#[derive(Clone)]
pub struct PortfolioService {
    clock: Clock,
    items: Arc<dyn PortfolioRepository>,
}

impl PortfolioService {
    #[must_use]
    pub fn new(clock: Clock, items: Arc<dyn PortfolioRepository>) -> Self {
        Self { clock, items }
    }

    /// Items matching `query`, in its sort order.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Storage` if repository access fails.
    pub async fn list(
        &self,
        query: &PortfolioQuery,
    ) -> Result<Vec<PortfolioItem>, PortfolioServiceError> {
        let items = self.items.list_items().await?;
        Ok(portfolio::filter_and_sort(&items, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Storage` if repository access fails.
    pub async fn category_counts(
        &self,
    ) -> Result<Vec<(CategoryFilter, usize)>, PortfolioServiceError> {
        let items = self.items.list_items().await?;
        Ok(portfolio::category_counts(&items))
    }

    /// Validate a draft and store it as a new item with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Draft` for validation failures.
    /// Returns `PortfolioServiceError::Storage` if persistence fails.
    pub async fn add(&self, draft: PortfolioDraft) -> Result<PortfolioItem, PortfolioServiceError> {
        let item = draft.validate(PortfolioItemId::generate(), self.clock.now())?;
        self.items.insert_item(&item).await?;
        tracing::info!(id = %item.id, category = item.category.as_str(), "portfolio item added");
        Ok(item)
    }

    /// Apply a patch and bump the item's update time.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Draft` if the patch is invalid.
    /// Returns `PortfolioServiceError::Storage` if the item is missing or persistence fails.
    pub async fn edit(
        &self,
        id: PortfolioItemId,
        patch: PortfolioPatch,
    ) -> Result<PortfolioItem, PortfolioServiceError> {
        let mut item = self.items.get_item(id).await?;
        patch.apply(&mut item, self.clock.now())?;
        self.items.update_item(&item).await?;
        tracing::info!(id = %id, "portfolio item edited");
        Ok(item)
    }

    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Storage` if the item is missing or persistence fails.
    pub async fn delete(&self, id: PortfolioItemId) -> Result<(), PortfolioServiceError> {
        self.items.delete_item(id).await?;
        tracing::info!(id = %id, "portfolio item deleted");
        Ok(())
    }

    /// Flip an item between public and private. Returns the new visibility.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioServiceError::Storage` if the item is missing or persistence fails.
    pub async fn toggle_public(&self, id: PortfolioItemId) -> Result<bool, PortfolioServiceError> {
        let mut item = self.items.get_item(id).await?;
        item.is_public = !item.is_public;
        item.updated_at = self.clock.now();
        self.items.update_item(&item).await?;
        tracing::info!(id = %id, public = item.is_public, "portfolio visibility changed");
        Ok(item.is_public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use storage::memory::InMemoryRepository;
    use storage::repository::StorageError;
    use studio_core::model::{PortfolioCategory, PortfolioDraftError};
    use studio_core::portfolio::SortOrder;
    use studio_core::time::{fixed_clock, fixed_now};

    fn draft(title: &str, category: PortfolioCategory) -> PortfolioDraft {
        PortfolioDraft {
            title: title.into(),
            description: String::new(),
            category,
            tags: "alpha, beta".into(),
            images: vec![],
            is_public: false,
        }
    }

    fn service() -> PortfolioService {
        PortfolioService::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn add_assigns_id_and_clock_timestamps() {
        let service = service();
        let item = service
            .add(draft("Sports Car", PortfolioCategory::Exterior))
            .await
            .unwrap();
        assert_eq!(item.created_at, fixed_now());
        assert_eq!(item.updated_at, fixed_now());
        assert_eq!((item.likes, item.views, item.comments), (0, 0, 0));
        assert_eq!(item.tags, ["alpha", "beta"]);

        let listed = service.list(&PortfolioQuery::default()).await.unwrap();
        assert_eq!(listed, vec![item]);
    }

    #[tokio::test]
    async fn add_rejects_blank_title() {
        let service = service();
        let err = service
            .add(draft("   ", PortfolioCategory::Sketch))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PortfolioServiceError::Draft(PortfolioDraftError::EmptyTitle)
        ));
        assert!(service.list(&PortfolioQuery::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_patches_fields_and_bumps_update_time() {
        let repo = InMemoryRepository::new();
        let mut clock = fixed_clock();
        let creator = PortfolioService::new(clock, Arc::new(repo.clone()));
        let item = creator
            .add(draft("Dash", PortfolioCategory::Interior))
            .await
            .unwrap();

        clock.advance(Duration::hours(2));
        let editor = PortfolioService::new(clock, Arc::new(repo));
        let patch = PortfolioPatch {
            title: Some("Dashboard".into()),
            ..PortfolioPatch::default()
        };
        let edited = editor.edit(item.id, patch).await.unwrap();
        assert_eq!(edited.title, "Dashboard");
        assert_eq!(edited.category, PortfolioCategory::Interior);
        assert_eq!(edited.created_at, fixed_now());
        assert_eq!(edited.updated_at, fixed_now() + Duration::hours(2));
    }

    #[tokio::test]
    async fn toggle_and_delete() {
        let service = service();
        let item = service
            .add(draft("Concept", PortfolioCategory::Concept))
            .await
            .unwrap();

        assert!(service.toggle_public(item.id).await.unwrap());
        assert!(!service.toggle_public(item.id).await.unwrap());

        service.delete(item.id).await.unwrap();
        let err = service.delete(item.id).await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioServiceError::Storage(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_applies_query_and_counts_cover_all_items() {
        let service = service();
        service
            .add(draft("Sports Car", PortfolioCategory::Exterior))
            .await
            .unwrap();
        service
            .add(draft("Dashboard", PortfolioCategory::Interior))
            .await
            .unwrap();

        let query = PortfolioQuery {
            category: CategoryFilter::All,
            text: "dash".into(),
            sort: SortOrder::Oldest,
        };
        let listed = service.list(&query).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Dashboard");

        let counts = service.category_counts().await.unwrap();
        assert_eq!(counts[0], (CategoryFilter::All, 2));
    }
}
