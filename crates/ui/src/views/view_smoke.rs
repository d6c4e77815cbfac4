use std::sync::Arc;

use dioxus::prelude::*;
use storage::repository::{PortfolioRepository, Storage, StorageError};
use studio_core::model::{
    PortfolioCategory, PortfolioDraft, PortfolioItem, PortfolioItemId, PortfolioPatch,
};
use studio_core::time::fixed_now;

use super::home::Gallery;
use super::portfolio::PortfolioCards;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};
use crate::vm::{PortfolioCardVm, ViewMode};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_marketing_sections() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Automotive Design",
        "AI-Powered Learning",
        "Exterior Design Mastery",
        "12 Weeks",
        "Futuristic Cockpit",
        "Send Message",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("lightbox"), "lightbox open by default in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn curriculum_view_smoke_renders_levels_and_overall_progress() {
    let mut harness = setup_view_harness(ViewKind::Curriculum).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Overall progress: 29%"), "missing overall in {html}");
    assert!(html.contains("Beginner Level"), "missing level tab in {html}");
    assert!(html.contains("Dynamic Line Quality"), "missing lesson row in {html}");
    assert!(html.contains("3 terms · 8 lessons"), "missing totals in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_unlocked_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("lesson2-2".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Perspective Side View"), "missing title in {html}");
    assert!(html.contains("Dynamic Line Quality"), "missing prerequisite in {html}");
    assert!(html.contains("Mark as complete"), "missing action in {html}");
    assert!(!html.contains("unlock this lesson"), "unexpected lock notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reports_unknown_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("lesson99-1".into())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Nothing to show here yet."), "missing not-found in {html}");
    assert!(html.contains("Back to curriculum"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_overview() {
    let mut harness = setup_view_harness(ViewKind::Progress).await;
    harness.settle().await;
    let html = harness.render();
    for expected in ["Learning Progress", "29%", "5 / 17 lessons", "9 days", "Achievements"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_without_record_shows_empty_state() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Progress, &Storage::in_memory());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Nothing to show here yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn portfolio_view_smoke_renders_counts_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Portfolio).await;
    harness
        .services
        .portfolio()
        .add(PortfolioDraft {
            title: "Night Drive Sketch".into(),
            description: "Marker study".into(),
            category: PortfolioCategory::Sketch,
            tags: "markers".into(),
            images: vec![],
            is_public: false,
        })
        .await
        .expect("add item");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("All Projects (5)"), "missing all count in {html}");
    assert!(html.contains("Sketches (2)"), "missing sketch count in {html}");
    assert!(html.contains("Night Drive Sketch"), "missing new card in {html}");
    assert!(html.contains("Make public"), "missing private toggle in {html}");
    assert!(html.contains("portfolio-grid"), "missing grid layout in {html}");
    assert!(html.contains("List"), "missing view toggle in {html}");
    assert!(html.contains("Edit"), "missing edit action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mentors_view_smoke_renders_directory_and_schedule() {
    let mut harness = setup_view_harness(ViewKind::Mentors).await;
    harness.settle().await;
    let html = harness.render();
    for expected in [
        "Sarah Chen",
        "Dr. Elena Volkov",
        "Upcoming Sessions",
        "Portfolio Review",
        "with Marcus Rodriguez",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_renders_latest_report() {
    let mut harness = setup_view_harness(ViewKind::Feedback).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("74"), "missing score in {html}");
    assert!(html.contains("Dynamic Line Quality"), "missing lesson in {html}");
    assert!(html.contains("Good progress!"), "missing headline in {html}");
    assert!(html.contains("Technical Analysis"), "missing tab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_without_feedback_prompts_submission() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Feedback, &Storage::in_memory());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No feedback yet."), "missing empty state in {html}");
}

struct FailingPortfolioRepo;

#[async_trait::async_trait]
impl PortfolioRepository for FailingPortfolioRepo {
    async fn list_items(&self) -> Result<Vec<PortfolioItem>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_item(&self, _id: PortfolioItemId) -> Result<PortfolioItem, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn insert_item(&self, _item: &PortfolioItem) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn update_item(&self, _item: &PortfolioItem) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn delete_item(&self, _id: PortfolioItemId) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn portfolio_view_smoke_renders_error_on_storage_failure() {
    let mut storage = Storage::in_memory();
    storage.portfolio = Arc::new(FailingPortfolioRepo);

    let mut harness = setup_view_harness_with_storage(ViewKind::Portfolio, &storage);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
}

#[component]
fn OpenGallery(index: usize) -> Element {
    let selected = use_signal(move || Some(index));
    rsx! {
        Gallery { selected }
    }
}

#[test]
fn gallery_smoke_shows_lightbox_for_selected_tile() {
    let mut dom = VirtualDom::new_with_props(OpenGallery, OpenGalleryProps { index: 5 });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("lightbox"), "missing lightbox in {html}");
    assert_eq!(html.matches("Futuristic Cockpit").count(), 2, "missing title in {html}");
    assert!(html.contains("6 / 6"), "missing counter in {html}");
}

#[test]
fn gallery_smoke_ignores_stale_selection() {
    let mut dom = VirtualDom::new_with_props(OpenGallery, OpenGalleryProps { index: 42 });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("lightbox"), "unexpected lightbox in {html}");
}

fn sample_card(title: &str) -> PortfolioCardVm {
    PortfolioCardVm::from(&PortfolioItem {
        id: PortfolioItemId::generate(),
        title: title.into(),
        description: "Clay model".into(),
        category: PortfolioCategory::Exterior,
        images: vec![],
        videos: vec![],
        documents: vec![],
        tags: vec!["clay".into(), "surfacing".into()],
        created_at: fixed_now(),
        updated_at: fixed_now(),
        is_public: true,
        likes: 0,
        views: 0,
        comments: 0,
    })
}

#[component]
fn CardsInListMode(
    cards: Vec<PortfolioCardVm>,
    #[props(!optional)] editing: Option<PortfolioItemId>,
) -> Element {
    let on_item = Callback::new(|_: PortfolioItemId| {});
    let on_edit = Callback::new(|_: Option<PortfolioItemId>| {});
    let on_save = Callback::new(|_: (PortfolioItemId, PortfolioPatch)| {});
    rsx! {
        PortfolioCards {
            cards,
            mode: ViewMode::List,
            editing,
            on_toggle: on_item,
            on_delete: on_item,
            on_edit,
            on_save,
        }
    }
}

#[test]
fn portfolio_cards_smoke_renders_list_mode_with_editor() {
    let editable = sample_card("Clay Buck");
    let other = sample_card("Wind Tunnel Study");
    let props = CardsInListModeProps {
        editing: Some(editable.id),
        cards: vec![editable, other],
    };
    let mut dom = VirtualDom::new_with_props(CardsInListMode, props);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("portfolio-list"), "missing list layout in {html}");
    assert!(html.contains("portfolio-card--row"), "missing row cards in {html}");
    assert!(!html.contains("portfolio-grid"), "unexpected grid in {html}");
    assert!(html.contains("Save Changes"), "missing editor in {html}");
    assert!(html.contains("clay, surfacing"), "missing prefilled tags in {html}");
    assert_eq!(html.matches("Save Changes").count(), 1, "one editor expected in {html}");
    assert!(html.contains("Wind Tunnel Study"), "missing other card in {html}");
}
