use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, CatalogService, Clock, ContactService, FeedbackService, MentorshipService,
    PortfolioService, ProgressService,
};
use storage::repository::Storage;
use storage::seed::DEMO_STUDENT;
use studio_core::curriculum;
use studio_core::model::StudentId;
use studio_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    CurriculumView, FeedbackView, HomeView, LessonView, MentorsView, PortfolioView, ProgressView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn student_id(&self) -> StudentId {
        self.services.student_id().clone()
    }

    fn catalog(&self) -> CatalogService {
        self.services.catalog()
    }

    fn contact(&self) -> ContactService {
        self.services.contact()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn portfolio(&self) -> Arc<PortfolioService> {
        self.services.portfolio()
    }

    fn mentorship(&self) -> Arc<MentorshipService> {
        self.services.mentorship()
    }

    fn feedback(&self) -> Arc<FeedbackService> {
        self.services.feedback()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Curriculum,
    Lesson(String),
    Progress,
    Portfolio,
    Mentors,
    Feedback,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Curriculum => rsx! { CurriculumView {} },
        ViewKind::Lesson(lesson_id) => rsx! { LessonView { lesson_id } },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Portfolio => rsx! { PortfolioView {} },
        ViewKind::Mentors => rsx! { MentorsView {} },
        ViewKind::Feedback => rsx! { FeedbackView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn clock() -> Clock {
    Clock::fixed(fixed_now())
}

/// Harness over the seeded demo data for the demo student.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::demo(clock(), StudentId::new(DEMO_STUDENT), None)
        .await
        .expect("demo services");
    harness_for(services, view)
}

/// Harness over caller-provided storage, e.g. empty or failing repositories.
pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = AppServices::new(storage, curriculum(), clock(), StudentId::new(DEMO_STUDENT));
    harness_for(services, view)
}

fn harness_for(services: AppServices, view: ViewKind) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, services }
}
